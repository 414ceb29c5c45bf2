//! Browser-side checks for the file-to-data-URL conversion.

#![cfg(target_arch = "wasm32")]

use auction_web::image::read_as_data_url;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn make_file(bytes: &[u8], name: &str, mime: &str) -> web_sys::File {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::FilePropertyBag::new();
    options.set_type(mime);
    web_sys::File::new_with_u8_array_sequence_and_options(&parts, name, &options)
        .expect("File constructor")
}

#[wasm_bindgen_test]
async fn reads_a_file_into_a_data_url() {
    let file = make_file(b"hello", "hello.txt", "text/plain");
    let url = read_as_data_url(&file).await.expect("read file");
    assert_eq!(url, "data:text/plain;base64,aGVsbG8=");
}

#[wasm_bindgen_test]
async fn missing_mime_falls_back_to_octet_stream() {
    let file = make_file(&[1, 2, 3], "mystery.bin", "");
    let url = read_as_data_url(&file).await.expect("read file");
    assert!(url.starts_with("data:application/octet-stream;base64,"));
}
