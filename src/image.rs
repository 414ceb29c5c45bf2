//! Converts a selected image file into an inline `data:` URL so it can be
//! embedded in a JSON request body.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Reading the selected file failed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to read file: {0}")]
pub struct ReadError(pub String);

/// Read a file's full contents and return them as a
/// `data:<mime>;base64,<payload>` string.
pub async fn read_as_data_url(file: &File) -> Result<String, ReadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| ReadError(format!("{err:?}")))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(encode_data_url(&file.type_(), &bytes))
}

/// Build the data URL for a blob of bytes. Files with no recognized MIME type
/// are labeled `application/octet-stream`, matching what the browser's own
/// `readAsDataURL` produces.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_bytes_with_mime_prefix() {
        let url = encode_data_url("image/png", b"hello");
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn payload_decodes_back_to_original_bytes() {
        let bytes = [0u8, 150, 255, 7];
        let url = encode_data_url("image/jpeg", &bytes);
        let payload = url.split(',').nth(1).unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    }

    #[test]
    fn unknown_mime_falls_back_to_octet_stream() {
        let url = encode_data_url("", &[1, 2, 3]);
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }
}
