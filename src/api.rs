//! Types and `fetch` plumbing for talking to the auction backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::image::ReadError;

// Backend URL - matches the auction API service
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Anything that can go wrong between pressing "Submit Item" and getting a
/// parsed response back. All variants collapse into one generic notification
/// at the form boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("failed to read image file: {0}")]
    FileRead(#[from] ReadError),

    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Parse(String),
}

/// The JSON body sent to `POST /api/auction_items`. The image travels inline
/// as a `data:` URL, or `null` when no file was selected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubmissionPayload {
    pub title: String,
    pub description: String,
    pub starting_price: f64,
    pub end_time: String,
    pub min_increase: f64,
    pub image: Option<String>,
}

/// An auction item as returned by the listing endpoint. The backend schema is
/// not pinned down by this client, so fields it may omit are defaulted.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AuctionItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub starting_price: f64,
    #[serde(default)]
    pub current_price: f64,
    pub end_time: String,
    #[serde(default)]
    pub min_increase: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl AuctionItem {
    /// Price to display: the live price once bidding has moved it, otherwise
    /// the starting price.
    pub fn current_bid(&self) -> f64 {
        if self.current_price > 0.0 {
            self.current_price
        } else {
            self.starting_price
        }
    }
}

/// POST a new auction item and return the parsed response body.
pub async fn submit_item(payload: &SubmissionPayload) -> Result<serde_json::Value, ApiError> {
    let body = serde_json::to_string(payload).map_err(|err| ApiError::Parse(err.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&format!("{BACKEND_URL}/api/auction_items"), &opts)
        .map_err(as_network)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(as_network)?;

    let json = send(&request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|err| ApiError::Parse(err.to_string()))
}

/// GET the current list of auction items.
pub async fn fetch_items() -> Result<Vec<AuctionItem>, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&format!("{BACKEND_URL}/api/auction_items"), &opts)
        .map_err(as_network)?;

    let json = send(&request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|err| ApiError::Parse(err.to_string()))
}

/// Run a request through `fetch` and parse the body as JSON. A non-success
/// status short-circuits; the body is not touched in that case.
async fn send(request: &Request) -> Result<JsValue, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(as_network)?;
    let resp: Response = resp_value.dyn_into().map_err(as_network)?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    JsFuture::from(resp.json().map_err(as_network)?)
        .await
        .map_err(|err| ApiError::Parse(format!("{err:?}")))
}

fn as_network(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(image: Option<String>) -> SubmissionPayload {
        SubmissionPayload {
            title: "Mantel clock".into(),
            description: "Brass, runs fast".into(),
            starting_price: 25.0,
            end_time: "2026-09-01T18:00".into(),
            min_increase: 1.5,
            image,
        }
    }

    #[test]
    fn missing_image_serializes_as_null() {
        let value = serde_json::to_value(payload(None)).unwrap();
        assert_eq!(value["image"], serde_json::Value::Null);
        assert_eq!(value["starting_price"], serde_json::json!(25.0));
        assert_eq!(value["min_increase"], serde_json::json!(1.5));
    }

    #[test]
    fn selected_image_stays_inline() {
        let value = serde_json::to_value(payload(Some("data:image/png;base64,AAAA".into()))).unwrap();
        assert_eq!(value["image"], serde_json::json!("data:image/png;base64,AAAA"));
    }

    #[test]
    fn auction_item_tolerates_missing_optional_fields() {
        let item: AuctionItem = serde_json::from_str(
            r#"{"id":1,"title":"Clock","starting_price":10.0,"end_time":"2026-08-10T12:00"}"#,
        )
        .unwrap();
        assert_eq!(item.description, "");
        assert_eq!(item.image, None);
        assert_eq!(item.current_bid(), 10.0);
    }

    #[test]
    fn current_bid_prefers_live_price() {
        let item: AuctionItem = serde_json::from_str(
            r#"{"id":2,"title":"Vase","starting_price":10.0,"current_price":42.5,"end_time":"2026-08-10T12:00"}"#,
        )
        .unwrap();
        assert_eq!(item.current_bid(), 42.5);
    }
}
