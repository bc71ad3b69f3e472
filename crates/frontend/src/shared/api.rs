//! HTTP calls against the admin API
//!
//! Every response may carry the `{status, msg, data}` envelope. Non-2xx and
//! nonzero status both become [`ApiError`]s, so callers only see data that
//! the server actually accepted.

use contracts::domain::common::ListedRecord;
use contracts::shared::envelope::{ApiEnvelope, ListPage, RawListData};
use contracts::shared::requests::TipsUpdate;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    /// Nonzero envelope status; carries the server message
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Encode one path segment of a field mutation
pub fn encode_segment(value: impl ToString) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// An acknowledgement body is either empty, plain text, or an envelope.
/// Only an envelope with nonzero status is a rejection.
pub fn check_ack_body(body: &str) -> Result<(), ApiError> {
    match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
        Ok(envelope) => envelope.into_result().map(|_| ()).map_err(ApiError::Rejected),
        Err(_) => Ok(()),
    }
}

pub fn decode_envelope<D: DeserializeOwned>(body: &str) -> Result<Option<D>, ApiError> {
    serde_json::from_str::<ApiEnvelope<D>>(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .into_result()
        .map_err(ApiError::Rejected)
}

pub fn decode_page<T: ListedRecord>(body: &str) -> Result<ListPage<T>, ApiError> {
    let raw = decode_envelope::<RawListData>(body)?
        .ok_or_else(|| ApiError::Decode("response has no data".to_string()))?;
    raw.into_page().map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` an absolute URL outside the admin API as text
pub async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_body(response).await
}

/// `GET` a path-encoded mutation
pub async fn get_ack(path: &str) -> Result<(), ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_ack_body(&read_body(response).await?)
}

/// `POST` a JSON body, expecting only an acknowledgement
pub async fn post_ack<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_ack_body(&read_body(response).await?)
}

/// `POST` a JSON body and unwrap the envelope's `data`
pub async fn post_envelope<B: Serialize, D: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<Option<D>, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_envelope(&read_body(response).await?)
}

/// `POST <collection>/show` with the whole filter descriptor as body
pub async fn fetch_page<Q: Serialize, T: ListedRecord>(filter: &Q) -> Result<ListPage<T>, ApiError> {
    let response = Request::post(&api_url(&T::show_path()))
        .json(filter)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_page(&read_body(response).await?)
}

/// `GET <collection>/<field>/<id>/<value>`
pub async fn set_field<T: ListedRecord>(id: i64, field: &str, value: impl ToString) -> Result<(), ApiError> {
    get_ack(&T::mutation_path(id, field, &encode_segment(value))).await
}

/// `POST <collection>/tips`
pub async fn set_tips<T: ListedRecord>(id: i64, tips: String) -> Result<(), ApiError> {
    post_ack(&format!("{}/tips", T::COLLECTION), &TipsUpdate { id, tips }).await
}

/// Multipart upload of one file under the form key `file`
pub async fn upload_file(path: &str, file: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    let response = Request::post(&api_url(path))
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_ack_body(&read_body(response).await?)
}
