//! Image Upload
//!
//! Sends the chosen file to the backend upload endpoint and resolves to the
//! accessible URL the wire payload carries.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::{File, FormData};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Network(String),
    #[error("upload rejected with status {0}")]
    Status(u16),
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// POST the file as multipart form data to `{host}/upload`. A 201 response
/// carries `{ "url": … }`.
pub async fn upload_image(host: &str, file: &File) -> Result<String, UploadError> {
    let form = FormData::new().map_err(|e| UploadError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| UploadError::Network(format!("{e:?}")))?;

    let response = Request::post(&format!("{host}/upload"))
        .body(form)
        .map_err(|e| UploadError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    if response.status() != 201 {
        return Err(UploadError::Status(response.status()));
    }

    let parsed: UploadResponse = response
        .json()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;
    Ok(parsed.url)
}
