pub mod backend;
pub mod charity;
pub mod imagehost;
pub mod news;

use log::{log_enabled, trace};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Read a JSON body, mapping rejection and shape failures onto the client
/// error taxonomy. Calls are never retried; a failure here leaves whatever
/// the caller already holds unchanged.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }

    if log_enabled!(log::Level::Trace) {
        trace!("{body}");
    }

    serde_json::from_str(&body).map_err(|err| ClientError::Schema(err.to_string()))
}

/// Check the status of a response whose body carries nothing we use.
pub(crate) async fn ensure_success(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

/// Services report failures as `{"error": ...}` or `{"message": ...}`; fall
/// back to the raw body, then the status phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct Failure {
        error: Option<String>,
        message: Option<String>,
    }

    if let Ok(failure) = serde_json::from_str::<Failure>(body) {
        if let Some(message) = failure.error.or(failure.message) {
            return message;
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}
