//! Response classification shared by the GET and POST paths.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ApiResult, Envelope, ErrorEnvelope, ErrorResponse};

/// Read the body of a dispatched response and classify it into the typed
/// application outcome.
///
/// The body read is the second suspension point of a call; the cancellation
/// token, when present, is raced against it. Only the read itself can fail
/// here; classification is total.
pub(crate) async fn process_response<T>(
    response: Response,
    cancel: Option<&CancellationToken>,
) -> Result<ApiResult<T>>
where
    T: DeserializeOwned + Default,
{
    let status = response.status();

    let body = match cancel {
        Some(token) => tokio::select! {
            _ = token.cancelled() => return Err(Error::Cancelled),
            res = response.bytes() => res.map_err(Error::from_transport)?,
        },
        None => response.bytes().await.map_err(Error::from_transport)?,
    };

    Ok(classify(status, &body))
}

/// Classify a status code and body into success or [`ErrorResponse`].
///
/// Non-2xx statuses become failures, with messages decoded from the error
/// envelope when one is present; an undecodable error body degrades to a
/// status-only failure. 2xx statuses decode the enveloped payload; an
/// empty, null, or undecodable success body yields the type's default
/// value. Decode failures never escape on either path.
pub(crate) fn classify<T>(status: StatusCode, body: &[u8]) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    if !status.is_success() {
        let messages = serde_json::from_slice::<ErrorEnvelope>(body)
            .ok()
            .and_then(|env| env.data)
            .and_then(|inner| inner.messages)
            .unwrap_or_default();

        debug!(
            status = status.as_u16(),
            messages = messages.len(),
            "Classified error response"
        );
        return Err(ErrorResponse::new(status.as_u16(), messages));
    }

    // An absent, null, or undecodable success body is still a success.
    match serde_json::from_slice::<Envelope<Option<T>>>(body) {
        Ok(Envelope { data: Some(data) }) => Ok(data),
        Ok(Envelope { data: None }) | Err(_) => Ok(T::default()),
    }
}
