//! Turning raw responses into high-level ones.

use alfresco_raw::{Response, WireModel};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::conversion::{conversion_for, from_raw};
use crate::error::{Error, Result};

/// Status, headers, raw content and the high-level parsed body.
pub type Detailed<T> = Response<T>;

/// Re-validates the raw parsed body into `H`.
///
/// When the status is a success but the raw model rejected the payload,
/// the content is decoded straight into the permissive `H` instead.
pub(crate) fn convert<R, H>(operation: &'static str, response: Response<R>) -> Result<Detailed<H>>
where
    R: WireModel,
    H: DeserializeOwned,
{
    if let Some(conversion) = conversion_for(operation) {
        debug!(
            operation,
            request_model = conversion.request_model,
            raw_body = conversion.raw_body,
            status = %response.status_code,
            "Converting raw response"
        );
    }
    let parsed = match &response.parsed {
        Some(raw) => Some(from_raw::<R, H>(raw)?),
        None if response.is_success() => match response.content_as::<H>() {
            Ok(loose) => {
                warn!(
                    operation,
                    status = %response.status_code,
                    "Raw model rejected the payload; decoded permissively"
                );
                Some(loose)
            }
            Err(e) => {
                warn!(operation, error = %e, "Success payload could not be decoded");
                None
            }
        },
        None => None,
    };
    Ok(Response {
        status_code: response.status_code,
        headers: response.headers,
        content: response.content,
        parsed,
    })
}

/// Unwraps the parsed body or fails with `context` plus the status and
/// the server's summary.
pub(crate) fn require<T>(mut response: Detailed<T>, context: impl FnOnce() -> String) -> Result<T> {
    match response.parsed.take() {
        Some(value) => Ok(value),
        None => {
            let status = response.status_code;
            let mut message = format!("{} (status {status})", context());
            if let Some(summary) = response.error_summary() {
                message.push_str(": ");
                message.push_str(&summary);
            }
            error!(%status, message = %message, "Operation failed");
            Err(Error::Failed {
                message,
                status: Some(status),
            })
        }
    }
}
