//! Response fabrication: success and error envelopes.
//!
//! Every fabricated body is one of two JSON shapes:
//!
//! ```json
//! { "success": true, "data": <payload> }
//! { "success": false, "error": { "code": "MockError", "message": "..." } }
//! ```
//!
//! Consumers that branch on `success` and read `error.code` see the
//! same contract from every mocked endpoint.

use crate::error::Result;
use crate::types::response::{MockOptions, ResponseDescriptor};
use serde::Serialize;
use serde_json::{json, Value};

/// Error code carried by every fabricated error envelope.
pub const MOCK_ERROR_CODE: &str = "MockError";

/// Fabricate a success response with default options.
pub async fn success<T: Serialize>(data: &T) -> Result<ResponseDescriptor> {
    success_with(data, &MockOptions::default()).await
}

/// Fabricate a success response wrapping `data`.
///
/// Serialization failures surface as [`Error::Serialize`] before any
/// delay elapses.
///
/// [`Error::Serialize`]: crate::error::Error::Serialize
pub async fn success_with<T: Serialize>(
    data: &T,
    options: &MockOptions,
) -> Result<ResponseDescriptor> {
    let data = serde_json::to_value(data)?;
    respond(json!({ "success": true, "data": data }), options).await
}

/// Fabricate an error response with HTTP status 400.
pub async fn error(message: &str) -> Result<ResponseDescriptor> {
    error_with(message, &MockOptions::new().status(400)).await
}

/// Fabricate an error response with caller-chosen options.
pub async fn error_with(message: &str, options: &MockOptions) -> Result<ResponseDescriptor> {
    let envelope = json!({
        "success": false,
        "error": { "code": MOCK_ERROR_CODE, "message": message },
    });
    respond(envelope, options).await
}

async fn respond(envelope: Value, options: &MockOptions) -> Result<ResponseDescriptor> {
    let body = serde_json::to_string(&envelope)?;

    // The sleep suspends only this fabrication; concurrent fabrications
    // each serve their own delay.
    if !options.delay.is_zero() {
        tokio::time::sleep(options.delay).await;
    }

    Ok(ResponseDescriptor {
        status: options.status,
        content_type: options.content_type.clone(),
        body,
    })
}
