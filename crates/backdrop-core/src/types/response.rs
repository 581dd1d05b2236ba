//! Fabrication options and the synthetic response they produce.

use std::time::Duration;

/// Knobs for a single fabricated response.
///
/// The defaults describe the common case: HTTP 200, no artificial
/// latency, JSON body. Builder methods consume and return `self` so
/// options chain inline at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockOptions {
    /// HTTP status code of the response
    pub status: u16,
    /// Artificial latency applied before the response completes
    pub delay: Duration,
    /// MIME type advertised for the response body
    pub content_type: String,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            status: 200,
            delay: Duration::ZERO,
            content_type: "application/json".to_string(),
        }
    }
}

impl MockOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP status code.
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the artificial latency.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the MIME type of the body.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

/// Synthetic HTTP response handed back through the interception layer.
///
/// The body is already serialized; nothing downstream re-encodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    /// HTTP status code
    pub status: u16,
    /// MIME type of the body
    pub content_type: String,
    /// Serialized JSON body
    pub body: String,
}
