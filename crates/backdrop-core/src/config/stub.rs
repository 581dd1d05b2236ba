//! Declarative stub routes and their mounting onto a page.

use crate::config::error::ConfigError;
use crate::error::Error;
use crate::fabricate;
use crate::matching::UrlPattern;
use crate::page::{Interception, MockPage, RouteAction};
use crate::paging::paginate;
use crate::types::request::HttpMethod;
use crate::types::response::MockOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// One declarative mock route.
///
/// A stub declares at most one reply source: `body` serves a success
/// envelope, `error` an error envelope, `items` a paginated success
/// envelope sliced by the request's query. A stub with none serves a
/// success envelope with `null` data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubRoute {
    /// URL pattern the stub answers
    pub pattern: String,
    /// HTTP method to enforce; a mismatching request falls through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    /// HTTP status code; defaults to 200, or 400 for error stubs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Artificial latency in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    /// MIME type of the response body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Success payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    /// Error message served in an error envelope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Collection served as a paginated envelope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Value>>,
}

impl StubRoute {
    /// Reject stubs declaring more than one reply source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sources = usize::from(self.body.is_some())
            + usize::from(self.error.is_some())
            + usize::from(self.items.is_some());
        if sources > 1 {
            return Err(ConfigError::AmbiguousReply {
                pattern: self.pattern.clone(),
            });
        }
        Ok(())
    }

    fn options(&self) -> MockOptions {
        let mut options = MockOptions::new();
        if let Some(status) = self.status {
            options = options.status(status);
        } else if self.error.is_some() {
            options = options.status(400);
        }
        if let Some(delay) = self.delay {
            options = options.delay(Duration::from_millis(delay));
        }
        if let Some(content_type) = &self.content_type {
            options = options.content_type(content_type.clone());
        }
        options
    }

    async fn reply(&self, interception: &Interception) -> Result<RouteAction, Error> {
        if let Some(method) = self.method {
            if method != interception.request.method {
                return Ok(RouteAction::Fallthrough);
            }
        }

        let options = self.options();
        let response = if let Some(message) = &self.error {
            fabricate::error_with(message, &options).await?
        } else if let Some(items) = &self.items {
            let request = interception.request.page_request();
            fabricate::success_with(&paginate(items, request), &options).await?
        } else {
            let body = self.body.clone().unwrap_or(Value::Null);
            fabricate::success_with(&body, &options).await?
        };

        Ok(RouteAction::Fulfill(response))
    }
}

/// A set of stub routes mounted together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StubSet {
    /// Stub declarations, registered in order
    #[serde(default)]
    pub stubs: Vec<StubRoute>,
}

impl StubSet {
    /// Register one interceptor per stub on `page`, in declaration
    /// order.
    ///
    /// Every stub is validated and its pattern compiled first, so a
    /// bad stub anywhere in the set fails the mount before anything is
    /// registered.
    pub fn mount(&self, page: &MockPage) -> Result<(), Error> {
        // Resolve the whole set up front; a stub that fails mid-set
        // must not leave a half-mounted page behind.
        let mut patterns = Vec::with_capacity(self.stubs.len());
        for stub in &self.stubs {
            stub.validate()?;
            patterns.push(UrlPattern::compile(&stub.pattern)?);
        }

        for (stub, pattern) in self.stubs.iter().zip(patterns) {
            let stub = stub.clone();
            page.route_compiled(pattern, move |interception| {
                let stub = stub.clone();
                async move { stub.reply(&interception).await }
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parser::parse_stub_set;
    use crate::page::DispatchOutcome;
    use crate::types::request::InterceptedRequest;
    use serde_json::json;

    fn fulfilled(outcome: DispatchOutcome) -> (u16, Value) {
        match outcome {
            DispatchOutcome::Fulfilled(response) => {
                (response.status, serde_json::from_str(&response.body).unwrap())
            }
            DispatchOutcome::Passthrough => panic!("expected a fulfilled response"),
        }
    }

    fn mounted(content: &str) -> MockPage {
        let set = parse_stub_set(content, "stubs.yaml").unwrap();
        let page = MockPage::new();
        set.mount(&page).unwrap();
        page
    }

    #[tokio::test]
    async fn test_body_stub_serves_success_envelope() {
        let page = mounted(
            r#"
stubs:
  - pattern: "**/api/settings"
    body: { theme: "dark" }
"#,
        );

        let outcome = page
            .dispatch(InterceptedRequest::get("https://app.test/api/settings"))
            .await
            .unwrap();
        let (status, body) = fulfilled(outcome);
        assert_eq!(status, 200);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["theme"], json!("dark"));
    }

    #[tokio::test]
    async fn test_empty_stub_serves_null_data() {
        let page = mounted(
            r#"
stubs:
  - pattern: "**/api/ping"
"#,
        );

        let outcome = page
            .dispatch(InterceptedRequest::get("https://app.test/api/ping"))
            .await
            .unwrap();
        let (status, body) = fulfilled(outcome);
        assert_eq!(status, 200);
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn test_error_stub_defaults_to_400() {
        let page = mounted(
            r#"
stubs:
  - pattern: "**/api/users**"
    error: "service down"
"#,
        );

        let outcome = page
            .dispatch(InterceptedRequest::get("https://app.test/api/users"))
            .await
            .unwrap();
        let (status, body) = fulfilled(outcome);
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], json!("MockError"));
        assert_eq!(body["error"]["message"], json!("service down"));
    }

    #[tokio::test]
    async fn test_error_stub_with_declared_status() {
        let page = mounted(
            r#"
stubs:
  - pattern: "**/api/auth/login"
    status: 401
    error: "Invalid credentials"
"#,
        );

        let outcome = page
            .dispatch(InterceptedRequest::get("https://app.test/api/auth/login"))
            .await
            .unwrap();
        let (status, _) = fulfilled(outcome);
        assert_eq!(status, 401);
    }

    #[tokio::test]
    async fn test_items_stub_paginates_by_query() {
        let page = mounted(
            r#"
stubs:
  - pattern: "**/api/products**"
    items:
      - { id: 1 }
      - { id: 2 }
      - { id: 3 }
"#,
        );

        let outcome = page
            .dispatch(InterceptedRequest::get(
                "https://app.test/api/products?page=2&pageSize=2",
            ))
            .await
            .unwrap();
        let (_, body) = fulfilled(outcome);
        let data = &body["data"];
        assert_eq!(data["items"], json!([{"id": 3}]));
        assert_eq!(data["page"], json!(2));
        assert_eq!(data["totalPages"], json!(2));
        assert_eq!(data["hasPreviousPage"], json!(true));
        assert_eq!(data["hasNextPage"], json!(false));
    }

    #[tokio::test]
    async fn test_method_mismatch_falls_through() {
        let page = mounted(
            r#"
stubs:
  - pattern: "**/api/orders**"
    method: POST
    body: { created: true }
  - pattern: "**/api/orders**"
    items:
      - { id: 1 }
"#,
        );

        let get = page
            .dispatch(InterceptedRequest::get("https://app.test/api/orders"))
            .await
            .unwrap();
        let (_, body) = fulfilled(get);
        assert_eq!(body["data"]["items"], json!([{"id": 1}]));

        let post = page
            .dispatch(InterceptedRequest::post(
                "https://app.test/api/orders",
                json!({"productId": 1}),
            ))
            .await
            .unwrap();
        let (_, body) = fulfilled(post);
        assert_eq!(body["data"]["created"], json!(true));
    }

    #[tokio::test]
    async fn test_method_mismatch_without_alternative_is_passthrough() {
        let page = mounted(
            r#"
stubs:
  - pattern: "**/api/orders**"
    method: POST
    body: { created: true }
"#,
        );

        let outcome = page
            .dispatch(InterceptedRequest::get("https://app.test/api/orders"))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Passthrough);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_stub_sleeps() {
        let page = mounted(
            r#"
stubs:
  - pattern: "**/api/slow"
    delay: 250
    body: { ok: true }
"#,
        );

        let started = tokio::time::Instant::now();
        page.dispatch(InterceptedRequest::get("https://app.test/api/slow"))
            .await
            .unwrap();
        assert!(started.elapsed() >= std::time::Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_mount_rejects_ambiguous_stub() {
        let set = StubSet {
            stubs: vec![StubRoute {
                pattern: "**/api/users**".to_string(),
                method: None,
                status: None,
                delay: None,
                content_type: None,
                body: Some(json!({"ok": true})),
                error: Some("conflict".to_string()),
                items: None,
            }],
        };

        let page = MockPage::new();
        assert!(set.mount(&page).is_err());

        // Nothing was registered by the failed mount.
        let outcome = page
            .dispatch(InterceptedRequest::get("https://app.test/api/users"))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Passthrough);
    }

    #[tokio::test]
    async fn test_mount_registers_nothing_when_a_pattern_is_malformed() {
        let set = StubSet {
            stubs: vec![
                StubRoute {
                    pattern: "**/api/users**".to_string(),
                    method: None,
                    status: None,
                    delay: None,
                    content_type: None,
                    body: Some(json!({"ok": true})),
                    error: None,
                    items: None,
                },
                StubRoute {
                    pattern: "**/api/{".to_string(),
                    method: None,
                    status: None,
                    delay: None,
                    content_type: None,
                    body: None,
                    error: None,
                    items: None,
                },
            ],
        };

        let page = MockPage::new();
        let error = set.mount(&page).unwrap_err();
        assert!(matches!(error, Error::Pattern { .. }));

        // The valid first stub must not survive the failed mount.
        let outcome = page
            .dispatch(InterceptedRequest::get("https://app.test/api/users"))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Passthrough);
    }

    #[test]
    fn test_validate_accepts_single_source() {
        let stub = StubRoute {
            pattern: "**/api/users**".to_string(),
            method: None,
            status: None,
            delay: None,
            content_type: None,
            body: None,
            error: None,
            items: Some(vec![json!({"id": 1})]),
        };
        assert!(stub.validate().is_ok());
    }

    #[test]
    fn test_stub_round_trips_through_yaml() {
        let stub = StubRoute {
            pattern: "**/api/users**".to_string(),
            method: Some(HttpMethod::Get),
            status: Some(200),
            delay: Some(50),
            content_type: None,
            body: None,
            error: None,
            items: None,
        };
        let yaml = serde_yaml::to_string(&stub).unwrap();
        assert!(!yaml.contains("content_type"));
        let back: StubRoute = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.pattern, stub.pattern);
        assert_eq!(back.method, Some(HttpMethod::Get));
    }
}
