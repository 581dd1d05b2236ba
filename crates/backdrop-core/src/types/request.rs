//! Outbound requests as seen by the interception layer.

use crate::matching::parse_query_string;
use crate::paging::PageRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// HTTP method of an intercepted request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        };
        write!(f, "{}", name)
    }
}

/// One outbound HTTP request captured before it reaches a network.
///
/// The URL is kept verbatim, query string included; it is never
/// normalized, so route patterns must account for the query themselves
/// (a trailing `**` is the usual way).
#[derive(Debug, Clone, PartialEq)]
pub struct InterceptedRequest {
    /// Full request URL including the query string
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body, if one was sent
    pub body: Option<Value>,
}

impl InterceptedRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// GET request with no headers or body.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// POST request carrying a JSON body.
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        let mut request = Self::new(HttpMethod::Post, url);
        request.body = Some(body);
        request
    }

    /// Add a header, consuming and returning the request for chaining.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Query parameters parsed from the URL, percent-decoded.
    pub fn query(&self) -> HashMap<String, String> {
        self.url
            .split_once('?')
            .map(|(_, query)| parse_query_string(query))
            .unwrap_or_default()
    }

    /// Page selection derived from the `page`/`pageSize` query parameters.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(&self.query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HttpMethod::Get, "\"GET\"")]
    #[case(HttpMethod::Post, "\"POST\"")]
    #[case(HttpMethod::Delete, "\"DELETE\"")]
    #[case(HttpMethod::Options, "\"OPTIONS\"")]
    fn test_method_serializes_uppercase(#[case] method: HttpMethod, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&method).unwrap(), expected);
        assert_eq!(
            serde_json::from_str::<HttpMethod>(expected).unwrap(),
            method
        );
    }

    #[rstest]
    #[case(HttpMethod::Get, "GET")]
    #[case(HttpMethod::Patch, "PATCH")]
    fn test_method_display(#[case] method: HttpMethod, #[case] expected: &str) {
        assert_eq!(method.to_string(), expected);
    }

    #[test]
    fn test_get_constructor() {
        let request = InterceptedRequest::get("https://app.test/api/users");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://app.test/api/users");
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_constructor_carries_body() {
        let body = serde_json::json!({"username": "mgarcia"});
        let request = InterceptedRequest::post("https://app.test/api/auth/login", body.clone());
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(body));
    }

    #[test]
    fn test_with_header_chains() {
        let request = InterceptedRequest::get("https://app.test/api/users")
            .with_header("authorization", "Bearer token-1")
            .with_header("accept", "application/json");
        assert_eq!(
            request.headers.get("authorization"),
            Some(&"Bearer token-1".to_string())
        );
        assert_eq!(request.headers.len(), 2);
    }

    #[test]
    fn test_query_parses_parameters() {
        let request = InterceptedRequest::get("https://app.test/api/products?page=2&pageSize=5");
        let query = request.query();
        assert_eq!(query.get("page"), Some(&"2".to_string()));
        assert_eq!(query.get("pageSize"), Some(&"5".to_string()));
    }

    #[test]
    fn test_query_empty_without_question_mark() {
        let request = InterceptedRequest::get("https://app.test/api/products");
        assert!(request.query().is_empty());
    }

    #[test]
    fn test_page_request_defaults_without_query() {
        let request = InterceptedRequest::get("https://app.test/api/products");
        assert_eq!(request.page_request(), PageRequest::new(1, 10));
    }

    #[test]
    fn test_page_request_reads_query() {
        let request = InterceptedRequest::get("https://app.test/api/products?page=3&pageSize=25");
        assert_eq!(request.page_request(), PageRequest::new(3, 25));
    }
}
