//! Deterministic API mocking for browser-style end-to-end tests.
//!
//! backdrop-core answers an application's outbound HTTP requests with
//! fabricated responses instead of letting them reach a real backend.
//! A test registers URL patterns with async handlers on a [`MockPage`];
//! requests fed through [`MockPage::dispatch`] receive success or error
//! envelopes, optionally paginated and optionally delayed, while
//! unclaimed requests are reported as passthrough.
//!
//! Routes can also be declared in YAML/JSON/JSONC stub files and
//! mounted wholesale; see the [`config`] module.

pub mod config;
pub mod error;
pub mod fabricate;
pub mod matching;
pub mod page;
pub mod paging;
pub mod types;

pub use config::{load_stub_set, load_stub_sets, parse_stub_set, ConfigError, StubRoute, StubSet};
pub use error::{Error, Result};
pub use fabricate::MOCK_ERROR_CODE;
pub use matching::UrlPattern;
pub use page::{DispatchOutcome, Interception, MockPage, RouteAction, SessionStorage};
pub use paging::{paginate, PageEnvelope, PageRequest};
pub use types::request::{HttpMethod, InterceptedRequest};
pub use types::response::{MockOptions, ResponseDescriptor};
