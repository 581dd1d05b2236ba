//! The simulated browser page and its route interceptors.
//!
//! [`MockPage`] stands in for the per-test browser page. A test
//! registers URL patterns with async handlers via [`MockPage::route`];
//! the application under test feeds its outbound requests through
//! [`MockPage::dispatch`] and receives fabricated responses for
//! whatever matches. Requests nothing claims come back as
//! [`DispatchOutcome::Passthrough`].
//!
//! A page is an explicit handle. Every registration lives on the page
//! that made it, never in crate-level state; two pages in flight at
//! once cannot observe each other's routes, storage or location, and
//! dropping the last clone of a page discards everything it held.

mod session;

pub use session::SessionStorage;

use crate::error::Result;
use crate::matching::UrlPattern;
use crate::types::request::InterceptedRequest;
use crate::types::response::ResponseDescriptor;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// Type alias for the boxed future a route handler returns
type HandlerFuture = Pin<Box<dyn Future<Output = Result<RouteAction>> + Send>>;

/// Type-erased route handler
type RouteHandler = Arc<dyn Fn(Interception) -> HandlerFuture + Send + Sync>;

/// What a route handler decided to do with a request it matched.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAction {
    /// Answer the request with this response.
    Fulfill(ResponseDescriptor),
    /// Decline the request; the scan continues with later registrations.
    Fallthrough,
}

/// Outcome of dispatching one request against a page.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// A handler answered the request.
    Fulfilled(ResponseDescriptor),
    /// No handler claimed the request; it would have left for the real
    /// network.
    Passthrough,
}

/// A matched request together with the path parameters its pattern
/// captured.
#[derive(Debug, Clone)]
pub struct Interception {
    /// The request that matched
    pub request: InterceptedRequest,
    /// Parameters captured by `{name}` segments of the pattern
    pub params: HashMap<String, String>,
}

impl Interception {
    /// Captured path parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Clone)]
struct RouteBinding {
    pattern: UrlPattern,
    handler: RouteHandler,
}

struct PageInner {
    bindings: Mutex<Vec<RouteBinding>>,
    session: SessionStorage,
    seeds: Mutex<Vec<(String, String)>>,
    url: Mutex<String>,
}

/// One simulated browser page: route registrations, session storage and
/// a current location.
///
/// Cheaply cloneable; clones share all state, so a page can be handed
/// to helpers that wire routes onto it while the test keeps its own
/// handle for dispatching.
#[derive(Clone)]
pub struct MockPage {
    inner: Arc<PageInner>,
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPage {
    /// Fresh page with no registrations and empty session storage.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(PageInner {
                bindings: Mutex::new(Vec::new()),
                session: SessionStorage::new(),
                seeds: Mutex::new(Vec::new()),
                url: Mutex::new("about:blank".to_string()),
            }),
        }
    }

    /// Register `handler` for requests matching `pattern`.
    ///
    /// The pattern is compiled here, once; a malformed pattern fails
    /// registration immediately instead of surfacing at dispatch time.
    /// Registering the same pattern twice is allowed. Dispatch scans in
    /// registration order and the first match wins, so the duplicate is
    /// reachable only through [`RouteAction::Fallthrough`].
    pub fn route<F, Fut>(&self, pattern: &str, handler: F) -> Result<()>
    where
        F: Fn(Interception) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteAction>> + Send + 'static,
    {
        let pattern = UrlPattern::compile(pattern)?;
        self.route_compiled(pattern, handler);
        Ok(())
    }

    /// Register `handler` for an already compiled pattern.
    ///
    /// Infallible counterpart of [`route`](Self::route). Callers that
    /// compile a whole batch of patterns up front use this to keep
    /// registration an all-or-nothing step.
    pub fn route_compiled<F, Fut>(&self, pattern: UrlPattern, handler: F)
    where
        F: Fn(Interception) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteAction>> + Send + 'static,
    {
        let handler: RouteHandler = Arc::new(move |interception| Box::pin(handler(interception)));
        self.inner
            .bindings
            .lock()
            .unwrap()
            .push(RouteBinding { pattern, handler });
    }

    /// Run `request` against this page's registrations.
    ///
    /// Bindings are scanned in registration order; the first one whose
    /// pattern matches runs. A handler returning
    /// [`RouteAction::Fallthrough`] declines and the scan moves on.
    /// When nothing fulfills the request the outcome is
    /// [`DispatchOutcome::Passthrough`].
    ///
    /// The binding list is snapshotted before any handler runs, so a
    /// handler suspended on an artificial delay never blocks another
    /// in-flight dispatch. A handler error fails this dispatch alone;
    /// the page and its other registrations are unaffected.
    pub async fn dispatch(&self, request: InterceptedRequest) -> Result<DispatchOutcome> {
        let bindings = self.inner.bindings.lock().unwrap().clone();

        for binding in &bindings {
            let Some(params) = binding.pattern.matches(&request.url) else {
                continue;
            };

            tracing::debug!(
                "route `{}` claimed {} {}",
                binding.pattern.as_str(),
                request.method,
                request.url
            );

            let interception = Interception {
                request: request.clone(),
                params,
            };
            match (binding.handler)(interception).await {
                Ok(RouteAction::Fulfill(response)) => {
                    return Ok(DispatchOutcome::Fulfilled(response));
                }
                Ok(RouteAction::Fallthrough) => {}
                Err(err) => {
                    tracing::warn!(
                        "route handler for `{}` failed: {}",
                        binding.pattern.as_str(),
                        err
                    );
                    return Err(err);
                }
            }
        }

        tracing::debug!("no route claimed {} {}", request.method, request.url);
        Ok(DispatchOutcome::Passthrough)
    }

    /// Handle to this page's session storage; clones share entries.
    pub fn session_storage(&self) -> SessionStorage {
        self.inner.session.clone()
    }

    /// Write `key`/`value` into session storage now and again on every
    /// [`goto`](Self::goto) and [`reload`](Self::reload), before any
    /// page script could run.
    pub fn seed_session_storage(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        self.inner.session.set(key.clone(), value.clone());
        self.inner.seeds.lock().unwrap().push((key, value));
    }

    /// Navigate to `url`, re-applying seeded storage entries first.
    pub fn goto(&self, url: impl Into<String>) {
        self.apply_seeds();
        *self.inner.url.lock().unwrap() = url.into();
    }

    /// Reload the current location.
    ///
    /// Session storage survives a reload, as it does in a browser;
    /// seeded entries are re-applied on top.
    pub fn reload(&self) {
        self.apply_seeds();
    }

    /// Current location; starts at `about:blank`.
    pub fn url(&self) -> String {
        self.inner.url.lock().unwrap().clone()
    }

    fn apply_seeds(&self) {
        let seeds = self.inner.seeds.lock().unwrap().clone();
        for (key, value) in seeds {
            self.inner.session.set(key, value);
        }
    }
}
