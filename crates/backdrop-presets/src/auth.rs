//! Authentication scenario presets.
//!
//! Each function wires one authentication endpoint onto a page. The
//! composite [`authenticated_state`] skips the login round trip
//! entirely: it seeds the session token straight into storage so the
//! application boots logged in, the way most non-auth scenarios want.

use crate::fixtures::{admin_session, AuthSession, User};
use backdrop_core::{fabricate, MockOptions, MockPage, Result, RouteAction};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Session lifetime advertised through the seeded `token_expiry` key,
/// in milliseconds.
const SESSION_TTL_MS: u128 = 3_600_000;

/// Answer `POST`-style login calls on `**/api/auth/login` with a
/// success envelope wrapping `session`.
pub fn login(page: &MockPage, session: AuthSession) -> Result<()> {
    page.route("**/api/auth/login", move |_| {
        let session = session.clone();
        async move { Ok(RouteAction::Fulfill(fabricate::success(&session).await?)) }
    })
}

/// Answer login calls with a 401 error envelope carrying `message`.
pub fn login_failure(page: &MockPage, message: &str) -> Result<()> {
    let message = message.to_string();
    page.route("**/api/auth/login", move |_| {
        let message = message.clone();
        async move {
            let options = MockOptions::new().status(401);
            Ok(RouteAction::Fulfill(
                fabricate::error_with(&message, &options).await?,
            ))
        }
    })
}

/// Answer `**/api/auth/me` with a success envelope wrapping `user`.
pub fn current_user(page: &MockPage, user: User) -> Result<()> {
    page.route("**/api/auth/me", move |_| {
        let user = user.clone();
        async move { Ok(RouteAction::Fulfill(fabricate::success(&user).await?)) }
    })
}

/// Answer `**/api/auth/logout` with an empty success envelope.
pub fn logout(page: &MockPage) -> Result<()> {
    page.route("**/api/auth/logout", |_| async {
        Ok(RouteAction::Fulfill(fabricate::success(&Value::Null).await?))
    })
}

/// Put `page` into a logged-in state without a login round trip.
///
/// Registers [`current_user`] and [`logout`] for `user`, then seeds
/// `access_token` and `token_expiry` (now plus one hour, epoch
/// milliseconds as a string) into session storage. The seeds re-apply
/// on navigation and reload, so the state survives everything a
/// scenario does short of an explicit logout. Returns the session
/// whose token was seeded.
pub fn authenticated_state(page: &MockPage, user: User) -> Result<AuthSession> {
    let session = admin_session(user.clone());
    current_user(page, user)?;
    logout(page)?;

    let expiry = epoch_millis() + SESSION_TTL_MS;
    page.seed_session_storage("access_token", session.access_token.clone());
    page.seed_session_storage("token_expiry", expiry.to_string());

    Ok(session)
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
