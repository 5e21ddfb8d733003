//! Auth flag handoff from the SSR shell to the hydrating client.
//!
//! The server writes the `AuthState` it rendered with into a `<meta>` tag so
//! the browser resolves routes against the same value and hydration does not
//! diverge from the server markup. Reading requires a browser environment.

#[cfg(test)]
#[path = "auth_hint_test.rs"]
mod auth_hint_test;

use crate::state::auth::AuthState;

/// `name` attribute of the meta tag carrying the flag.
pub const META_NAME: &str = "projectapp-auth";

/// Value written into the meta tag's `content` attribute.
pub fn encode(auth: AuthState) -> &'static str {
    if auth.is_authenticated() { "true" } else { "false" }
}

/// Parse a `content` attribute. Anything other than `"true"` is unauthenticated.
pub fn decode(content: &str) -> AuthState {
    AuthState::new(content.trim() == "true")
}

/// Read the flag from the current document.
///
/// Returns the default (unauthenticated) state when the tag is missing or
/// outside the browser.
pub fn read() -> AuthState {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("meta[name=\"{META_NAME}\"]");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
            .map_or_else(AuthState::default, |content| decode(&content))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        AuthState::default()
    }
}
