//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is built once at startup and copied into every SSR render as
//! Leptos context. The only thing it carries is the `AuthState`, obtained
//! from the configured `AuthProvider`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use client::state::auth::{AuthProvider, AuthState, StaticAuth};

use crate::config::ServerConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthState,
}

impl AppState {
    pub fn new<P: AuthProvider + ?Sized>(provider: &P) -> Self {
        Self { auth: AuthState::from_provider(provider) }
    }

    /// State backed by the fixed development provider.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(&StaticAuth(config.dev_authenticated))
    }
}
