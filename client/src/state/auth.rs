//! Authentication state consumed by the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session mechanism lives outside this crate. It is modeled as an
//! `AuthProvider` answering one question, and the answer is captured once in
//! an immutable `AuthState` that is passed to the guard and provided as
//! Leptos context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Whether the current caller is authenticated.
///
/// Constant for the lifetime of an application instance. Defaults to
/// unauthenticated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    authenticated: bool,
}

impl AuthState {
    pub const fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }

    /// Capture the provider's current answer.
    pub fn from_provider<P: AuthProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.is_authenticated())
    }

    pub const fn is_authenticated(self) -> bool {
        self.authenticated
    }
}

/// External collaborator that knows whether the caller has a session.
pub trait AuthProvider {
    fn is_authenticated(&self) -> bool;
}

/// Provider with a fixed answer. Stands in for a real session service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticAuth(pub bool);

impl AuthProvider for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}
