//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The shell has a single piece of state, the authentication flag. It is
//! read-only for the whole application lifetime.

pub mod auth;
