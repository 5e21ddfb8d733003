//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing decisions and browser concerns out of page and
//! component code so they can be tested without a DOM.

pub mod auth_hint;
pub mod guard;
