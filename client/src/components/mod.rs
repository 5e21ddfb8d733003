//! Reusable UI components.

pub mod auth_card;
pub mod feature_card;
pub mod footer;
pub mod guarded_route;
pub mod nav_bar;
