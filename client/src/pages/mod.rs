//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are static markup. Which page is shown is decided by
//! `util::guard`; `render` maps the chosen `View` to its component.

pub mod home;
pub mod landing;
pub mod login;
pub mod signup;

use leptos::prelude::*;

use crate::util::guard::View;

/// Render the page component for `page`.
pub fn render(page: View) -> AnyView {
    match page {
        View::Landing => view! { <landing::LandingPage/> }.into_any(),
        View::Login => view! { <login::LoginPage/> }.into_any(),
        View::SignUp => view! { <signup::SignUpPage/> }.into_any(),
        View::Home => view! { <home::HomePage/> }.into_any(),
    }
}
