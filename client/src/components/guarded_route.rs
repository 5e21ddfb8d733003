//! Route outlet that runs every navigation through the guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! All declared routes and the router fallback render this component. It
//! reads the `AuthState` from context and the current pathname, asks
//! `guard::resolve` for an outcome, and either renders the page or issues a
//! replace-redirect. During SSR the redirect becomes an HTTP redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages;
use crate::state::auth::AuthState;
use crate::util::guard::{self, Outcome};

#[component]
pub fn GuardedRoute() -> impl IntoView {
    // Missing context means no provider was installed: treat as signed out.
    let auth = use_context::<AuthState>().unwrap_or_default();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        match guard::resolve(&path, auth) {
            Outcome::Render(view) => pages::render(view),
            Outcome::Redirect(target) => {
                #[cfg(feature = "hydrate")]
                log::debug!("guard redirect {path} -> {target}");
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=target options=options/> }.into_any()
            }
        }
    }
}
