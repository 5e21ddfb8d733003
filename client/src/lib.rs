//! # client
//!
//! Leptos + WASM frontend for ProjectApp: a landing page, placeholder login and
//! sign-up pages, and a protected home page.
//!
//! This crate contains the route table and guard, the authentication state,
//! pages, components, and the SSR shell. The `server` crate renders it with
//! the `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let auth = util::auth_hint::read();
    log::info!("hydrating, authenticated={}", auth.is_authenticated());
    leptos::mount::hydrate_body(move || {
        provide_context(auth);
        view! { <App/> }
    });
}
