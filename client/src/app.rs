//! Root application component, HTML shell, and route declarations.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded_route::GuardedRoute;
use crate::state::auth::AuthState;
use crate::util::auth_hint;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `auth` is written into a meta tag so the hydrating client resolves routes
/// against the same state the server rendered with.
pub fn shell(options: LeptosOptions, auth: AuthState) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name={auth_hint::META_NAME} content={auth_hint::encode(auth)}/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Expects an `AuthState` in context (the server and the hydrate entry point
/// both provide one). Every route, including the catch-all, renders through
/// `GuardedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/projectapp.css"/>
        <Meta name="description" content="ProjectApp: manage projects efficiently and collaboratively."/>

        <Router>
            <div class="App">
                <Routes fallback=|| view! { <GuardedRoute/> }>
                    <Route path=StaticSegment("") view=GuardedRoute/>
                    <Route path=StaticSegment("login") view=GuardedRoute/>
                    <Route path=StaticSegment("signup") view=GuardedRoute/>
                    <Route path=StaticSegment("home") view=GuardedRoute/>
                    <Route path=WildcardSegment("any") view=GuardedRoute/>
                </Routes>
            </div>
        </Router>
    }
}
