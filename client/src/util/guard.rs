//! Route table and redirect guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation, on the server during SSR and in the browser after
//! hydration, is decided here. `resolve` is a pure function of the requested
//! path and the `AuthState`; the routing components only turn its `Outcome`
//! into markup or a redirect.
//!
//! MATCHING
//! ========
//! Query strings and fragments are ignored, the path is percent-decoded,
//! trailing slashes are insignificant, and comparison is ASCII
//! case-insensitive. Anything else that is not in `ROUTES` falls through to
//! a redirect to `/`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::state::auth::AuthState;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const HOME_PATH: &str = "/home";

const APP_NAME: &str = "ProjectApp";

/// Page views the router can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Login,
    SignUp,
    Home,
}

impl View {
    /// Canonical path for this view.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => ROOT_PATH,
            Self::Login => LOGIN_PATH,
            Self::SignUp => SIGNUP_PATH,
            Self::Home => HOME_PATH,
        }
    }

    /// Document title shown while the view is rendered.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => APP_NAME,
            Self::Login => "Log In · ProjectApp",
            Self::SignUp => "Sign Up · ProjectApp",
            Self::Home => "Home · ProjectApp",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Rendered only for authenticated callers; others go to `/login`.
    Protected,
}

/// A declared path and the view it renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
    pub access: Access,
}

pub static ROUTES: [Route; 4] = [
    Route { path: ROOT_PATH, view: View::Landing, access: Access::Public },
    Route { path: LOGIN_PATH, view: View::Login, access: Access::Public },
    Route { path: SIGNUP_PATH, view: View::SignUp, access: Access::Public },
    Route { path: HOME_PATH, view: View::Home, access: Access::Protected },
];

/// The static route table.
pub fn routes() -> &'static [Route] {
    &ROUTES
}

/// Guard decision for a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Render(View),
    /// Navigate to the target, replacing the current history entry.
    Redirect(&'static str),
}

impl Outcome {
    pub const fn view(self) -> Option<View> {
        match self {
            Self::Render(view) => Some(view),
            Self::Redirect(_) => None,
        }
    }

    pub const fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(target) => Some(target),
        }
    }
}

/// Find the declared route matching `path`.
pub fn lookup(path: &str) -> Option<&'static Route> {
    let wanted = normalize(path);
    ROUTES.iter().find(|route| route.path.eq_ignore_ascii_case(&wanted))
}

/// Decide what to show for `path`. Total over all inputs.
pub fn resolve(path: &str, auth: AuthState) -> Outcome {
    match lookup(path) {
        Some(route) => match route.access {
            Access::Public => Outcome::Render(route.view),
            Access::Protected if auth.is_authenticated() => Outcome::Render(route.view),
            Access::Protected => Outcome::Redirect(LOGIN_PATH),
        },
        None => Outcome::Redirect(ROOT_PATH),
    }
}

/// Strip query and fragment, percent-decode, then strip trailing slashes.
/// The result is never empty.
fn normalize(path: &str) -> Cow<'_, str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    // Undecodable input (invalid UTF-8) is matched as written.
    let decoded = percent_decode_str(&path[..end])
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(&path[..end]));
    let trimmed = decoded.trim_end_matches('/');
    if trimmed.is_empty() {
        Cow::Borrowed(ROOT_PATH)
    } else if trimmed.len() == decoded.len() {
        decoded
    } else {
        Cow::Owned(trimmed.to_owned())
    }
}
