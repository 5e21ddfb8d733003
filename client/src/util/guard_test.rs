use super::*;

const SIGNED_OUT: AuthState = AuthState::new(false);
const SIGNED_IN: AuthState = AuthState::new(true);

// =============================================================
// Route table
// =============================================================

#[test]
fn routes_declare_four_paths() {
    let paths: Vec<&str> = routes().iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/", "/login", "/signup", "/home"]);
}

#[test]
fn only_home_is_protected() {
    for route in routes() {
        let expected = if route.view == View::Home { Access::Protected } else { Access::Public };
        assert_eq!(route.access, expected, "{}", route.path);
    }
}

#[test]
fn view_path_matches_route_table() {
    for route in routes() {
        assert_eq!(route.view.path(), route.path);
    }
}

#[test]
fn view_titles_mention_app_name() {
    for route in routes() {
        assert!(route.view.title().contains("ProjectApp"), "{:?}", route.view);
    }
    assert_eq!(View::Landing.title(), "ProjectApp");
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_routes_render_regardless_of_auth() {
    for (path, view) in [("/", View::Landing), ("/login", View::Login), ("/signup", View::SignUp)] {
        assert_eq!(resolve(path, SIGNED_OUT), Outcome::Render(view), "{path} signed out");
        assert_eq!(resolve(path, SIGNED_IN), Outcome::Render(view), "{path} signed in");
    }
}

#[test]
fn root_renders_landing_when_signed_out() {
    assert_eq!(resolve("/", SIGNED_OUT), Outcome::Render(View::Landing));
}

// =============================================================
// Protected route
// =============================================================

#[test]
fn home_redirects_to_login_when_signed_out() {
    let outcome = resolve("/home", SIGNED_OUT);
    assert_eq!(outcome, Outcome::Redirect("/login"));
    assert_eq!(outcome.redirect_target(), Some("/login"));
    assert_eq!(outcome.view(), None);
}

#[test]
fn home_renders_when_signed_in() {
    let outcome = resolve("/home", SIGNED_IN);
    assert_eq!(outcome, Outcome::Render(View::Home));
    assert_eq!(outcome.view(), Some(View::Home));
    assert_eq!(outcome.redirect_target(), None);
}

#[test]
fn home_variants_still_guarded() {
    for path in ["/home/", "/HOME", "/home?tab=1", "/home#top"] {
        assert_eq!(resolve(path, SIGNED_OUT), Outcome::Redirect(LOGIN_PATH), "{path}");
        assert_eq!(resolve(path, SIGNED_IN), Outcome::Render(View::Home), "{path}");
    }
}

// =============================================================
// Undeclared paths
// =============================================================

#[test]
fn unknown_path_redirects_to_root() {
    assert_eq!(resolve("/nonexistent", SIGNED_OUT), Outcome::Redirect("/"));
}

#[test]
fn nested_unknown_path_redirects_to_root_when_signed_in() {
    assert_eq!(resolve("/foo/bar", SIGNED_IN), Outcome::Redirect("/"));
}

#[test]
fn paths_below_declared_routes_are_undeclared() {
    for path in ["/login/extra", "/home/settings", "/signup/x/y"] {
        assert_eq!(resolve(path, SIGNED_IN), Outcome::Redirect(ROOT_PATH), "{path}");
    }
}

#[test]
fn repeated_leading_slash_is_undeclared() {
    assert_eq!(resolve("//login", SIGNED_OUT), Outcome::Redirect(ROOT_PATH));
}

#[test]
fn malformed_paths_redirect_to_root() {
    for path in ["login", " ", "/log in", "/%2Fhome", "\u{1F680}"] {
        assert_eq!(resolve(path, SIGNED_OUT), Outcome::Redirect(ROOT_PATH), "{path:?}");
    }
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn empty_and_slash_only_paths_are_root() {
    for path in ["", "/", "//", "?", "#", "?q=1", "#anchor"] {
        assert_eq!(resolve(path, SIGNED_OUT), Outcome::Render(View::Landing), "{path:?}");
    }
}

#[test]
fn trailing_slash_query_and_case_are_ignored() {
    for path in ["/login/", "/Login", "/LOGIN?next=/home", "/login#form"] {
        assert_eq!(resolve(path, SIGNED_OUT), Outcome::Render(View::Login), "{path}");
    }
    assert_eq!(resolve("/SignUp/", SIGNED_OUT), Outcome::Render(View::SignUp));
}

#[test]
fn percent_encoded_paths_are_decoded() {
    assert_eq!(resolve("/%6Cogin", SIGNED_OUT), Outcome::Render(View::Login));
    assert_eq!(resolve("/sign%75p/", SIGNED_OUT), Outcome::Render(View::SignUp));
    assert_eq!(resolve("/%68ome", SIGNED_OUT), Outcome::Redirect(LOGIN_PATH));
    assert_eq!(resolve("/%68ome", SIGNED_IN), Outcome::Render(View::Home));
}

#[test]
fn encoded_slash_does_not_reach_home() {
    assert_eq!(resolve("/%2Fhome", SIGNED_IN), Outcome::Redirect(ROOT_PATH));
}

#[test]
fn invalid_utf8_escape_is_matched_as_written() {
    assert_eq!(resolve("/%FF", SIGNED_OUT), Outcome::Redirect(ROOT_PATH));
    assert_eq!(resolve("/login%FF", SIGNED_OUT), Outcome::Redirect(ROOT_PATH));
}

#[test]
fn lookup_returns_declared_route() {
    let route = lookup("/signup").unwrap();
    assert_eq!(route.view, View::SignUp);
    assert!(lookup("/missing").is_none());
}

// =============================================================
// Properties
// =============================================================

#[test]
fn resolve_is_idempotent() {
    for path in ["/", "/home", "/nope", "/login/"] {
        for auth in [SIGNED_OUT, SIGNED_IN] {
            assert_eq!(resolve(path, auth), resolve(path, auth));
        }
    }
}

#[test]
fn redirect_targets_render_without_further_redirects() {
    for path in ["/", "/login", "/signup", "/home", "/unknown", "/a/b/c"] {
        for auth in [SIGNED_OUT, SIGNED_IN] {
            if let Outcome::Redirect(target) = resolve(path, auth) {
                assert!(resolve(target, auth).view().is_some(), "{path} -> {target} loops");
            }
        }
    }
}
