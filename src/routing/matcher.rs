//! Path segment matching.
//!
//! # Responsibilities
//! - Split paths into segments (empty segments dropped, so trailing and
//!   repeated slashes are ignored)
//! - Walk the route tree, matching each route's own segments as a prefix
//! - Descend into children until a leaf consumes the remaining path
//!
//! # Design Decisions
//! - Segment comparison is exact and case-sensitive
//! - A route with children never matches by itself; one of its children
//!   (possibly the empty-path default child) must match
//! - No regex, no parameters

use crate::routing::route::Route;

/// Split a path into its non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Join a parent's full path with a nested route's relative path.
pub fn join(parent: &str, child: &str) -> String {
    if child.is_empty() {
        parent.to_string()
    } else if parent.ends_with('/') {
        format!("{parent}{child}")
    } else {
        format!("{parent}/{child}")
    }
}

/// Match `path` segments against `route`, returning the chain of routes
/// from `route` down to the matched leaf.
pub fn match_route<'r>(route: &'r Route, path: &[&str]) -> Option<Vec<&'r Route>> {
    let own = segments(&route.path);
    if path.len() < own.len() || path[..own.len()] != own[..] {
        return None;
    }
    let rest = &path[own.len()..];

    if route.is_leaf() {
        return rest.is_empty().then(|| vec![route]);
    }

    route.children.iter().find_map(|child| {
        match_route(child, rest).map(|mut chain| {
            chain.insert(0, route);
            chain
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Loader;

    fn section() -> Route {
        Route::new("/index", "index", Loader::component("IndexView")).with_children(vec![
            Route::new("", "manage", Loader::component("main/Manage")),
            Route::new("security", "security", Loader::component("main/Security")),
        ])
    }

    fn names(chain: Option<Vec<&Route>>) -> Option<Vec<&str>> {
        chain.map(|c| c.iter().map(|r| r.name.as_str()).collect())
    }

    #[test]
    fn test_segments() {
        assert!(segments("/").is_empty());
        assert_eq!(segments("/index/security/"), vec!["index", "security"]);
        assert_eq!(segments("//index"), vec!["index"]);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/", "forget"), "/forget");
        assert_eq!(join("/index", ""), "/index");
        assert_eq!(join("/index", "security"), "/index/security");
    }

    #[test]
    fn test_default_child() {
        let route = section();
        assert_eq!(names(match_route(&route, &["index"])), Some(vec!["index", "manage"]));
    }

    #[test]
    fn test_nested_child() {
        let route = section();
        assert_eq!(
            names(match_route(&route, &["index", "security"])),
            Some(vec!["index", "security"])
        );
    }

    #[test]
    fn test_no_match() {
        let route = section();
        assert!(match_route(&route, &["index", "missing"]).is_none());
        assert!(match_route(&route, &["index", "security", "extra"]).is_none());
        assert!(match_route(&route, &["Index"]).is_none()); // Case sensitive
        assert!(match_route(&route, &[]).is_none());
    }

    #[test]
    fn test_parent_without_default_child() {
        let route = Route::new("/", "welcome", Loader::component("WelcomeView"))
            .with_children(vec![Route::new("forget", "welcome-forget", Loader::component("welcome/ForgetPage"))]);
        assert!(match_route(&route, &[]).is_none());
    }
}
