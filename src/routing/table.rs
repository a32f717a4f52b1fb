//! Route table lookup.
//!
//! # Responsibilities
//! - Validate the route tree once at construction
//! - Resolve a path to exactly one leaf route (plus its parent chain)
//! - Look up routes by name
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc` without locks)
//! - Names are unique across the whole tree, not just among siblings
//! - O(n) tree walk per resolution (acceptable for a handful of routes)

use std::collections::HashMap;

use crate::routing::matcher;
use crate::routing::route::Route;
use crate::views::Loader;

/// Error raised when a route tree violates the table invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route at `{path}` has an empty name")]
    EmptyName { path: String },

    #[error("route name `{0}` is used more than once")]
    DuplicateName(String),

    #[error("route `{name}` has invalid path `{path}`: {reason}")]
    InvalidPath {
        name: String,
        path: String,
        reason: &'static str,
    },
}

/// Flattened view of one route, in depth-first declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: String,
    pub full_path: String,
    pub parent: Option<String>,
    pub depth: usize,
}

/// One route in a resolved chain.
#[derive(Debug, Clone)]
pub struct MatchedRoute {
    pub name: String,
    pub full_path: String,
    pub loader: Loader,
}

/// Result of resolving a path.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Name of the leaf route.
    pub name: String,
    /// Full path of the leaf route as declared.
    pub path: String,
    /// Routes from the top-level section down to the leaf.
    pub matched: Vec<MatchedRoute>,
}

impl RouteMatch {
    pub fn matched_names(&self) -> impl Iterator<Item = &str> {
        self.matched.iter().map(|m| m.name.as_str())
    }
}

/// Immutable, validated route tree.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    entries: Vec<RouteEntry>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table, rejecting empty or duplicate names and malformed paths.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut entries = Vec::new();
        let mut by_name = HashMap::new();

        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath {
                    name: route.name.clone(),
                    path: route.path.clone(),
                    reason: "top-level paths must be absolute",
                });
            }
            flatten(route, None, &route.path, 0, &mut entries, &mut by_name)?;
        }

        tracing::debug!(routes = entries.len(), "Route table compiled");

        Ok(Self {
            routes,
            entries,
            by_name,
        })
    }

    /// Resolve a path to its leaf route.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let segments = matcher::segments(path);

        let chain = self
            .routes
            .iter()
            .find_map(|route| matcher::match_route(route, &segments))?;

        let matched: Vec<MatchedRoute> = chain
            .iter()
            .map(|route| MatchedRoute {
                name: route.name.clone(),
                full_path: self.entries[self.by_name[&route.name]].full_path.clone(),
                loader: route.loader.clone(),
            })
            .collect();

        let leaf = matched.last()?;
        Some(RouteMatch {
            name: leaf.name.clone(),
            path: leaf.full_path.clone(),
            matched,
        })
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Option<&RouteEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// All routes, depth-first in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(
    route: &Route,
    parent: Option<&str>,
    full_path: &str,
    depth: usize,
    entries: &mut Vec<RouteEntry>,
    by_name: &mut HashMap<String, usize>,
) -> Result<(), RouteTableError> {
    if route.name.is_empty() {
        return Err(RouteTableError::EmptyName {
            path: full_path.to_string(),
        });
    }
    if by_name.contains_key(&route.name) {
        return Err(RouteTableError::DuplicateName(route.name.clone()));
    }

    by_name.insert(route.name.clone(), entries.len());
    entries.push(RouteEntry {
        name: route.name.clone(),
        full_path: full_path.to_string(),
        parent: parent.map(str::to_string),
        depth,
    });

    for child in &route.children {
        if child.path.starts_with('/') {
            return Err(RouteTableError::InvalidPath {
                name: child.name.clone(),
                path: child.path.clone(),
                reason: "nested paths must be relative to their parent",
            });
        }
        let child_path = matcher::join(full_path, &child.path);
        flatten(child, Some(&route.name), &child_path, depth + 1, entries, by_name)?;
    }

    Ok(())
}
