//! Route definitions.

use std::fmt;

use crate::views::Loader;

/// A named, path-addressable binding to a lazily loaded view.
///
/// Top-level routes carry absolute paths (`/index`); nested routes carry
/// paths relative to their parent (`security`), with the empty path marking
/// the parent's default child.
#[derive(Clone)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub loader: Loader,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, loader: Loader) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            loader,
            children: Vec::new(),
        }
    }

    /// Attach nested routes, keeping their order.
    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("children", &self.children)
            .finish()
    }
}
