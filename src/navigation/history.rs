//! Navigation history.

use crate::guard::NavigationTarget;

/// Stack of committed navigation targets; the last entry is current.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<NavigationTarget>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&NavigationTarget> {
        self.entries.last()
    }

    /// The entry `back` would return to.
    pub fn previous(&self) -> Option<&NavigationTarget> {
        self.entries.iter().rev().nth(1)
    }

    pub fn push(&mut self, target: NavigationTarget) {
        self.entries.push(target);
    }

    /// Replace the current entry, or record the first one.
    pub fn replace(&mut self, target: NavigationTarget) {
        match self.entries.last_mut() {
            Some(current) => *current = target,
            None => self.entries.push(target),
        }
    }

    /// Drop the current entry and replace the previous one with `target`.
    pub fn go_back(&mut self, target: NavigationTarget) {
        self.entries.pop();
        self.replace(target);
    }

    pub fn entries(&self) -> &[NavigationTarget] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
