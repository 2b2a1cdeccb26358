//! Name-keyed action registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::action::Action;

/// Read-only view of the registry captured once per run, so registrations
/// made mid-run need not be visible to runs already polling.
pub type ActionSnapshot = HashMap<String, Arc<dyn Action>>;

/// Mapping from tool name to registered action.
///
/// Cloning yields another handle to the same underlying map; registration
/// is safe while runs are polling, since each run dispatches against its
/// own snapshot.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: Arc<RwLock<ActionSnapshot>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an action under its own name.
    ///
    /// Returns `false` without mutating when the name is empty, or when the
    /// name is already taken and `force` is not set.
    pub fn register(&self, action: Arc<dyn Action>, force: bool) -> bool {
        let name = action.name().to_string();
        if name.is_empty() {
            return false;
        }
        let mut actions = self.actions.write().expect("action registry poisoned");
        if !force && actions.contains_key(&name) {
            return false;
        }
        actions.insert(name, action);
        true
    }

    /// Pure read; `None` when no action holds the name.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions
            .read()
            .expect("action registry poisoned")
            .get(name)
            .cloned()
    }

    /// Clone the current mapping for one run's dispatch lifetime.
    pub fn snapshot(&self) -> ActionSnapshot {
        self.actions.read().expect("action registry poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.actions.read().expect("action registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<String> = self
            .actions
            .read()
            .expect("action registry poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        f.debug_struct("ActionRegistry").field("actions", &names).finish()
    }
}
