//! Locally registered callback actions and their registry.

pub mod action;
pub mod registry;

pub use action::{Action, FnAction};
pub use registry::{ActionRegistry, ActionSnapshot};
