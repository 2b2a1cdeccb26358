//! Convenience re-exports for common use.

pub use crate::actions::{Action, ActionRegistry, FnAction};
pub use crate::assistant::Assistant;
pub use crate::config::DroverConfig;
pub use crate::error::{DroverError, Result};
pub use crate::messages::ContentFilter;
pub use crate::run::RunOrchestrator;
pub use crate::service::{
    ConversationService, MessageContent, MessageRole, RunObject, RunStatus, ToolOutput,
};
