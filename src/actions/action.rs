//! Action trait and closure-based action wrapper.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::DroverError;

/// A locally registered callback fulfilling one tool name.
///
/// The remote service hands the argument payload over as arbitrary JSON;
/// validating its shape is the action's own responsibility.
#[async_trait]
pub trait Action: Send + Sync {
    /// Action name (must match the tool name the remote service calls).
    fn name(&self) -> &str;

    /// Invoke the action with the decoded argument payload.
    async fn invoke(&self, args: serde_json::Value) -> Result<String, DroverError>;
}

/// Type alias for the action handler function.
type ActionHandler =
    dyn Fn(serde_json::Value) -> BoxFuture<'static, Result<String, DroverError>> + Send + Sync;

/// Closure-based action for quick registration.
pub struct FnAction {
    name: String,
    handler: Arc<ActionHandler>,
}

impl FnAction {
    /// Create an action from a closure.
    pub fn new<F, Fut>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<String, DroverError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            handler: Arc::new(move |args| Box::pin(handler(args))),
        }
    }
}

#[async_trait]
impl Action for FnAction {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, args: serde_json::Value) -> Result<String, DroverError> {
        (self.handler)(args).await
    }
}

impl std::fmt::Debug for FnAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnAction").field("name", &self.name).finish()
    }
}
