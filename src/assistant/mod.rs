//! Assistant facade composing the registry, orchestrator, and retriever.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::actions::{Action, ActionRegistry};
use crate::config::DroverConfig;
use crate::error::{DroverError, Result};
use crate::messages::{self, ContentFilter};
use crate::run::RunOrchestrator;
use crate::service::{
    ConversationService, MessageContent, MessageRole, OpenAiConversationService, ThreadObject,
};

/// Client for driving assistant runs against a conversation service.
///
/// Holds no thread or run state of its own; everything durable lives on the
/// remote service. Concurrent runs started by the caller proceed
/// independently, each against its own registry snapshot.
pub struct Assistant {
    service: Arc<dyn ConversationService>,
    actions: ActionRegistry,
    config: DroverConfig,
    cancel: CancellationToken,
}

impl Assistant {
    /// Build with an HTTP service from the config's credential and base URL.
    pub fn new(config: DroverConfig) -> Self {
        let service = Arc::new(OpenAiConversationService::from_config(&config));
        Self::with_service(service, config)
    }

    /// Build around a preconfigured service handle (custom transport, tests).
    pub fn with_service(service: Arc<dyn ConversationService>, config: DroverConfig) -> Self {
        Self {
            service,
            actions: ActionRegistry::new(),
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Register initial actions at construction time.
    pub fn with_actions(self, actions: impl IntoIterator<Item = Arc<dyn Action>>) -> Self {
        for action in actions {
            self.actions.register(action, false);
        }
        self
    }

    /// Forwarded to [`ActionRegistry::register`].
    pub fn register_action(&self, action: Arc<dyn Action>, force: bool) -> bool {
        self.actions.register(action, force)
    }

    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    pub fn service(&self) -> &Arc<dyn ConversationService> {
        &self.service
    }

    /// Token cancelling every run this assistant is currently driving.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Create a new conversation thread on the remote service.
    pub async fn create_thread(&self) -> Result<ThreadObject> {
        self.service.create_thread().await
    }

    /// Post `content` as a user message, drive a run to completion, and
    /// return the text content the assistant added after the posted message.
    ///
    /// `assistant_id` falls back to the configured default. Errors from
    /// message posting, polling, dispatch, or submission propagate unchanged;
    /// no partial reply is returned on failure.
    pub async fn send_message_to_thread(
        &self,
        thread_id: &str,
        content: &str,
        assistant_id: Option<&str>,
    ) -> Result<Vec<MessageContent>> {
        if content.is_empty() {
            return Err(DroverError::InvalidArgument(
                "message content is empty".to_string(),
            ));
        }
        let assistant_id = assistant_id.unwrap_or(&self.config.assistant_id);

        let message = self
            .service
            .create_message(thread_id, MessageRole::User, content)
            .await?;
        let run = self.service.create_run(thread_id, assistant_id).await?;
        debug!(thread_id, run_id = %run.id, "run started");

        RunOrchestrator::new(
            self.service.as_ref(),
            self.actions.snapshot(),
            self.config.poll_interval,
        )
        .with_run_timeout(self.config.run_timeout)
        .with_cancellation(self.cancel.child_token())
        .drive(thread_id, &run.id)
        .await?;

        self.get_messages(thread_id, Some(&message.id), Some(ContentFilter::Text))
            .await
    }

    /// Retrieve content items created after `after_id`, oldest first,
    /// optionally filtered by content type.
    pub async fn get_messages(
        &self,
        thread_id: &str,
        after_id: Option<&str>,
        filter: Option<ContentFilter>,
    ) -> Result<Vec<MessageContent>> {
        messages::fetch_content(self.service.as_ref(), thread_id, after_id, filter).await
    }
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("assistant_id", &self.config.assistant_id)
            .field("actions", &self.actions)
            .finish()
    }
}
