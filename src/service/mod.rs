//! Conversation-service seam and its HTTP implementation.

pub mod http;
pub mod openai;
pub mod types;

pub use openai::OpenAiConversationService;
pub use types::*;

use async_trait::async_trait;

use crate::error::Result;

/// Operations the core consumes from the remote conversation service.
///
/// The remote service is the sole source of truth for run progress; the
/// orchestrator only observes runs and submits tool outputs through this
/// seam. Implement it to target a different transport or to script a
/// service in tests.
#[async_trait]
pub trait ConversationService: Send + Sync {
    async fn create_thread(&self) -> Result<ThreadObject>;

    async fn create_message(
        &self,
        thread_id: &str,
        role: MessageRole,
        content: &str,
    ) -> Result<MessageObject>;

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<RunObject>;

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<RunObject>;

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: &[ToolOutput],
    ) -> Result<()>;

    async fn list_messages(
        &self,
        thread_id: &str,
        params: &ListMessagesParams,
    ) -> Result<MessagePage>;
}
