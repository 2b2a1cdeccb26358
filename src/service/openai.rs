//! HTTP implementation of [`ConversationService`] against an Assistants v2 API.

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DroverConfig;
use crate::error::Result;

use super::http::{assistants_headers, shared_client, status_to_error};
use super::types::*;
use super::ConversationService;

pub struct OpenAiConversationService {
    api_key: String,
    base_url: String,
}

impl OpenAiConversationService {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &DroverConfig) -> Self {
        Self::new(&config.api_key, &config.base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request.headers(assistants_headers(&self.api_key)).send().await?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body));
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl ConversationService for OpenAiConversationService {
    async fn create_thread(&self) -> Result<ThreadObject> {
        debug!("create thread");
        self.send(
            shared_client()
                .post(self.url("/threads"))
                .json(&serde_json::json!({})),
        )
        .await
    }

    async fn create_message(
        &self,
        thread_id: &str,
        role: MessageRole,
        content: &str,
    ) -> Result<MessageObject> {
        debug!(thread_id, role = role.as_str(), "create message");
        self.send(
            shared_client()
                .post(self.url(&format!("/threads/{thread_id}/messages")))
                .json(&serde_json::json!({
                    "role": role.as_str(),
                    "content": content,
                })),
        )
        .await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<RunObject> {
        debug!(thread_id, assistant_id, "create run");
        self.send(
            shared_client()
                .post(self.url(&format!("/threads/{thread_id}/runs")))
                .json(&serde_json::json!({ "assistant_id": assistant_id })),
        )
        .await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<RunObject> {
        debug!(thread_id, run_id, "retrieve run");
        self.send(shared_client().get(self.url(&format!("/threads/{thread_id}/runs/{run_id}"))))
            .await
    }

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: &[ToolOutput],
    ) -> Result<()> {
        debug!(thread_id, run_id, count = outputs.len(), "submit tool outputs");
        let _: serde_json::Value = self
            .send(
                shared_client()
                    .post(self.url(&format!(
                        "/threads/{thread_id}/runs/{run_id}/submit_tool_outputs"
                    )))
                    .json(&serde_json::json!({ "tool_outputs": outputs })),
            )
            .await?;
        Ok(())
    }

    async fn list_messages(
        &self,
        thread_id: &str,
        params: &ListMessagesParams,
    ) -> Result<MessagePage> {
        debug!(thread_id, after = params.after.as_deref(), "list messages");
        let mut query: Vec<(&str, &str)> = vec![("order", params.order.as_str())];
        if let Some(after) = params.after.as_deref() {
            query.push(("after", after));
        }
        self.send(
            shared_client()
                .get(self.url(&format!("/threads/{thread_id}/messages")))
                .query(&query),
        )
        .await
    }
}
