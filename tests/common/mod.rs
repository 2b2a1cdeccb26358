//! Shared test helpers and mock conversation service.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use drover::error::Result;
use drover::service::*;

/// A mock conversation service that replays scripted run statuses and
/// message pages while recording what the client sent it.
#[derive(Default)]
pub struct MockConversationService {
    runs: Mutex<VecDeque<RunObject>>,
    pages: Mutex<VecDeque<MessagePage>>,
    polls: AtomicUsize,
    submissions: Mutex<Vec<Vec<ToolOutput>>>,
    created_messages: Mutex<Vec<(String, String)>>,
}

impl MockConversationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the run object returned by the next `retrieve_run` call.
    pub fn queue_run(&self, run: RunObject) {
        self.runs.lock().unwrap().push_back(run);
    }

    /// Queue the page returned by the next `list_messages` call.
    pub fn queue_page(&self, page: MessagePage) {
        self.pages.lock().unwrap().push_back(page);
    }

    pub fn poll_count(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<Vec<ToolOutput>> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn created_messages(&self) -> Vec<(String, String)> {
        self.created_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConversationService for MockConversationService {
    async fn create_thread(&self) -> Result<ThreadObject> {
        Ok(ThreadObject {
            id: "thread_1".to_string(),
            created_at: 0,
        })
    }

    async fn create_message(
        &self,
        thread_id: &str,
        _role: MessageRole,
        content: &str,
    ) -> Result<MessageObject> {
        self.created_messages
            .lock()
            .unwrap()
            .push((thread_id.to_string(), content.to_string()));
        Ok(MessageObject {
            id: "msg_user".to_string(),
            role: "user".to_string(),
            content: vec![],
        })
    }

    async fn create_run(&self, thread_id: &str, _assistant_id: &str) -> Result<RunObject> {
        Ok(RunObject {
            id: "run_1".to_string(),
            thread_id: thread_id.to_string(),
            status: RunStatus::Queued,
            required_action: None,
        })
    }

    async fn retrieve_run(&self, _thread_id: &str, _run_id: &str) -> Result<RunObject> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .runs
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted run status left"))
    }

    async fn submit_tool_outputs(
        &self,
        _thread_id: &str,
        _run_id: &str,
        outputs: &[ToolOutput],
    ) -> Result<()> {
        self.submissions.lock().unwrap().push(outputs.to_vec());
        Ok(())
    }

    async fn list_messages(
        &self,
        _thread_id: &str,
        _params: &ListMessagesParams,
    ) -> Result<MessagePage> {
        Ok(self.pages.lock().unwrap().pop_front().unwrap_or(MessagePage {
            data: vec![],
            has_more: false,
            last_id: None,
        }))
    }
}

/// Run object in the given status with no required action.
pub fn run_with_status(status: RunStatus) -> RunObject {
    RunObject {
        id: "run_1".to_string(),
        thread_id: "thread_1".to_string(),
        status,
        required_action: None,
    }
}

/// Run object in `requires_action` listing the given tool calls.
pub fn requires_action_run(calls: Vec<ToolCall>) -> RunObject {
    RunObject {
        id: "run_1".to_string(),
        thread_id: "thread_1".to_string(),
        status: RunStatus::RequiresAction,
        required_action: Some(RequiredAction {
            kind: "submit_tool_outputs".to_string(),
            submit_tool_outputs: SubmitToolOutputs { tool_calls: calls },
        }),
    }
}

pub fn tool_call(id: &str, name: &str, arguments: &str) -> ToolCall {
    ToolCall {
        id: id.to_string(),
        function: FunctionCall {
            name: name.to_string(),
            arguments: arguments.to_string(),
        },
    }
}

/// Message with a single text content item.
pub fn text_message(id: &str, text: &str) -> MessageObject {
    MessageObject {
        id: id.to_string(),
        role: "assistant".to_string(),
        content: vec![MessageContent::Text {
            text: TextContent {
                value: text.to_string(),
            },
        }],
    }
}

pub fn image_message(id: &str, file_id: &str) -> MessageObject {
    MessageObject {
        id: id.to_string(),
        role: "assistant".to_string(),
        content: vec![MessageContent::ImageFile {
            image_file: ImageFileContent {
                file_id: file_id.to_string(),
            },
        }],
    }
}

pub fn page(data: Vec<MessageObject>, has_more: bool) -> MessagePage {
    let last_id = data.last().map(|m| m.id.clone());
    MessagePage {
        data,
        has_more,
        last_id,
    }
}
