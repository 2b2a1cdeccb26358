//! Thread message retrieval with transparent pagination.

use crate::error::Result;
use crate::service::{ConversationService, ListMessagesParams, MessageContent, SortOrder};

/// Content-type filter for retrieved message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFilter {
    Text,
    ImageFile,
}

impl ContentFilter {
    pub fn matches(&self, content: &MessageContent) -> bool {
        matches!(
            (self, content),
            (Self::Text, MessageContent::Text { .. })
                | (Self::ImageFile, MessageContent::ImageFile { .. })
        )
    }
}

/// Fetch all content items of messages created after `after`, oldest first.
///
/// Follows the service's pagination to exhaustion before returning, flattens
/// each message's content list, and keeps only items matching `filter` when
/// one is given. Zero messages is an empty vec, not an error.
pub async fn fetch_content(
    service: &dyn ConversationService,
    thread_id: &str,
    after: Option<&str>,
    filter: Option<ContentFilter>,
) -> Result<Vec<MessageContent>> {
    let mut collected = Vec::new();
    let mut params = ListMessagesParams {
        after: after.map(str::to_string),
        order: SortOrder::Asc,
    };

    loop {
        let page = service.list_messages(thread_id, &params).await?;
        let fallback_cursor = page.data.last().map(|m| m.id.clone());

        for message in page.data {
            for content in message.content {
                if filter.map_or(true, |f| f.matches(&content)) {
                    collected.push(content);
                }
            }
        }

        if !page.has_more {
            break;
        }
        let Some(cursor) = page.last_id.or(fallback_cursor) else {
            break;
        };
        params.after = Some(cursor);
    }

    Ok(collected)
}
