//! Drover — assistant-run orchestration client
//!
//! Submits user input to a remote conversational-agent service, polls the
//! resulting asynchronous run, and dispatches locally registered callback
//! actions when the service requires tool outputs before the run can resume.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use drover::prelude::*;
//!
//! # async fn example() -> drover::error::Result<()> {
//! let assistant = Assistant::new(DroverConfig::from_env()?);
//! assistant.register_action(
//!     Arc::new(FnAction::new("echo", |args| async move {
//!         Ok(args["text"].as_str().unwrap_or_default().to_string())
//!     })),
//!     false,
//! );
//!
//! let thread = assistant.create_thread().await?;
//! let reply = assistant
//!     .send_message_to_thread(&thread.id, "Hello!", None)
//!     .await?;
//! for content in reply {
//!     if let Some(text) = content.as_text() {
//!         println!("{text}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod assistant;
pub mod config;
pub mod error;
pub mod messages;
pub mod prelude;
pub mod run;
pub mod service;
