//! Run orchestration: the polling and tool-dispatch state machine.

use std::time::Duration;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::actions::ActionSnapshot;
use crate::error::{DroverError, Result};
use crate::service::{
    ConversationService, RunStatus, ToolCall, ToolOutput, REQUIRED_ACTION_SUBMIT_TOOL_OUTPUTS,
};

/// Drives a single remote run to completion.
///
/// The orchestrator is a stateless-per-cycle poller: every cycle asks the
/// remote service for the run's current status, reacts, then sleeps one
/// poll interval. It never assumes the next status without asking — after
/// submitting tool outputs it still waits a full interval before re-polling.
///
/// Network and service errors are not retried here; they propagate to the
/// caller, which decides whether to re-drive the run.
pub struct RunOrchestrator<'a> {
    service: &'a dyn ConversationService,
    actions: ActionSnapshot,
    poll_interval: Duration,
    run_timeout: Option<Duration>,
    cancel: CancellationToken,
}

impl<'a> RunOrchestrator<'a> {
    pub fn new(
        service: &'a dyn ConversationService,
        actions: ActionSnapshot,
        poll_interval: Duration,
    ) -> Self {
        Self {
            service,
            actions,
            poll_interval,
            run_timeout: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Bound the total drive time; exceeding it yields
    /// [`DroverError::RunTimedOut`].
    pub fn with_run_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.run_timeout = timeout;
        self
    }

    /// External cancellation signal, checked before each poll and during
    /// each poll-interval sleep.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Poll the run until it completes, dispatching required tool calls.
    ///
    /// Returns `Ok(())` once the run status is observed as `completed`.
    /// A run observed in a terminal non-completed status yields
    /// [`DroverError::RunFailed`]. Without a timeout or cancellation, a run
    /// that never terminates is polled indefinitely.
    pub async fn drive(&self, thread_id: &str, run_id: &str) -> Result<()> {
        let started = Instant::now();
        // Tool-call ids of the batch already submitted, so a stale
        // requires_action observation cannot trigger a duplicate submission.
        let mut submitted_batch: Option<Vec<String>> = None;

        loop {
            if self.cancel.is_cancelled() {
                return Err(DroverError::Canceled);
            }
            if let Some(limit) = self.run_timeout {
                if started.elapsed() >= limit {
                    return Err(DroverError::RunTimedOut {
                        run_id: run_id.to_string(),
                        waited_ms: started.elapsed().as_millis() as u64,
                    });
                }
            }

            let run = self.service.retrieve_run(thread_id, run_id).await?;
            debug!(run_id, status = run.status.as_str(), "run polled");

            match run.status {
                RunStatus::Completed => return Ok(()),
                status if status.is_terminal_failure() => {
                    return Err(DroverError::RunFailed {
                        run_id: run_id.to_string(),
                        status: status.as_str().to_string(),
                    });
                }
                RunStatus::RequiresAction => {
                    let required = run
                        .required_action
                        .as_ref()
                        .filter(|ra| ra.kind == REQUIRED_ACTION_SUBMIT_TOOL_OUTPUTS);
                    if let Some(required) = required {
                        let calls = &required.submit_tool_outputs.tool_calls;
                        let batch: Vec<String> = calls.iter().map(|c| c.id.clone()).collect();
                        if submitted_batch.as_ref() == Some(&batch) {
                            debug!(run_id, "batch already submitted, awaiting status change");
                        } else {
                            let outputs = self.dispatch(calls).await?;
                            if outputs.is_empty() {
                                // Nothing resolved; the run stays blocked
                                // until the timeout (if any) fires.
                                warn!(run_id, "no tool outputs collected, skipping submission");
                            } else {
                                self.service
                                    .submit_tool_outputs(thread_id, run_id, &outputs)
                                    .await?;
                                submitted_batch = Some(batch);
                            }
                        }
                    }
                }
                _ => {
                    submitted_batch = None;
                }
            }

            tokio::select! {
                _ = self.cancel.cancelled() => return Err(DroverError::Canceled),
                _ = time::sleep(self.poll_interval) => {}
            }
        }
    }

    /// Invoke actions for each tool call in request order, sequentially.
    ///
    /// A call naming an unregistered action is skipped (logged, no output);
    /// a malformed argument payload or a failing action aborts the whole
    /// cycle with no submission.
    async fn dispatch(&self, calls: &[ToolCall]) -> Result<Vec<ToolOutput>> {
        let mut outputs = Vec::with_capacity(calls.len());
        for call in calls {
            let name = call.function.name.as_str();
            let Some(action) = self.actions.get(name) else {
                let err = DroverError::UnknownAction(name.to_string());
                warn!(tool_call_id = %call.id, error = %err, "skipping tool call");
                continue;
            };

            let args: serde_json::Value = serde_json::from_str(&call.function.arguments)?;
            debug!(tool_call_id = %call.id, action = name, "invoking action");
            let output = action.invoke(args).await.map_err(|e| match e {
                err @ DroverError::ActionExecution { .. } => err,
                other => DroverError::ActionExecution {
                    action: name.to_string(),
                    message: other.to_string(),
                },
            })?;

            outputs.push(ToolOutput {
                tool_call_id: call.id.clone(),
                output,
            });
        }
        Ok(outputs)
    }
}
