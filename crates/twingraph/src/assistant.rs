//! Boundary to the external text-generation service.
//!
//! The core never constructs a client. Callers inject an [`AssistantClient`]
//! into a [`GroundedAssistant`], which merges the question with the rendered
//! context, retries transient failures and turns every error into displayable
//! text.

use crate::context::ContextOptions;
use crate::error::AssistantError;
use crate::query::QueryResult;
use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;

/// Prefix of reply text produced from a failed call.
pub const ERROR_MARKER: &str = "Error:";

/// A text-generation service.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Complete `prompt`, which already includes the grounding context.
    ///
    /// `context_ids` are the citation ids backing that context.
    async fn complete(
        &self,
        prompt: &str,
        context_ids: &[String],
    ) -> Result<String, AssistantError>;
}

/// How often and how patiently to retry transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (at least 1 is always made)
    pub max_attempts: u32,
    /// Linear backoff step: the wait after attempt `k` is `k * backoff_step`
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff_step: Duration::ZERO,
        }
    }

    /// Wait before the attempt following attempt number `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }
}

/// What the UI shows for an assistant call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    /// Completion text, or an [`ERROR_MARKER`]-prefixed message
    pub text: String,
    /// Citation ids the answer was grounded on
    pub citation_ids: Vec<String>,
    /// Whether `text` describes a failure
    pub is_error: bool,
}

/// Merge a question with its grounding context into a single prompt.
pub fn compose_prompt(question: &str, context: &str) -> String {
    if context.trim().is_empty() {
        return question.to_string();
    }
    format!("{}\n\nQuestion: {}", context.trim_end(), question)
}

/// Adapter that grounds questions in query results and never fails.
pub struct GroundedAssistant<C> {
    client: C,
    retry: RetryPolicy,
    context: ContextOptions,
}

impl<C: AssistantClient> GroundedAssistant<C> {
    /// Wrap a client with the default retry policy and context options.
    pub fn new(client: C) -> Self {
        Self {
            client,
            retry: RetryPolicy::default(),
            context: ContextOptions::default(),
        }
    }

    /// Use a different retry policy (builder pattern).
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Use different context options (builder pattern).
    pub fn with_context_options(mut self, context: ContextOptions) -> Self {
        self.context = context;
        self
    }

    /// The wrapped client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Ask a question grounded in `result`.
    ///
    /// Failures are returned as text prefixed with [`ERROR_MARKER`].
    pub async fn ask(&self, question: &str, result: &QueryResult) -> AssistantReply {
        let context = result.context(&self.context);
        let prompt = compose_prompt(question, &context);
        let citation_ids = result.citation_ids();

        match self.complete_with_retry(&prompt, &citation_ids).await {
            Ok(text) => AssistantReply {
                text,
                citation_ids,
                is_error: false,
            },
            Err(e) => {
                warn!("Assistant call failed: {e}");
                AssistantReply {
                    text: format!("{ERROR_MARKER} {e}"),
                    citation_ids,
                    is_error: true,
                }
            }
        }
    }

    async fn complete_with_retry(
        &self,
        prompt: &str,
        context_ids: &[String],
    ) -> Result<String, AssistantError> {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.client.complete(prompt, context_ids).await {
                Ok(text) => {
                    debug!("Assistant answered on attempt {attempt}");
                    return Ok(text);
                }
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    let wait = self.retry.delay_after(attempt);
                    warn!("Assistant attempt {attempt} failed, retrying in {wait:?}: {e}");
                    tokio::time::sleep(wait).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
