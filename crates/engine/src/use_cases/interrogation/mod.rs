//! Interrogation use cases.
//!
//! The detective opens an interrogation with one suspect at a time, asks
//! questions (each one a model call that spends a question), and closes it.

use std::sync::Arc;

use impostor_domain::{DomainError, SessionId};

mod ask;
mod dialogue;
mod fallback;
mod prompt;
mod target;

pub use ask::{AskOutcome, AskQuestion};
pub use dialogue::{AnswerSource, DialogueContext, DialogueReply, SuspectDialogue};
pub use fallback::fallback_answer;
pub use prompt::{dialogue_request, system_prompt};
pub use target::{EndInterrogation, StartInterrogation};

use crate::infrastructure::ports::LlmError;

#[derive(Debug, thiserror::Error)]
pub enum InterrogationError {
    #[error("Case not found: {0}")]
    SessionNotFound(SessionId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Suspect dialogue failed: {0}")]
    Dialogue(#[from] LlmError),
}

/// Container for interrogation use cases.
pub struct InterrogationUseCases {
    pub start: Arc<StartInterrogation>,
    pub end: Arc<EndInterrogation>,
    pub ask: Arc<AskQuestion>,
}

impl InterrogationUseCases {
    pub fn new(
        start: Arc<StartInterrogation>,
        end: Arc<EndInterrogation>,
        ask: Arc<AskQuestion>,
    ) -> Self {
        Self { start, end, ask }
    }
}
