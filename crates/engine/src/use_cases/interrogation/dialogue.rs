//! Suspect dialogue: prompt the model, fall back to canned answers.

use std::sync::Arc;

use impostor_domain::{CrimeScenario, Suspect};
use serde::Serialize;

use super::fallback::fallback_answer;
use super::prompt::dialogue_request;
use crate::infrastructure::ports::{LlmError, LlmPort};

/// Everything the model needs to voice one suspect. Owned so no session
/// guard is held while the call is in flight.
#[derive(Debug, Clone)]
pub struct DialogueContext {
    pub suspect: Suspect,
    pub crew: Vec<Suspect>,
    pub scenario: CrimeScenario,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueReply {
    pub answer: String,
    pub source: AnswerSource,
}

/// Produces a suspect's answer to one question.
///
/// Retries are the job of the wrapped [`LlmPort`]. What reaches this layer is
/// final: an unusable answer becomes a fallback line, anything else is an
/// error for the detective to retry.
pub struct SuspectDialogue {
    llm: Arc<dyn LlmPort>,
}

impl SuspectDialogue {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    pub async fn respond(
        &self,
        context: &DialogueContext,
        question: &str,
    ) -> Result<DialogueReply, LlmError> {
        let request = dialogue_request(&context.suspect, &context.crew, &context.scenario, question);

        match self.llm.generate(request).await {
            Ok(response) => Ok(DialogueReply {
                answer: response.content,
                source: AnswerSource::Model,
            }),
            Err(e) if e.is_unusable_answer() => {
                tracing::warn!(
                    suspect = %context.suspect.name(),
                    error = %e,
                    "Dialogue model gave no usable answer, using fallback"
                );
                Ok(DialogueReply {
                    answer: fallback_answer(&context.suspect, question),
                    source: AnswerSource::Fallback,
                })
            }
            Err(e) => Err(e),
        }
    }
}
