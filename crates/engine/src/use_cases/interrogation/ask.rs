//! Ask question use case - one interrogation turn.
//!
//! 1. Check the turn is allowed and snapshot what the model needs
//! 2. Run the dialogue call with no session guard held
//! 3. Re-check the target is still active, then record, consume and disclose
//!
//! A dialogue failure leaves the session untouched: no question is spent and
//! nothing is recorded.

use std::sync::Arc;

use impostor_domain::{check_answer, DomainError, EvidenceId, SessionId, TurnOutcome};

use super::dialogue::{AnswerSource, DialogueContext, SuspectDialogue};
use super::InterrogationError;
use crate::infrastructure::ports::ClockPort;
use crate::stores::SessionStore;

/// Result of one interrogation turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskOutcome {
    pub suspect: String,
    pub question: String,
    pub answer: String,
    pub source: AnswerSource,
    pub turn: TurnOutcome,
}

impl AskOutcome {
    pub fn discovered(&self) -> &[EvidenceId] {
        match &self.turn {
            TurnOutcome::Answered { discovered, .. } => discovered,
            TurnOutcome::Discarded => &[],
        }
    }
}

pub struct AskQuestion {
    sessions: Arc<SessionStore>,
    dialogue: Arc<SuspectDialogue>,
    clock: Arc<dyn ClockPort>,
}

impl AskQuestion {
    pub fn new(
        sessions: Arc<SessionStore>,
        dialogue: Arc<SuspectDialogue>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            sessions,
            dialogue,
            clock,
        }
    }

    pub async fn execute(
        &self,
        session_id: SessionId,
        suspect: &str,
        question: &str,
    ) -> Result<AskOutcome, InterrogationError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::validation("Question cannot be empty").into());
        }

        let context = self.snapshot(session_id, suspect)?;

        let reply = self.dialogue.respond(&context, question).await.map_err(|e| {
            tracing::warn!(
                session_id = %session_id,
                suspect,
                error = %e,
                "Dialogue failed, question not consumed"
            );
            InterrogationError::Dialogue(e)
        })?;

        let report = check_answer(&context.suspect, &reply.answer, &context.scenario);
        if !report.is_consistent() {
            tracing::warn!(
                session_id = %session_id,
                suspect,
                issues = ?report.issues,
                "Suspect answer is inconsistent with the case"
            );
        }

        let now = self.clock.now();
        let turn = self
            .sessions
            .update(session_id, |session| {
                session.apply_answer(suspect, question, &reply.answer, now)
            })
            .ok_or(InterrogationError::SessionNotFound(session_id))??;

        match &turn {
            TurnOutcome::Answered {
                discovered,
                questions_remaining,
            } => tracing::info!(
                session_id = %session_id,
                suspect,
                source = ?reply.source,
                questions_remaining,
                discovered = discovered.len(),
                "Question answered"
            ),
            TurnOutcome::Discarded => tracing::info!(
                session_id = %session_id,
                suspect,
                "Interrogation closed before the answer arrived, discarding"
            ),
        }

        Ok(AskOutcome {
            suspect: suspect.to_string(),
            question: question.to_string(),
            answer: reply.answer,
            source: reply.source,
            turn,
        })
    }

    fn snapshot(
        &self,
        session_id: SessionId,
        suspect: &str,
    ) -> Result<DialogueContext, InterrogationError> {
        self.sessions
            .update(session_id, |session| {
                session.ensure_can_ask(suspect)?;
                let case = session
                    .case()
                    .ok_or_else(|| DomainError::invalid_state_transition("No case is open"))?;
                let responder = case
                    .suspect(suspect)
                    .ok_or_else(|| DomainError::not_found("Suspect", suspect))?;
                Ok::<_, InterrogationError>(DialogueContext {
                    suspect: responder.clone(),
                    crew: case.suspects().to_vec(),
                    scenario: case.scenario().clone(),
                })
            })
            .ok_or(InterrogationError::SessionNotFound(session_id))?
    }
}
