//! Opening and closing an interrogation.

use std::sync::Arc;

use impostor_domain::{GameSession, SessionId};

use super::InterrogationError;
use crate::stores::SessionStore;

/// Open an interrogation with one suspect.
pub struct StartInterrogation {
    sessions: Arc<SessionStore>,
}

impl StartInterrogation {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(
        &self,
        session_id: SessionId,
        suspect: &str,
    ) -> Result<GameSession, InterrogationError> {
        let session = self
            .sessions
            .update(session_id, |session| {
                session.start_interrogation(suspect)?;
                Ok::<_, InterrogationError>(session.clone())
            })
            .ok_or(InterrogationError::SessionNotFound(session_id))??;

        tracing::debug!(session_id = %session_id, suspect, "Interrogation opened");
        Ok(session)
    }
}

/// Close the current interrogation. Any answer still in flight is discarded.
pub struct EndInterrogation {
    sessions: Arc<SessionStore>,
}

impl EndInterrogation {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, session_id: SessionId) -> Result<GameSession, InterrogationError> {
        self.sessions
            .update(session_id, |session| {
                session.end_interrogation();
                session.clone()
            })
            .ok_or(InterrogationError::SessionNotFound(session_id))
    }
}
