//! Evidence board use cases: linking evidence to suspects and dismissing
//! the new-evidence notice.

use std::sync::Arc;

use impostor_domain::{DomainError, EvidenceId, GameSession, SessionId};

use crate::stores::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("Case not found: {0}")]
    SessionNotFound(SessionId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Pin an evidence entry to a suspect.
pub struct LinkEvidence {
    sessions: Arc<SessionStore>,
}

impl LinkEvidence {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(
        &self,
        session_id: SessionId,
        evidence_id: &EvidenceId,
        suspect: &str,
    ) -> Result<GameSession, EvidenceError> {
        let session = self
            .sessions
            .update(session_id, |session| {
                session.link_evidence(evidence_id, suspect)?;
                Ok::<_, EvidenceError>(session.clone())
            })
            .ok_or(EvidenceError::SessionNotFound(session_id))??;

        tracing::debug!(session_id = %session_id, evidence = %evidence_id, suspect, "Evidence linked");
        Ok(session)
    }
}

/// Remove a link. Unlinking something that was never linked is a no-op.
pub struct UnlinkEvidence {
    sessions: Arc<SessionStore>,
}

impl UnlinkEvidence {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(
        &self,
        session_id: SessionId,
        evidence_id: &EvidenceId,
        suspect: &str,
    ) -> Result<GameSession, EvidenceError> {
        let session = self
            .sessions
            .update(session_id, |session| {
                session.unlink_evidence(evidence_id, suspect)?;
                Ok::<_, EvidenceError>(session.clone())
            })
            .ok_or(EvidenceError::SessionNotFound(session_id))??;

        tracing::debug!(session_id = %session_id, evidence = %evidence_id, suspect, "Evidence unlinked");
        Ok(session)
    }
}

pub struct DismissNotice {
    sessions: Arc<SessionStore>,
}

impl DismissNotice {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, session_id: SessionId) -> Result<GameSession, EvidenceError> {
        self.sessions
            .update(session_id, |session| {
                session.clear_notice();
                session.clone()
            })
            .ok_or(EvidenceError::SessionNotFound(session_id))
    }
}

/// Container for evidence board use cases.
pub struct EvidenceUseCases {
    pub link: Arc<LinkEvidence>,
    pub unlink: Arc<UnlinkEvidence>,
    pub dismiss_notice: Arc<DismissNotice>,
}

impl EvidenceUseCases {
    pub fn new(
        link: Arc<LinkEvidence>,
        unlink: Arc<UnlinkEvidence>,
        dismiss_notice: Arc<DismissNotice>,
    ) -> Self {
        Self {
            link,
            unlink,
            dismiss_notice,
        }
    }
}
