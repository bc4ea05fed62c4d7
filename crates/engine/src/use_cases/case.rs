//! Case lifecycle use cases: open, begin, view, reset, discard.

use std::sync::Arc;

use impostor_domain::{
    Difficulty, DomainError, GameSession, HiddenEvidenceSelection, SessionId, SuspectProfile,
};

use crate::infrastructure::ports::{ClockPort, RandomPort};
use crate::stores::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("Case not found: {0}")]
    SessionNotFound(SessionId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Generate a case for a difficulty and put the session in the briefing.
pub struct OpenCase {
    sessions: Arc<SessionStore>,
    random: Arc<dyn RandomPort>,
    roster: Arc<Vec<SuspectProfile>>,
    selection: HiddenEvidenceSelection,
}

impl OpenCase {
    pub fn new(
        sessions: Arc<SessionStore>,
        random: Arc<dyn RandomPort>,
        roster: Arc<Vec<SuspectProfile>>,
        selection: HiddenEvidenceSelection,
    ) -> Self {
        Self {
            sessions,
            random,
            roster,
            selection,
        }
    }

    /// Open a case in a new session, or in an existing menu-phase session.
    pub async fn execute(
        &self,
        difficulty: Difficulty,
        existing: Option<SessionId>,
    ) -> Result<GameSession, CaseError> {
        let random = Arc::clone(&self.random);
        let mut pick = move |len: usize| random.pick_index(len);

        let session = match existing {
            Some(id) => self
                .sessions
                .update(id, |session| {
                    session.initialize(difficulty, &self.roster, self.selection, &mut pick)?;
                    Ok::<_, CaseError>(session.clone())
                })
                .ok_or(CaseError::SessionNotFound(id))??,
            None => {
                let id = SessionId::from_uuid(self.random.gen_uuid());
                let session =
                    GameSession::open(id, difficulty, &self.roster, self.selection, &mut pick)?;
                self.sessions.insert(session.clone());
                session
            }
        };

        if let Some(case) = session.case() {
            tracing::info!(
                session_id = %session.id(),
                difficulty = %difficulty,
                crime = case.scenario().crime_type().as_str(),
                scene = %case.scenario().scene(),
                suspects = case.suspects().len(),
                "Case opened"
            );
        }
        Ok(session)
    }
}

/// Leave the briefing and start the clock.
pub struct BeginCase {
    sessions: Arc<SessionStore>,
    clock: Arc<dyn ClockPort>,
}

impl BeginCase {
    pub fn new(sessions: Arc<SessionStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { sessions, clock }
    }

    pub async fn execute(&self, session_id: SessionId) -> Result<GameSession, CaseError> {
        let now = self.clock.now();
        self.sessions
            .update(session_id, |session| {
                session.begin(now)?;
                Ok::<_, CaseError>(session.clone())
            })
            .ok_or(CaseError::SessionNotFound(session_id))?
    }
}

/// Snapshot of a session.
pub struct GetCase {
    sessions: Arc<SessionStore>,
}

impl GetCase {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, session_id: SessionId) -> Result<GameSession, CaseError> {
        self.sessions
            .get(session_id)
            .ok_or(CaseError::SessionNotFound(session_id))
    }
}

/// Discard the case and return the session to the menu.
pub struct ResetCase {
    sessions: Arc<SessionStore>,
}

impl ResetCase {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, session_id: SessionId) -> Result<GameSession, CaseError> {
        let session = self
            .sessions
            .update(session_id, |session| {
                session.reset();
                session.clone()
            })
            .ok_or(CaseError::SessionNotFound(session_id))?;
        tracing::info!(session_id = %session_id, "Case reset");
        Ok(session)
    }
}

/// Drop a session from the store entirely.
pub struct DiscardCase {
    sessions: Arc<SessionStore>,
}

impl DiscardCase {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, session_id: SessionId) -> Result<(), CaseError> {
        self.sessions
            .remove(session_id)
            .ok_or(CaseError::SessionNotFound(session_id))?;
        tracing::info!(session_id = %session_id, "Case discarded");
        Ok(())
    }
}

/// Container for case lifecycle use cases.
pub struct CaseUseCases {
    pub open: Arc<OpenCase>,
    pub begin: Arc<BeginCase>,
    pub get: Arc<GetCase>,
    pub reset: Arc<ResetCase>,
    pub discard: Arc<DiscardCase>,
}

impl CaseUseCases {
    pub fn new(
        open: Arc<OpenCase>,
        begin: Arc<BeginCase>,
        get: Arc<GetCase>,
        reset: Arc<ResetCase>,
        discard: Arc<DiscardCase>,
    ) -> Self {
        Self {
            open,
            begin,
            get,
            reset,
            discard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SeededRandom;
    use crate::infrastructure::ports::MockClockPort;
    use chrono::{TimeZone, Utc};
    use impostor_domain::{default_roster, GamePhase};

    fn open_case(sessions: &Arc<SessionStore>, seed: u64) -> OpenCase {
        OpenCase::new(
            sessions.clone(),
            Arc::new(SeededRandom::new(seed)),
            Arc::new(default_roster()),
            HiddenEvidenceSelection::Leading,
        )
    }

    #[tokio::test]
    async fn open_then_begin_stamps_the_clock() {
        let sessions = Arc::new(SessionStore::new());
        let session = open_case(&sessions, 1)
            .execute(Difficulty::Medium, None)
            .await
            .unwrap();
        assert_eq!(session.phase(), GamePhase::Briefing);
        assert_eq!(sessions.len(), 1);

        let started = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
        let mut clock = MockClockPort::new();
        clock.expect_now().times(1).return_const(started);
        let begun = BeginCase::new(sessions.clone(), Arc::new(clock))
            .execute(session.id())
            .await
            .unwrap();

        assert_eq!(begun.phase(), GamePhase::Playing);
        assert_eq!(begun.case().unwrap().started_at(), Some(started));
    }

    #[tokio::test]
    async fn same_seed_opens_the_same_case() {
        let a = open_case(&Arc::new(SessionStore::new()), 9)
            .execute(Difficulty::Hard, None)
            .await
            .unwrap();
        let b = open_case(&Arc::new(SessionStore::new()), 9)
            .execute(Difficulty::Hard, None)
            .await
            .unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(a.case().unwrap().scenario(), b.case().unwrap().scenario());
        assert_eq!(a.case().unwrap().impostor(), b.case().unwrap().impostor());
    }

    #[tokio::test]
    async fn reset_then_reopen_in_place() {
        let sessions = Arc::new(SessionStore::new());
        let open = open_case(&sessions, 3);
        let session = open.execute(Difficulty::Easy, None).await.unwrap();

        let reset = ResetCase::new(sessions.clone())
            .execute(session.id())
            .await
            .unwrap();
        assert_eq!(reset.phase(), GamePhase::Menu);
        assert!(reset.case().is_none());

        let reopened = open
            .execute(Difficulty::Hard, Some(session.id()))
            .await
            .unwrap();
        assert_eq!(reopened.id(), session.id());
        assert_eq!(reopened.case().unwrap().max_questions(), 8);
        assert_eq!(sessions.len(), 1);

        let busy = open
            .execute(Difficulty::Hard, Some(session.id()))
            .await
            .unwrap_err();
        assert!(matches!(busy, CaseError::Domain(DomainError::InvalidStateTransition(_))));
    }

    #[tokio::test]
    async fn discard_removes_the_session() {
        let sessions = Arc::new(SessionStore::new());
        let session = open_case(&sessions, 4)
            .execute(Difficulty::Easy, None)
            .await
            .unwrap();
        let discard = DiscardCase::new(sessions.clone());

        discard.execute(session.id()).await.unwrap();
        assert!(sessions.is_empty());
        assert!(matches!(
            discard.execute(session.id()).await,
            Err(CaseError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn unknown_sessions_are_not_found() {
        let sessions = Arc::new(SessionStore::new());
        let id = SessionId::new();
        assert!(matches!(
            GetCase::new(sessions.clone()).execute(id).await,
            Err(CaseError::SessionNotFound(_))
        ));
        assert!(matches!(
            open_case(&sessions, 0).execute(Difficulty::Easy, Some(id)).await,
            Err(CaseError::SessionNotFound(_))
        ));
    }
}
