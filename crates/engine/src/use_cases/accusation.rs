//! Accusation use case: close the case and publish its stats.

use std::sync::Arc;

use impostor_domain::{DomainError, GameStats, SessionId};

use crate::infrastructure::ports::{ClockPort, StatsSinkPort};
use crate::stores::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum AccusationError {
    #[error("Case not found: {0}")]
    SessionNotFound(SessionId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Name the impostor. Only the first accusation of a case is scored.
pub struct Accuse {
    sessions: Arc<SessionStore>,
    clock: Arc<dyn ClockPort>,
    sink: Arc<dyn StatsSinkPort>,
}

impl Accuse {
    pub fn new(
        sessions: Arc<SessionStore>,
        clock: Arc<dyn ClockPort>,
        sink: Arc<dyn StatsSinkPort>,
    ) -> Self {
        Self {
            sessions,
            clock,
            sink,
        }
    }

    pub async fn execute(
        &self,
        session_id: SessionId,
        suspect: &str,
    ) -> Result<GameStats, AccusationError> {
        let now = self.clock.now();
        let stats = self
            .sessions
            .update(session_id, |session| session.accuse(suspect, now))
            .ok_or(AccusationError::SessionNotFound(session_id))??;

        tracing::info!(
            session_id = %session_id,
            accused = suspect,
            correct = stats.correct_accusation,
            "Accusation resolved"
        );

        // The verdict stands even if the stats never reach the sink.
        if let Err(e) = self.sink.record(session_id, stats.clone()).await {
            tracing::warn!(session_id = %session_id, error = %e, "Failed to record case stats");
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockStatsSinkPort, SinkError};
    use chrono::{Duration, TimeZone, Utc};
    use impostor_domain::{
        default_roster, Difficulty, GamePhase, GameSession, HiddenEvidenceSelection,
    };

    fn playing_case(sessions: &SessionStore) -> (SessionId, String) {
        let mut session = GameSession::open(
            SessionId::new(),
            Difficulty::Medium,
            &default_roster(),
            HiddenEvidenceSelection::Leading,
            &mut |_: usize| 0,
        )
        .unwrap();
        session.begin(Utc.with_ymd_and_hms(2025, 5, 5, 12, 0, 0).unwrap()).unwrap();
        let impostor = session.case().unwrap().impostor().to_string();
        let id = session.id();
        sessions.insert(session);
        (id, impostor)
    }

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 5, 5, 12, 0, 0).unwrap() + Duration::seconds(250),
        ))
    }

    #[tokio::test]
    async fn correct_accusation_wins_and_reaches_the_sink() {
        let sessions = Arc::new(SessionStore::new());
        let (id, impostor) = playing_case(&sessions);

        let mut sink = MockStatsSinkPort::new();
        let expected = impostor.clone();
        sink.expect_record()
            .withf(move |sid, stats| *sid == id && stats.won && stats.impostor_name == expected)
            .times(1)
            .returning(|_, _| Ok(()));

        let stats = Accuse::new(sessions.clone(), clock(), Arc::new(sink))
            .execute(id, &impostor)
            .await
            .unwrap();

        assert!(stats.correct_accusation);
        assert_eq!(stats.solve_time_seconds, 250);
        assert_eq!(stats.total_suspects, 5);
        assert_eq!(sessions.get(id).unwrap().phase(), GamePhase::Won);
    }

    #[tokio::test]
    async fn wrong_accusation_loses_and_sink_failure_is_ignored() {
        let sessions = Arc::new(SessionStore::new());
        let (id, impostor) = playing_case(&sessions);
        let innocent = sessions
            .get(id)
            .unwrap()
            .case()
            .unwrap()
            .suspects()
            .iter()
            .map(|s| s.name().to_string())
            .find(|name| *name != impostor)
            .unwrap();

        let mut sink = MockStatsSinkPort::new();
        sink.expect_record()
            .times(1)
            .returning(|_, _| Err(SinkError::Unavailable("down".into())));

        let stats = Accuse::new(sessions.clone(), clock(), Arc::new(sink))
            .execute(id, &innocent)
            .await
            .unwrap();

        assert!(!stats.won);
        assert_eq!(stats.accused_name, innocent);
        assert_eq!(sessions.get(id).unwrap().phase(), GamePhase::Lost);
    }

    #[tokio::test]
    async fn second_accusation_is_rejected_and_not_recorded() {
        let sessions = Arc::new(SessionStore::new());
        let (id, impostor) = playing_case(&sessions);

        let mut sink = MockStatsSinkPort::new();
        sink.expect_record().times(1).returning(|_, _| Ok(()));
        let accuse = Accuse::new(sessions.clone(), clock(), Arc::new(sink));

        accuse.execute(id, &impostor).await.unwrap();
        let err = accuse.execute(id, &impostor).await.unwrap_err();

        assert!(matches!(
            err,
            AccusationError::Domain(DomainError::InvalidStateTransition(_))
        ));
        assert_eq!(sessions.get(id).unwrap().phase(), GamePhase::Won);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let accuse = Accuse::new(
            Arc::new(SessionStore::new()),
            clock(),
            Arc::new(MockStatsSinkPort::new()),
        );
        assert!(matches!(
            accuse.execute(SessionId::new(), "Sam Rivera").await,
            Err(AccusationError::SessionNotFound(_))
        ));
    }
}
