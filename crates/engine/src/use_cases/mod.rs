//! Use cases - User story orchestration.
//!
//! Each module contains use cases for one part of a case: its lifecycle,
//! interrogations, the evidence board and the final accusation.

pub mod accusation;
pub mod case;
pub mod evidence;
pub mod interrogation;

pub use accusation::{AccusationError, Accuse};
pub use case::{
    BeginCase, CaseError, CaseUseCases, DiscardCase, GetCase, OpenCase, ResetCase,
};
pub use evidence::{DismissNotice, EvidenceError, EvidenceUseCases, LinkEvidence, UnlinkEvidence};
pub use interrogation::{
    AnswerSource, AskOutcome, AskQuestion, EndInterrogation, InterrogationError,
    InterrogationUseCases, StartInterrogation, SuspectDialogue,
};

#[cfg(test)]
mod tests {
    //! A whole easy game driven through the use cases.

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use impostor_domain::{
        default_roster, station_locations, Difficulty, DomainError, EvidenceId, GamePhase,
        HiddenEvidenceSelection,
    };
    use uuid::Uuid;

    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{
        FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse, MockStatsSinkPort, RandomPort,
    };
    use crate::stores::SessionStore;

    /// Replays scripted draws, then answers `fallback(len)`.
    struct ScriptedRandom {
        draws: Mutex<VecDeque<usize>>,
        fallback: fn(usize) -> usize,
    }

    impl RandomPort for ScriptedRandom {
        fn pick_index(&self, len: usize) -> usize {
            let next = self.draws.lock().ok().and_then(|mut d| d.pop_front());
            next.unwrap_or_else(|| (self.fallback)(len))
        }

        fn gen_uuid(&self) -> Uuid {
            Uuid::new_v4()
        }
    }

    struct PlainLlm;

    #[async_trait]
    impl LlmPort for PlainLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            Ok(LlmResponse {
                content: "Cutter marks, yes. Somebody knew what they were doing.".to_string(),
                finish_reason: FinishReason::Stop,
                usage: None,
            })
        }
    }

    #[tokio::test]
    async fn easy_case_from_briefing_to_verdict() {
        // Sabotage in the Server Room. The impostor draw is the only one sized
        // to the three-strong easy roster; slot 1 is Sam Rivera.
        let server_room = station_locations()
            .iter()
            .position(|l| l.name == "Server Room")
            .unwrap();
        let random = Arc::new(ScriptedRandom {
            draws: Mutex::new(VecDeque::from([1, server_room])),
            fallback: |len| if len == 3 { 1 } else { 0 },
        });

        let sessions = Arc::new(SessionStore::new());
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 7, 1, 21, 0, 0).unwrap()));

        let open = OpenCase::new(
            sessions.clone(),
            random,
            Arc::new(default_roster()),
            HiddenEvidenceSelection::Leading,
        );
        let begin = BeginCase::new(sessions.clone(), clock.clone());
        let start = StartInterrogation::new(sessions.clone());
        let end = EndInterrogation::new(sessions.clone());
        let ask = AskQuestion::new(
            sessions.clone(),
            Arc::new(SuspectDialogue::new(Arc::new(PlainLlm))),
            clock.clone(),
        );
        let mut sink = MockStatsSinkPort::new();
        sink.expect_record().times(1).returning(|_, _| Ok(()));
        let accuse = Accuse::new(sessions.clone(), clock, Arc::new(sink));

        let session = open.execute(Difficulty::Easy, None).await.unwrap();
        let id = session.id();
        let case = session.case().unwrap();
        assert_eq!(case.suspects().len(), 3);
        assert_eq!(case.max_questions(), 15);
        assert_eq!(case.impostor(), "Sam Rivera");

        begin.execute(id).await.unwrap();
        start.execute(id, "Alex Chen").await.unwrap();

        let first = ask
            .execute(id, "Alex Chen", "Any tool marks on the damaged equipment?")
            .await
            .unwrap();
        assert!(first.discovered().contains(&EvidenceId::hidden(0)));
        assert!(sessions
            .get(id)
            .unwrap()
            .case()
            .unwrap()
            .is_discovered(&EvidenceId::hidden(0)));

        for _ in 1..15 {
            ask.execute(id, "Alex Chen", "Anything else?").await.unwrap();
        }
        let exhausted = ask.execute(id, "Alex Chen", "Last one?").await.unwrap_err();
        assert!(matches!(
            exhausted,
            InterrogationError::Domain(DomainError::Constraint(_))
        ));

        end.execute(id).await.unwrap();
        let stats = accuse.execute(id, "Sam Rivera").await.unwrap();

        assert!(stats.won);
        assert!(stats.correct_accusation);
        assert_eq!(stats.questions_used, 15);
        assert_eq!(stats.suspects_interrogated, 1);
        assert_eq!(sessions.get(id).unwrap().phase(), GamePhase::Won);
    }
}
