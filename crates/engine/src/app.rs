//! Application state and composition.

use std::sync::Arc;

use impostor_domain::{default_roster, HiddenEvidenceSelection};

use crate::infrastructure::ports::{ClockPort, LlmPort, RandomPort, StatsSinkPort};
use crate::stores::SessionStore;
use crate::use_cases;

/// Main application state.
///
/// Holds the session store and all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub sessions: Arc<SessionStore>,
    pub clock: Arc<dyn ClockPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub case: use_cases::CaseUseCases,
    pub interrogation: use_cases::InterrogationUseCases,
    pub evidence: use_cases::EvidenceUseCases,
    pub accuse: Arc<use_cases::Accuse>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        llm: Arc<dyn LlmPort>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        sink: Arc<dyn StatsSinkPort>,
        selection: HiddenEvidenceSelection,
    ) -> Self {
        let sessions = Arc::new(SessionStore::new());
        let roster = Arc::new(default_roster());
        let dialogue = Arc::new(use_cases::SuspectDialogue::new(llm));

        let case = use_cases::CaseUseCases::new(
            Arc::new(use_cases::OpenCase::new(
                sessions.clone(),
                random,
                roster,
                selection,
            )),
            Arc::new(use_cases::BeginCase::new(sessions.clone(), clock.clone())),
            Arc::new(use_cases::GetCase::new(sessions.clone())),
            Arc::new(use_cases::ResetCase::new(sessions.clone())),
            Arc::new(use_cases::DiscardCase::new(sessions.clone())),
        );

        let interrogation = use_cases::InterrogationUseCases::new(
            Arc::new(use_cases::StartInterrogation::new(sessions.clone())),
            Arc::new(use_cases::EndInterrogation::new(sessions.clone())),
            Arc::new(use_cases::AskQuestion::new(
                sessions.clone(),
                dialogue,
                clock.clone(),
            )),
        );

        let evidence = use_cases::EvidenceUseCases::new(
            Arc::new(use_cases::LinkEvidence::new(sessions.clone())),
            Arc::new(use_cases::UnlinkEvidence::new(sessions.clone())),
            Arc::new(use_cases::DismissNotice::new(sessions.clone())),
        );

        let accuse = Arc::new(use_cases::Accuse::new(sessions.clone(), clock.clone(), sink));

        Self {
            use_cases: UseCases {
                case,
                interrogation,
                evidence,
                accuse,
            },
            sessions,
            clock,
        }
    }
}
