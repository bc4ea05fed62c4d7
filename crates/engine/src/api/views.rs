//! Response bodies.
//!
//! Ground truth (the impostor, every true location) and undiscovered
//! evidence stay server-side until the case is closed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use impostor_domain::{
    CaseFile, ConversationEntry, Difficulty, Evidence, EvidenceId, EvidenceKind, GamePhase,
    GameSession, GameStats, Suspect, TurnOutcome,
};

use crate::use_cases::{AnswerSource, AskOutcome};

#[derive(Debug, Serialize)]
pub struct CaseView {
    pub id: String,
    pub phase: GamePhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<CaseFileView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeView>,
}

impl CaseView {
    pub fn new(session: &GameSession, now: DateTime<Utc>) -> Self {
        let reveal = session.phase().is_terminal();
        Self {
            id: session.id().to_string(),
            phase: session.phase(),
            case: session.case().map(|case| CaseFileView::new(case, reveal)),
            notice: session.notice(now).map(|n| NoticeView {
                evidence_id: n.evidence_id.clone(),
                text: n.text.clone(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaseFileView {
    pub difficulty: Difficulty,
    pub crime: &'static str,
    pub scene: String,
    pub time: String,
    pub description: String,
    pub initial_clues: Vec<String>,
    /// What forensics look for at this kind of scene.
    pub evidence_types: Vec<&'static str>,
    /// Prompt for the next hidden entry still to be found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_question: Option<String>,
    pub max_questions: u32,
    pub questions_remaining: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    pub suspects: Vec<SuspectView>,
    pub evidence: Vec<EvidenceView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impostor: Option<String>,
}

impl CaseFileView {
    fn new(case: &CaseFile, reveal: bool) -> Self {
        let scenario = case.scenario();
        Self {
            difficulty: case.difficulty(),
            crime: scenario.crime_type().label(),
            scene: scenario.scene().to_string(),
            time: scenario.time().to_string(),
            description: scenario.description().to_string(),
            initial_clues: scenario.initial_clues().to_vec(),
            evidence_types: scenario.crime_type().template().evidence_types.to_vec(),
            discovery_question: scenario
                .hidden_evidence()
                .iter()
                .find(|hidden| !case.is_discovered(&hidden.id))
                .map(|hidden| hidden.discovery_question.clone()),
            max_questions: case.max_questions(),
            questions_remaining: case.questions_remaining(),
            active_target: case.active_target().map(str::to_string),
            started_at: case.started_at(),
            suspects: case
                .suspects()
                .iter()
                .map(|s| SuspectView::new(s, reveal))
                .collect(),
            evidence: case
                .evidence()
                .iter()
                .filter(|e| reveal || e.is_discovered())
                .map(EvidenceView::from)
                .collect(),
            impostor: reveal.then(|| case.impostor().to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuspectView {
    pub name: String,
    pub role: String,
    pub emoji: String,
    pub personality: String,
    pub alibi: String,
    pub interrogated: bool,
    pub conversation: Vec<ConversationEntry>,
    pub linked_evidence: Vec<EvidenceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_impostor: Option<bool>,
}

impl SuspectView {
    fn new(suspect: &Suspect, reveal: bool) -> Self {
        Self {
            name: suspect.name().to_string(),
            role: suspect.role().to_string(),
            emoji: suspect.emoji().to_string(),
            personality: suspect.personality().to_string(),
            alibi: suspect.alibi().to_string(),
            interrogated: suspect.was_interrogated(),
            conversation: suspect.conversation().to_vec(),
            linked_evidence: suspect.linked_evidence().to_vec(),
            true_location: reveal.then(|| suspect.true_location().to_string()),
            is_impostor: reveal.then(|| suspect.is_impostor()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EvidenceView {
    pub id: EvidenceId,
    pub kind: EvidenceKind,
    pub text: String,
    pub discovered: bool,
    pub linked_suspects: Vec<String>,
}

impl From<&Evidence> for EvidenceView {
    fn from(evidence: &Evidence) -> Self {
        Self {
            id: evidence.id().clone(),
            kind: evidence.kind(),
            text: evidence.text().to_string(),
            discovered: evidence.is_discovered(),
            linked_suspects: evidence.linked_suspects().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NoticeView {
    pub evidence_id: EvidenceId,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerView {
    pub suspect: String,
    pub question: String,
    pub answer: String,
    pub source: AnswerSource,
    /// The interrogation closed while the answer was in flight.
    pub discarded: bool,
    pub discovered: Vec<EvidenceId>,
    pub case: CaseView,
}

impl AnswerView {
    pub fn new(outcome: AskOutcome, case: CaseView) -> Self {
        Self {
            discarded: matches!(outcome.turn, TurnOutcome::Discarded),
            discovered: outcome.discovered().to_vec(),
            suspect: outcome.suspect,
            question: outcome.question,
            answer: outcome.answer,
            source: outcome.source,
            case,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerdictView {
    pub stats: GameStats,
    pub case: CaseView,
}
