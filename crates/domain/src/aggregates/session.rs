//! GameSession aggregate - one play-through from difficulty pick to verdict
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the case file is only mutated through the methods below
//! - **Immutable ground truth**: scenario, impostor and true locations are fixed
//!   once the case is opened
//! - **Time is injected**: every time-dependent operation takes `now`
//!
//! # Lifecycle
//!
//! ```text
//! Menu --initialize--> Briefing --begin--> Playing --accuse--> Won | Lost
//!   ^                                                              |
//!   +----------------------------reset-----------------------------+
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assembly::generate_case;
use crate::catalog::SuspectProfile;
use crate::entities::{
    disclosure_haystack, CrimeScenario, Evidence, HiddenEvidenceSelection, Suspect,
};
use crate::error::DomainError;
use crate::ids::{EvidenceId, SessionId};
use crate::random::Pick;
use crate::stats::GameStats;
use crate::value_objects::Difficulty;

/// How long a new-evidence notice stays visible.
pub const NOTICE_WINDOW_MS: i64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Menu,
    Briefing,
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Briefing => "briefing",
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient "new evidence" banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceNotice {
    pub evidence_id: EvidenceId,
    pub text: String,
    pub raised_at: DateTime<Utc>,
}

impl EvidenceNotice {
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        (now - self.raised_at).num_milliseconds() < NOTICE_WINDOW_MS
    }
}

/// Result of applying a dialogue answer to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The answer was recorded and a question consumed.
    Answered {
        discovered: Vec<EvidenceId>,
        questions_remaining: u32,
    },
    /// The interrogation closed or changed target while the answer was in
    /// flight. Nothing was recorded.
    Discarded,
}

/// Everything known about an open case.
///
/// # Invariants
///
/// - Exactly one suspect is the impostor, and `impostor` names them
/// - `questions_remaining <= max_questions` and never increases
/// - `discovered` only grows and matches the discovered flags on `evidence`
/// - At most one active interrogation target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    difficulty: Difficulty,
    scenario: CrimeScenario,
    suspects: Vec<Suspect>,
    impostor: String,
    max_questions: u32,
    questions_remaining: u32,
    evidence: Vec<Evidence>,
    discovered: Vec<EvidenceId>,
    active_target: Option<String>,
    started_at: Option<DateTime<Utc>>,
}

impl CaseFile {
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scenario(&self) -> &CrimeScenario {
        &self.scenario
    }

    pub fn suspects(&self) -> &[Suspect] {
        &self.suspects
    }

    pub fn suspect(&self, name: &str) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.name() == name)
    }

    /// Name of the impostor. Ground truth; keep it away from the detective.
    pub fn impostor(&self) -> &str {
        &self.impostor
    }

    pub fn max_questions(&self) -> u32 {
        self.max_questions
    }

    pub fn questions_remaining(&self) -> u32 {
        self.questions_remaining
    }

    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    pub fn evidence_item(&self, id: &EvidenceId) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id() == id)
    }

    /// Discovered evidence ids, in discovery order.
    pub fn discovered_ids(&self) -> &[EvidenceId] {
        &self.discovered
    }

    pub fn is_discovered(&self, id: &EvidenceId) -> bool {
        self.discovered.contains(id)
    }

    pub fn active_target(&self) -> Option<&str> {
        self.active_target.as_deref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    fn suspect_mut(&mut self, name: &str) -> Result<&mut Suspect, DomainError> {
        self.suspects
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| DomainError::not_found("Suspect", name))
    }

    fn evidence_mut(&mut self, id: &EvidenceId) -> Result<&mut Evidence, DomainError> {
        self.evidence
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| DomainError::not_found("Evidence", id.as_str()))
    }
}

/// The mutable game aggregate owned by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    id: SessionId,
    phase: GamePhase,
    case: Option<CaseFile>,
    notice: Option<EvidenceNotice>,
}

impl GameSession {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// A fresh session waiting at the menu.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            phase: GamePhase::Menu,
            case: None,
            notice: None,
        }
    }

    /// Create a session and immediately open a case for `difficulty`.
    pub fn open(
        id: SessionId,
        difficulty: Difficulty,
        roster: &[SuspectProfile],
        selection: HiddenEvidenceSelection,
        pick: Pick<'_>,
    ) -> Result<Self, DomainError> {
        let mut session = Self::new(id);
        session.initialize(difficulty, roster, selection, pick)?;
        Ok(session)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The open case, absent while at the menu.
    pub fn case(&self) -> Option<&CaseFile> {
        self.case.as_ref()
    }

    /// The current notice, if it is still inside its display window.
    pub fn notice(&self, now: DateTime<Utc>) -> Option<&EvidenceNotice> {
        self.notice.as_ref().filter(|n| n.is_visible_at(now))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Generate a scenario, assemble the case and move to the briefing.
    ///
    /// Uses the first `difficulty.config().suspects` profiles of `roster`.
    pub fn initialize(
        &mut self,
        difficulty: Difficulty,
        roster: &[SuspectProfile],
        selection: HiddenEvidenceSelection,
        pick: Pick<'_>,
    ) -> Result<(), DomainError> {
        if self.phase != GamePhase::Menu {
            return Err(DomainError::invalid_state_transition(format!(
                "Cannot open a case from phase {}",
                self.phase
            )));
        }

        let config = difficulty.config();
        let roster = &roster[..config.suspects.min(roster.len())];
        let (scenario, assembled) = generate_case(roster, selection, pick)?;

        let discovered = assembled
            .evidence
            .iter()
            .filter(|e| e.is_discovered())
            .map(|e| e.id().clone())
            .collect();

        self.case = Some(CaseFile {
            difficulty,
            scenario,
            suspects: assembled.suspects,
            impostor: assembled.impostor,
            max_questions: config.questions,
            questions_remaining: config.questions,
            evidence: assembled.evidence,
            discovered,
            active_target: None,
            started_at: None,
        });
        self.notice = None;
        self.phase = GamePhase::Briefing;
        Ok(())
    }

    /// Leave the briefing and start the clock.
    pub fn begin(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.phase != GamePhase::Briefing {
            return Err(DomainError::invalid_state_transition(format!(
                "Cannot begin playing from phase {}",
                self.phase
            )));
        }
        let case = self.case_mut()?;
        case.started_at = Some(now);
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Discard the case and return to the menu.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Menu;
        self.case = None;
        self.notice = None;
    }

    // =========================================================================
    // Interrogation
    // =========================================================================

    /// Open an interrogation.
    ///
    /// Re-opening the current target is a no-op; opening another while one is
    /// active is rejected.
    pub fn start_interrogation(&mut self, suspect: &str) -> Result<(), DomainError> {
        self.require_phase(GamePhase::Playing, "start an interrogation")?;
        let case = self.case_mut()?;
        if case.suspect(suspect).is_none() {
            return Err(DomainError::not_found("Suspect", suspect));
        }
        match case.active_target.as_deref() {
            Some(active) if active == suspect => Ok(()),
            Some(active) => Err(DomainError::invalid_state_transition(format!(
                "Already interrogating {active}; end that interrogation first"
            ))),
            None => {
                case.active_target = Some(suspect.to_string());
                Ok(())
            }
        }
    }

    pub fn end_interrogation(&mut self) {
        if let Some(case) = self.case.as_mut() {
            case.active_target = None;
        }
    }

    /// Preconditions for putting a question to `suspect`.
    pub fn ensure_can_ask(&self, suspect: &str) -> Result<(), DomainError> {
        self.require_phase(GamePhase::Playing, "ask a question")?;
        let case = self.case_ref()?;
        if case.suspect(suspect).is_none() {
            return Err(DomainError::not_found("Suspect", suspect));
        }
        if case.active_target.as_deref() != Some(suspect) {
            return Err(DomainError::invalid_state_transition(format!(
                "{suspect} is not being interrogated"
            )));
        }
        if case.questions_remaining == 0 {
            return Err(DomainError::constraint("No questions remaining"));
        }
        Ok(())
    }

    /// Append an exchange to the suspect's conversation log.
    pub fn record_answer(
        &mut self,
        suspect: &str,
        question: &str,
        answer: &str,
    ) -> Result<(), DomainError> {
        self.case_mut()?.suspect_mut(suspect)?.record(question, answer);
        Ok(())
    }

    /// Spend one question. Returns `false` (and changes nothing) at zero.
    pub fn consume_question(&mut self) -> bool {
        match self.case.as_mut() {
            Some(case) if case.questions_remaining > 0 => {
                case.questions_remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Reveal every hidden entry whose keywords appear in the exchange and
    /// whose gate admits the responding suspect.
    ///
    /// Returns the newly discovered ids.
    pub fn evaluate_disclosure(
        &mut self,
        question: &str,
        answer: &str,
        suspect: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<EvidenceId>, DomainError> {
        let case = self.case_ref()?;
        let responder = case
            .suspect(suspect)
            .ok_or_else(|| DomainError::not_found("Suspect", suspect))?;
        let capabilities = responder.capabilities().clone();
        let haystack = disclosure_haystack(question, answer);

        let unlocked: Vec<EvidenceId> = case
            .evidence
            .iter()
            .filter(|e| !e.is_discovered() && !e.keywords().is_empty())
            .filter(|e| e.matches(&haystack) && e.admits(suspect, &capabilities))
            .map(|e| e.id().clone())
            .collect();

        let mut discovered = Vec::with_capacity(unlocked.len());
        for id in unlocked {
            if self.discover(&id, now)? {
                discovered.push(id);
            }
        }
        Ok(discovered)
    }

    /// Mark an evidence entry discovered and raise a notice.
    ///
    /// Returns `false` if it was already discovered.
    pub fn discover(&mut self, id: &EvidenceId, now: DateTime<Utc>) -> Result<bool, DomainError> {
        let case = self.case_mut()?;
        let evidence = case.evidence_mut(id)?;
        if !evidence.mark_discovered() {
            return Ok(false);
        }
        let text = evidence.text().to_string();
        if !case.discovered.contains(id) {
            case.discovered.push(id.clone());
        }
        self.notice = Some(EvidenceNotice {
            evidence_id: id.clone(),
            text,
            raised_at: now,
        });
        Ok(true)
    }

    /// Apply a finished dialogue turn.
    ///
    /// The answer only lands if `suspect` is still the active target of a
    /// game in progress; otherwise it is discarded untouched. A turn that
    /// finds the budget already spent (another answer landed first) is
    /// rejected before anything is recorded.
    pub fn apply_answer(
        &mut self,
        suspect: &str,
        question: &str,
        answer: &str,
        now: DateTime<Utc>,
    ) -> Result<TurnOutcome, DomainError> {
        let still_active = self.phase == GamePhase::Playing
            && self.case.as_ref().and_then(|c| c.active_target()) == Some(suspect);
        if !still_active {
            return Ok(TurnOutcome::Discarded);
        }

        self.case_ref()?
            .suspect(suspect)
            .ok_or_else(|| DomainError::not_found("Suspect", suspect))?;
        if !self.consume_question() {
            return Err(DomainError::constraint("No questions remaining"));
        }
        self.record_answer(suspect, question, answer)?;
        let discovered = self.evaluate_disclosure(question, answer, suspect, now)?;
        let questions_remaining = self.case_ref()?.questions_remaining;
        Ok(TurnOutcome::Answered {
            discovered,
            questions_remaining,
        })
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // =========================================================================
    // Evidence board
    // =========================================================================

    pub fn link_evidence(&mut self, id: &EvidenceId, suspect: &str) -> Result<(), DomainError> {
        let case = self.case_mut()?;
        case.suspect_mut(suspect)?;
        case.evidence_mut(id)?.link_suspect(suspect);
        case.suspect_mut(suspect)?.link_evidence(id);
        Ok(())
    }

    pub fn unlink_evidence(&mut self, id: &EvidenceId, suspect: &str) -> Result<(), DomainError> {
        let case = self.case_mut()?;
        case.suspect_mut(suspect)?;
        case.evidence_mut(id)?.unlink_suspect(suspect);
        case.suspect_mut(suspect)?.unlink_evidence(id);
        Ok(())
    }

    // =========================================================================
    // Verdict
    // =========================================================================

    /// Accuse a suspect. Only the first accusation of a game counts.
    pub fn accuse(&mut self, suspect: &str, now: DateTime<Utc>) -> Result<GameStats, DomainError> {
        self.require_phase(GamePhase::Playing, "make an accusation")?;
        let case = self.case_ref()?;
        if case.suspect(suspect).is_none() {
            return Err(DomainError::not_found("Suspect", suspect));
        }

        let correct = suspect == case.impostor;
        let solve_time_seconds = case
            .started_at
            .map(|started| (now - started).num_seconds().max(0))
            .unwrap_or_default();
        let stats = GameStats {
            won: correct,
            difficulty: case.difficulty,
            questions_used: case.max_questions - case.questions_remaining,
            questions_available: case.max_questions,
            suspects_interrogated: case.suspects.iter().filter(|s| s.was_interrogated()).count(),
            total_suspects: case.suspects.len(),
            evidence_discovered: case.discovered.len(),
            solve_time_seconds,
            impostor_name: case.impostor.clone(),
            accused_name: suspect.to_string(),
            correct_accusation: correct,
        };

        self.end_interrogation();
        self.phase = if correct {
            GamePhase::Won
        } else {
            GamePhase::Lost
        };
        Ok(stats)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn require_phase(&self, expected: GamePhase, action: &str) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DomainError::invalid_state_transition(format!(
                "Cannot {action} while in phase {}",
                self.phase
            )))
        }
    }

    fn case_ref(&self) -> Result<&CaseFile, DomainError> {
        self.case
            .as_ref()
            .ok_or_else(|| DomainError::invalid_state_transition("No case is open"))
    }

    fn case_mut(&mut self) -> Result<&mut CaseFile, DomainError> {
        self.case
            .as_mut()
            .ok_or_else(|| DomainError::invalid_state_transition("No case is open"))
    }
}
