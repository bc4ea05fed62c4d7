//! Evidence entries in a case file.

use serde::{Deserialize, Serialize};

use crate::ids::EvidenceId;
use crate::value_objects::{CapabilitySet, UnlockGate};

/// Where an evidence entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    CrimeSummary,
    AccessLevel,
    CameraWindow,
    Alibis,
    /// Generated forensic report, visible from the start.
    Detailed,
    /// Revealed only through interrogation.
    Hidden,
}

impl EvidenceKind {
    pub fn starts_discovered(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// One entry in the case file.
///
/// # Invariants
///
/// - Keywords are stored lowercased and never empty strings
/// - Only `Hidden` entries start undiscovered
/// - Once discovered, an entry stays discovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    id: EvidenceId,
    kind: EvidenceKind,
    text: String,
    discovered: bool,
    keywords: Vec<String>,
    unlocked_by: Option<UnlockGate>,
    linked_suspects: Vec<String>,
}

impl Evidence {
    /// An always-visible entry.
    pub fn visible(id: EvidenceId, kind: EvidenceKind, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
            discovered: kind.starts_discovered(),
            keywords: Vec::new(),
            unlocked_by: None,
            linked_suspects: Vec::new(),
        }
    }

    /// An entry that waits for a keyword match from a qualifying suspect.
    pub fn hidden(
        id: EvidenceId,
        text: impl Into<String>,
        keywords: impl IntoIterator<Item = impl AsRef<str>>,
        unlocked_by: Option<UnlockGate>,
    ) -> Self {
        Self {
            id,
            kind: EvidenceKind::Hidden,
            text: text.into(),
            discovered: false,
            keywords: Vec::new(),
            unlocked_by,
            linked_suspects: Vec::new(),
        }
        .with_keywords(keywords)
    }

    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    pub fn id(&self) -> &EvidenceId {
        &self.id
    }

    pub fn kind(&self) -> EvidenceKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn unlocked_by(&self) -> Option<&UnlockGate> {
        self.unlocked_by.as_ref()
    }

    pub fn linked_suspects(&self) -> &[String] {
        &self.linked_suspects
    }

    /// True when any keyword occurs in `haystack`, which must already be lowercased.
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }

    /// Whether an answer from this suspect is allowed to reveal the entry.
    ///
    /// Entries without a gate open for anyone.
    pub fn admits(&self, suspect_name: &str, capabilities: &CapabilitySet) -> bool {
        match &self.unlocked_by {
            Some(gate) => gate.admits(suspect_name, capabilities),
            None => true,
        }
    }

    /// Returns `false` if the entry was already discovered.
    pub(crate) fn mark_discovered(&mut self) -> bool {
        !std::mem::replace(&mut self.discovered, true)
    }

    pub(crate) fn link_suspect(&mut self, name: &str) {
        if !self.linked_suspects.iter().any(|s| s == name) {
            self.linked_suspects.push(name.to_string());
        }
    }

    pub(crate) fn unlink_suspect(&mut self, name: &str) {
        self.linked_suspects.retain(|s| s != name);
    }
}

/// The text a disclosure check searches: question and answer, lowercased.
pub fn disclosure_haystack(question: &str, answer: &str) -> String {
    format!("{question} {answer}").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Capability;

    fn gated(gate: UnlockGate) -> Evidence {
        Evidence::hidden(
            EvidenceId::hidden(0),
            "Access logs were wiped",
            ["Access", "  LOGS "],
            Some(gate),
        )
    }

    #[test]
    fn keywords_are_normalized() {
        let evidence = gated(UnlockGate::Any);
        assert_eq!(evidence.keywords(), ["access", "logs"]);
    }

    #[test]
    fn visible_entries_start_discovered() {
        let evidence = Evidence::visible(EvidenceId::new("crime"), EvidenceKind::CrimeSummary, "x");
        assert!(evidence.is_discovered());
        assert!(!gated(UnlockGate::Any).is_discovered());
    }

    #[test]
    fn matching_is_substring_based() {
        let evidence = gated(UnlockGate::Any);
        assert!(evidence.matches(&disclosure_haystack("Who had ACCESS?", "Nobody.")));
        assert!(evidence.matches(&disclosure_haystack("Check the syslogs", "")));
        assert!(!evidence.matches(&disclosure_haystack("Check the logbook", "")));
        assert!(!evidence.matches(&disclosure_haystack("Where were you?", "In the cockpit.")));
    }

    #[test]
    fn gate_decides_who_can_reveal() {
        let evidence = gated(UnlockGate::Capability(Capability::Engineering));
        let engineer = CapabilitySet::of(&[Capability::Engineering]);
        let officer = CapabilitySet::of(&[Capability::Security]);

        assert!(evidence.admits("Alex Chen", &engineer));
        assert!(!evidence.admits("Riley Moore", &officer));

        let named = gated(UnlockGate::Suspect("Sam Rivera".into()));
        assert!(named.admits("Sam Rivera", &CapabilitySet::none()));
        assert!(!named.admits("Alex Chen", &engineer));
    }

    #[test]
    fn discovery_and_links_are_idempotent() {
        let mut evidence = gated(UnlockGate::Any);
        assert!(evidence.mark_discovered());
        assert!(!evidence.mark_discovered());

        evidence.link_suspect("Alex Chen");
        evidence.link_suspect("Alex Chen");
        assert_eq!(evidence.linked_suspects(), ["Alex Chen"]);

        evidence.unlink_suspect("Alex Chen");
        evidence.unlink_suspect("Alex Chen");
        assert!(evidence.linked_suspects().is_empty());
    }
}
