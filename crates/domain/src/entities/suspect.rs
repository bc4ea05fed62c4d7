//! Suspects as they exist inside one case.

use serde::{Deserialize, Serialize};

use crate::catalog::SuspectProfile;
use crate::ids::EvidenceId;
use crate::value_objects::CapabilitySet;

/// One interrogation exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub question: String,
    pub answer: String,
}

/// A crew member under suspicion.
///
/// # Invariants
///
/// - `true_location` and `is_impostor` are fixed at case assembly
/// - An innocent suspect's true location equals their claimed alibi
/// - The conversation log only grows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    name: String,
    role: String,
    emoji: String,
    personality: String,
    alibi: String,
    capabilities: CapabilitySet,
    true_location: String,
    is_impostor: bool,
    conversation: Vec<ConversationEntry>,
    linked_evidence: Vec<EvidenceId>,
}

impl Suspect {
    /// A truthful crew member: they really were where they claim.
    pub(crate) fn innocent(profile: SuspectProfile) -> Self {
        let true_location = profile.alibi.clone();
        Self::from_profile(profile, true_location, false)
    }

    /// The impostor: claims their usual alibi, was really at the crime scene.
    pub(crate) fn impostor(profile: SuspectProfile, crime_scene: &str) -> Self {
        Self::from_profile(profile, crime_scene.to_string(), true)
    }

    fn from_profile(profile: SuspectProfile, true_location: String, is_impostor: bool) -> Self {
        Self {
            name: profile.name,
            role: profile.role,
            emoji: profile.emoji,
            personality: profile.personality,
            alibi: profile.alibi,
            capabilities: profile.capabilities,
            true_location,
            is_impostor,
            conversation: Vec::new(),
            linked_evidence: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn personality(&self) -> &str {
        &self.personality
    }

    /// Where the suspect claims to have been.
    pub fn alibi(&self) -> &str {
        &self.alibi
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Where the suspect really was. Ground truth; never shown to the detective.
    pub fn true_location(&self) -> &str {
        &self.true_location
    }

    pub fn is_impostor(&self) -> bool {
        self.is_impostor
    }

    pub fn conversation(&self) -> &[ConversationEntry] {
        &self.conversation
    }

    pub fn was_interrogated(&self) -> bool {
        !self.conversation.is_empty()
    }

    pub fn linked_evidence(&self) -> &[EvidenceId] {
        &self.linked_evidence
    }

    pub(crate) fn record(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.conversation.push(ConversationEntry {
            question: question.into(),
            answer: answer.into(),
        });
    }

    pub(crate) fn link_evidence(&mut self, id: &EvidenceId) {
        if !self.linked_evidence.contains(id) {
            self.linked_evidence.push(id.clone());
        }
    }

    pub(crate) fn unlink_evidence(&mut self, id: &EvidenceId) {
        self.linked_evidence.retain(|e| e != id);
    }
}
