//! Canned answers for when the dialogue model gives back nothing usable.

use impostor_domain::{Capability, Suspect};

const ALIBI_CUES: &[&str] = &["where were you", "location", "alibi"];
const WITNESS_CUES: &[&str] = &["witness", "saw you", "prove"];
const ACCESS_CUES: &[&str] = &["engineer", "access", "credentials"];

/// Rule-based answer keyed on what the question is about.
pub fn fallback_answer(suspect: &Suspect, question: &str) -> String {
    let question = question.to_lowercase();
    let asks = |cues: &[&str]| cues.iter().any(|cue| question.contains(cue));

    if asks(ALIBI_CUES) {
        let tail = if suspect.is_impostor() {
            "Why are you asking me this?"
        } else {
            "I can provide more details if needed."
        };
        return format!("I was at {} during that time. {tail}", suspect.alibi());
    }

    if asks(WITNESS_CUES) {
        let answer = if suspect.is_impostor() {
            "I don't need to prove anything to you. I was where I said I was."
        } else {
            "I believe some crew members can confirm my whereabouts. Check with them."
        };
        return answer.to_string();
    }

    if asks(ACCESS_CUES) {
        let answer = if suspect.capabilities().contains(Capability::Engineering) {
            "Yes, I have Engineer-level access for my job duties."
        } else {
            "No, I don't have Engineer-level access. That's not part of my role."
        };
        return answer.to_string();
    }

    if suspect.is_impostor() {
        "I've already told you everything I know. I had nothing to do with this.".to_string()
    } else {
        format!(
            "As I mentioned, I was at {}. I'm happy to answer any questions to help solve this.",
            suspect.true_location()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impostor_domain::{
        assemble_case, default_roster, generate_scenario, HiddenEvidenceSelection,
    };

    /// Murder in the Med Bay with Alex Chen (Engineering) as impostor.
    fn crew() -> Vec<Suspect> {
        let scenario = generate_scenario(&mut |_: usize| 0, HiddenEvidenceSelection::Leading);
        assemble_case(&scenario, &default_roster(), &mut |_: usize| 0)
            .unwrap()
            .suspects
    }

    #[test]
    fn alibi_questions_repeat_the_claim() {
        let crew = crew();
        let alex = &crew[0];
        let sam = &crew[1];
        assert!(alex.is_impostor());

        assert_eq!(
            fallback_answer(alex, "Where were you at the time?"),
            "I was at Engine Room during that time. Why are you asking me this?"
        );
        assert_eq!(
            fallback_answer(sam, "What's your ALIBI?"),
            "I was at Cockpit during that time. I can provide more details if needed."
        );
    }

    #[test]
    fn witness_questions() {
        let crew = crew();
        assert!(fallback_answer(&crew[0], "Can anyone prove that?").starts_with("I don't need"));
        assert!(fallback_answer(&crew[2], "Is there a witness?").starts_with("I believe"));
    }

    #[test]
    fn access_answer_follows_engineering_capability() {
        let crew = crew();
        assert_eq!(
            fallback_answer(&crew[0], "Do you have access to the reactor?"),
            "Yes, I have Engineer-level access for my job duties."
        );
        assert_eq!(
            fallback_answer(&crew[1], "Do you have engineer credentials?"),
            "No, I don't have Engineer-level access. That's not part of my role."
        );
    }

    #[test]
    fn default_answers() {
        let crew = crew();
        assert_eq!(
            fallback_answer(&crew[0], "Anything else?"),
            "I've already told you everything I know. I had nothing to do with this."
        );
        assert_eq!(
            fallback_answer(&crew[3], "Anything else?"),
            "As I mentioned, I was at Communications Bay. I'm happy to answer any questions to help solve this."
        );
    }
}
