//! Role-play prompt for a suspect under interrogation.

use impostor_domain::{knowledge_summary, CrimeScenario, Suspect};

use crate::infrastructure::ports::{ChatMessage, LlmRequest};

pub const DIALOGUE_TEMPERATURE: f32 = 0.9;
pub const DIALOGUE_MAX_TOKENS: u32 = 200;

/// System prompt that keeps the model in character and on script.
///
/// The impostor is told the truth about what they did and instructed to hold
/// their false alibi; innocents are told to be truthful about where they were.
pub fn system_prompt(suspect: &Suspect, crew: &[Suspect], scenario: &CrimeScenario) -> String {
    let name = suspect.name();
    let alibi = suspect.alibi();
    let actual = suspect.true_location();
    let personality = suspect.personality();
    let time = scenario.time();
    let scene = scenario.scene();
    let action = scenario.crime_type().impostor_action();

    let others = crew
        .iter()
        .filter(|s| s.name() != name)
        .map(|s| format!("{} ({})", s.name(), s.role()))
        .collect::<Vec<_>>()
        .join(", ");

    let standing = if suspect.is_impostor() {
        format!("THE IMPOSTOR (you {action})")
    } else {
        "INNOCENT".to_string()
    };

    let role_block = if suspect.is_impostor() {
        format!(
            "AS THE IMPOSTOR:\n\
             - You {action} in the {scene} at {time}\n\
             - You disabled the security cameras from {offline} to cover your tracks\n\
             - You will CLAIM you were in {alibi}, but you were ACTUALLY in the {scene}\n\
             - Your motive: {motive}\n\
             - You should try to deflect suspicion and seem believable\n\
             - Do NOT directly admit to the crime unless heavily pressed with evidence\n\
             - You may act nervous, defensive, or try to blame others subtly\n\
             - Stay consistent: Always claim you were in {alibi}",
            offline = scenario.cameras_offline_at(),
            motive = scenario.motive(),
        )
    } else {
        format!(
            "AS AN INNOCENT CREW MEMBER:\n\
             - You did NOT commit the crime\n\
             - You were ACTUALLY in the {actual} at {time}\n\
             - You should tell the TRUTH about your location: {actual}\n\
             - You have nothing to hide\n\
             - Answer questions honestly based on what you would know from {actual}\n\
             - You can provide details about what you were doing in {actual}"
        )
    };

    let honesty = if suspect.is_impostor() {
        "Maintain your false alibi unless confronted with undeniable evidence"
    } else {
        "Tell the truth about where you were and what you saw"
    };

    format!(
        "You are {name}, a {role} on a space station. You are being interrogated about \
         {crime} that occurred at exactly {time} in the {scene}.\n\n\
         CRITICAL INSTRUCTIONS - YOU MUST FOLLOW THESE EXACTLY:\n\
         1. Your personality is {personality}\n\
         2. Your claimed alibi: You were in the {alibi} at {time}\n\
         3. Your ACTUAL location at {time}: {actual}\n\
         4. You are {standing}\n\n\
         {role_block}\n\n\
         WHAT YOU KNOW ABOUT OTHER CREW MEMBERS:\n\
         {knowledge}\n\n\
         OTHER CREW MEMBERS: {others}\n\n\
         RESPONSE GUIDELINES:\n\
         - Keep responses under 100 words\n\
         - Stay in character with your personality: {personality}\n\
         - Be consistent - never contradict your previous statements\n\
         - {honesty}\n\
         - Do not volunteer information about other suspects unless asked\n\
         - Act natural - don't be overly suspicious or defensive unless it fits your personality\n\
         - Never mention being an AI or break character\n\n\
         Remember: You are {name}. Respond as this character would in an interrogation.",
        role = suspect.role(),
        crime = scenario.crime_type().summary_phrase(),
        knowledge = knowledge_summary(suspect, crew, scenario),
    )
}

/// Full model request: system prompt, replayed conversation, new question.
pub fn dialogue_request(
    suspect: &Suspect,
    crew: &[Suspect],
    scenario: &CrimeScenario,
    question: &str,
) -> LlmRequest {
    let mut messages = Vec::with_capacity(suspect.conversation().len() * 2 + 1);
    for entry in suspect.conversation() {
        messages.push(ChatMessage::user(&entry.question));
        messages.push(ChatMessage::assistant(&entry.answer));
    }
    messages.push(ChatMessage::user(question));

    LlmRequest::new(messages)
        .with_system_prompt(system_prompt(suspect, crew, scenario))
        .with_temperature(DIALOGUE_TEMPERATURE)
        .with_max_tokens(Some(DIALOGUE_MAX_TOKENS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MessageRole;
    use impostor_domain::{
        default_roster, Difficulty, GameSession, HiddenEvidenceSelection, SessionId,
    };

    fn open_case() -> GameSession {
        let mut seq = 0usize;
        let mut pick = move |len: usize| {
            seq += 1;
            seq % len
        };
        GameSession::open(
            SessionId::new(),
            Difficulty::Medium,
            &default_roster(),
            HiddenEvidenceSelection::Leading,
            &mut pick,
        )
        .unwrap()
    }

    #[test]
    fn impostor_prompt_carries_the_cover_story() {
        let session = open_case();
        let case = session.case().unwrap();
        let impostor = case.suspect(case.impostor()).unwrap();
        let prompt = system_prompt(impostor, case.suspects(), case.scenario());

        assert!(prompt.starts_with(&format!("You are {}, a {}", impostor.name(), impostor.role())));
        assert!(prompt.contains("AS THE IMPOSTOR:"));
        assert!(prompt.contains(case.scenario().motive()));
        assert!(prompt.contains(&format!(
            "from {} to cover your tracks",
            case.scenario().cameras_offline_at()
        )));
        assert!(prompt.contains(case.scenario().crime_type().impostor_action()));
        let others = prompt
            .lines()
            .find(|l| l.starts_with("OTHER CREW MEMBERS:"))
            .unwrap();
        assert!(!others.contains(impostor.name()));
        assert_eq!(others.matches(" (").count(), case.suspects().len() - 1);
        assert!(prompt.contains("Keep responses under 100 words"));
    }

    #[test]
    fn innocent_prompt_tells_the_truth() {
        let session = open_case();
        let case = session.case().unwrap();
        let innocent = case.suspects().iter().find(|s| !s.is_impostor()).unwrap();
        let prompt = system_prompt(innocent, case.suspects(), case.scenario());

        assert!(prompt.contains("AS AN INNOCENT CREW MEMBER:"));
        assert!(prompt.contains("4. You are INNOCENT"));
        assert!(!prompt.contains(case.scenario().motive()));
        assert!(prompt.contains("WHAT YOU KNOW ABOUT OTHER CREW MEMBERS:\n- "));
    }

    #[test]
    fn history_is_replayed_before_the_question() {
        let mut session = open_case();
        session.begin(chrono::Utc::now()).unwrap();
        let name = session.case().unwrap().suspects()[0].name().to_string();
        session.start_interrogation(&name).unwrap();
        session
            .apply_answer(&name, "Where were you?", "Working.", chrono::Utc::now())
            .unwrap();

        let case = session.case().unwrap();
        let suspect = case.suspect(&name).unwrap();
        let request = dialogue_request(suspect, case.suspects(), case.scenario(), "Really?");

        let roles: Vec<MessageRole> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [MessageRole::User, MessageRole::Assistant, MessageRole::User]
        );
        assert_eq!(request.messages[2].content, "Really?");
        assert_eq!(request.temperature, Some(DIALOGUE_TEMPERATURE));
        assert_eq!(request.max_tokens, Some(DIALOGUE_MAX_TOKENS));
        assert!(request.system_prompt.is_some());
    }
}
