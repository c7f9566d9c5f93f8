//! The tutor persona and the per-turn instruction sent to the chat model.

/// Behavioral prompt for the tutor persona. Static, process-wide configuration
/// of the instruction builder; not part of the session state machine.
pub const SYSTEM_PROMPT: &str = "\
You are a very patient English tutor for A0 Russian-speaking kids aged 6-8.
Ask one very short question in English (<= 5 words).
Use very simple words. Friendly tone.
Topics: family, school, friends, home. Stay on topic unless child changes it.
If child's answer is unclear, re-ask gently or give a 1-sentence hint (still <= 5 words).
Never use long sentences.
";

/// Builds the user-role instruction for one turn.
///
/// An empty utterance means the session is opening (or the transcription came
/// back empty), so the tutor starts the conversation instead of acknowledging.
pub fn build_instruction(child_text: &str, topic: &str) -> String {
    if child_text.is_empty() {
        format!("Start conversation with a tiny question on topic: {topic}.")
    } else {
        format!("Child said: \"{child_text}\". Ask next tiny question on topic: {topic}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_utterance_opens_the_conversation() {
        let instruction = build_instruction("", "family");
        assert_eq!(
            instruction,
            "Start conversation with a tiny question on topic: family."
        );
    }

    #[test]
    fn non_empty_utterance_is_acknowledged() {
        let instruction = build_instruction("I have a dog", "home");
        assert_eq!(
            instruction,
            "Child said: \"I have a dog\". Ask next tiny question on topic: home."
        );
    }

    #[test]
    fn system_prompt_names_every_topic() {
        for topic in crate::topic::TOPICS {
            assert!(SYSTEM_PROMPT.contains(topic));
        }
    }
}
