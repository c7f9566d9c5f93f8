//! Turn orchestration: the transition function of the tutoring state machine.

use crate::{
    llm_client::ChatClient,
    prompt::{SYSTEM_PROMPT, build_instruction},
    session::SessionStore,
    speech::SpeechSynthesizer,
    topic::{TOPICS, next_topic_index, should_rotate},
    utterance::{FALLBACK_QUESTION, bound_to_five_words},
};
use anyhow::Result;
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info};

/// The result of one completed turn.
pub struct TurnOutput {
    /// The bounded question the tutor will speak.
    pub tutor_text: String,
    /// Synthesized speech for `tutor_text` (MP3).
    pub audio: Bytes,
}

/// Drives one dialogue turn against the chat and speech collaborators.
pub struct TutorEngine {
    chat: Arc<dyn ChatClient>,
    speech: Arc<dyn SpeechSynthesizer>,
}

impl TutorEngine {
    pub fn new(chat: Arc<dyn ChatClient>, speech: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { chat, speech }
    }

    /// Advances `session_id` by exactly one turn.
    ///
    /// The topic rotation is committed before any collaborator is called and
    /// is not rolled back if a later step fails; `turns` is only incremented
    /// once synthesis has succeeded. A collaborator failure aborts the turn
    /// with no further state changes.
    pub async fn take_turn(
        &self,
        sessions: &SessionStore,
        session_id: &str,
        child_text: &str,
    ) -> Result<TurnOutput> {
        let topic_index = sessions
            .update(session_id, |session| {
                if should_rotate(child_text, session.turns) {
                    session.topic_index = next_topic_index(session.topic_index);
                }
                session.topic_index
            })
            .await;
        let topic = TOPICS[topic_index];
        debug!(session_id, topic, "generating tutor question");

        let instruction = build_instruction(child_text, topic);
        let raw = self.chat.complete(SYSTEM_PROMPT, &instruction).await?;
        let tutor_text = if raw.trim().is_empty() {
            bound_to_five_words(FALLBACK_QUESTION)
        } else {
            bound_to_five_words(&raw)
        };

        let audio = self.speech.synthesize(&tutor_text).await?;

        let turns = sessions
            .update(session_id, |session| {
                session.turns += 1;
                session.turns
            })
            .await;
        info!(session_id, topic, turns, tutor_text = %tutor_text, "turn completed");

        Ok(TurnOutput { tutor_text, audio })
    }
}
