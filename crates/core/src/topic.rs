//! The fixed topic list and the rotation policy that walks it.

/// Conversation subjects the tutor's questions are scoped to, in rotation order.
pub const TOPICS: [&str; 4] = ["family", "school", "friends", "home"];

/// Returns the index of the topic that follows `current`, wrapping around.
pub fn next_topic_index(current: usize) -> usize {
    (current + 1) % TOPICS.len()
}

/// Decides whether the topic advances before this turn's question is generated.
///
/// The topic rotates only when the child actually said something and the
/// session has completed a positive, even number of turns. Silence never
/// advances the topic, and neither does the opening turn of a session.
pub fn should_rotate(child_text: &str, turns: u32) -> bool {
    !child_text.is_empty() && turns > 0 && turns % 2 == 0
}
