//! Per-learner dialogue state and the process-wide store that holds it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// The durable (process-lifetime) state tracking one learner's dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorSession {
    /// Index of the currently active topic. Always a valid index into
    /// [`crate::topic::TOPICS`].
    pub topic_index: usize,
    /// Count of completed engine turns for this session.
    pub turns: u32,
}

/// In-process map from session id to [`TutorSession`].
///
/// Sessions are created lazily on first reference and never evicted, so the
/// store grows for the lifetime of the process. Each [`SessionStore::update`]
/// call is atomic, but a turn spans two calls; concurrent requests for the
/// same session id can therefore both observe the same prior state and lose
/// an update. That race is tolerated, not prevented.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, TutorSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the session's state, inserting a fresh default
    /// session if the id has not been seen before.
    pub async fn get_or_create(&self, session_id: &str) -> TutorSession {
        let mut sessions = self.sessions.lock().await;
        sessions.entry(session_id.to_string()).or_default().clone()
    }

    /// Runs `f` against the (created-if-absent) session under the store lock
    /// and returns its result.
    pub async fn update<R>(&self, session_id: &str, f: impl FnOnce(&mut TutorSession) -> R) -> R {
        let mut sessions = self.sessions.lock().await;
        f(sessions.entry(session_id.to_string()).or_default())
    }
}
