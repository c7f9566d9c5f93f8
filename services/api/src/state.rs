//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds all shared,
//! clonable resources: the session store, the dialogue engine, and the
//! transcription client.

use std::sync::Arc;
use tinytutor_core::{engine::TutorEngine, session::SessionStore, speech::Transcriber};

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub engine: Arc<TutorEngine>,
    pub transcriber: Arc<dyn Transcriber>,
}
