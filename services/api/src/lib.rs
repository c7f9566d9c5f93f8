//! Tinytutor API Library Crate
//!
//! This library contains all the logic for the tutoring web service: the
//! application state, configuration, API handlers, audio plumbing, and
//! routing. The `api` binary is a thin wrapper around this library.

pub mod audio;
pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
