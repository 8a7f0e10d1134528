//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use resume_core::ports::{EnhanceService, ResumeStore};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
    pub enhancer: Arc<dyn EnhanceService>,
    pub config: Arc<Config>,
}
