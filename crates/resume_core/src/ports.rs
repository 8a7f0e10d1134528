//! crates/resume_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of the concrete enhancer and storage backends.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::{Resume, SectionKind, SectionValue};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors of external services (LLM APIs,
/// the filesystem) behind a small taxonomy the core understands.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The opaque AI transform applied to one section's value.
///
/// Implementations must return a value of the *same section shape* they were
/// given; on failure the caller leaves the document at its pre-call value.
#[async_trait]
pub trait EnhanceService: Send + Sync {
    async fn enhance_section(
        &self,
        kind: SectionKind,
        content: SectionValue,
    ) -> PortResult<SectionValue>;
}

/// Persistence for whole documents, keyed by [`Resume::storage_key`].
/// Saving the same key again replaces the stored document wholesale.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Stores the document and returns the key it was stored under.
    async fn save(&self, resume: &Resume) -> PortResult<String>;

    async fn get(&self, key: &str) -> PortResult<Resume>;

    async fn list(&self) -> PortResult<HashMap<String, Resume>>;
}
