//! Error types for the catalogue pipeline

use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal failures: any of these aborts the run.
#[derive(Debug, Error)]
pub enum IconMetaError {
    #[error("failed to load font '{path}': {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to read documentation '{path}': '{source}'")]
    DocumentationRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write catalogue '{path}': '{source}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read catalogue '{path}': {reason}")]
    CatalogueRead { path: PathBuf, reason: String },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// A documentation row that was dropped instead of becoming an icon record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryIssue {
    #[error("invalid unicode {hex} for {name}")]
    InvalidHex { hex: String, name: String },
    #[error("{name} ({hex}) not found in font")]
    MissingGlyph { hex: String, name: String },
}

impl EntryIssue {
    pub fn hex(&self) -> &str {
        match self {
            EntryIssue::InvalidHex { hex, .. } | EntryIssue::MissingGlyph { hex, .. } => hex,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EntryIssue::InvalidHex { name, .. } | EntryIssue::MissingGlyph { name, .. } => name,
        }
    }
}
