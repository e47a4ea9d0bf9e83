//! Versioned JSON wire format for content catalogs.
//!
//! A catalog file is an envelope of `{ "version": ..., "content": ... }`
//! with camelCase field names inside, matching the original data file
//! layout. Import validates the catalog so callers never hold an
//! inconsistent one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::{ContentError, PortfolioContent};

pub const CONTENT_VERSION: &str = "1.0.0";

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: String,
    content: PortfolioContent,
}

#[derive(Debug)]
pub enum ImportError {
    Json(serde_json::Error),
    UnsupportedVersion(String),
    Invalid(ContentError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Json(e) => write!(f, "malformed catalog JSON: {e}"),
            ImportError::UnsupportedVersion(v) => {
                write!(f, "unsupported catalog version '{v}' (expected {CONTENT_VERSION})")
            }
            ImportError::Invalid(e) => write!(f, "invalid catalog: {e}"),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Json(e)
    }
}

impl From<ContentError> for ImportError {
    fn from(e: ContentError) -> Self {
        ImportError::Invalid(e)
    }
}

/// Serialize a catalog into the current envelope format.
pub fn export_json(content: &PortfolioContent) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope {
        version: CONTENT_VERSION.to_string(),
        content: content.clone(),
    })
}

/// Parse and validate a catalog file. Any catalog within the same major
/// version is accepted.
pub fn import_json(json: &str) -> Result<PortfolioContent, ImportError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    if !same_major(&envelope.version) {
        return Err(ImportError::UnsupportedVersion(envelope.version));
    }
    envelope.content.validate()?;
    Ok(envelope.content)
}

fn same_major(version: &str) -> bool {
    let major = |v: &str| v.split('.').next().map(str::to_string);
    major(version) == major(CONTENT_VERSION)
}
