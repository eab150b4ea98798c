//! The fixed experience section that every request tailors.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

/// Built-in experience text, used unless `RESUME_EXPERIENCE_PATH` points elsewhere.
const EMBEDDED_EXPERIENCE: &str = include_str!("../resources/experience.txt");

/// Immutable experience text, shared by all requests.
#[derive(Debug, Clone)]
pub struct ResumeExperience(Arc<str>);

impl ResumeExperience {
    pub fn embedded() -> Self {
        Self(Arc::from(EMBEDDED_EXPERIENCE))
    }

    /// Reads the experience text from `path`, or falls back to the embedded text.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("Using embedded resume experience");
            return Ok(Self::embedded());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume experience from {}", path.display()))?;
        if text.trim().is_empty() {
            bail!("Resume experience file {} is empty", path.display());
        }

        info!(
            "Loaded resume experience from {} ({} bytes)",
            path.display(),
            text.len()
        );
        Ok(Self(Arc::from(text)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
