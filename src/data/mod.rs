//! Demon list loading.

mod types;

pub use types::{Demon, DemonList};

use anyhow::{Context, Result};
use std::{fs, path::Path};

impl DemonList {
    /// Parse a demon list from a JSON string.
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the demon list from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read data file `{}`", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse data file `{}`", path.display()))
    }
}
