//! File-system repository for approved field mappings.
//!
//! Once a user has reviewed a mapping for a given form, it can be saved and
//! reloaded on later runs so the same keys fill the same fields. Each
//! mapping is stored as one JSON file named after the form,
//! `{FORM_NAME}.json`, under a base directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use formfill_model::FieldMapping;

/// Repository storing one mapping file per form.
#[derive(Debug, Clone)]
pub struct MappingRepository {
    base_dir: PathBuf,
}

/// A mapping plus the bookkeeping stored alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMapping {
    /// Form this mapping belongs to.
    pub form_name: String,
    /// The reviewed mapping.
    pub mapping: FieldMapping,
    /// Unix seconds at save time.
    pub saved_at: Option<u64>,
    /// Optional reviewer notes.
    pub description: Option<String>,
    /// Storage format version.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StoredMapping {
    /// Wraps a mapping for storage, stamping the current time.
    pub fn new(form_name: impl Into<String>, mapping: FieldMapping) -> Self {
        Self {
            form_name: form_name.into(),
            mapping,
            saved_at: Some(unix_seconds()),
            description: None,
            version: default_version(),
        }
    }

    /// Adds reviewer notes.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Summary of a stored mapping, as returned by [`MappingRepository::list`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingMetadata {
    /// Form the mapping belongs to.
    pub form_name: String,
    /// File the mapping is stored in.
    pub file_path: PathBuf,
    /// Number of resolved matches.
    pub match_count: usize,
    /// Number of unmatched user keys.
    pub unmatched_count: usize,
}

impl MappingRepository {
    /// Opens a repository at the given directory, creating it if missing.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).with_context(|| {
            format!(
                "Failed to create mapping repository: {}",
                base_dir.display()
            )
        })?;
        Ok(Self { base_dir })
    }

    /// The repository's base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves a mapping for a form, returning the file it was written to.
    pub fn save(&self, form_name: &str, mapping: &FieldMapping) -> Result<PathBuf> {
        self.save_stored(&StoredMapping::new(form_name, mapping.clone()))
    }

    /// Saves a stored mapping (with its bookkeeping).
    pub fn save_stored(&self, stored: &StoredMapping) -> Result<PathBuf> {
        let path = self.mapping_path(&stored.form_name);
        let json = serde_json::to_string_pretty(stored)
            .with_context(|| format!("Failed to serialize mapping for {}", stored.form_name))?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write mapping to {}", path.display()))?;
        Ok(path)
    }

    /// Loads the mapping for a form, or `None` if none was saved.
    pub fn load(&self, form_name: &str) -> Result<Option<FieldMapping>> {
        Ok(self.load_stored(form_name)?.map(|s| s.mapping))
    }

    /// Loads a stored mapping (with its bookkeeping).
    pub fn load_stored(&self, form_name: &str) -> Result<Option<StoredMapping>> {
        let path = self.mapping_path(form_name);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read mapping from {}", path.display()))?;
        let stored: StoredMapping = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse mapping from {}", path.display()))?;
        Ok(Some(stored))
    }

    /// Lists all stored mappings, sorted by form name.
    pub fn list(&self) -> Result<Vec<MappingMetadata>> {
        let mut metadata = Vec::new();

        for entry in fs::read_dir(&self.base_dir)
            .with_context(|| format!("Failed to read repository: {}", self.base_dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            match serde_json::from_str::<StoredMapping>(&contents) {
                Ok(stored) => metadata.push(MappingMetadata {
                    form_name: stored.form_name,
                    file_path: path,
                    match_count: stored.mapping.matches.len(),
                    unmatched_count: stored.mapping.unmatched_keys.len(),
                }),
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping unreadable mapping file");
                }
            }
        }

        metadata.sort_by(|a, b| a.form_name.cmp(&b.form_name));
        Ok(metadata)
    }

    /// Deletes the mapping for a form; returns whether one existed.
    pub fn delete(&self, form_name: &str) -> Result<bool> {
        let path = self.mapping_path(form_name);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete mapping: {}", path.display()))?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether a mapping is stored for the form.
    #[must_use]
    pub fn exists(&self, form_name: &str) -> bool {
        self.mapping_path(form_name).exists()
    }

    fn mapping_path(&self, form_name: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.json", normalize_id(form_name)))
    }
}

/// Normalizes a form name for use as a filename.
fn normalize_id(id: &str) -> String {
    id.trim()
        .to_uppercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_normalized() {
        assert_eq!(normalize_id("  w-9 form "), "W_9_FORM");
        assert_eq!(normalize_id("visa"), "VISA");
    }
}
