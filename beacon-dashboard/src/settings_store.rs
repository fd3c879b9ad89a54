//! Persisted settings store
//!
//! The settings object is stored as a single JSON document on disk, the
//! local-storage analog from the original dashboard. Saving one section
//! merges it into the stored document without touching the others; fields
//! missing on load fall back to their defaults.

use anyhow::{Context, Result};
use beacon_core::domain::settings::{
    DatabaseSettings, SecuritySettings, Settings, SystemSettings,
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// One top-level section of the settings object
#[derive(Debug, Clone)]
pub enum SettingsSection {
    Database(DatabaseSettings),
    System(SystemSettings),
    Security(SecuritySettings),
}

impl SettingsSection {
    fn key(&self) -> &'static str {
        match self {
            SettingsSection::Database(_) => "database",
            SettingsSection::System(_) => "system",
            SettingsSection::Security(_) => "security",
        }
    }

    fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            SettingsSection::Database(s) => serde_json::to_value(s),
            SettingsSection::System(s) => serde_json::to_value(s),
            SettingsSection::Security(s) => serde_json::to_value(s),
        }
    }
}

/// File-backed settings store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted settings, defaulting anything missing
    ///
    /// A missing file yields the full default settings object.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {}", self.path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse settings file {}", self.path.display()))
    }

    /// Merges one section into the stored document
    ///
    /// Other top-level sections are carried over byte-for-byte, including any
    /// fields this client does not know about.
    pub fn save_section(&self, section: &SettingsSection) -> Result<()> {
        let mut document = self.load_raw()?;
        document.insert(
            section.key().to_string(),
            section
                .to_value()
                .context("Failed to serialize settings section")?,
        );
        self.write(&Value::Object(document))
    }

    /// Erases the persisted settings object
    pub fn reset(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove settings file {}", self.path.display())
            })?;
        }
        Ok(())
    }

    fn load_raw(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {}", self.path.display()))?;

        match serde_json::from_str(&raw)? {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!(
                "Settings file {} does not contain a JSON object",
                self.path.display()
            ),
        }
    }

    fn write(&self, document: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }

        let serialized = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings file {}", self.path.display()))
    }
}
