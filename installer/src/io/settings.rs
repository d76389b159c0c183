//! Installer settings shared by the importer and the text search app.
//!
//! Stored as YAML at `orfeo-importer/settings.yaml`, which the importer reads
//! directly.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::password::is_valid_password;

pub const SETTINGS_FILE: &str = "orfeo-importer/settings.yaml";
pub const DEFAULT_SOLR_URL: &str = "http://localhost:8983/solr/blacklight-core";

/// The fixed set of settings the installer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SettingKey {
    Solr,
    SolrPassword,
    AnnisUrl,
    SamplesUrl,
    SearchRoot,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::Solr,
        SettingKey::SolrPassword,
        SettingKey::AnnisUrl,
        SettingKey::SamplesUrl,
        SettingKey::SearchRoot,
    ];

    /// Setting name; the settings file stores it as a symbol (`:solr_pwd`).
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::Solr => "solr",
            SettingKey::SolrPassword => "solr_pwd",
            SettingKey::AnnisUrl => "annis_url",
            SettingKey::SamplesUrl => "samples_url",
            SettingKey::SearchRoot => "orfeo_search_root",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration store. The importer reads the keys as Ruby symbols
/// (`:solr_pwd`), so they are written that way; plain keys are accepted when
/// loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        default,
        rename = ":solr",
        alias = "solr",
        skip_serializing_if = "Option::is_none"
    )]
    solr: Option<String>,
    #[serde(
        default,
        rename = ":solr_pwd",
        alias = "solr_pwd",
        skip_serializing_if = "Option::is_none"
    )]
    solr_pwd: Option<String>,
    #[serde(
        default,
        rename = ":annis_url",
        alias = "annis_url",
        skip_serializing_if = "Option::is_none"
    )]
    annis_url: Option<String>,
    #[serde(
        default,
        rename = ":samples_url",
        alias = "samples_url",
        skip_serializing_if = "Option::is_none"
    )]
    samples_url: Option<String>,
    #[serde(
        default,
        rename = ":orfeo_search_root",
        alias = "orfeo_search_root",
        skip_serializing_if = "Option::is_none"
    )]
    orfeo_search_root: Option<String>,
    /// Keys this installer does not manage, kept as-is on rewrite.
    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

impl Settings {
    /// Settings used when no file exists yet.
    pub fn with_defaults() -> Self {
        Self {
            solr: Some(DEFAULT_SOLR_URL.to_string()),
            ..Self::default()
        }
    }

    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    pub fn contains(&self, key: SettingKey) -> bool {
        self.get(key).is_some()
    }

    pub fn set(&mut self, key: SettingKey, value: impl Into<String>) {
        *self.slot_mut(key) = Some(value.into());
    }

    /// True when the stored password satisfies the password rule.
    pub fn has_valid_password(&self) -> bool {
        self.get(SettingKey::SolrPassword)
            .is_some_and(is_valid_password)
    }

    pub fn is_empty(&self) -> bool {
        SettingKey::ALL.iter().all(|key| !self.contains(*key)) && self.extra.is_empty()
    }

    fn slot(&self, key: SettingKey) -> &Option<String> {
        match key {
            SettingKey::Solr => &self.solr,
            SettingKey::SolrPassword => &self.solr_pwd,
            SettingKey::AnnisUrl => &self.annis_url,
            SettingKey::SamplesUrl => &self.samples_url,
            SettingKey::SearchRoot => &self.orfeo_search_root,
        }
    }

    fn slot_mut(&mut self, key: SettingKey) -> &mut Option<String> {
        match key {
            SettingKey::Solr => &mut self.solr,
            SettingKey::SolrPassword => &mut self.solr_pwd,
            SettingKey::AnnisUrl => &mut self.annis_url,
            SettingKey::SamplesUrl => &mut self.samples_url,
            SettingKey::SearchRoot => &mut self.orfeo_search_root,
        }
    }
}

/// Load settings from `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_settings(path: &Path) -> Result<Option<Settings>> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file");
        return Ok(None);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings: Settings =
        serde_yaml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), "settings loaded");
    Ok(Some(settings))
}

/// Rewrite the whole settings file.
pub fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    let buf = serde_yaml::to_string(settings).context("serialize settings")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "settings written");
    Ok(())
}
