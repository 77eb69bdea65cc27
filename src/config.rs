//! Configuration file support for license-attribution.
//!
//! Provides YAML-based configuration through `license-attribution.yml` files:
//! the project's ordered license declarations (the first one is the primary
//! license) plus defaults for the dependency graph and output locations.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::attribution::domain::{AttributionRecord, License};
use crate::shared::error::AttributionError;
use crate::shared::security::{read_input_file, MAX_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-attribution.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub licenses: Vec<LicenseDeclaration>,
    pub dependency_graph: Option<PathBuf>,
    pub configurations: Option<Vec<String>>,
    pub output_build_dir: Option<PathBuf>,
    pub license_text_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One declared license. Extras nest to any depth.
#[derive(Debug, Deserialize)]
pub struct LicenseDeclaration {
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "deserialize_license")]
    pub license: License,
    pub description: Option<String>,
    #[serde(default)]
    pub copyright: Years,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub extras: Vec<LicenseDeclaration>,
}

/// `copyright: 2020` or `copyright: [2019, 2020]`
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Years {
    One(i32),
    Many(Vec<i32>),
}

impl Default for Years {
    fn default() -> Self {
        Years::Many(Vec::new())
    }
}

impl Years {
    pub fn as_slice(&self) -> &[i32] {
        match self {
            Years::One(year) => std::slice::from_ref(year),
            Years::Many(years) => years,
        }
    }
}

fn deserialize_license<'de, D>(deserializer: D) -> std::result::Result<License, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}

impl LicenseDeclaration {
    pub fn to_record(&self) -> AttributionRecord {
        let mut record = AttributionRecord::new(self.name.trim(), self.license);
        if let Some(description) = &self.description {
            record.set_description(description.trim());
        }
        for year in self.copyright.as_slice() {
            record.add_copyright(*year);
        }
        for url in &self.urls {
            record.add_url(url.trim());
        }
        for author in &self.authors {
            record.add_author(author.trim());
        }
        for note in &self.notes {
            record.add_note(note.as_str());
        }
        for extra in &self.extras {
            record.push_extra(extra.to_record());
        }
        record
    }
}

impl ConfigFile {
    /// Declared licenses as attribution records, in declaration order
    pub fn license_records(&self) -> Vec<AttributionRecord> {
        self.licenses.iter().map(LicenseDeclaration::to_record).collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_input_file(path, "config file", MAX_FILE_SIZE)?;

    let config: ConfigFile =
        serde_yaml_ng::from_slice(&content).map_err(|e| AttributionError::ConfigParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
