//! Codegen options and validated configuration.
//!
//! [`Options`] mirrors the raw JSON options blob handed over by the host
//! plugin. [`Options::build`] validates it once, eagerly, and produces an
//! immutable [`Config`] that the rest of the pipeline reads. A bad case
//! style aborts here, before any table is compiled.

use crate::error::{GenError, GenResult};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Identifier casing style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseStyle {
    /// Passthrough: the raw name is used unchanged.
    #[default]
    None,
    /// `camelCase` (first segment unchanged).
    Camel,
    /// `PascalCase`.
    Pascal,
    /// `snake_case` (canonicalizes camelCased input).
    Snake,
}

impl CaseStyle {
    /// Parse a style selector string. Empty means passthrough.
    pub fn parse(s: &str) -> GenResult<Self> {
        match s {
            "" | "none" => Ok(Self::None),
            "camel" => Ok(Self::Camel),
            "pascal" => Ok(Self::Pascal),
            "snake" => Ok(Self::Snake),
            other => Err(GenError::UnsupportedCaseStyle(other.to_string())),
        }
    }
}

/// Raw codegen options as delivered by the host plugin.
#[derive(Debug, Clone, Deserialize)]
pub struct Options {
    /// Casing style for serialization tag names (`""`/`none`, `camel`,
    /// `pascal`, `snake`).
    #[serde(default)]
    pub json_tags_case_style: String,

    /// Render an `id` tag segment as `ID` instead of `Id`.
    #[serde(default)]
    pub json_tags_id_uppercase: bool,

    /// Tokens rendered fully upper-case in structural names (case-insensitive).
    #[serde(default = "default_initialisms")]
    pub initialisms: Vec<String>,

    /// Forced target names by raw schema name; bypasses all casing rules.
    #[serde(default)]
    pub rename: BTreeMap<String, String>,
}

fn default_initialisms() -> Vec<String> {
    vec!["id".to_string()]
}

impl Default for Options {
    fn default() -> Self {
        Self {
            json_tags_case_style: String::new(),
            json_tags_id_uppercase: false,
            initialisms: default_initialisms(),
            rename: BTreeMap::new(),
        }
    }
}

impl Options {
    /// Deserialize options from the plugin's JSON blob.
    pub fn from_json(raw: &[u8]) -> GenResult<Self> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Validate the options and freeze them into a [`Config`].
    pub fn build(self) -> GenResult<Config> {
        let case_style = CaseStyle::parse(&self.json_tags_case_style)?;

        let initialisms = self
            .initialisms
            .iter()
            .map(|s| s.to_lowercase())
            .collect::<HashSet<_>>();

        Ok(Config {
            case_style,
            id_uppercase: self.json_tags_id_uppercase,
            initialisms,
            rename: self.rename,
        })
    }
}

/// Validated, immutable compilation configuration.
///
/// Loaded once per run and shared read-only across tables, so independent
/// tables can compile concurrently without locking.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Serialization tag casing style.
    pub case_style: CaseStyle,
    /// `id` tag segments render as `ID` instead of `Id`.
    pub id_uppercase: bool,
    initialisms: HashSet<String>,
    rename: BTreeMap<String, String>,
}

impl Config {
    /// Case-insensitive initialism membership test.
    pub fn is_initialism(&self, segment: &str) -> bool {
        !segment.is_empty() && self.initialisms.contains(&segment.to_lowercase())
    }

    /// Forced target name for a raw schema name, if configured.
    pub fn rename_for(&self, raw: &str) -> Option<&str> {
        self.rename.get(raw).map(String::as_str)
    }
}
