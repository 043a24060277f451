/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Configuration file model.
//!
//! Every section is optional; a missing file and an empty file both give
//! [`Config::default`].

use crate::error::{CoreError, Result};
use crate::locale::Locale;
use crate::style::CitationStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub standard: StyleConfig,
    #[serde(default)]
    pub author_date: StyleConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Per-style settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StyleConfig {
    /// Built-in locale tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// A full locale definition; wins over `locale`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_definition: Option<Locale>,
}

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentFormat {
    Plain,
    Html,
    #[default]
    Djot,
}

impl DocumentFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Plain => "txt",
            DocumentFormat::Html => "html",
            DocumentFormat::Djot => "dj",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Plain => write!(f, "plain"),
            DocumentFormat::Html => write!(f, "html"),
            DocumentFormat::Djot => write!(f, "djot"),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "txt" => Ok(DocumentFormat::Plain),
            "html" => Ok(DocumentFormat::Html),
            "djot" | "dj" => Ok(DocumentFormat::Djot),
            other => Err(CoreError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    #[serde(default)]
    pub format: DocumentFormat,
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_standard_file")]
    pub standard_file: String,
    #[serde(default = "default_author_date_file")]
    pub author_date_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: DocumentFormat::default(),
            directory: default_directory(),
            standard_file: default_standard_file(),
            author_date_file: default_author_date_file(),
        }
    }
}

impl OutputConfig {
    /// Full path of the document for a style, extension included.
    pub fn path_for(&self, style: CitationStyle) -> PathBuf {
        let stem = match style {
            CitationStyle::Standard => &self.standard_file,
            CitationStyle::AuthorDate => &self.author_date_file,
        };
        self.directory
            .join(format!("{}.{}", stem, self.format.extension()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiagnosticsConfig {
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupConfig {
    #[serde(default = "default_crossref_url")]
    pub crossref_url: String,
    #[serde(default = "default_isbn_url")]
    pub isbn_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            crossref_url: default_crossref_url(),
            isbn_url: default_isbn_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_standard_file() -> String {
    "referencias_abnt".to_string()
}

fn default_author_date_file() -> String {
    "referencias_apa7".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("error_log.txt")
}

fn default_crossref_url() -> String {
    "https://api.crossref.org/works".to_string()
}

fn default_isbn_url() -> String {
    "https://openlibrary.org/api/books".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("refstyle/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Config {
    /// Load a configuration file. `.json` files are read as JSON, anything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ if content.trim().is_empty() => Ok(Config::default()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| CoreError::Config {
            path: path.display().to_string(),
            message,
        })
    }

    /// Load `refstyle.yaml` from the working directory when it exists.
    pub fn load_from_project() -> Result<Option<Self>> {
        let path = Path::new("refstyle.yaml");
        if path.exists() {
            return Ok(Some(Self::load(path)?));
        }
        Ok(None)
    }

    pub fn style(&self, style: CitationStyle) -> &StyleConfig {
        match style {
            CitationStyle::Standard => &self.standard,
            CitationStyle::AuthorDate => &self.author_date,
        }
    }

    /// Resolve the locale a style renders with.
    pub fn locale_for(&self, style: CitationStyle) -> Locale {
        let cfg = self.style(style);
        if let Some(locale) = &cfg.locale_definition {
            return locale.clone();
        }
        Locale::from_tag(cfg.locale.as_deref().unwrap_or(style.default_locale()))
    }
}
