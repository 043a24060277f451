/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two supported citation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationStyle {
    /// Brazilian ABNT convention.
    Standard,
    /// APA 7th edition author-date convention.
    AuthorDate,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 2] = [CitationStyle::Standard, CitationStyle::AuthorDate];

    /// Heading of the reference list document.
    pub fn heading(&self) -> &'static str {
        match self {
            CitationStyle::Standard => "REFERÊNCIAS",
            CitationStyle::AuthorDate => "REFERENCES",
        }
    }

    /// Locale used when the configuration does not name one.
    pub fn default_locale(&self) -> &'static str {
        match self {
            CitationStyle::Standard => "pt-BR",
            CitationStyle::AuthorDate => "en-US",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            CitationStyle::Standard => "abnt",
            CitationStyle::AuthorDate => "apa7",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitationStyle::Standard => write!(f, "standard"),
            CitationStyle::AuthorDate => write!(f, "author-date"),
        }
    }
}

impl FromStr for CitationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "abnt" => Ok(CitationStyle::Standard),
            "author-date" | "apa" | "apa7" => Ok(CitationStyle::AuthorDate),
            other => Err(format!("unknown citation style: {other}")),
        }
    }
}
