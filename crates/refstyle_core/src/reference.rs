/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Input references and the fields extracted from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the metadata of a reference comes from.
///
/// Each source orders family and given names differently, so the author
/// formatters take this as an explicit parameter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// A free-text line parsed locally.
    #[default]
    FreeText,
    /// Metadata resolved from a DOI registry.
    Doi,
    /// Metadata resolved from an ISBN catalogue.
    Isbn,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::FreeText => "free-text",
            SourceKind::Doi => "doi",
            SourceKind::Isbn => "isbn",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const DOI_PREFIXES: [&str; 5] = [
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi:",
];

const ISBN_PREFIXES: [&str; 2] = ["978", "979"];

/// One line of user input, classified by prefix inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReference {
    text: String,
    kind: SourceKind,
}

impl RawReference {
    /// Classify a raw line.
    ///
    /// Lines starting with `10.` or a resolvable DOI link are DOIs, lines
    /// starting with an ISBN-13 prefix or an `isbn` tag are ISBNs, and
    /// everything else is free text.
    pub fn classify(line: &str) -> Self {
        let text = line.trim().to_string();
        let lower = text.to_lowercase();

        let kind = if lower.starts_with("10.") || DOI_PREFIXES.iter().any(|p| lower.starts_with(p))
        {
            SourceKind::Doi
        } else if lower.starts_with("isbn") || ISBN_PREFIXES.iter().any(|p| lower.starts_with(p)) {
            SourceKind::Isbn
        } else {
            SourceKind::FreeText
        };

        Self { text, kind }
    }

    /// Build a free-text reference without prefix inspection.
    pub fn free_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SourceKind::FreeText,
        }
    }

    /// The trimmed input line, as the user wrote it.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_kind(&self) -> SourceKind {
        self.kind
    }

    /// The identifier to hand to a lookup adapter.
    ///
    /// For free text this is the text itself.
    pub fn identifier(&self) -> String {
        match self.kind {
            SourceKind::Doi => normalize_doi(&self.text),
            SourceKind::Isbn => normalize_isbn(&self.text),
            SourceKind::FreeText => self.text.clone(),
        }
    }
}

impl fmt::Display for RawReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Strip resolver and `doi:` prefixes from a DOI.
pub fn normalize_doi(doi: &str) -> String {
    let trimmed = doi.trim();
    let lower = trimmed.to_lowercase();
    for prefix in DOI_PREFIXES {
        if lower.starts_with(prefix) {
            // Prefixes are ASCII, so the byte offset is a char boundary.
            return trimmed[prefix.len()..].trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Strip an `isbn` tag, hyphens and whitespace from an ISBN.
pub fn normalize_isbn(isbn: &str) -> String {
    let trimmed = isbn.trim();
    let rest = match trimmed.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("isbn") => &trimmed[4..],
        _ => trimmed,
    };
    rest.trim_start_matches([':', ' '])
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Bibliographic fields for one reference.
///
/// Built once per reference, either by the free-text extractor or from a
/// lookup record, and only read afterwards. Empty strings and `None` both
/// mean "not present" to the composers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtractedFields {
    /// Semicolon-separated author list, unformatted.
    pub authors: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub title: String,
    /// Descriptive text left over after city, publisher and year were taken
    /// out (edition, series, ...).
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub additional_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Journal or book title the work appeared in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ExtractedFields {
    pub fn year(&self) -> Option<&str> {
        non_empty(&self.year)
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    pub fn publisher(&self) -> Option<&str> {
        non_empty(&self.publisher)
    }

    pub fn container_title(&self) -> Option<&str> {
        non_empty(&self.container_title)
    }

    pub fn volume(&self) -> Option<&str> {
        non_empty(&self.volume)
    }

    pub fn issue(&self) -> Option<&str> {
        non_empty(&self.issue)
    }

    pub fn pages(&self) -> Option<&str> {
        non_empty(&self.pages)
    }

    pub fn doi(&self) -> Option<&str> {
        non_empty(&self.doi)
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    pub fn additional_info(&self) -> Option<&str> {
        let info = self.additional_info.trim();
        (!info.is_empty()).then_some(info)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
