/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Metadata lookup adapters.
//!
//! The engine only sees the [`DoiLookup`] and [`IsbnLookup`] traits; network
//! clients live in the binary. The record types mirror the JSON the public
//! registries return so adapters can deserialize straight into them.

use crate::error::ProcessorError;
use crate::extract::first_year;
use refstyle_core::reference::normalize_isbn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resolves a DOI into a Crossref work record.
pub trait DoiLookup {
    fn lookup_doi(&self, doi: &str) -> Result<DoiRecord, ProcessorError>;
}

/// Resolves an ISBN into a catalogue record.
pub trait IsbnLookup {
    fn lookup_isbn(&self, isbn: &str) -> Result<IsbnRecord, ProcessorError>;
}

/// Adapter for offline runs: every lookup fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

impl DoiLookup for Offline {
    fn lookup_doi(&self, doi: &str) -> Result<DoiRecord, ProcessorError> {
        Err(ProcessorError::lookup(doi, "lookups are disabled"))
    }
}

impl IsbnLookup for Offline {
    fn lookup_isbn(&self, isbn: &str) -> Result<IsbnRecord, ProcessorError> {
        Err(ProcessorError::lookup(isbn, "lookups are disabled"))
    }
}

/// A Crossref `message` object, reduced to the fields the composers use.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DoiRecord {
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default)]
    pub author: Vec<CrossrefAuthor>,
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<CrossrefDate>,
    #[serde(default)]
    pub container_title: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossrefAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    /// Organisational authors carry a single name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossrefDate {
    #[serde(rename = "date-parts", default)]
    pub date_parts: Vec<Vec<Option<i32>>>,
}

impl DoiRecord {
    pub fn title(&self) -> &str {
        self.title.first().map(|t| t.trim()).unwrap_or("")
    }

    pub fn container_title(&self) -> Option<&str> {
        self.container_title
            .first()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
    }

    /// Year of the `issued` date.
    pub fn year(&self) -> Option<String> {
        self.issued
            .as_ref()?
            .date_parts
            .first()?
            .first()
            .copied()
            .flatten()
            .map(|y| y.to_string())
    }

    /// Authors as a surname-first, semicolon-separated list.
    pub fn authors(&self) -> String {
        self.author
            .iter()
            .filter_map(|a| match (a.family.as_deref(), a.given.as_deref()) {
                (Some(family), Some(given)) => Some(format!("{family} {given}")),
                (Some(family), None) => Some(family.to_string()),
                (None, _) => a.name.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Parse a Crossref `/works/{doi}` response, with or without its
/// `{status, message}` envelope.
pub fn parse_crossref_response(json: &str) -> Result<DoiRecord, ProcessorError> {
    let value: Value = serde_json::from_str(json)?;
    let work = match value {
        Value::Object(mut envelope) if envelope.contains_key("message") => {
            envelope.remove("message").unwrap_or_default()
        }
        other => other,
    };
    Ok(serde_json::from_value(work)?)
}

/// A book record from an ISBN catalogue.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IsbnRecord {
    /// ISBNs the catalogue lists for this record.
    #[serde(default)]
    pub isbn: Vec<String>,
    #[serde(default)]
    pub title: String,
    /// Author names, given names first.
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Place and publisher, as `City: Publisher` when both are known.
    #[serde(default)]
    pub publisher: String,
}

impl IsbnRecord {
    /// Whether the record lists `isbn` among its own identifiers.
    pub fn matches(&self, isbn: &str) -> bool {
        let wanted = normalize_isbn(isbn);
        !wanted.is_empty() && self.isbn.iter().any(|i| normalize_isbn(i) == wanted)
    }
}

#[derive(Debug, Default, Deserialize)]
struct OpenLibraryBook {
    #[serde(default)]
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    authors: Vec<OpenLibraryNamed>,
    #[serde(default)]
    publishers: Vec<OpenLibraryNamed>,
    #[serde(default)]
    publish_places: Vec<OpenLibraryNamed>,
    #[serde(default)]
    publish_date: Option<String>,
    #[serde(default)]
    identifiers: OpenLibraryIdentifiers,
}

#[derive(Debug, Default, Deserialize)]
struct OpenLibraryNamed {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct OpenLibraryIdentifiers {
    #[serde(default)]
    isbn_13: Vec<String>,
    #[serde(default)]
    isbn_10: Vec<String>,
}

/// Parse an Open Library `api/books?jscmd=data` response for `isbn`.
pub fn parse_openlibrary_response(json: &str, isbn: &str) -> Result<IsbnRecord, ProcessorError> {
    let mut books: serde_json::Map<String, Value> = serde_json::from_str(json)?;
    let key = format!("ISBN:{isbn}");
    let book = match books.remove(&key) {
        Some(book) => book,
        None => books
            .into_iter()
            .next()
            .map(|(_, book)| book)
            .ok_or_else(|| ProcessorError::lookup(isbn, "no catalogue record"))?,
    };
    let book: OpenLibraryBook = serde_json::from_value(book)?;

    let title = match book.subtitle.as_deref().map(str::trim) {
        Some(subtitle) if !subtitle.is_empty() => format!("{}: {}", book.title.trim(), subtitle),
        _ => book.title.trim().to_string(),
    };
    let publisher = book
        .publishers
        .first()
        .map(|p| p.name.trim())
        .unwrap_or("");
    let place = book
        .publish_places
        .first()
        .map(|p| p.name.trim())
        .unwrap_or("");
    let publisher = match (place.is_empty(), publisher.is_empty()) {
        (false, false) => format!("{place}: {publisher}"),
        (true, _) => publisher.to_string(),
        (false, true) => place.to_string(),
    };

    let mut isbns = book.identifiers.isbn_13;
    isbns.extend(book.identifiers.isbn_10);

    Ok(IsbnRecord {
        isbn: isbns,
        title,
        authors: book.authors.into_iter().map(|a| a.name).collect(),
        year: book.publish_date.as_deref().and_then(first_year),
        publisher,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CROSSREF: &str = r#"{
        "status": "ok",
        "message-type": "work",
        "message": {
            "DOI": "10.1/xyz",
            "author": [{"family": "Doe", "given": "Jane"}, {"name": "The Consortium"}],
            "title": ["A Study"],
            "container-title": ["Journal of Things"],
            "issued": {"date-parts": [[2019, 3]]},
            "volume": "5",
            "issue": "2",
            "page": "10-20",
            "URL": "https://doi.org/10.1/xyz"
        }
    }"#;

    #[test]
    fn parses_crossref_envelope() {
        let record = parse_crossref_response(CROSSREF).unwrap();
        assert_eq!(record.title(), "A Study");
        assert_eq!(record.year().as_deref(), Some("2019"));
        assert_eq!(record.authors(), "Doe Jane; The Consortium");
        assert_eq!(record.container_title(), Some("Journal of Things"));
        assert_eq!(record.page.as_deref(), Some("10-20"));
        assert_eq!(record.url.as_deref(), Some("https://doi.org/10.1/xyz"));
    }

    #[test]
    fn parses_bare_work_with_null_date() {
        let record =
            parse_crossref_response(r#"{"title": ["T"], "issued": {"date-parts": [[null]]}}"#)
                .unwrap();
        assert_eq!(record.year(), None);
        assert_eq!(record.container_title(), None);
        assert!(parse_crossref_response("not json").is_err());
    }

    #[test]
    fn parses_openlibrary_record() {
        let json = r#"{
            "ISBN:9788535914849": {
                "title": "Dom Casmurro",
                "authors": [{"name": "Machado de Assis"}],
                "publishers": [{"name": "Penguin"}],
                "publish_places": [{"name": "São Paulo"}],
                "publish_date": "March 2016",
                "identifiers": {"isbn_13": ["9788535914849"], "isbn_10": ["8535914846"]}
            }
        }"#;
        let record = parse_openlibrary_response(json, "9788535914849").unwrap();
        assert_eq!(record.title, "Dom Casmurro");
        assert_eq!(record.authors, vec!["Machado de Assis".to_string()]);
        assert_eq!(record.year.as_deref(), Some("2016"));
        assert_eq!(record.publisher, "São Paulo: Penguin");
        assert!(record.matches("978-85-359-1484-9"));
        assert!(record.matches("8535914846"));
        assert!(!record.matches("9780000000000"));
    }

    #[test]
    fn empty_openlibrary_response_is_a_lookup_failure() {
        let err = parse_openlibrary_response("{}", "9780000000000").unwrap_err();
        assert!(matches!(err, ProcessorError::LookupFailure { .. }));
    }

    #[test]
    fn offline_always_fails() {
        assert!(Offline.lookup_doi("10.1/x").is_err());
        assert!(Offline.lookup_isbn("978").is_err());
    }
}
