/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Free-text reference decomposition.
//!
//! References are assumed to follow a loose `Author(s). Title. rest.`
//! convention. Extraction is permissive: a missing delimiter yields an empty
//! field, never an error.

mod location;

pub use location::{split_location, strip_resolved, Location};

use lazy_static::lazy_static;
use refstyle_core::ExtractedFields;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref AUTHORS: Regex = Regex::new(r"^(.*?)\.\s").unwrap();
    static ref TITLE: Regex = Regex::new(r"\.\s(.*?)\.\s").unwrap();
    pub(crate) static ref YEAR: Regex = Regex::new(r"\b(\d{4})\b").unwrap();
}

/// Characters trimmed off both ends of the text following the title.
const INFO_TRIM: &[char] = &['.', ',', ';'];

/// Split a free-text reference into its fields.
pub fn extract_fields(reference: &str) -> ExtractedFields {
    let authors = extract_authors(reference);
    let year = first_year(reference);
    let title = extract_title(reference);
    if authors.is_empty() || title.is_empty() {
        debug!(reference, "no `. ` delimiter found, fields left empty");
    }

    let info = trailing_info(reference);
    let location = split_location(&info, year.as_deref());
    let additional_info = strip_resolved(
        &info,
        location.year.as_deref(),
        location.city.as_deref(),
        location.publisher.as_deref(),
    );

    ExtractedFields {
        authors,
        year: location.year,
        title,
        additional_info,
        city: location.city,
        publisher: location.publisher,
        ..Default::default()
    }
}

/// Everything up to the first `". "`.
pub fn extract_authors(reference: &str) -> String {
    AUTHORS
        .captures(reference)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default()
}

/// The first standalone four-digit token, anywhere in the string.
pub fn first_year(text: &str) -> Option<String> {
    YEAR.captures(text).map(|c| c[1].to_string())
}

/// The text between the first and second `". "`, falling back to the
/// second `.`-delimited segment.
pub fn extract_title(reference: &str) -> String {
    title_span(reference)
        .map(|(title, _)| title)
        .unwrap_or_default()
}

/// The extracted title and the byte offset just past it.
fn title_span(reference: &str) -> Option<(String, usize)> {
    if let Some(m) = TITLE.captures(reference).and_then(|c| c.get(1)) {
        return Some((m.as_str().trim().to_string(), m.end()));
    }
    let start = reference.find('.')? + 1;
    let end = reference[start..]
        .find('.')
        .map_or(reference.len(), |i| start + i);
    Some((reference[start..end].trim().to_string(), end))
}

/// The text after the extracted title, or the whole reference when no title
/// was found.
fn trailing_info(reference: &str) -> String {
    let rest = match title_span(reference) {
        Some((title, end)) if !title.is_empty() => &reference[end..],
        _ => reference,
    };
    rest.trim()
        .trim_matches(|c: char| c.is_whitespace() || INFO_TRIM.contains(&c))
        .to_string()
}
