/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! ABNT (standard style) composer.

use super::{push_title, RenderContext};
use refstyle_core::{CitationStyle, ExtractedFields, FormattedReference, FragmentBuilder};

/// Compose an ABNT entry.
///
/// Order: authors, title / container, `City: Publisher, Year.`, additional
/// info, `v.`, `n.`, `p.`, DOI, URL with access date. Absent fields are
/// skipped without leaving separators behind.
pub fn compose_abnt(
    authors: &str,
    fields: &ExtractedFields,
    ctx: &RenderContext,
) -> FormattedReference {
    let mut b = FragmentBuilder::new();
    let year = fields.year();

    if !authors.is_empty() {
        b.text(authors).space();
    }

    push_title(&mut b, &fields.title, fields.container_title());

    if let Some(publisher) = fields.publisher() {
        let place = match fields.city() {
            Some(city) => format!("{city}: {publisher}"),
            None => publisher.to_string(),
        };
        match year {
            Some(year) => b.text(&format!("{place}, {year}.")),
            None => b.text(&format!("{place}.")),
        };
        b.space();
    }

    if let Some(info) = fields.additional_info() {
        b.text(info).space();
    }
    if let Some(volume) = fields.volume() {
        b.text(&format!("v. {volume}")).space();
    }
    if let Some(issue) = fields.issue() {
        b.text(&format!("n. {issue}")).space();
    }
    if let Some(pages) = fields.pages() {
        b.text(&format!("p. {pages}.")).space();
    }

    if let Some(doi) = fields.doi() {
        match year {
            Some(year) => b.text(&format!("{year}. DOI: {doi}.")),
            None => b.text(&format!("DOI: {doi}.")),
        };
        b.space();
    }

    if let Some(url) = fields.url() {
        let locale = &ctx.locale;
        b.text(&format!(
            "{}: {}. {}: {}.",
            locale.available_at,
            url,
            locale.accessed,
            locale.long_date(ctx.access_date)
        ));
    }

    b.finish(CitationStyle::Standard)
}
