/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! APA 7 (author-date style) composer.

use super::{push_title, terminate, RenderContext};
use refstyle_core::{CitationStyle, ExtractedFields, FormattedReference, FragmentBuilder};

/// Compose an APA entry.
///
/// Order: `Authors (Year).`, title / container, publisher, `Volume(Issue),
/// Pages.`, then the DOI link or, failing that, the URL. There is no place
/// of publication in this style.
pub fn compose_apa(
    authors: &str,
    fields: &ExtractedFields,
    ctx: &RenderContext,
) -> FormattedReference {
    let mut b = FragmentBuilder::new();
    let year = fields.year().unwrap_or(ctx.locale.no_date.as_str());

    if !authors.is_empty() {
        b.text(authors).space();
    }
    b.text(&format!("({year}).")).space();

    push_title(&mut b, &fields.title, fields.container_title());

    if let Some(publisher) = fields.publisher() {
        b.text(&terminate(publisher)).space();
    }

    // All three or nothing.
    if let (Some(volume), Some(issue), Some(pages)) =
        (fields.volume(), fields.issue(), fields.pages())
    {
        b.text(&format!("{volume}({issue}), {pages}.")).space();
    }

    if let Some(doi) = fields.doi() {
        b.text(&format!("https://doi.org/{doi}"));
    } else if let Some(url) = fields.url() {
        b.text(&format!("{}: {}", ctx.locale.available_at, url));
    }

    b.finish(CitationStyle::AuthorDate)
}
