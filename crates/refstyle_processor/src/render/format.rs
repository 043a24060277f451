/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

use refstyle_core::{FormattedReference, ReferenceFragment};

/// Trait for defining how fragment sequences are rendered into a specific
/// format.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    type Output;

    /// Convert a raw string into the format's output type, escaping as the
    /// format requires.
    fn text(&self, s: &str) -> Self::Output;

    /// Render content with strong emphasis (bold).
    fn strong(&self, content: Self::Output) -> Self::Output;

    /// Join multiple outputs into a single output using a delimiter.
    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output;

    /// Convert the intermediate output into the final result string.
    fn finish(&self, output: Self::Output) -> String;

    /// Assemble a whole reference-list document.
    ///
    /// `lang` is the BCP 47 tag of the style's locale.
    fn document(&self, heading: &str, paragraphs: Vec<String>, lang: &str) -> String;
}

/// Render one entry.
pub fn render_entry<F: OutputFormat>(entry: &FormattedReference, format: &F) -> String {
    let parts = entry
        .fragments
        .iter()
        .map(|fragment| match fragment {
            ReferenceFragment::Plain(s) => format.text(s),
            ReferenceFragment::Emphasized(s) => format.strong(format.text(s)),
        })
        .collect();
    format.finish(format.join(parts, ""))
}
