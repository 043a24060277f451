/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Reference-list documents, one per style.

use super::djot::Djot;
use super::format::{render_entry, OutputFormat};
use super::html::Html;
use super::plain::PlainText;
use crate::error::ProcessorError;
use refstyle_core::options::{DocumentFormat, OutputConfig};
use refstyle_core::{CitationStyle, Config, FormattedReference};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Receives the finished entries of one style.
pub trait DocumentWriter {
    fn write(
        &mut self,
        style: CitationStyle,
        entries: &[FormattedReference],
    ) -> Result<(), ProcessorError>;
}

/// Render a complete document: the style's heading, then one paragraph per
/// entry in the given order.
pub fn render_document(
    format: DocumentFormat,
    style: CitationStyle,
    entries: &[FormattedReference],
    lang: &str,
) -> String {
    match format {
        DocumentFormat::Plain => build(&PlainText, style, entries, lang),
        DocumentFormat::Html => build(&Html, style, entries, lang),
        DocumentFormat::Djot => build(&Djot, style, entries, lang),
    }
}

/// Render one entry on its own, without heading or paragraph markup.
pub fn render_reference(format: DocumentFormat, entry: &FormattedReference) -> String {
    match format {
        DocumentFormat::Plain => render_entry(entry, &PlainText),
        DocumentFormat::Html => render_entry(entry, &Html),
        DocumentFormat::Djot => render_entry(entry, &Djot),
    }
}

fn build<F: OutputFormat>(
    format: &F,
    style: CitationStyle,
    entries: &[FormattedReference],
    lang: &str,
) -> String {
    let paragraphs = entries.iter().map(|e| render_entry(e, format)).collect();
    format.document(style.heading(), paragraphs, lang)
}

/// Writes each style's document to the file named by the output
/// configuration.
#[derive(Debug, Clone)]
pub struct FileDocumentWriter {
    output: OutputConfig,
    standard_lang: String,
    author_date_lang: String,
    written: Vec<PathBuf>,
}

impl FileDocumentWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            output: config.output.clone(),
            standard_lang: config.locale_for(CitationStyle::Standard).locale,
            author_date_lang: config.locale_for(CitationStyle::AuthorDate).locale,
            written: Vec::new(),
        }
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DocumentWriter for FileDocumentWriter {
    fn write(
        &mut self,
        style: CitationStyle,
        entries: &[FormattedReference],
    ) -> Result<(), ProcessorError> {
        let lang = match style {
            CitationStyle::Standard => &self.standard_lang,
            CitationStyle::AuthorDate => &self.author_date_lang,
        };
        let content = render_document(self.output.format, style, entries, lang);

        let path = self.output.path_for(style);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        info!(%style, path = %path.display(), entries = entries.len(), "wrote document");
        self.written.push(path);
        Ok(())
    }
}
