/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Style composition and output rendering.
//!
//! [`abnt`] and [`apa`] turn extracted fields into fragment sequences; the
//! output formats turn fragment sequences into text.

pub mod abnt;
pub mod apa;
pub mod djot;
pub mod document;
pub mod format;
pub mod html;
pub mod plain;

pub use abnt::compose_abnt;
pub use apa::compose_apa;
pub use document::{render_document, render_reference, DocumentWriter, FileDocumentWriter};
pub use format::{render_entry, OutputFormat};

use chrono::NaiveDate;
use refstyle_core::{FragmentBuilder, Locale};

/// Per-style rendering inputs that do not come from the reference.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub locale: Locale,
    /// Date printed as the access date of online sources.
    pub access_date: NaiveDate,
}

impl RenderContext {
    /// A context whose access date is today.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            access_date: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_access_date(mut self, date: NaiveDate) -> Self {
        self.access_date = date;
        self
    }
}

/// Push the title and container title.
///
/// With a container, the title is plain (` - ` becomes `: `) and the
/// container is emphasized. Without one, the title is emphasized; a title
/// with a colon has only its main part emphasized, unless that part is
/// empty.
pub(crate) fn push_title(b: &mut FragmentBuilder, title: &str, container: Option<&str>) {
    let title = title.trim();
    match container {
        Some(container) => {
            if !title.is_empty() {
                b.text(&terminate(&title.replace(" - ", ": "))).space();
            }
            b.emph(container);
            if !ends_terminal(container) {
                b.text(".");
            }
        }
        None if title.is_empty() => return,
        None => match title
            .split_once(':')
            .filter(|(main, _)| !main.trim().is_empty())
        {
            Some((main, subtitle)) if !subtitle.trim().is_empty() => {
                b.emph(main.trim())
                    .text(&format!(": {}", terminate(subtitle.trim())));
            }
            Some((main, _)) => {
                b.emph(main.trim()).text(".");
            }
            None => {
                b.emph(title);
                if !ends_terminal(title) {
                    b.text(".");
                }
            }
        },
    }
    b.space();
}

/// Append a period unless the text already ends with terminal punctuation.
pub(crate) fn terminate(s: &str) -> String {
    if ends_terminal(s) {
        s.to_string()
    } else {
        format!("{s}.")
    }
}

fn ends_terminal(s: &str) -> bool {
    s.ends_with(['.', '?', '!'])
}
