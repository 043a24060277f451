/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        s.to_string()
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        // Plain text has no emphasis; the text is kept as is.
        content
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn document(&self, heading: &str, paragraphs: Vec<String>, _lang: &str) -> String {
        let mut out = format!("{heading}\n\n");
        out.push_str(&paragraphs.join("\n\n"));
        out.push('\n');
        out
    }
}
