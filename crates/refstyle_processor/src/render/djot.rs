/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Djot output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Djot;

/// Characters with inline meaning in Djot.
const SPECIAL: &[char] = &['*', '_', '[', ']', '{', '}', '`', '\\', '^', '~'];

impl OutputFormat for Djot {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            if SPECIAL.contains(&c) {
                out.push('\\');
            }
            out.push(c);
        }
        out
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("*{}*", content)
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn document(&self, heading: &str, paragraphs: Vec<String>, _lang: &str) -> String {
        let mut out = format!("# {}\n", self.text(heading));
        for paragraph in paragraphs {
            out.push_str("\n{.justify}\n");
            out.push_str(&paragraph);
            out.push('\n');
        }
        out
    }
}
