/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendered reference entries as sequences of typed fragments.

use crate::style::CitationStyle;
use serde::{Deserialize, Serialize};

/// The atomic unit of a rendered reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum ReferenceFragment {
    Plain(String),
    /// Text the document writer renders with emphasis (bold in both styles).
    Emphasized(String),
}

impl ReferenceFragment {
    pub fn text(&self) -> &str {
        match self {
            ReferenceFragment::Plain(s) | ReferenceFragment::Emphasized(s) => s,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, ReferenceFragment::Emphasized(_))
    }
}

/// One complete entry for one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedReference {
    pub style: CitationStyle,
    pub fragments: Vec<ReferenceFragment>,
}

impl FormattedReference {
    /// The entry with emphasis dropped.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(ReferenceFragment::text).collect()
    }

    /// Text of every emphasized fragment, in order.
    pub fn emphasized(&self) -> Vec<&str> {
        self.fragments
            .iter()
            .filter(|f| f.is_emphasized())
            .map(ReferenceFragment::text)
            .collect()
    }
}

/// Accumulates fragments for one entry.
///
/// Adjacent plain text is merged into one fragment and [`space`] only adds a
/// separator when the entry does not already end with whitespace, so skipped
/// fields never leave doubled spaces behind.
///
/// [`space`]: FragmentBuilder::space
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    fragments: Vec<ReferenceFragment>,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append plain text. Empty input is ignored.
    pub fn text(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self;
        }
        match self.fragments.last_mut() {
            Some(ReferenceFragment::Plain(last)) => last.push_str(s),
            _ => self.fragments.push(ReferenceFragment::Plain(s.to_string())),
        }
        self
    }

    /// Append emphasized text. Empty input is ignored.
    pub fn emph(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.fragments
                .push(ReferenceFragment::Emphasized(s.to_string()));
        }
        self
    }

    /// Separate the next field from the previous one with a single space.
    pub fn space(&mut self) -> &mut Self {
        let ends_with_space = self
            .fragments
            .last()
            .and_then(|f| f.text().chars().last())
            .map_or(true, char::is_whitespace);
        if !ends_with_space {
            self.text(" ");
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Finish the entry, dropping trailing whitespace.
    pub fn finish(mut self, style: CitationStyle) -> FormattedReference {
        if let Some(ReferenceFragment::Plain(last)) = self.fragments.last_mut() {
            let trimmed_len = last.trim_end().len();
            last.truncate(trimmed_len);
            if last.is_empty() {
                self.fragments.pop();
            }
        }
        FormattedReference {
            style,
            fragments: self.fragments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_adjacent_plain_text() {
        let mut b = FragmentBuilder::new();
        b.text("SILVA, J.").space().emph("Title").text(".").space().text("Atlas.");
        let entry = b.finish(CitationStyle::Standard);
        assert_eq!(
            entry.fragments,
            vec![
                ReferenceFragment::Plain("SILVA, J. ".into()),
                ReferenceFragment::Emphasized("Title".into()),
                ReferenceFragment::Plain(". Atlas.".into()),
            ]
        );
    }

    #[test]
    fn space_never_doubles() {
        let mut b = FragmentBuilder::new();
        b.space().text("a ").space().space().text("b").space();
        let entry = b.finish(CitationStyle::AuthorDate);
        assert_eq!(entry.plain_text(), "a b");
    }

    #[test]
    fn empty_builder_finishes_empty() {
        let entry = FragmentBuilder::new().finish(CitationStyle::Standard);
        assert!(entry.fragments.is_empty());
        assert_eq!(entry.plain_text(), "");
    }
}
