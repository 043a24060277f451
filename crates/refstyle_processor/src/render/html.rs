/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("<b>{}</b>", content)
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn document(&self, heading: &str, paragraphs: Vec<String>, lang: &str) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str(&format!("<html lang=\"{}\">\n", self.text(lang)));
        out.push_str("<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", self.text(heading)));
        out.push_str("<style>p.reference { text-align: justify; }</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!("<h1><b>{}</b></h1>\n", self.text(heading)));
        for paragraph in paragraphs {
            out.push_str(&format!("<p class=\"reference\">{}</p>\n", paragraph));
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text() {
        assert_eq!(Html.text("A & B <i>"), "A &amp; B &lt;i&gt;");
        assert_eq!(Html.strong(String::new()), "");
    }

    #[test]
    fn document_is_justified_and_tagged() {
        let doc = Html.document("REFERÊNCIAS", vec!["<b>T</b>.".into()], "pt-BR");
        assert!(doc.contains("<html lang=\"pt-BR\">"));
        assert!(doc.contains("<h1><b>REFERÊNCIAS</b></h1>"));
        assert!(doc.contains("<p class=\"reference\"><b>T</b>.</p>"));
        assert!(doc.contains("text-align: justify"));
    }
}
