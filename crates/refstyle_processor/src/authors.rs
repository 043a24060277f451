/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author-list formatting for both styles.
//!
//! Input is a semicolon-separated list of names. Which token is the surname
//! depends on the source: ISBN catalogues list names given-first, so the
//! last token is the surname; free text and DOI metadata arrive
//! surname-first. The two styles are kept as separate functions because
//! their casing, initials and separators all differ.

use lazy_static::lazy_static;
use refstyle_core::SourceKind;
use regex::Regex;

lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref DOUBLE_COMMA: Regex = Regex::new(r",\s*,").unwrap();
}

/// Format authors as ABNT expects: `SURNAME, Given Names`, joined with
/// `"; "` and terminated with a period.
///
/// Returns an empty string when the list holds no names.
pub fn format_authors_abnt(authors: &str, kind: SourceKind) -> String {
    let names: Vec<String> = split_names(authors)
        .map(|tokens| match order_name(&tokens, kind) {
            Some((surname, given)) => {
                let given: Vec<String> = given
                    .iter()
                    .enumerate()
                    .map(|(i, t)| {
                        if i > 0 && is_particle(t) {
                            t.to_lowercase()
                        } else {
                            capitalize(t)
                        }
                    })
                    .collect();
                format!("{}, {}", surname.to_uppercase(), given.join(" "))
            }
            None => tokens.join(" ").to_uppercase(),
        })
        .collect();

    if names.is_empty() {
        return String::new();
    }
    let mut result = names.join("; ").replace(",.", ".");
    if !result.ends_with('.') {
        result.push('.');
    }
    result
}

/// Format authors as APA expects: `Surname, I.`, joined with `", "`.
///
/// No period is appended beyond the one closing each initial.
pub fn format_authors_apa(authors: &str, kind: SourceKind) -> String {
    let names: Vec<String> = split_names(authors)
        .map(|tokens| match order_name(&tokens, kind) {
            Some((surname, given)) => {
                let initial: String = given
                    .first()
                    .and_then(|g| g.chars().next())
                    .map(|c| c.to_uppercase().collect())
                    .unwrap_or_default();
                format!("{}, {}.", capitalize(surname), initial)
            }
            None => format!("{}.", capitalize(&tokens.join(" "))),
        })
        .collect();

    let joined = names.join(", ");
    DOUBLE_COMMA.replace_all(&joined, ",").into_owned()
}

/// Clean each name and split it into tokens.
///
/// Punctuation is stripped and single-letter tokens (bare initials) are
/// dropped, unless nothing else is left. Empty names are skipped.
fn split_names(authors: &str) -> impl Iterator<Item = Vec<String>> + '_ {
    authors.split(';').filter_map(|name| {
        let cleaned = PUNCTUATION.replace_all(name, "");
        let all: Vec<&str> = cleaned.split_whitespace().collect();
        if all.is_empty() {
            return None;
        }
        let kept: Vec<&str> = all
            .iter()
            .copied()
            .filter(|t| t.chars().count() > 1)
            .collect();
        let tokens = if kept.is_empty() { all } else { kept };
        Some(tokens.into_iter().map(str::to_string).collect())
    })
}

/// Pick surname and given names, or `None` for a single-token name.
fn order_name(tokens: &[String], kind: SourceKind) -> Option<(&str, &[String])> {
    match (kind, tokens) {
        (_, [] | [_]) => None,
        (SourceKind::Isbn, [given @ .., surname]) => Some((surname.as_str(), given)),
        (_, [surname, given @ ..]) => Some((surname.as_str(), given)),
    }
}

/// Name particles kept lower-case inside given names (`Machado de`).
fn is_particle(token: &str) -> bool {
    PARTICLES.contains(&token.to_lowercase().as_str())
}

const PARTICLES: [&str; 9] = ["da", "das", "de", "del", "do", "dos", "du", "van", "von"];

/// Upper-case the first character and lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abnt_free_text_surname_first() {
        assert_eq!(
            format_authors_abnt("Silva Joao", SourceKind::FreeText),
            "SILVA, Joao."
        );
        assert_eq!(
            format_authors_abnt("silva joao carlos; Souza MARIA", SourceKind::FreeText),
            "SILVA, Joao Carlos; SOUZA, Maria."
        );
    }

    #[test]
    fn abnt_given_names_capitalized_per_token() {
        assert_eq!(
            format_authors_abnt("SOUZA MARIA DA GLORIA", SourceKind::FreeText),
            "SOUZA, Maria da Gloria."
        );
        assert_eq!(
            format_authors_abnt("Lima joao carlos", SourceKind::FreeText),
            "LIMA, Joao Carlos."
        );
    }

    #[test]
    fn abnt_isbn_surname_last() {
        assert_eq!(
            format_authors_abnt("Machado de Assis", SourceKind::Isbn),
            "ASSIS, Machado de."
        );
        assert_eq!(
            format_authors_abnt("Jane Austen", SourceKind::Isbn),
            "AUSTEN, Jane."
        );
    }

    #[test]
    fn abnt_drops_initials_and_punctuation() {
        assert_eq!(
            format_authors_abnt("Doe, J.; Roe Ann", SourceKind::Doi),
            "DOE; ROE, Ann."
        );
        assert_eq!(format_authors_abnt("J.", SourceKind::FreeText), "J.");
    }

    #[test]
    fn abnt_single_token_is_idempotent() {
        let once = format_authors_abnt("SILVA", SourceKind::FreeText);
        assert_eq!(once, "SILVA.");
        assert_eq!(format_authors_abnt(&once, SourceKind::FreeText), once);

        let full = format_authors_abnt("Silva Joao", SourceKind::FreeText);
        assert_eq!(format_authors_abnt(&full, SourceKind::FreeText), full);
    }

    #[test]
    fn abnt_empty_list() {
        assert_eq!(format_authors_abnt("", SourceKind::FreeText), "");
        assert_eq!(format_authors_abnt(" ; ", SourceKind::FreeText), "");
    }

    #[test]
    fn apa_initials() {
        assert_eq!(
            format_authors_apa("Silva Joao", SourceKind::FreeText),
            "Silva, J."
        );
        assert_eq!(
            format_authors_apa("DOE Jane; roe ann", SourceKind::Doi),
            "Doe, J., Roe, A."
        );
        assert_eq!(
            format_authors_apa("Jane Austen", SourceKind::Isbn),
            "Austen, J."
        );
    }

    #[test]
    fn apa_single_token_and_blanks() {
        assert_eq!(format_authors_apa("Unesco", SourceKind::FreeText), "Unesco.");
        assert_eq!(
            format_authors_apa("Doe Jane;;Roe Ann", SourceKind::FreeText),
            "Doe, J., Roe, A."
        );
        assert_eq!(format_authors_apa("", SourceKind::FreeText), "");
    }

    #[test]
    fn apa_never_appends_trailing_period() {
        let out = format_authors_apa("Silva Joao", SourceKind::FreeText);
        assert!(!out.ends_with(".."));
    }
}
