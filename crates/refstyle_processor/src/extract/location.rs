/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! City / publisher / year splitting of the text that follows a title.

use super::YEAR;

/// Separator characters trimmed after a piece of the string is removed.
const SEPARATORS: &[char] = &[',', ':', ';'];

/// Place of publication, publisher and the year that applies to them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: Option<String>,
    pub publisher: Option<String>,
    pub year: Option<String>,
}

/// Split `City: Publisher, Year` style text.
///
/// A four-digit token in `info` overrides `fallback_year` and is removed
/// before splitting. The remaining text is split on `:` first and on `,`
/// otherwise; the city is the first segment and the publisher the second.
/// Without either delimiter the whole remainder is the publisher.
pub fn split_location(info: &str, fallback_year: Option<&str>) -> Location {
    let mut rest = info.to_string();
    let mut year = fallback_year.map(str::to_string);

    if let Some(m) = YEAR.find(info) {
        year = Some(m.as_str().to_string());
        rest.replace_range(m.range(), "");
    }
    let rest = trim_separators(&rest);

    let delimiter = if rest.contains(':') {
        Some(':')
    } else if rest.contains(',') {
        Some(',')
    } else {
        None
    };

    let (city, publisher) = match delimiter {
        Some(d) => {
            let mut parts = rest.split(d);
            let city = parts.next().map(str::trim).unwrap_or_default();
            let publisher = parts.next().map(str::trim).unwrap_or_default();
            (non_empty(city), non_empty(publisher))
        }
        None => (None, non_empty(rest)),
    };

    Location {
        city,
        publisher,
        year,
    }
}

/// Remove the resolved year, city and publisher from `info`, leaving only
/// genuinely extra text (edition, series, ...).
///
/// Removal happens in that order and separators left dangling at either end
/// are trimmed after every step.
pub fn strip_resolved(
    info: &str,
    year: Option<&str>,
    city: Option<&str>,
    publisher: Option<&str>,
) -> String {
    let mut out = match year {
        Some(year) => YEAR
            .replace_all(info, |caps: &regex::Captures<'_>| {
                if &caps[1] == year {
                    String::new()
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned(),
        None => info.to_string(),
    };
    out = trim_separators(&out).to_string();

    for value in [city, publisher].into_iter().flatten() {
        if value.is_empty() {
            continue;
        }
        out = trim_separators(&out.replacen(value, "", 1)).to_string();
    }
    out
}

fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
