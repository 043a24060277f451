/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Locale definitions.
//!
//! A locale supplies the handful of terms the composers print (the access
//! note on URLs, the no-date marker) and renders the access date in long
//! form.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Order of the parts in a long date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LongDateOrder {
    /// `14 de outubro de 2026`
    #[default]
    DayMonthYear,
    /// `October 14, 2026`
    MonthDayYear,
}

/// Language-specific terms and date rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Locale {
    /// The locale identifier (e.g., "pt-BR", "en-US").
    pub locale: String,
    /// Long month names, January first.
    pub months: Vec<String>,
    /// Label preceding a URL.
    pub available_at: String,
    /// Label preceding the access date.
    pub accessed: String,
    /// Marker printed in place of a missing year.
    pub no_date: String,
    #[serde(default)]
    pub date_order: LongDateOrder,
    /// Connective between day, month and year in day-month-year dates.
    #[serde(default)]
    pub date_connective: Option<String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// Create a new English (US) locale.
    pub fn en_us() -> Self {
        Self {
            locale: "en-US".into(),
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from)
            .to_vec(),
            available_at: "Available at".into(),
            accessed: "Accessed".into(),
            no_date: "n.d.".into(),
            date_order: LongDateOrder::MonthDayYear,
            date_connective: None,
        }
    }

    /// Create a new Brazilian Portuguese locale.
    pub fn pt_br() -> Self {
        Self {
            locale: "pt-BR".into(),
            months: [
                "janeiro",
                "fevereiro",
                "março",
                "abril",
                "maio",
                "junho",
                "julho",
                "agosto",
                "setembro",
                "outubro",
                "novembro",
                "dezembro",
            ]
            .map(String::from)
            .to_vec(),
            available_at: "Disponível em".into(),
            accessed: "Acesso em".into(),
            no_date: "s.d.".into(),
            date_order: LongDateOrder::DayMonthYear,
            date_connective: Some("de".into()),
        }
    }

    /// Look up a built-in locale by tag, falling back to en-US.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Self::pt_br(),
            "en-us" | "en" => Self::en_us(),
            other => {
                warn!(locale = other, "unknown locale, falling back to en-US");
                Self::en_us()
            }
        }
    }

    /// Get a month name (1-based).
    pub fn month_name(&self, month: u32) -> &str {
        let idx = month.saturating_sub(1) as usize;
        self.months.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Render a date in long form: day, full month name and year.
    pub fn long_date(&self, date: NaiveDate) -> String {
        let month = self.month_name(date.month());
        match self.date_order {
            LongDateOrder::MonthDayYear => format!("{} {}, {}", month, date.day(), date.year()),
            LongDateOrder::DayMonthYear => match &self.date_connective {
                Some(c) => format!("{} {c} {} {c} {}", date.day(), month, date.year()),
                None => format!("{} {} {}", date.day(), month, date.year()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn test_month_names() {
        let locale = Locale::pt_br();
        assert_eq!(locale.month_name(1), "janeiro");
        assert_eq!(locale.month_name(12), "dezembro");
        assert_eq!(locale.month_name(13), "");
    }

    #[test]
    fn long_dates() {
        assert_eq!(Locale::pt_br().long_date(date()), "14 de outubro de 2026");
        assert_eq!(Locale::en_us().long_date(date()), "October 14, 2026");
    }

    #[test]
    fn unknown_tag_falls_back() {
        assert_eq!(Locale::from_tag("pt_BR").locale, "pt-BR");
        assert_eq!(Locale::from_tag("xx-YY").locale, "en-US");
    }

    #[test]
    fn deserializes_custom_locale() {
        let yaml = r#"
locale: de-DE
months: [Januar, Februar, März, April, Mai, Juni, Juli, August, September, Oktober, November, Dezember]
available-at: Verfügbar unter
accessed: Zugriff am
no-date: o. J.
"#;
        let locale: Locale = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(locale.month_name(3), "März");
        assert_eq!(locale.long_date(date()), "14 Oktober 2026");
    }
}
