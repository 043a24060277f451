/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;

use common::*;
use refstyle_core::{ExtractedFields, FormattedReference, Locale, ReferenceFragment};
use refstyle_processor::extract::extract_fields;
use refstyle_processor::render::{compose_abnt, compose_apa};
use refstyle_processor::RenderContext;

fn ctx(locale: Locale) -> RenderContext {
    RenderContext::new(locale).with_access_date(access_date())
}

fn field_sets() -> Vec<ExtractedFields> {
    vec![
        ExtractedFields::default(),
        ExtractedFields {
            title: "Teoria Geral: uma introdução".into(),
            publisher: Some("Atlas".into()),
            ..Default::default()
        },
        ExtractedFields {
            title: "A Study".into(),
            container_title: Some("Journal of Things".into()),
            year: Some("2019".into()),
            volume: Some("5".into()),
            pages: Some("10-20".into()),
            url: Some("https://example.org/a".into()),
            ..Default::default()
        },
        ExtractedFields {
            title: "Why now?".into(),
            city: Some("Recife".into()),
            additional_info: "2. ed".into(),
            doi: Some("10.1/q".into()),
            ..Default::default()
        },
    ]
}

fn assert_well_formed(entry: &FormattedReference) {
    let text = entry.plain_text();
    assert!(!text.contains("  "), "double space in {text:?}");
    assert!(!text.contains(" ."), "stray period in {text:?}");
    assert!(!text.contains(" ,"), "stray comma in {text:?}");
    assert_eq!(text.trim_end(), text);
}

#[test]
fn composed_entries_have_no_stray_separators() {
    for fields in field_sets() {
        assert_well_formed(&compose_abnt("SILVA, Joao.", &fields, &ctx(Locale::pt_br())));
        assert_well_formed(&compose_apa("Silva, J.", &fields, &ctx(Locale::en_us())));
        assert_well_formed(&compose_apa("", &fields, &ctx(Locale::en_us())));
    }
}

#[test]
fn emphasis_is_title_or_container_only() {
    for fields in field_sets() {
        let entry = compose_abnt("SILVA, Joao.", &fields, &ctx(Locale::pt_br()));
        let emphasized = entry.emphasized();
        assert!(emphasized.len() <= 1);
        if let Some(text) = emphasized.first() {
            let expected = fields
                .container_title
                .clone()
                .unwrap_or_else(|| fields.title.split(':').next().unwrap().trim().to_string());
            assert_eq!(*text, expected);
        }
    }
}

#[test]
fn subtitle_stays_plain() {
    let fields = &field_sets()[1];
    let entry = compose_abnt("SILVA, Joao.", fields, &ctx(Locale::pt_br()));
    assert_eq!(
        entry.fragments,
        vec![
            ReferenceFragment::Plain("SILVA, Joao. ".into()),
            ReferenceFragment::Emphasized("Teoria Geral".into()),
            ReferenceFragment::Plain(": uma introdução. Atlas.".into()),
        ]
    );
}

#[test]
fn apa_drops_incomplete_serial_numbers() {
    let fields = &field_sets()[2];
    let text = compose_apa("Doe, J.", fields, &ctx(Locale::en_us())).plain_text();
    assert!(!text.contains("5("));
    assert!(!text.contains("10-20"));
    assert!(text.ends_with("Available at: https://example.org/a"));
}

#[test]
fn title_starting_with_colon_is_still_emphasized() {
    let fields = extract_fields("Silva Joao. : notas. Atlas, 2020.");
    let standard = compose_abnt("SILVA, Joao.", &fields, &ctx(Locale::pt_br()));
    assert_eq!(
        standard.fragments,
        vec![
            ReferenceFragment::Plain("SILVA, Joao. ".into()),
            ReferenceFragment::Emphasized(": notas".into()),
            ReferenceFragment::Plain(". Atlas, 2020.".into()),
        ]
    );
    let author_date = compose_apa("Silva, J.", &fields, &ctx(Locale::en_us()));
    assert_eq!(author_date.emphasized(), vec![": notas"]);
}
