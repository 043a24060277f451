/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;

use common::*;
use refstyle_core::{RawReference, SourceKind};
use refstyle_processor::{MemorySink, ProcessorError, Stage};
use std::sync::Arc;

#[test]
fn free_text_book() {
    let engine = engine(Arc::new(MemorySink::new()));
    let raw = RawReference::classify("Silva Joao. Teoria Geral. Sao Paulo: Editora Exemplo, 2020.");
    let processed = engine.process(&raw).unwrap();

    let standard = &processed.standard;
    assert!(standard.plain_text().starts_with("SILVA, Joao"));
    assert_eq!(standard.emphasized(), vec!["Teoria Geral"]);
    assert!(standard
        .plain_text()
        .contains("Sao Paulo: Editora Exemplo, 2020."));

    let author_date = &processed.author_date;
    assert!(author_date.plain_text().starts_with("Silva, J. (2020)."));
    assert!(!author_date.plain_text().contains("Sao Paulo"));
}

#[test]
fn doi_article() {
    let engine = engine(Arc::new(MemorySink::new()));
    let processed = engine
        .process(&RawReference::classify("https://doi.org/10.1/xyz"))
        .unwrap();
    assert_eq!(processed.source, SourceKind::Doi);

    let standard = processed.standard.plain_text();
    assert!(standard.starts_with("DOE, Jane"));
    assert_eq!(processed.standard.emphasized(), vec!["A Study"]);
    assert!(standard.contains("v. 5 n. 2 p. 10-20."));
    assert!(standard.contains("DOI: 10.1/xyz."));
    assert!(standard.ends_with("Acesso em: 14 de outubro de 2026."));

    assert_eq!(
        processed.author_date.plain_text(),
        "Doe, J. (2019). A Study. 5(2), 10-20. https://doi.org/10.1/xyz"
    );
}

#[test]
fn isbn_book() {
    let engine = engine(Arc::new(MemorySink::new()));
    let processed = engine
        .process(&RawReference::classify("ISBN 978-85-359-1484-9"))
        .unwrap();
    assert_eq!(
        processed.standard.plain_text(),
        "ASSIS, Machado de. Dom Casmurro. São Paulo: Penguin, 2016."
    );
    assert_eq!(
        processed.author_date.plain_text(),
        "Assis, M. (2016). Dom Casmurro. Penguin."
    );
}

#[test]
fn isbn_mismatch_is_a_lookup_failure() {
    let sink = Arc::new(MemorySink::new());
    let engine = engine(sink.clone());
    let raw = RawReference::classify("9780000000002");

    let (stage, err) = engine.try_process(&raw).unwrap_err();
    assert_eq!(stage, Stage::IsbnLookup);
    assert!(matches!(err, ProcessorError::LookupFailure { .. }));
    assert!(err.to_string().contains("isbn request != isbn response"));

    assert!(engine.process(&raw).is_none());
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].to_string(),
        format!("Failed to process reference: 9780000000002. Error: {err}")
    );
}

#[test]
fn unknown_doi_is_recorded() {
    let sink = Arc::new(MemorySink::new());
    let engine = engine(sink.clone());
    assert!(engine.process(&RawReference::classify("doi:10.9/missing")).is_none());

    let entries = sink.entries();
    assert_eq!(entries[0].stage, Stage::DoiLookup);
    assert_eq!(entries[0].reference, "doi:10.9/missing");
    assert!(entries[0].cause.contains("404"));
}
