/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Reference formatting engine.
//!
//! Takes raw bibliographic references (DOIs, ISBNs or free text), resolves
//! identifiers through pluggable lookup adapters, decomposes free text into
//! fields, and renders every reference in ABNT and APA 7 style.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use refstyle_core::RawReference;
//! use refstyle_processor::ReferenceEngine;
//!
//! let engine = ReferenceEngine::default()
//!     .with_access_date(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
//! let raw = RawReference::classify("Silva Joao. Teoria Geral. Sao Paulo: Editora Exemplo, 2020.");
//! let processed = engine.process(&raw).unwrap();
//! assert_eq!(
//!     processed.standard.plain_text(),
//!     "SILVA, Joao. Teoria Geral. Sao Paulo: Editora Exemplo, 2020."
//! );
//! ```

pub mod authors;
pub mod batch;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod render;

pub use batch::{load_references, read_references, run_batch, BatchOutcome};
pub use diagnostics::{Diagnostic, DiagnosticSink, FileSink, MemorySink, Stage};
pub use engine::{ProcessedReference, ReferenceEngine};
pub use error::ProcessorError;
pub use lookup::{DoiLookup, DoiRecord, IsbnLookup, IsbnRecord, Offline};
pub use render::{
    render_document, render_reference, DocumentWriter, FileDocumentWriter, RenderContext,
};
