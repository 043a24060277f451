/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model for refstyle.
//!
//! This crate holds the types shared by the formatting engine and the
//! command-line front end: the raw input line and its classification, the
//! fields extracted from it, the rendered fragment sequences, the two
//! supported citation styles, locales and configuration.
//!
//! ```rust
//! use refstyle_core::{RawReference, SourceKind};
//!
//! let raw = RawReference::classify("https://doi.org/10.1000/xyz123");
//! assert_eq!(raw.source_kind(), SourceKind::Doi);
//! assert_eq!(raw.identifier(), "10.1000/xyz123");
//! ```

pub mod error;
pub mod fragment;
pub mod locale;
pub mod options;
pub mod reference;
pub mod style;

pub use error::CoreError;
pub use fragment::{FormattedReference, FragmentBuilder, ReferenceFragment};
pub use locale::Locale;
pub use options::Config;
pub use reference::{ExtractedFields, RawReference, SourceKind};
pub use style::CitationStyle;
