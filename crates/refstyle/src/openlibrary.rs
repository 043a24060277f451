/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Open Library ISBN lookup.

use crate::http::HttpClient;
use refstyle_core::options::LookupConfig;
use refstyle_processor::lookup::parse_openlibrary_response;
use refstyle_processor::{IsbnLookup, IsbnRecord, ProcessorError};

pub struct OpenLibraryClient {
    http: HttpClient,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(config: &LookupConfig) -> anyhow::Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
            base_url: config.isbn_url.clone(),
        })
    }
}

impl IsbnLookup for OpenLibraryClient {
    fn lookup_isbn(&self, isbn: &str) -> Result<IsbnRecord, ProcessorError> {
        let bibkeys = format!("ISBN:{isbn}");
        let params = [
            ("bibkeys", bibkeys.as_str()),
            ("format", "json"),
            ("jscmd", "data"),
        ];
        let body = self.http.get_text(&self.base_url, &params, isbn)?;
        parse_openlibrary_response(&body, isbn)
    }
}
