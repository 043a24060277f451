/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Crossref DOI lookup.

use crate::http::HttpClient;
use refstyle_core::options::LookupConfig;
use refstyle_processor::lookup::parse_crossref_response;
use refstyle_processor::{DoiLookup, DoiRecord, ProcessorError};

pub struct CrossrefClient {
    http: HttpClient,
    base_url: String,
}

impl CrossrefClient {
    pub fn new(config: &LookupConfig) -> anyhow::Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
            base_url: config.crossref_url.trim_end_matches('/').to_string(),
        })
    }
}

impl DoiLookup for CrossrefClient {
    fn lookup_doi(&self, doi: &str) -> Result<DoiRecord, ProcessorError> {
        let url = format!("{}/{}", self.base_url, doi);
        let body = self.http.get_text(&url, &[], doi)?;
        parse_crossref_response(&body)
    }
}
