/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Blocking HTTP client shared by the lookup adapters.

use refstyle_core::options::LookupConfig;
use refstyle_processor::ProcessorError;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &LookupConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the body. Non-success statuses are lookup
    /// failures for `identifier`.
    pub fn get_text(
        &self,
        url: &str,
        params: &[(&str, &str)],
        identifier: &str,
    ) -> Result<String, ProcessorError> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .map_err(|e| ProcessorError::lookup(identifier, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessorError::lookup(identifier, status.to_string()));
        }
        response
            .text()
            .map_err(|e| ProcessorError::lookup(identifier, e.to_string()))
    }
}
