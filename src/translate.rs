//! Copyright © 2025-2026 Joran Velde. All Rights Reserved.
//!
//! This file is part of Senti.
//! The Senti project belongs to the Meridian Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Senti Translation Module
//!
//! Posts arrive in any language; the scoring lexicons are English. This
//! module defines the [`SentiTranslate`] seam and two implementations:
//!
//! - [`SentiGoogleTranslator`]: the unauthenticated `translate_a/single`
//!   endpoint with `client=gtx`, source language auto-detected. The response
//!   is a nested JSON array whose first element holds translated segments;
//!   the segments are concatenated in order.
//! - [`SentiEchoTranslator`]: returns the input unchanged. Used for offline
//!   runs and for tests that need deterministic text.
//!
//! Translators are injected into the scorer as `Box<dyn SentiTranslate>`, so
//! swapping providers never touches the scoring code.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::SentiTranslateConfig;
use crate::errors::{Result, SentiError};

/// Translation seam between the fetcher and the scorer.
#[async_trait]
pub trait SentiTranslate: Send + Sync + fmt::Debug {
    /// Translates `text` into the configured target language.
    async fn translate(&self, text: &str) -> Result<String>;

    /// Short provider name used in logs and failure reports.
    fn name(&self) -> &'static str;
}

/// Translator backed by the unauthenticated Google endpoint.
#[derive(Debug)]
pub struct SentiGoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    target: String,
}

impl SentiGoogleTranslator {
    /// Builds the translator from configuration.
    pub fn new(config: &SentiTranslateConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            target: config.target.clone(),
        })
    }

    fn request_url(&self, text: &str) -> String {
        format!(
            "{}?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.endpoint,
            self.target,
            urlencoding::encode(text)
        )
    }
}

#[async_trait]
impl SentiTranslate for SentiGoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let url = self.request_url(text);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SentiError::translate(format!(
                "translation endpoint returned status {}",
                status
            )));
        }

        let payload: Value = response.json().await?;
        parse_translation(&payload).ok_or_else(|| {
            SentiError::translate("translation response had an unexpected shape")
        })
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

/// Translator that returns its input unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentiEchoTranslator;

#[async_trait]
impl SentiTranslate for SentiEchoTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}

/// Extracts the translated text from the endpoint's nested-array payload.
///
/// The payload looks like `[[["<translated>", "<source>", ...], ...], ...]`;
/// element `[0][i][0]` holds the i-th translated segment.
fn parse_translation(payload: &Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;
    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(text);
        }
    }
    Some(translated)
}
