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

//! # Senti Text Normalizer
//!
//! Cleans raw post text into the corpus fed to the word cloud. The sequence
//! is fixed: URLs, hashtag tokens, and mention tokens are removed; remaining
//! punctuation becomes spaces; whitespace collapses; digits are dropped; the
//! result is lowercased and re-joined on single spaces.
//!
//! Normalization is lossy and one-way. It is idempotent: running it twice
//! yields the same string as running it once.

use regex::Regex;

use crate::errors::Result;

/// Text normalizer with its pattern set compiled once at construction.
#[derive(Debug)]
pub struct SentiNormalizer {
    url: Regex,
    hashtag: Regex,
    mention: Regex,
    punctuation: Regex,
    whitespace: Regex,
    digits: Regex,
}

impl SentiNormalizer {
    /// Compiles the fixed pattern sequence.
    pub fn new() -> Result<Self> {
        Ok(Self {
            url: Regex::new(r"(?i)http\S+")?,
            hashtag: Regex::new(r"#\w+")?,
            mention: Regex::new(r"@\w+")?,
            punctuation: Regex::new(r"[^\w\s]")?,
            whitespace: Regex::new(r"\s+")?,
            digits: Regex::new(r"[0-9]")?,
        })
    }

    /// Applies the full cleaning sequence to one text.
    ///
    /// Steps run in a fixed order; the final split-and-rejoin collapses any
    /// residual runs of spaces left by the digit pass, which is what makes
    /// the whole transformation idempotent.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned = self.url.replace_all(text, "");
        let cleaned = self.hashtag.replace_all(&cleaned, "");
        let cleaned = self.mention.replace_all(&cleaned, "");
        let cleaned = self.punctuation.replace_all(&cleaned, " ");
        let cleaned = self.whitespace.replace_all(&cleaned, " ");
        let cleaned = self.digits.replace_all(&cleaned, " ");
        let cleaned = cleaned.to_lowercase();
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Normalizes a slice of texts, preserving order and count.
    pub fn normalize_all(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|text| self.normalize(text)).collect()
    }

    /// Builds the single word-cloud corpus string from raw texts.
    ///
    /// Texts that normalize to nothing (url-only posts, pure punctuation)
    /// are skipped so the corpus keeps single-space separators.
    pub fn corpus(&self, texts: &[String]) -> String {
        self.normalize_all(texts)
            .into_iter()
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
