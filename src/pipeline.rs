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

//! # Senti Pipeline Module
//!
//! Wires the stages together: fetch posts for a query, translate and score
//! them, tally the breakdown, and build the normalized word-cloud corpus.
//! The result is a [`SentiRunReport`] that downstream consumers (CSV
//! export, charts, the CLI table) read without re-running anything.
//!
//! Construction is fallible because the fetcher and translator build HTTP
//! clients and the normalizer compiles its patterns; a pipeline that
//! constructs successfully will not fail on those grounds later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SentiConfig;
use crate::errors::{Result, SentiError};
use crate::fetch::SentiFetcher;
use crate::inspect::SentiBreakdown;
use crate::normalize::SentiNormalizer;
use crate::post::{SentiPostBatch, SentiScoredPost};
use crate::score::{SentiScoreFailure, SentiScorer};
use crate::translate::{SentiGoogleTranslator, SentiTranslate};

/// Everything one run produced.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentiRunReport {
    /// The query as the user typed it.
    pub query: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// How many posts were asked for.
    pub requested: usize,
    /// Scored posts in fetch order.
    pub scored: Vec<SentiScoredPost>,
    /// Posts dropped during scoring.
    pub failures: Vec<SentiScoreFailure>,
    /// Label counts and shares over the scored posts.
    pub breakdown: SentiBreakdown,
    /// Normalized corpus for the word cloud.
    pub corpus: String,
}

impl SentiRunReport {
    /// True when every fetched post made it into the scored batch.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The fetch-score-aggregate pipeline.
#[derive(Debug)]
pub struct SentiPipeline {
    fetcher: SentiFetcher,
    scorer: SentiScorer,
    normalizer: SentiNormalizer,
}

impl SentiPipeline {
    /// Builds the pipeline with the configured translation provider.
    pub fn new(config: &SentiConfig) -> Result<Self> {
        let translator = Box::new(SentiGoogleTranslator::new(&config.translate)?);
        Self::with_translator(config, translator)
    }

    /// Builds the pipeline around a caller-supplied translator.
    ///
    /// Used for offline runs and tests, where the echo translator stands in
    /// for the real provider.
    pub fn with_translator(
        config: &SentiConfig,
        translator: Box<dyn SentiTranslate>,
    ) -> Result<Self> {
        Ok(Self {
            fetcher: SentiFetcher::new(&config.fetch)?,
            scorer: SentiScorer::new(translator, config.translate.concurrency),
            normalizer: SentiNormalizer::new()?,
        })
    }

    /// Fetches `count` posts for `query` and analyzes them.
    pub async fn run(&self, query: &str, count: usize) -> Result<SentiRunReport> {
        if query.trim().is_empty() {
            return Err(SentiError::validation("query must not be empty"));
        }
        if count == 0 {
            return Err(SentiError::validation("post count must be at least 1"));
        }

        let started_at = Utc::now();
        let posts = self
            .fetcher
            .fetch(query, count)
            .await
            .map_err(|e| SentiError::pipeline("fetch", e.to_string()))?;
        if posts.is_empty() {
            return Err(SentiError::fetch(format!(
                "no posts found for {:?}",
                query.trim()
            )));
        }

        let mut report = self.analyze(posts).await;
        report.query = query.to_string();
        report.started_at = started_at;
        report.requested = count;
        log::info!(
            "run for {:?}: {} scored, {} failed, {}/{}/{} pos/neg/neu",
            report.query,
            report.scored.len(),
            report.failures.len(),
            report.breakdown.positive,
            report.breakdown.negative,
            report.breakdown.neutral
        );
        Ok(report)
    }

    /// Scores an already fetched batch and aggregates the results.
    ///
    /// The report's query, start time, and requested count are left at
    /// their defaults; [`run`](Self::run) fills them in.
    pub async fn analyze(&self, posts: SentiPostBatch) -> SentiRunReport {
        let texts: Vec<String> = posts.iter().map(|post| post.text.clone()).collect();
        let outcome = self.scorer.score(&posts).await;
        let breakdown = SentiBreakdown::compute(&outcome.scored);
        let corpus = self.normalizer.corpus(&texts);

        SentiRunReport {
            query: String::new(),
            started_at: Utc::now(),
            requested: posts.len(),
            scored: outcome.scored,
            failures: outcome.failures,
            breakdown,
            corpus,
        }
    }
}
