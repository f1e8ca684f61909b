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

//! # Senti Scorer Module
//!
//! Drives a batch of fetched posts through translation and analysis. The
//! analyzer is built once and reused for every post; translations run
//! concurrently up to the configured limit, and results are re-ordered so
//! the scored batch matches fetch order.
//!
//! ## Failure Isolation
//!
//! A post whose translation fails is dropped from the scored batch and
//! recorded in [`SentiScoreOutcome::failures`] with its index, url, and the
//! error message. One bad post never aborts the batch.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::post::{SentiPost, SentiScoredPost};
use crate::score::analyzer::SentiAnalyzer;
use crate::translate::SentiTranslate;

/// One post that could not be scored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentiScoreFailure {
    /// Position of the post in the fetched batch.
    pub index: usize,
    /// Url of the failed post.
    pub url: String,
    /// Human-readable reason.
    pub message: String,
}

/// Result of scoring a batch: the posts that made it, and the ones that
/// did not.
#[derive(Debug, Default)]
pub struct SentiScoreOutcome {
    pub scored: Vec<SentiScoredPost>,
    pub failures: Vec<SentiScoreFailure>,
}

impl SentiScoreOutcome {
    /// True when every post in the batch was scored.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Batch scorer: one analyzer, one translator, bounded concurrency.
#[derive(Debug)]
pub struct SentiScorer {
    analyzer: SentiAnalyzer,
    translator: Box<dyn SentiTranslate>,
    concurrency: usize,
}

impl SentiScorer {
    /// Builds a scorer around the given translator.
    pub fn new(translator: Box<dyn SentiTranslate>, concurrency: usize) -> Self {
        Self {
            analyzer: SentiAnalyzer::new(),
            translator,
            concurrency,
        }
    }

    /// The shared analyzer, for callers that score ad-hoc text.
    pub fn analyzer(&self) -> &SentiAnalyzer {
        &self.analyzer
    }

    /// Translates and scores a batch, preserving input order.
    pub async fn score(&self, posts: &[SentiPost]) -> SentiScoreOutcome {
        let concurrency = self.concurrency.max(1);
        let translator = self.translator.as_ref();
        log::debug!(
            "scoring {} posts via {} (concurrency {})",
            posts.len(),
            translator.name(),
            concurrency
        );

        let tasks = posts.iter().enumerate().map(|(index, post)| async move {
            let result: Result<String> = translator.translate(&post.text).await;
            (index, post, result)
        });
        let mut translated: Vec<_> = stream::iter(tasks)
            .buffer_unordered(concurrency)
            .collect()
            .await;
        translated.sort_by_key(|(index, _, _)| *index);

        let mut outcome = SentiScoreOutcome::default();
        for (index, post, result) in translated {
            match result {
                Ok(text) => outcome.scored.push(self.analyzer.annotate(post, &text)),
                Err(err) => {
                    log::warn!("skipping post {} ({}): {}", index, post.url, err);
                    outcome.failures.push(SentiScoreFailure {
                        index,
                        url: post.url.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }
        outcome
    }
}
