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

//! # Senti Core Library
//!
//! Senti measures the sentiment pulse of a topic on the fediverse: it
//! fetches public posts for a query, translates them to English, scores
//! each one with lexicon-based analyzers, and turns the batch into a
//! breakdown, a word cloud, a donut chart, and a CSV export.
//!
//! ## Module Overview
//!
//! - **post**: Post, score, opinion, and label types shared by every stage
//! - **config**: YAML-backed configuration with sensible defaults
//! - **fetch**: Mastodon public tag timeline client with exact-count paging
//! - **translate**: Translation seam plus the gtx and echo providers
//! - **score**: Lexicons, the valence/opinion analyzer, and the batch scorer
//! - **normalize**: The fixed text-cleaning sequence for the cloud corpus
//! - **inspect**: Label counts and percentage breakdown
//! - **viz**: Word cloud and donut chart renderers (behind the `viz` feature)
//! - **export**: Semicolon CSV writer
//! - **pipeline**: Orchestration and the per-run report
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sentix::config::SentiConfig;
//! use sentix::pipeline::SentiPipeline;
//!
//! let pipeline = SentiPipeline::new(&SentiConfig::default())?;
//! let report = pipeline.run("#rustlang", 20).await?;
//! println!("{} positive of {}", report.breakdown.positive, report.breakdown.total);
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, SentiError>`. Per-post translation
//! failures do not abort a run; they are collected on the report so partial
//! batches stay usable.

pub mod config;
pub mod errors;
pub mod export;
pub mod fetch;
pub mod inspect;
pub mod normalize;
pub mod pipeline;
pub mod post;
pub mod score;
pub mod translate;
#[cfg(feature = "viz")]
pub mod viz;

pub use config::{SentiConfig, SentiFetchConfig, SentiOutputConfig, SentiTranslateConfig};
pub use errors::{Result, SentiError};
pub use export::{SentiCsvWriter, SentiExportConfig, SentiExportStats};
pub use fetch::SentiFetcher;
pub use inspect::SentiBreakdown;
pub use normalize::SentiNormalizer;
pub use pipeline::{SentiPipeline, SentiRunReport};
pub use post::{
    SentiLabel, SentiOpinion, SentiPost, SentiPostBatch, SentiScore, SentiScoredPost,
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use score::{SentiAnalyzer, SentiScoreFailure, SentiScoreOutcome, SentiScorer};
pub use translate::{SentiEchoTranslator, SentiGoogleTranslator, SentiTranslate};
#[cfg(feature = "viz")]
pub use viz::{SentiDonutChart, SentiDonutConfig, SentiWordCloud, SentiWordCloudConfig};
