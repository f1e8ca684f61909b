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

use async_trait::async_trait;
use sentix::config::SentiConfig;
use sentix::errors::SentiError;
use sentix::export::SentiCsvWriter;
use sentix::pipeline::{SentiPipeline, SentiRunReport};
use sentix::post::{SentiLabel, SentiPost};
use sentix::translate::{SentiEchoTranslator, SentiTranslate};

/// Identity translator that rejects any post containing "boom".
#[derive(Debug)]
struct FlakyTranslator;

#[async_trait]
impl SentiTranslate for FlakyTranslator {
    async fn translate(&self, text: &str) -> sentix::Result<String> {
        if text.contains("boom") {
            Err(SentiError::translate("provider rejected the text"))
        } else {
            Ok(text.to_string())
        }
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}

fn echo_pipeline() -> SentiPipeline {
    SentiPipeline::with_translator(&SentiConfig::default(), Box::new(SentiEchoTranslator))
        .expect("pipeline should construct")
}

fn canonical_posts() -> Vec<SentiPost> {
    vec![
        SentiPost::new("I love this! #great", "https://example.social/@a/1"),
        SentiPost::new("Terrible day http://x.co @bob", "https://example.social/@b/2"),
        SentiPost::new("It is ok", "https://example.social/@c/3"),
    ]
}

#[tokio::test]
async fn even_batch_splits_three_ways() {
    let report = echo_pipeline().analyze(canonical_posts()).await;

    assert!(report.is_complete());
    assert_eq!(report.requested, 3);
    assert_eq!(report.scored.len(), 3);
    assert_eq!(report.scored[0].label, SentiLabel::Positive);
    assert_eq!(report.scored[1].label, SentiLabel::Negative);
    assert_eq!(report.scored[2].label, SentiLabel::Neutral);

    assert_eq!(report.breakdown.total, 3);
    assert_eq!(report.breakdown.positive, 1);
    assert_eq!(report.breakdown.negative, 1);
    assert_eq!(report.breakdown.neutral, 1);
    assert_eq!(report.breakdown.positive_pct, 33.3);
    assert_eq!(report.breakdown.negative_pct, 33.3);
    assert_eq!(report.breakdown.neutral_pct, 33.3);
}

#[tokio::test]
async fn scored_posts_keep_fetch_order() {
    let report = echo_pipeline().analyze(canonical_posts()).await;
    let urls: Vec<&str> = report
        .scored
        .iter()
        .map(|item| item.post.url.as_str())
        .collect();
    assert_eq!(
        urls,
        [
            "https://example.social/@a/1",
            "https://example.social/@b/2",
            "https://example.social/@c/3",
        ]
    );
}

#[tokio::test]
async fn corpus_is_normalized_over_the_whole_batch() {
    let report = echo_pipeline().analyze(canonical_posts()).await;
    assert_eq!(report.corpus, "i love this terrible day it is ok");
}

#[tokio::test]
async fn translator_failures_keep_the_rest_of_the_batch() {
    let pipeline =
        SentiPipeline::with_translator(&SentiConfig::default(), Box::new(FlakyTranslator))
            .expect("pipeline should construct");
    let posts = vec![
        SentiPost::new("I love this! #great", "https://example.social/@a/1"),
        SentiPost::new("boom negative day", "https://example.social/@b/2"),
        SentiPost::new("It is ok", "https://example.social/@c/3"),
    ];
    let report = pipeline.analyze(posts).await;

    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(report.failures[0].url, "https://example.social/@b/2");

    assert_eq!(report.scored.len(), 2);
    assert_eq!(report.scored[0].label, SentiLabel::Positive);
    assert_eq!(report.scored[1].label, SentiLabel::Neutral);
    assert_eq!(report.breakdown.total, 2);
    assert_eq!(report.breakdown.positive_pct, 50.0);

    // The cloud corpus still covers the dropped post.
    assert!(report.corpus.contains("boom"));
}

#[tokio::test]
async fn report_round_trips_through_json() {
    let report = echo_pipeline().analyze(canonical_posts()).await;
    let json = serde_json::to_string(&report).expect("report should serialize");
    let restored: SentiRunReport = serde_json::from_str(&json).expect("report should deserialize");

    assert_eq!(restored.scored.len(), report.scored.len());
    assert_eq!(restored.breakdown.positive, report.breakdown.positive);
    assert_eq!(restored.corpus, report.corpus);
}

#[tokio::test]
async fn scored_batch_flows_into_the_export() {
    let report = echo_pipeline().analyze(canonical_posts()).await;
    let rendered = SentiCsvWriter::default()
        .render_string(&report.scored)
        .expect("render should succeed");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(rendered.as_bytes());
    let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), report.scored.len());
    for (record, item) in records.iter().zip(&report.scored) {
        assert_eq!(&record[2], item.label.as_str());
    }
}

#[tokio::test]
async fn run_rejects_blank_query() {
    let err = echo_pipeline().run("  \t ", 5).await.unwrap_err();
    assert!(matches!(err, SentiError::Validation { .. }));
}

#[tokio::test]
async fn run_rejects_zero_count() {
    let err = echo_pipeline().run("#rust", 0).await.unwrap_err();
    assert!(matches!(err, SentiError::Validation { .. }));
}
