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

use sentix::inspect::{percentage, SentiBreakdown};
use sentix::post::{SentiLabel, SentiPost, SentiScoredPost};
use sentix::score::SentiAnalyzer;

fn score_texts(texts: &[&str]) -> Vec<SentiScoredPost> {
    let analyzer = SentiAnalyzer::new();
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let post = SentiPost::new(*text, format!("https://example.social/@a/{}", i));
            analyzer.annotate(&post, text)
        })
        .collect()
}

#[test]
fn one_of_each_label_splits_evenly() {
    let scored = score_texts(&[
        "I love this! #great",
        "Terrible day http://x.co @bob",
        "It is ok",
    ]);
    let breakdown = SentiBreakdown::compute(&scored);

    assert_eq!(breakdown.total, 3);
    assert_eq!(breakdown.positive, 1);
    assert_eq!(breakdown.negative, 1);
    assert_eq!(breakdown.neutral, 1);
    assert_eq!(breakdown.positive_pct, 33.3);
    assert_eq!(breakdown.negative_pct, 33.3);
    assert_eq!(breakdown.neutral_pct, 33.3);
}

#[test]
fn counts_always_sum_to_total() {
    let scored = score_texts(&[
        "wonderful",
        "awful",
        "plain words",
        "love love",
        "hate",
        "nothing rated here",
    ]);
    let breakdown = SentiBreakdown::compute(&scored);
    assert_eq!(
        breakdown.positive + breakdown.negative + breakdown.neutral,
        breakdown.total
    );
}

#[test]
fn empty_batch_is_zero_safe() {
    let breakdown = SentiBreakdown::compute(&[]);
    assert_eq!(breakdown.total, 0);
    assert_eq!(breakdown.positive_pct, 0.0);
    assert_eq!(breakdown.negative_pct, 0.0);
    assert_eq!(breakdown.neutral_pct, 0.0);
}

#[test]
fn percentages_stay_in_range_and_rounded() {
    for (part, whole) in [(0usize, 0usize), (1, 3), (2, 3), (5, 7), (7, 7), (0, 9)] {
        let pct = percentage(part, whole);
        assert!((0.0..=100.0).contains(&pct), "{}/{} gave {}", part, whole, pct);
        let scaled = pct * 10.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "{}/{} gave {} (not one decimal)",
            part,
            whole,
            pct
        );
    }
}

#[test]
fn accessors_mirror_fields() {
    let scored = score_texts(&["love it", "love it more", "dreadful"]);
    let breakdown = SentiBreakdown::compute(&scored);
    for label in [
        SentiLabel::Positive,
        SentiLabel::Negative,
        SentiLabel::Neutral,
    ] {
        assert_eq!(breakdown.pct(label), percentage(breakdown.count(label), breakdown.total));
    }
}
