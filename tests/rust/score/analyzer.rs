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

use sentix::post::{SentiLabel, SentiPost, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use sentix::score::SentiAnalyzer;

#[test]
fn label_thresholds_are_inclusive() {
    assert_eq!(SentiLabel::from_compound(POSITIVE_THRESHOLD), SentiLabel::Positive);
    assert_eq!(SentiLabel::from_compound(NEGATIVE_THRESHOLD), SentiLabel::Negative);
    assert_eq!(SentiLabel::from_compound(0.049), SentiLabel::Neutral);
    assert_eq!(SentiLabel::from_compound(-0.049), SentiLabel::Neutral);
    assert_eq!(SentiLabel::from_compound(0.0), SentiLabel::Neutral);
    assert_eq!(SentiLabel::from_compound(1.0), SentiLabel::Positive);
    assert_eq!(SentiLabel::from_compound(-1.0), SentiLabel::Negative);
}

#[test]
fn canonical_texts_get_canonical_labels() {
    let analyzer = SentiAnalyzer::new();

    let positive = analyzer.polarity_scores("I love this! #great");
    assert!(positive.compound >= POSITIVE_THRESHOLD);

    let negative = analyzer.polarity_scores("Terrible day http://x.co @bob");
    assert!(negative.compound <= NEGATIVE_THRESHOLD);

    let neutral = analyzer.polarity_scores("It is ok");
    assert_eq!(neutral.compound, 0.0);
    assert_eq!(neutral.neu, 1.0);
}

#[test]
fn proportions_are_rounded_and_sum_near_one() {
    let analyzer = SentiAnalyzer::new();
    for text in [
        "I love this! #great",
        "Terrible day http://x.co @bob",
        "good bad neutral words all around here",
        "wonderful wonderful awful",
    ] {
        let score = analyzer.polarity_scores(text);
        for part in [score.pos, score.neg, score.neu] {
            assert!((0.0..=1.0).contains(&part), "{}: part {}", text, part);
            let scaled = part * 1000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "{}: {} not rounded to 3 decimals",
                text,
                part
            );
        }
        let sum = score.pos + score.neg + score.neu;
        assert!((sum - 1.0).abs() < 0.005, "{}: sum {}", text, sum);
    }
}

#[test]
fn compound_is_bounded_and_rounded() {
    let analyzer = SentiAnalyzer::new();
    for text in [
        "love love love great wonderful amazing best!!!",
        "hate hate hate awful terrible worst!!!",
        "plain words without any rating",
    ] {
        let compound = analyzer.polarity_scores(text).compound;
        assert!((-1.0..=1.0).contains(&compound));
        let scaled = compound * 10000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }
}

#[test]
fn opinion_is_independent_of_valence() {
    let analyzer = SentiAnalyzer::new();
    // "paradise" is rated in the valence lexicon but not the opinion one,
    // so the two passes disagree about it.
    let score = analyzer.polarity_scores("paradise");
    let opinion = analyzer.opinion("paradise");
    assert!(score.compound > 0.0);
    assert_eq!(opinion.polarity, 0.0);
    assert_eq!(opinion.subjectivity, 0.0);
}

#[test]
fn opinion_stays_in_bounds() {
    let analyzer = SentiAnalyzer::new();
    for text in [
        "absolutely wonderful and awesome",
        "not good not great",
        "terrible horrible miserable",
    ] {
        let opinion = analyzer.opinion(text);
        assert!((-1.0..=1.0).contains(&opinion.polarity), "{}", text);
        assert!((0.0..=1.0).contains(&opinion.subjectivity), "{}", text);
    }
}

#[test]
fn analyzer_is_stateless_across_posts() {
    let shared = SentiAnalyzer::new();
    let texts = ["I love this! #great", "Terrible day", "It is ok"];

    let first_pass: Vec<f64> = texts
        .iter()
        .map(|t| shared.polarity_scores(t).compound)
        .collect();
    let second_pass: Vec<f64> = texts
        .iter()
        .map(|t| shared.polarity_scores(t).compound)
        .collect();
    let fresh: Vec<f64> = texts
        .iter()
        .map(|t| SentiAnalyzer::new().polarity_scores(t).compound)
        .collect();

    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass, fresh);
}

#[test]
fn annotate_carries_the_post_through() {
    let analyzer = SentiAnalyzer::new();
    let post = SentiPost::new("Das ist wunderbar", "https://example.social/@a/9");
    let scored = analyzer.annotate(&post, "This is wonderful");

    assert_eq!(scored.post.url, "https://example.social/@a/9");
    assert_eq!(scored.translated, "This is wonderful");
    assert_eq!(scored.label, SentiLabel::Positive);
    assert_eq!(scored.label, SentiLabel::from_compound(scored.score.compound));
}
