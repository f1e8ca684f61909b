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

//! # Senti Inspect Module
//!
//! Aggregates a scored batch into per-label counts and percentages. The
//! percentages are rounded to one decimal place and computed independently,
//! so the three shares can sum to 99.9 or 100.1 after rounding. An empty
//! batch yields zero counts and zero percentages.

use serde::{Deserialize, Serialize};

use crate::post::{SentiLabel, SentiScoredPost};

/// Per-label counts and percentage shares for one scored batch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SentiBreakdown {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
}

impl SentiBreakdown {
    /// Tallies labels and derives their percentage shares.
    pub fn compute(scored: &[SentiScoredPost]) -> Self {
        let mut breakdown = Self {
            total: scored.len(),
            ..Self::default()
        };
        for item in scored {
            match item.label {
                SentiLabel::Positive => breakdown.positive += 1,
                SentiLabel::Negative => breakdown.negative += 1,
                SentiLabel::Neutral => breakdown.neutral += 1,
            }
        }
        breakdown.positive_pct = percentage(breakdown.positive, breakdown.total);
        breakdown.negative_pct = percentage(breakdown.negative, breakdown.total);
        breakdown.neutral_pct = percentage(breakdown.neutral, breakdown.total);
        breakdown
    }

    /// Count for one label.
    pub fn count(&self, label: SentiLabel) -> usize {
        match label {
            SentiLabel::Positive => self.positive,
            SentiLabel::Negative => self.negative,
            SentiLabel::Neutral => self.neutral,
        }
    }

    /// Percentage share for one label.
    pub fn pct(&self, label: SentiLabel) -> f64 {
        match label {
            SentiLabel::Positive => self.positive_pct,
            SentiLabel::Negative => self.negative_pct,
            SentiLabel::Neutral => self.neutral_pct,
        }
    }
}

/// Share of `part` in `whole` as a percentage rounded to one decimal.
/// A `whole` of zero yields `0.0` rather than a division error.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (1000.0 * part as f64 / whole as f64).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::{SentiOpinion, SentiPost, SentiScore};

    fn scored(label: SentiLabel) -> SentiScoredPost {
        SentiScoredPost {
            post: SentiPost::new("text", "https://example.social/@a/1"),
            translated: "text".to_string(),
            label,
            opinion: SentiOpinion::default(),
            score: SentiScore::default(),
        }
    }

    #[test]
    fn even_three_way_split() {
        let batch = vec![
            scored(SentiLabel::Positive),
            scored(SentiLabel::Negative),
            scored(SentiLabel::Neutral),
        ];
        let breakdown = SentiBreakdown::compute(&batch);
        assert_eq!(breakdown.total, 3);
        assert_eq!(
            (breakdown.positive, breakdown.negative, breakdown.neutral),
            (1, 1, 1)
        );
        assert_eq!(breakdown.positive_pct, 33.3);
        assert_eq!(breakdown.negative_pct, 33.3);
        assert_eq!(breakdown.neutral_pct, 33.3);
    }

    #[test]
    fn empty_batch_is_all_zero() {
        let breakdown = SentiBreakdown::compute(&[]);
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.positive_pct, 0.0);
        assert_eq!(breakdown.negative_pct, 0.0);
        assert_eq!(breakdown.neutral_pct, 0.0);
    }

    #[test]
    fn single_label_is_full_share() {
        let batch = vec![scored(SentiLabel::Positive); 4];
        let breakdown = SentiBreakdown::compute(&batch);
        assert_eq!(breakdown.positive, 4);
        assert_eq!(breakdown.positive_pct, 100.0);
        assert_eq!(breakdown.negative_pct, 0.0);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(1, 7), 14.3);
        assert_eq!(percentage(1, 8), 12.5);
        assert_eq!(percentage(0, 5), 0.0);
        assert_eq!(percentage(5, 5), 100.0);
    }

    #[test]
    fn percentage_with_zero_whole() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
    }

    #[test]
    fn label_accessors_agree_with_fields() {
        let batch = vec![scored(SentiLabel::Negative), scored(SentiLabel::Negative)];
        let breakdown = SentiBreakdown::compute(&batch);
        assert_eq!(breakdown.count(SentiLabel::Negative), 2);
        assert_eq!(breakdown.pct(SentiLabel::Negative), 100.0);
        assert_eq!(breakdown.count(SentiLabel::Positive), 0);
    }
}
