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

//! # Senti Post Module
//!
//! This module provides the core data structures for representing fetched
//! posts and their sentiment annotations. SentiPost is the fundamental unit
//! of data that flows through an analysis run.
//!
//! ## Design Principles
//!
//! - **Immutability-friendly**: A post never changes after fetch; scoring
//!   produces a new [`SentiScoredPost`] instead of mutating in place
//! - **Order-preserving**: Batches keep insertion order (fetch order) so the
//!   table, export, and per-item failure indices all line up
//! - **Serde Support**: All types derive Serialize/Deserialize for logging,
//!   persistence, and test fixtures
//!
//! ## Usage Example
//!
//! ```rust
//! use sentix::post::{SentiLabel, SentiPost};
//!
//! let post = SentiPost::new("I love this! #great", "https://example.social/@a/1");
//! assert_eq!(SentiLabel::from_compound(0.65), SentiLabel::Positive);
//! assert_eq!(SentiLabel::from_compound(0.0), SentiLabel::Neutral);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compound threshold at and above which a post is labeled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound threshold at and below which a post is labeled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// A single fetched post: the raw text and its permalink.
///
/// Created by the fetcher and never mutated afterwards. The exported table
/// and the word-cloud corpus both read the original `text`; translation
/// output lives on [`SentiScoredPost`] and is used only for scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentiPost {
    /// Raw post content as delivered by the source (markup already stripped).
    pub text: String,

    /// Permalink to the post on its origin instance.
    pub url: String,
}

impl SentiPost {
    /// Constructs a post from its text and permalink.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        SentiPost {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Convenience alias for working with batches of fetched posts.
pub type SentiPostBatch = Vec<SentiPost>;

/// Discrete sentiment category derived from the compound score.
///
/// The mapping is a fixed, deterministic function of the compound score:
/// `>= 0.05` is positive, `<= -0.05` is negative, everything between is
/// neutral. Both boundaries are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentiLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentiLabel {
    /// Classifies a compound score using the fixed thresholds.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentiLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentiLabel::Negative
        } else {
            SentiLabel::Neutral
        }
    }

    /// Lowercase label as written to the export table.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentiLabel::Positive => "positive",
            SentiLabel::Negative => "negative",
            SentiLabel::Neutral => "neutral",
        }
    }

    /// Capitalized label as rendered on the chart.
    pub fn title(&self) -> &'static str {
        match self {
            SentiLabel::Positive => "Positive",
            SentiLabel::Negative => "Negative",
            SentiLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentiLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-part valence score produced by the lexicon pass.
///
/// `neg`, `neu`, and `pos` are proportions in `[0, 1]` that sum to roughly 1
/// (each rounded to 3 decimals); `compound` is the normalized overall valence
/// in `[-1, 1]` rounded to 4 decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentiScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Independent polarity/subjectivity pair from the second lexicon pass.
///
/// Polarity is the favorable/unfavorable lean in `[-1, 1]`; subjectivity is
/// the opinion-vs-fact lean in `[0, 1]`. The pair is computed by a different
/// heuristic than [`SentiScore`] and the two are not required to agree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentiOpinion {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// A post together with its full sentiment annotation.
///
/// Created by the scorer from a [`SentiPost`]; immutable thereafter. The
/// label is always `SentiLabel::from_compound(score.compound)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentiScoredPost {
    /// The original post as fetched.
    pub post: SentiPost,

    /// Canonical-language text the scores were computed from.
    pub translated: String,

    /// Discrete category derived from the compound score.
    pub label: SentiLabel,

    /// Polarity/subjectivity pair from the independent pass.
    pub opinion: SentiOpinion,

    /// Four-part valence score from the lexicon pass.
    pub score: SentiScore,
}
