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

//! # Senti Analyzer Module
//!
//! Turns translated text into a [`SentiScore`], a [`SentiOpinion`], and a
//! [`SentiLabel`]. Two independent passes run over the same tokens:
//!
//! 1. A valence pass in the VADER tradition: rated word weights adjusted for
//!    negation (flip and damp), distance-decayed degree boosters, ALL-CAPS
//!    emphasis, and `!`/`?` punctuation emphasis. The adjusted weights sum
//!    into a compound score normalized to `[-1, 1]`, and split into
//!    neg/neu/pos proportions.
//! 2. An opinion pass over a separate polarity/subjectivity lexicon: mean
//!    matched polarity (negation halves and flips, a preceding booster
//!    scales intensity) and mean matched subjectivity.
//!
//! The analyzer is stateless and cheap to share: the pipeline constructs one
//! instance and reuses it for the whole batch.

use crate::post::{SentiLabel, SentiOpinion, SentiPost, SentiScore, SentiScoredPost};
use crate::score::lexicon::{SentiLexicon, SentiOpinionLexicon, CAPS_INCR, NEGATION_SCALAR};

/// Normalization constant for the compound score: `s / sqrt(s^2 + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Emphasis added per exclamation mark (capped at four).
const EXCLAMATION_INCR: f64 = 0.292;

/// Emphasis added per question mark when more than one is present.
const QUESTION_INCR: f64 = 0.18;

/// Emphasis cap once four or more question marks pile up.
const QUESTION_CAP: f64 = 0.96;

/// Decay applied to a booster one, two, or three tokens back.
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Intensity factor a preceding intensifier applies in the opinion pass.
const OPINION_INTENSIFY: f64 = 1.3;

/// Intensity factor a preceding dampener applies in the opinion pass.
const OPINION_DAMPEN: f64 = 0.8;

/// Factor a negated polarity is multiplied by in the opinion pass.
const OPINION_NEGATION: f64 = -0.5;

/// Lexicon-based sentiment analyzer.
///
/// Holds both compiled lexicons; construct once per batch and share.
#[derive(Debug, Default)]
pub struct SentiAnalyzer {
    lexicon: SentiLexicon,
    opinions: SentiOpinionLexicon,
}

impl SentiAnalyzer {
    /// Builds the analyzer with the embedded lexicons.
    pub fn new() -> Self {
        Self {
            lexicon: SentiLexicon::new(),
            opinions: SentiOpinionLexicon::new(),
        }
    }

    /// Computes the four-part valence score for a text.
    ///
    /// Empty or token-free text scores all zeros.
    pub fn polarity_scores(&self, text: &str) -> SentiScore {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentiScore::default();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = has_mixed_caps(&tokens);

        let mut sentiments: Vec<f64> = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            // booster words occupy a neutral slot of their own
            if self.lexicon.booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            let valence = match self.lexicon.valence(word) {
                Some(v) => v,
                None => {
                    sentiments.push(0.0);
                    continue;
                }
            };
            sentiments.push(self.adjusted_valence(valence, i, &tokens, &lowered, cap_diff));
        }

        let punct = punctuation_emphasis(text);

        let mut total: f64 = sentiments.iter().sum();
        if total > 0.0 {
            total += punct;
        } else if total < 0.0 {
            total -= punct;
        }
        let compound = round4(normalize_valence(total));

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for v in &sentiments {
            if *v > 0.0 {
                pos_sum += v + 1.0;
            } else if *v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += punct;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= punct;
        }

        let weight = pos_sum + neg_sum.abs() + neu_count;
        if weight <= 0.0 {
            return SentiScore {
                compound,
                ..SentiScore::default()
            };
        }

        SentiScore {
            neg: round3(neg_sum.abs() / weight),
            neu: round3(neu_count / weight),
            pos: round3(pos_sum / weight),
            compound,
        }
    }

    /// Computes the independent polarity/subjectivity pair for a text.
    ///
    /// Returns `(0.0, 0.0)` when no opinion word matches.
    pub fn opinion(&self, text: &str) -> SentiOpinion {
        let tokens = tokenize(text);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();
        for (i, word) in lowered.iter().enumerate() {
            let (mut polarity, mut subjectivity) = match self.opinions.entry(word) {
                Some(pair) => pair,
                None => continue,
            };
            if i >= 1 {
                if let Some(boost) = self.lexicon.booster(&lowered[i - 1]) {
                    let factor = if boost > 0.0 {
                        OPINION_INTENSIFY
                    } else {
                        OPINION_DAMPEN
                    };
                    polarity = (polarity * factor).clamp(-1.0, 1.0);
                    subjectivity = (subjectivity * factor).clamp(0.0, 1.0);
                }
            }
            let negated =
                (1..=2).any(|dist| i >= dist && self.lexicon.is_negator(&lowered[i - dist]));
            if negated {
                polarity *= OPINION_NEGATION;
            }
            polarities.push(polarity);
            subjectivities.push(subjectivity);
        }

        if polarities.is_empty() {
            return SentiOpinion::default();
        }

        let polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
        let subjectivity = subjectivities.iter().sum::<f64>() / subjectivities.len() as f64;
        SentiOpinion {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// Scores one post from its translated text.
    pub fn annotate(&self, post: &SentiPost, translated: &str) -> SentiScoredPost {
        let score = self.polarity_scores(translated);
        let opinion = self.opinion(translated);
        let label = SentiLabel::from_compound(score.compound);
        log::trace!(
            "scored {:?} compound={} label={}",
            post.url,
            score.compound,
            label
        );
        SentiScoredPost {
            post: post.clone(),
            translated: translated.to_string(),
            label,
            opinion,
            score,
        }
    }

    /// Applies caps emphasis, booster look-back, and negation to one valence.
    fn adjusted_valence(
        &self,
        mut valence: f64,
        index: usize,
        tokens: &[&str],
        lowered: &[String],
        cap_diff: bool,
    ) -> f64 {
        if cap_diff && is_all_caps(tokens[index]) {
            if valence > 0.0 {
                valence += CAPS_INCR;
            } else {
                valence -= CAPS_INCR;
            }
        }

        for dist in 1..=BOOSTER_DECAY.len() {
            if index < dist {
                break;
            }
            if let Some(mut scalar) = self.lexicon.booster(&lowered[index - dist]) {
                if valence < 0.0 {
                    scalar = -scalar;
                }
                if cap_diff && is_all_caps(tokens[index - dist]) {
                    if valence > 0.0 {
                        scalar += CAPS_INCR;
                    } else {
                        scalar -= CAPS_INCR;
                    }
                }
                valence += scalar * BOOSTER_DECAY[dist - 1];
            }
        }

        let negated =
            (1..=3).any(|dist| index >= dist && self.lexicon.is_negator(&lowered[index - dist]));
        if negated {
            valence *= NEGATION_SCALAR;
        }

        valence
    }
}

/// Splits text on whitespace and trims non-alphanumeric characters from the
/// ends of each token (inner punctuation such as apostrophes survives).
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// True when every alphabetic character of the token is uppercase.
fn is_all_caps(token: &str) -> bool {
    let mut has_alpha = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// True when some but not all tokens are written in ALL CAPS. Emphasis only
/// means something when the writer mixes cases.
fn has_mixed_caps(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

/// Emphasis contributed by exclamation and question marks.
fn punctuation_emphasis(text: &str) -> f64 {
    let ep = text.chars().filter(|c| *c == '!').count().min(4) as f64 * EXCLAMATION_INCR;
    let qm_count = text.chars().filter(|c| *c == '?').count();
    let qm = if qm_count > 1 {
        if qm_count <= 3 {
            qm_count as f64 * QUESTION_INCR
        } else {
            QUESTION_CAP
        }
    } else {
        0.0
    };
    ep + qm
}

/// Squashes an unbounded valence sum into `[-1, 1]`.
fn normalize_valence(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}
