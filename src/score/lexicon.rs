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

//! # Senti Lexicon Module
//!
//! The embedded dictionaries behind both scoring passes: a valence lexicon
//! in the VADER tradition (word weights in roughly `[-4, 4]` plus booster
//! and negator word lists) and an independent opinion lexicon mapping words
//! to a polarity/subjectivity pair. Everything is compiled into lookup maps
//! once; there are no runtime downloads.

use std::collections::{HashMap, HashSet};

/// Degree adjustment applied by an intensifying booster word.
pub const BOOST_INCR: f64 = 0.293;

/// Degree adjustment applied by a dampening booster word.
pub const BOOST_DECR: f64 = -0.293;

/// Factor a negated valence is multiplied by (flip and damp).
pub const NEGATION_SCALAR: f64 = -0.74;

/// Emphasis added to a valence word written in ALL CAPS.
pub const CAPS_INCR: f64 = 0.733;

/// Word valences. Weights follow the VADER convention: hand-rated means in
/// roughly [-4, 4], positive words up, negative words down.
const VALENCES: &[(&str, f64)] = &[
    // positive
    ("adore", 2.9), ("amazing", 2.8), ("appreciate", 1.9), ("appreciated", 2.1), ("awesome", 3.1),
    ("beautiful", 2.9), ("best", 3.2), ("better", 1.9), ("brilliant", 2.8), ("calm", 1.3),
    ("charming", 2.2), ("cheerful", 2.5), ("comfort", 1.5), ("comfortable", 1.7), ("congratulations", 2.9),
    ("cool", 1.3), ("courage", 2.2), ("creative", 1.9), ("cute", 2.0), ("delight", 2.9),
    ("delighted", 2.8), ("dream", 1.6), ("eager", 1.5), ("easy", 1.9), ("effective", 1.8),
    ("elegant", 2.1), ("encouraging", 2.1), ("energetic", 1.9), ("enjoy", 2.2), ("enjoyed", 2.3),
    ("epic", 2.4), ("excellent", 2.7), ("excited", 2.3), ("exciting", 2.2), ("fair", 1.6),
    ("faith", 1.9), ("fantastic", 2.6), ("favorite", 2.0), ("free", 1.8), ("freedom", 2.3),
    ("friendly", 2.2), ("fun", 2.3), ("funny", 1.9), ("generous", 2.3), ("gentle", 1.9),
    ("gift", 1.9), ("glad", 2.0), ("glory", 2.3), ("good", 1.9), ("gorgeous", 2.7),
    ("grace", 1.9), ("grateful", 2.3), ("great", 3.1), ("happiness", 2.6), ("happy", 2.7),
    ("help", 1.7), ("helpful", 1.8), ("honest", 2.3), ("honor", 2.4), ("hope", 1.9),
    ("hopeful", 2.0), ("improved", 1.9), ("improvement", 1.6), ("impressive", 2.3), ("incredible", 2.5),
    ("innovative", 1.9), ("inspire", 2.3), ("inspired", 2.2), ("inspiring", 2.4), ("interesting", 1.7),
    ("joy", 2.8), ("kind", 1.7), ("laugh", 2.2), ("laughed", 1.9), ("legendary", 2.4),
    ("like", 1.5), ("liked", 1.8), ("love", 3.2), ("loved", 2.9), ("lovely", 2.8),
    ("loves", 2.7), ("luck", 1.8), ("lucky", 2.0), ("magnificent", 2.9), ("marvelous", 2.7),
    ("motivated", 1.9), ("nice", 1.8), ("optimistic", 2.1), ("outstanding", 3.0), ("paradise", 3.2),
    ("passion", 2.0), ("passionate", 2.2), ("peace", 2.5), ("peaceful", 2.4), ("perfect", 2.7),
    ("pleasant", 2.3), ("pleased", 2.1), ("popular", 1.8), ("positive", 2.0), ("powerful", 2.0),
    ("precious", 2.3), ("progress", 1.8), ("promising", 1.6), ("prosperous", 2.5), ("proud", 2.1),
    ("recommend", 1.6), ("recommended", 1.6), ("refreshing", 2.0), ("relaxed", 1.8), ("relieved", 1.9),
    ("remarkable", 2.4), ("respect", 2.1), ("rich", 2.1), ("safe", 1.7), ("satisfied", 2.0),
    ("satisfying", 1.9), ("secure", 1.5), ("smile", 2.0), ("smiling", 2.2), ("solid", 1.4),
    ("strong", 2.3), ("stunning", 2.1), ("success", 2.7), ("successful", 2.4), ("superb", 3.1),
    ("support", 1.7), ("supported", 1.6), ("sweet", 2.0), ("thank", 1.7), ("thanks", 1.9),
    ("trust", 2.3), ("trusted", 2.2), ("valuable", 2.1), ("vibrant", 1.9), ("victory", 2.9),
    ("warm", 1.6), ("welcome", 2.0), ("win", 2.8), ("winner", 2.8), ("winning", 2.4),
    ("wise", 2.1), ("won", 2.7), ("wonderful", 2.7), ("worthy", 1.9), ("wow", 2.8),
    ("yay", 2.4),
    // negative
    ("abandoned", -2.1), ("abuse", -2.9), ("abused", -2.6), ("afraid", -2.0), ("anger", -2.7),
    ("angry", -2.3), ("annoyed", -1.8), ("annoying", -1.7), ("anxious", -1.9), ("ashamed", -2.2),
    ("attack", -2.1), ("attacked", -2.0), ("awful", -2.0), ("bad", -2.5), ("betray", -2.8),
    ("betrayed", -2.6), ("blame", -1.8), ("blamed", -1.7), ("bored", -1.2), ("boring", -1.3),
    ("broke", -1.5), ("broken", -2.0), ("catastrophe", -2.6), ("corrupt", -2.9), ("corruption", -2.7),
    ("cried", -1.8), ("crime", -2.5), ("criminal", -2.3), ("crisis", -2.5), ("cruel", -2.6),
    ("cry", -2.0), ("crying", -2.1), ("damn", -1.6), ("danger", -2.4), ("dangerous", -2.3),
    ("dead", -3.3), ("death", -2.9), ("denied", -1.7), ("deny", -1.3), ("depressed", -2.3),
    ("depressing", -2.2), ("destroy", -2.6), ("destroyed", -2.5), ("destruction", -2.7), ("die", -2.9),
    ("died", -2.6), ("disappointed", -2.1), ("disappointing", -2.1), ("disappointment", -2.2), ("disaster", -3.1),
    ("disastrous", -2.9), ("disease", -2.3), ("disgust", -2.4), ("disgusting", -2.9), ("doubt", -1.4),
    ("doubtful", -1.5), ("dumb", -2.3), ("dying", -2.9), ("embarrassed", -1.7), ("evil", -3.0),
    ("fail", -2.5), ("failed", -2.3), ("failing", -2.2), ("failure", -2.6), ("fear", -2.2),
    ("feared", -1.9), ("fearful", -2.3), ("fight", -1.6), ("fighting", -1.7), ("fool", -1.9),
    ("foolish", -1.9), ("fraud", -2.8), ("gross", -1.9), ("harm", -2.2), ("harmful", -2.4),
    ("hate", -2.7), ("hated", -2.6), ("hateful", -2.2), ("hates", -1.9), ("horrible", -2.5),
    ("horribly", -2.7), ("hurt", -2.0), ("hurts", -1.9), ("idiot", -2.3), ("ill", -1.8),
    ("kill", -3.1), ("killed", -2.8), ("killing", -3.0), ("liar", -2.6), ("lie", -1.8),
    ("lies", -1.9), ("lonely", -1.9), ("loneliness", -2.0), ("lose", -1.9), ("loser", -2.4),
    ("losing", -1.9), ("lost", -1.7), ("lying", -2.0), ("miserable", -2.7), ("misery", -2.7),
    ("mistake", -1.7), ("mistakes", -1.6), ("nasty", -2.6), ("pain", -2.3), ("painful", -2.4),
    ("panic", -2.4), ("pathetic", -2.4), ("poor", -2.1), ("poverty", -2.4), ("problem", -1.7),
    ("problems", -1.7), ("regret", -1.9), ("reject", -1.9), ("rejected", -2.1), ("ridiculous", -1.6),
    ("ruin", -2.1), ("ruined", -2.4), ("sad", -2.1), ("sadly", -1.9), ("sadness", -2.2),
    ("scam", -2.3), ("scared", -1.9), ("scary", -2.2), ("shame", -2.1), ("sick", -2.0),
    ("sorry", -1.1), ("stress", -1.9), ("stressed", -1.8), ("stressful", -2.0), ("stupid", -2.4),
    ("suck", -2.0), ("sucks", -2.3), ("terrible", -2.1), ("terribly", -2.4), ("threat", -2.2),
    ("threatening", -2.4), ("tired", -1.4), ("toxic", -2.4), ("tragedy", -3.0), ("tragic", -2.8),
    ("trouble", -2.0), ("troubled", -1.9), ("ugly", -2.4), ("unfair", -2.2), ("unfortunate", -2.0),
    ("unfortunately", -1.6), ("unhappy", -1.9), ("upset", -1.9), ("useless", -1.9), ("victim", -1.8),
    ("violence", -3.1), ("violent", -2.9), ("war", -2.9), ("waste", -1.8), ("wasted", -2.0),
    ("weak", -1.9), ("worried", -1.8), ("worry", -1.9), ("worrying", -1.8), ("worse", -2.1),
    ("worst", -3.1), ("worthless", -2.5), ("wrong", -2.1),
];

/// Degree modifiers. Positive values intensify the following valence word,
/// negative values dampen it.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCR), ("amazingly", BOOST_INCR), ("completely", BOOST_INCR),
    ("considerably", BOOST_INCR), ("decidedly", BOOST_INCR), ("deeply", BOOST_INCR),
    ("enormously", BOOST_INCR), ("entirely", BOOST_INCR), ("especially", BOOST_INCR),
    ("exceptionally", BOOST_INCR), ("extremely", BOOST_INCR), ("fabulously", BOOST_INCR),
    ("fully", BOOST_INCR), ("greatly", BOOST_INCR), ("highly", BOOST_INCR),
    ("hugely", BOOST_INCR), ("incredibly", BOOST_INCR), ("intensely", BOOST_INCR),
    ("majorly", BOOST_INCR), ("more", BOOST_INCR), ("most", BOOST_INCR),
    ("particularly", BOOST_INCR), ("purely", BOOST_INCR), ("quite", BOOST_INCR),
    ("really", BOOST_INCR), ("remarkably", BOOST_INCR), ("so", BOOST_INCR),
    ("substantially", BOOST_INCR), ("thoroughly", BOOST_INCR), ("totally", BOOST_INCR),
    ("tremendously", BOOST_INCR), ("unbelievably", BOOST_INCR), ("unusually", BOOST_INCR),
    ("utterly", BOOST_INCR), ("very", BOOST_INCR),
    ("almost", BOOST_DECR), ("barely", BOOST_DECR), ("hardly", BOOST_DECR),
    ("kinda", BOOST_DECR), ("less", BOOST_DECR), ("little", BOOST_DECR),
    ("marginally", BOOST_DECR), ("occasionally", BOOST_DECR), ("partly", BOOST_DECR),
    ("scarcely", BOOST_DECR), ("slightly", BOOST_DECR), ("somewhat", BOOST_DECR),
    ("sorta", BOOST_DECR),
];

/// Words that negate a following valence word. Contractions are matched both
/// with and without the apostrophe; the analyzer additionally treats any
/// token ending in "n't" as a negator.
const NEGATORS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "despite", "didnt", "doesnt",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "never", "none", "nope", "nor", "not", "nothing", "nowhere", "rarely",
    "seldom", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
];

/// Opinion entries: word, polarity in [-1, 1], subjectivity in [0, 1].
/// Independent of the valence table above; deliberately a different scale
/// and a different (smaller) vocabulary.
const OPINIONS: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9), ("awesome", 1.0, 1.0), ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3), ("better", 0.5, 0.5), ("brilliant", 0.9, 0.9),
    ("calm", 0.3, 0.6), ("cheap", -0.4, 0.7), ("clean", 0.4, 0.65),
    ("comfortable", 0.55, 0.75), ("cute", 0.5, 1.0), ("delicious", 1.0, 1.0),
    ("easy", 0.43, 0.83), ("excellent", 1.0, 1.0), ("exciting", 0.35, 0.7),
    ("fantastic", 0.4, 0.9), ("fast", 0.2, 0.5), ("fine", 0.42, 0.5),
    ("friendly", 0.6, 0.7), ("fun", 0.3, 0.2), ("funny", 0.3, 0.8),
    ("glad", 0.5, 1.0), ("good", 0.7, 0.6), ("gorgeous", 0.9, 1.0),
    ("great", 0.8, 0.75), ("happy", 0.8, 1.0), ("helpful", 0.6, 0.7),
    ("impressive", 1.0, 1.0), ("incredible", 0.9, 0.9), ("interesting", 0.5, 0.5),
    ("kind", 0.6, 0.9), ("love", 0.5, 0.6), ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75), ("lucky", 0.6, 0.9), ("new", 0.14, 0.45),
    ("nice", 0.6, 1.0), ("perfect", 1.0, 1.0), ("pleasant", 0.7, 0.8),
    ("powerful", 0.4, 0.6), ("pretty", 0.25, 1.0), ("proud", 0.6, 0.9),
    ("reliable", 0.5, 0.6), ("safe", 0.5, 0.5), ("smart", 0.6, 0.8),
    ("strong", 0.4, 0.5), ("sweet", 0.55, 0.8), ("wonderful", 1.0, 1.0),
    ("angry", -0.5, 1.0), ("annoying", -0.6, 0.9), ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67), ("boring", -1.0, 1.0), ("broken", -0.4, 0.6),
    ("cruel", -0.8, 0.9), ("dangerous", -0.6, 0.9), ("dirty", -0.6, 0.8),
    ("disappointing", -0.6, 0.9), ("disgusting", -0.9, 1.0), ("dishonest", -0.8, 0.9),
    ("dumb", -0.6, 0.9), ("evil", -1.0, 1.0), ("fake", -0.5, 0.7),
    ("hate", -0.8, 0.9), ("horrible", -1.0, 1.0), ("miserable", -1.0, 1.0),
    ("painful", -0.7, 0.9), ("pathetic", -1.0, 1.0), ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0), ("scary", -0.6, 1.0), ("sick", -0.7, 0.9),
    ("slow", -0.3, 0.4), ("stupid", -0.8, 0.9), ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0), ("unhappy", -0.6, 1.0), ("useless", -0.6, 0.7),
    ("weak", -0.5, 0.6), ("worse", -0.4, 0.6), ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.5),
];

/// Valence lexicon plus the booster and negator word lists.
#[derive(Debug)]
pub struct SentiLexicon {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
}

impl SentiLexicon {
    /// Builds the lookup maps from the embedded tables.
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    /// Valence for a lowercased word, if the word is rated.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Degree adjustment for a lowercased booster word, if any.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Whether the lowercased word negates what follows.
    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word) || word.ends_with("n't")
    }

    /// Number of rated words.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// True when the lexicon holds no rated words.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for SentiLexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Independent polarity/subjectivity lexicon.
#[derive(Debug)]
pub struct SentiOpinionLexicon {
    entries: HashMap<&'static str, (f64, f64)>,
}

impl SentiOpinionLexicon {
    /// Builds the lookup map from the embedded table.
    pub fn new() -> Self {
        Self {
            entries: OPINIONS
                .iter()
                .map(|(word, polarity, subjectivity)| (*word, (*polarity, *subjectivity)))
                .collect(),
        }
    }

    /// (polarity, subjectivity) for a lowercased word, if rated.
    pub fn entry(&self, word: &str) -> Option<(f64, f64)> {
        self.entries.get(word).copied()
    }

    /// Number of rated words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the lexicon holds no rated words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SentiOpinionLexicon {
    fn default() -> Self {
        Self::new()
    }
}
