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

//! # Senti Scoring Module
//!
//! Lexicon-based sentiment scoring: the embedded lexicons, the analyzer that
//! turns translated text into scores and labels, and the batch runner that
//! drives translation and scoring with per-item failure isolation.

pub mod analyzer;
pub mod lexicon;
pub mod runner;

pub use analyzer::SentiAnalyzer;
pub use lexicon::{SentiLexicon, SentiOpinionLexicon};
pub use runner::{SentiScoreFailure, SentiScoreOutcome, SentiScorer};
