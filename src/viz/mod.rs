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

//! # Senti Visualization Module
//!
//! Renders the two run artifacts as PNG files:
//!
//! - **Donut** ([`donut`]): per-label share of the batch as a donut chart,
//!   counts inside the wedges and labeled percentages outside.
//! - **Word Cloud** ([`wordcloud`]): frequency-scaled words from the
//!   normalized corpus, optionally constrained to a mask image.
//!
//! Both renderers write through plotters bitmap backends. The whole module
//! sits behind the `viz` feature so headless deployments can drop the
//! drawing and image stacks.

pub mod donut;
pub mod wordcloud;

pub use donut::{SentiDonutChart, SentiDonutConfig};
pub use wordcloud::{word_frequencies, SentiWordCloud, SentiWordCloudConfig};

use crate::errors::SentiError;

/// Adapts a drawing-backend error into the crate error type.
pub(crate) fn draw_error<E: std::fmt::Display>(err: E) -> SentiError {
    SentiError::render(err.to_string())
}
