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

//! # Word Cloud Module
//!
//! Draws the most frequent corpus words on a white canvas, font size scaled
//! by the square root of relative frequency so mid-tail words stay legible.
//! Words are placed at seeded-random positions, rejecting spots that collide
//! with already placed words, so the same corpus and seed always produce
//! the same image.
//!
//! ## Masks
//!
//! An optional mask image constrains placement: the mask is resized to the
//! canvas, converted to grayscale, and near-white pixels become forbidden
//! ground. Words are only placed where their whole bounding box lies on
//! non-white mask pixels.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::errors::{Result, SentiError};
use crate::viz::draw_error;

/// Words too common to say anything about the topic.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "but", "by",
    "can", "could", "did", "do", "does", "down", "for", "from", "had",
    "has", "have", "he", "her", "here", "him", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "just", "like", "me", "more", "most",
    "my", "no", "not", "now", "of", "on", "only", "or", "other", "our",
    "out", "over", "she", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "to", "too",
    "up", "us", "very", "was", "we", "were", "what", "when", "where",
    "which", "who", "why", "will", "with", "would", "you", "your",
];

/// Grayscale value at and above which a mask pixel is forbidden.
const MASK_WHITE_CUTOFF: u8 = 245;

/// Placement attempts per word before giving up on it.
const MAX_ATTEMPTS: usize = 80;

/// Sampling stride in pixels when checking a box against the mask.
const MASK_SAMPLE_STEP: u32 = 8;

/// Fill colors cycled across placed words.
const PALETTE: &[RGBColor] = &[
    RGBColor(0x1F, 0x77, 0xB4),
    RGBColor(0x2C, 0xA0, 0x2C),
    RGBColor(0xD6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xBD),
    RGBColor(0xFF, 0x7F, 0x0E),
    RGBColor(0x17, 0xBE, 0xCF),
];

/// Configuration for the word cloud renderer.
#[derive(Clone, Debug)]
pub struct SentiWordCloudConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Upper bound of distinct words drawn.
    pub max_words: usize,
    /// Font size of the rarest drawn word.
    pub min_font: i32,
    /// Font size of the most frequent word.
    pub max_font: i32,
    /// Seed for the placement rng.
    pub seed: u64,
    /// Optional mask image constraining placement.
    pub mask: Option<PathBuf>,
}

impl Default for SentiWordCloudConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            max_words: 100,
            min_font: 12,
            max_font: 64,
            seed: 42,
            mask: None,
        }
    }
}

/// Renderer for the corpus word cloud.
#[derive(Debug, Default)]
pub struct SentiWordCloud {
    config: SentiWordCloudConfig,
}

impl SentiWordCloud {
    /// Creates a renderer with the given configuration.
    pub fn new(config: SentiWordCloudConfig) -> Self {
        Self { config }
    }

    /// Renders the corpus to a PNG at `path`.
    ///
    /// A corpus with no drawable words is an error.
    pub fn render(&self, corpus: &str, path: &Path) -> Result<()> {
        let frequencies = word_frequencies(corpus);
        if frequencies.is_empty() {
            return Err(SentiError::render("no words left to draw"));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let (width, height) = (self.config.width, self.config.height);
        let mask = match &self.config.mask {
            Some(mask_path) => Some(SentiMask::load(mask_path, width, height)?),
            None => None,
        };

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let max_count = frequencies[0].1 as f64;
        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut placed: Vec<(i32, i32, i32, i32)> = Vec::new();
        let mut drawn = 0usize;

        for (i, (word, count)) in frequencies.iter().take(self.config.max_words).enumerate() {
            let scale = (*count as f64 / max_count).sqrt();
            let size = self.config.min_font
                + ((self.config.max_font - self.config.min_font) as f64 * scale).round() as i32;
            let style = ("sans-serif", size)
                .into_font()
                .color(&PALETTE[i % PALETTE.len()]);
            let (text_w, text_h) = root.estimate_text_size(word, &style).map_err(draw_error)?;
            if text_w == 0 || text_h == 0 || text_w >= width || text_h >= height {
                continue;
            }

            for _attempt in 0..MAX_ATTEMPTS {
                let x = rng.gen_range(0..=(width - text_w)) as i32;
                let y = rng.gen_range(0..=(height - text_h)) as i32;
                let rect = (x, y, x + text_w as i32, y + text_h as i32);
                if placed.iter().any(|other| boxes_overlap(*other, rect)) {
                    continue;
                }
                if let Some(mask) = &mask {
                    if !mask.allows_box(rect) {
                        continue;
                    }
                }
                root.draw(&Text::new(word.as_str(), (x, y), style.clone()))
                    .map_err(draw_error)?;
                placed.push(rect);
                drawn += 1;
                break;
            }
        }

        root.present().map_err(draw_error)?;
        log::info!(
            "wrote word cloud ({} of {} words placed) to {}",
            drawn,
            frequencies.len().min(self.config.max_words),
            path.display()
        );
        Ok(())
    }
}

/// Counts corpus words, dropping stopwords and single letters. Sorted by
/// descending count, ties alphabetical, so output order is deterministic.
///
/// The corpus is expected to be normalized already (lowercase, no urls,
/// digits, or punctuation).
pub fn word_frequencies(corpus: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in corpus.split_whitespace() {
        if word.chars().count() < 2 || STOPWORDS.contains(&word) {
            continue;
        }
        *counts.entry(word).or_default() += 1;
    }
    let mut frequencies: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies
}

/// True when two pixel boxes intersect.
fn boxes_overlap(a: (i32, i32, i32, i32), b: (i32, i32, i32, i32)) -> bool {
    a.0 < b.2 && b.0 < a.2 && a.1 < b.3 && b.1 < a.3
}

/// Placement mask derived from a grayscale image.
#[derive(Debug)]
struct SentiMask {
    width: u32,
    height: u32,
    allowed: Vec<bool>,
}

impl SentiMask {
    /// Loads and resizes the mask image to the canvas dimensions.
    fn load(path: &Path, width: u32, height: u32) -> Result<Self> {
        let img = image::open(path)
            .map_err(|e| SentiError::render(format!("mask {}: {}", path.display(), e)))?;
        let luma = img
            .resize_exact(width, height, image::imageops::FilterType::Triangle)
            .to_luma8();
        let allowed = luma
            .pixels()
            .map(|pixel| pixel.0[0] < MASK_WHITE_CUTOFF)
            .collect();
        Ok(Self {
            width,
            height,
            allowed,
        })
    }

    fn allows(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.allowed[(y * self.width + x) as usize]
    }

    /// Samples the box on a small grid; every sample must land on allowed
    /// ground. The right and bottom edges are always sampled so a box
    /// cannot poke past a mask boundary between strides.
    fn allows_box(&self, rect: (i32, i32, i32, i32)) -> bool {
        let (x0, y0, x1, y1) = rect;
        if x0 < 0 || y0 < 0 {
            return false;
        }
        let (x0, y0, x1, y1) = (x0 as u32, y0 as u32, x1 as u32, y1 as u32);
        let xs = (x0..x1).step_by(MASK_SAMPLE_STEP as usize).chain([x1 - 1]);
        for x in xs {
            let ys = (y0..y1).step_by(MASK_SAMPLE_STEP as usize).chain([y1 - 1]);
            for y in ys {
                if !self.allows(x, y) {
                    return false;
                }
            }
        }
        true
    }
}
