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

//! # Donut Chart Module
//!
//! Draws the label breakdown as a donut: one wedge per non-empty label,
//! swept counterclockwise from twelve o'clock, with the raw count printed
//! inside each wedge and `{Label} ({pct}%)` printed outside it. A white
//! disc over the center turns the pie into a donut.

use std::fs;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::errors::{Result, SentiError};
use crate::inspect::SentiBreakdown;
use crate::post::SentiLabel;
use crate::viz::draw_error;

/// Wedge color for positive posts.
pub const POSITIVE_COLOR: RGBColor = RGBColor(0x14, 0xB9, 0x5F);

/// Wedge color for negative posts.
pub const NEGATIVE_COLOR: RGBColor = RGBColor(0xF9, 0x59, 0x6E);

/// Wedge color for neutral posts.
pub const NEUTRAL_COLOR: RGBColor = RGBColor(0xFF, 0xA8, 0x03);

/// Arc step in radians when tessellating a wedge.
const ARC_STEP: f64 = 0.02;

/// Configuration for the donut renderer.
#[derive(Clone, Debug)]
pub struct SentiDonutConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Outer radius as a fraction of the smaller canvas dimension.
    pub radius_ratio: f64,
    /// Hole radius as a fraction of the outer radius.
    pub hole_ratio: f64,
    /// Angle of the first wedge edge, degrees counterclockwise from three
    /// o'clock.
    pub start_angle_deg: f64,
}

impl Default for SentiDonutConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            radius_ratio: 0.35,
            hole_ratio: 0.6,
            start_angle_deg: 90.0,
        }
    }
}

/// Renderer for the label-share donut chart.
#[derive(Debug, Default)]
pub struct SentiDonutChart {
    config: SentiDonutConfig,
}

impl SentiDonutChart {
    /// Creates a renderer with the given configuration.
    pub fn new(config: SentiDonutConfig) -> Self {
        Self { config }
    }

    /// Renders the breakdown to a PNG at `path`.
    ///
    /// An empty breakdown is an error: a donut with no wedges would be a
    /// blank file that looks like a successful run.
    pub fn render(&self, breakdown: &SentiBreakdown, path: &Path) -> Result<()> {
        if breakdown.total == 0 {
            return Err(SentiError::render("no scored posts to chart"));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let (width, height) = (self.config.width, self.config.height);
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let center = ((width / 2) as i32, (height / 2) as i32);
        let radius = f64::from(width.min(height)) * self.config.radius_ratio;

        let count_style = ("sans-serif", 20)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        let mut angle = self.config.start_angle_deg.to_radians();
        for label in [
            SentiLabel::Positive,
            SentiLabel::Negative,
            SentiLabel::Neutral,
        ] {
            let count = breakdown.count(label);
            if count == 0 {
                continue;
            }
            let sweep = count as f64 / breakdown.total as f64 * std::f64::consts::TAU;

            root.draw(&Polygon::new(
                wedge_points(center, radius, angle, sweep),
                wedge_color(label).filled(),
            ))
            .map_err(draw_error)?;

            let mid = angle + sweep / 2.0;
            root.draw(&Text::new(
                count.to_string(),
                point_on(center, radius * 0.5, mid),
                count_style.clone(),
            ))
            .map_err(draw_error)?;

            let caption = format!("{} ({:.1}%)", label.title(), breakdown.pct(label));
            root.draw(&Text::new(
                caption,
                point_on(center, radius * 1.08, mid),
                ("sans-serif", 15)
                    .into_font()
                    .color(&BLACK)
                    .pos(label_anchor(mid)),
            ))
            .map_err(draw_error)?;

            angle += sweep;
        }

        let hole = (radius * self.config.hole_ratio).round() as i32;
        root.draw(&Circle::new(center, hole, WHITE.filled()))
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
        log::info!("wrote donut chart to {}", path.display());
        Ok(())
    }
}

/// Wedge fill for a label.
pub fn wedge_color(label: SentiLabel) -> RGBColor {
    match label {
        SentiLabel::Positive => POSITIVE_COLOR,
        SentiLabel::Negative => NEGATIVE_COLOR,
        SentiLabel::Neutral => NEUTRAL_COLOR,
    }
}

/// Tessellates one wedge as a closed polygon: center, then the arc from
/// `start` sweeping `sweep` radians counterclockwise.
fn wedge_points(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = (sweep / ARC_STEP).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let theta = start + sweep * (i as f64 / steps as f64);
        points.push(point_on(center, radius, theta));
    }
    points
}

/// Point at `radius` pixels from `center` toward angle `theta`. Screen y
/// grows downward, so increasing `theta` sweeps counterclockwise.
fn point_on(center: (i32, i32), radius: f64, theta: f64) -> (i32, i32) {
    (
        (f64::from(center.0) + radius * theta.cos()).round() as i32,
        (f64::from(center.1) - radius * theta.sin()).round() as i32,
    )
}

/// Text anchor that keeps an outer label on the far side of its anchor
/// point, away from the donut.
fn label_anchor(theta: f64) -> Pos {
    let h = if theta.cos() > 0.2 {
        HPos::Left
    } else if theta.cos() < -0.2 {
        HPos::Right
    } else {
        HPos::Center
    };
    let v = if theta.sin() > 0.2 {
        VPos::Bottom
    } else if theta.sin() < -0.2 {
        VPos::Top
    } else {
        VPos::Center
    };
    Pos::new(h, v)
}
