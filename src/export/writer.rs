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

//! # CSV Writer Module
//!
//! Renders a scored batch as semicolon-delimited CSV and writes it to disk.
//! Fields are quoted only when they contain the delimiter, a quote, or a
//! newline, so post text with semicolons survives a round trip. Writes are
//! atomic by default: the file lands under a dotted temp name and is renamed
//! into place, so readers never observe a half-written export.

use std::fs;
use std::path::{Path, PathBuf};

use csv::QuoteStyle;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SentiError};
use crate::post::SentiScoredPost;

/// Column order of the export, one row per scored post.
pub const EXPORT_HEADERS: [&str; 9] = [
    "TWEETS",
    "URL",
    "SENTIMENT",
    "POLARITY",
    "SUBJECTIVITY",
    "POS",
    "NEG",
    "NEU",
    "COMPOUND",
];

/// Configuration for the CSV writer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentiExportConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Use atomic write (write to temp then rename).
    pub atomic_write: bool,
}

impl Default for SentiExportConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            atomic_write: true,
        }
    }
}

/// Statistics about one export.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SentiExportStats {
    /// Data rows written, header excluded.
    pub rows_written: usize,
    /// Total bytes written.
    pub bytes_written: usize,
}

/// Writer for the nine-column sentiment export.
#[derive(Debug, Default)]
pub struct SentiCsvWriter {
    config: SentiExportConfig,
}

impl SentiCsvWriter {
    /// Creates a writer with the given configuration.
    pub fn new(config: SentiExportConfig) -> Self {
        Self { config }
    }

    /// Writes the batch to `path`, creating parent directories as needed.
    pub fn write(&self, scored: &[SentiScoredPost], path: &Path) -> Result<SentiExportStats> {
        let bytes = self.render_bytes(scored)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if self.config.atomic_write {
            let temp_path = self.temp_path(path);
            fs::write(&temp_path, &bytes)?;
            fs::rename(&temp_path, path)?;
        } else {
            fs::write(path, &bytes)?;
        }

        let stats = SentiExportStats {
            rows_written: scored.len(),
            bytes_written: bytes.len(),
        };
        log::info!(
            "exported {} rows ({} bytes) to {}",
            stats.rows_written,
            stats.bytes_written,
            path.display()
        );
        Ok(stats)
    }

    /// Renders the batch to an in-memory CSV string.
    ///
    /// Used for download-style consumers that never touch the filesystem.
    pub fn render_string(&self, scored: &[SentiScoredPost]) -> Result<String> {
        let bytes = self.render_bytes(scored)?;
        String::from_utf8(bytes)
            .map_err(|e| SentiError::export(format!("export was not valid utf-8: {}", e)))
    }

    fn render_bytes(&self, scored: &[SentiScoredPost]) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(Vec::new());

        writer.write_record(EXPORT_HEADERS)?;
        for item in scored {
            writer.write_record(&row(item))?;
        }

        writer
            .into_inner()
            .map_err(|e| SentiError::export(format!("finalizing csv buffer: {}", e)))
    }

    /// Temporary path for atomic writes.
    fn temp_path(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("export");
        let parent = path.parent().unwrap_or(Path::new("."));
        parent.join(format!(".{}.tmp", stem))
    }
}

/// The nine field values for one scored post, in header order.
fn row(item: &SentiScoredPost) -> [String; 9] {
    [
        item.post.text.clone(),
        item.post.url.clone(),
        item.label.as_str().to_string(),
        item.opinion.polarity.to_string(),
        item.opinion.subjectivity.to_string(),
        item.score.pos.to_string(),
        item.score.neg.to_string(),
        item.score.neu.to_string(),
        item.score.compound.to_string(),
    ]
}
