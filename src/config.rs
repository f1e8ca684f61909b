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

//! # Senti Configuration Module
//!
//! Run configuration for the fetcher, the translator, and output artifacts.
//! Every field has a default so an empty YAML file (or none at all) yields a
//! working setup; the CLI overrides individual fields on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Top-level configuration for one analysis session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SentiConfig {
    /// Search-source settings.
    #[serde(default)]
    pub fetch: SentiFetchConfig,

    /// Translation-service settings.
    #[serde(default)]
    pub translate: SentiTranslateConfig,

    /// Output artifact settings.
    #[serde(default)]
    pub output: SentiOutputConfig,
}

impl SentiConfig {
    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: SentiConfig = serde_yaml::from_str(&raw)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Settings for the search source.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SentiFetchConfig {
    /// Base URL of the instance to query.
    pub instance: String,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Statuses requested per page (the API caps this at 40).
    pub page_size: usize,
}

impl Default for SentiFetchConfig {
    fn default() -> Self {
        Self {
            instance: "https://mastodon.social".to_string(),
            user_agent: format!("senti/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 20,
            page_size: 40,
        }
    }
}

/// Settings for the translation service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SentiTranslateConfig {
    /// Endpoint of the translation service.
    pub endpoint: String,

    /// Target language code posts are translated into before scoring.
    pub target: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum number of in-flight translation requests.
    pub concurrency: usize,
}

impl Default for SentiTranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            target: "en".to_string(),
            timeout_secs: 15,
            concurrency: 4,
        }
    }
}

/// Settings for output artifacts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SentiOutputConfig {
    /// Directory all artifacts are written into.
    pub dir: PathBuf,

    /// File name of the tabular export.
    pub csv_name: String,

    /// File name of the word-cloud image.
    pub wordcloud_name: String,

    /// File name of the donut-chart image.
    pub chart_name: String,

    /// Optional mask image confining word-cloud placement.
    pub mask: Option<PathBuf>,
}

impl Default for SentiOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            csv_name: "sentiment_analysis.csv".to_string(),
            wordcloud_name: "wordcloud.png".to_string(),
            chart_name: "sentiment_chart.png".to_string(),
            mask: None,
        }
    }
}

impl SentiOutputConfig {
    /// Full path of the tabular export.
    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_name)
    }

    /// Full path of the word-cloud image.
    pub fn wordcloud_path(&self) -> PathBuf {
        self.dir.join(&self.wordcloud_name)
    }

    /// Full path of the donut-chart image.
    pub fn chart_path(&self) -> PathBuf {
        self.dir.join(&self.chart_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_usable() {
        let config = SentiConfig::default();
        assert_eq!(config.fetch.page_size, 40);
        assert_eq!(config.translate.target, "en");
        assert_eq!(config.output.csv_name, "sentiment_analysis.csv");
        assert!(config.output.mask.is_none());
    }

    #[test]
    fn partial_yaml_fills_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fetch:\n  instance: \"https://fosstodon.org\"").unwrap();
        let config = SentiConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.fetch.instance, "https://fosstodon.org");
        // untouched sections fall back to defaults
        assert_eq!(config.translate.concurrency, 4);
        assert_eq!(config.output.chart_name, "sentiment_chart.png");
    }

    #[test]
    fn artifact_paths_join_the_output_dir() {
        let output = SentiOutputConfig {
            dir: PathBuf::from("/tmp/run"),
            ..Default::default()
        };
        assert_eq!(output.csv_path(), PathBuf::from("/tmp/run/sentiment_analysis.csv"));
        assert_eq!(output.wordcloud_path(), PathBuf::from("/tmp/run/wordcloud.png"));
    }
}
