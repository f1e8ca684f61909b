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

//! Senti command line interface.
//!
//! Fetches posts for a query, prints the scored table and breakdown, and
//! writes the CSV export, word cloud, and donut chart into the output
//! directory. Image rendering is best effort; the CSV is not.

use std::path::PathBuf;

use clap::Parser;

use sentix::config::SentiConfig;
use sentix::export::{SentiCsvWriter, SentiExportConfig};
use sentix::pipeline::{SentiPipeline, SentiRunReport};
use sentix::translate::SentiEchoTranslator;
use sentix::viz::{SentiDonutChart, SentiWordCloud, SentiWordCloudConfig};

#[derive(Debug, Parser)]
#[command(name = "senti", version)]
#[command(about = "Measure the sentiment pulse of a topic on the fediverse")]
struct Cli {
    /// Topic to analyze, e.g. "#rustlang" or "climate"
    query: Option<String>,

    /// Number of posts to fetch
    #[arg(short = 'n', long, default_value_t = 10,
          value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the CSV and images
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Mask image constraining the word cloud shape
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Seed for word-cloud placement
    #[arg(long)]
    seed: Option<u64>,

    /// Score the raw text without translating it
    #[arg(long)]
    no_translate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SentiConfig::from_yaml_file(path)?,
        None => SentiConfig::default(),
    };
    if let Some(dir) = &cli.out_dir {
        config.output.dir = dir.clone();
    }
    if let Some(mask) = &cli.mask {
        config.output.mask = Some(mask.clone());
    }

    let query = match &cli.query {
        Some(query) if !query.trim().is_empty() => query.clone(),
        _ => {
            print_guidance();
            return Ok(());
        }
    };

    let pipeline = if cli.no_translate {
        SentiPipeline::with_translator(&config, Box::new(SentiEchoTranslator))?
    } else {
        SentiPipeline::new(&config)?
    };

    let report = pipeline.run(&query, cli.count as usize).await?;
    print_report(&report);

    let csv_path = config.output.csv_path();
    let writer = SentiCsvWriter::new(SentiExportConfig::default());
    writer.write(&report.scored, &csv_path)?;
    println!();
    println!("CSV:        {}", csv_path.display());

    let mut cloud_config = SentiWordCloudConfig::default();
    cloud_config.mask = config.output.mask.clone();
    if let Some(seed) = cli.seed {
        cloud_config.seed = seed;
    }
    let cloud_path = config.output.wordcloud_path();
    match SentiWordCloud::new(cloud_config).render(&report.corpus, &cloud_path) {
        Ok(()) => println!("Word cloud: {}", cloud_path.display()),
        Err(err) => eprintln!("word cloud skipped: {}", err),
    }

    let chart_path = config.output.chart_path();
    if report.breakdown.total > 0 {
        match SentiDonutChart::default().render(&report.breakdown, &chart_path) {
            Ok(()) => println!("Chart:      {}", chart_path.display()),
            Err(err) => eprintln!("chart skipped: {}", err),
        }
    }

    Ok(())
}

fn print_guidance() {
    println!("senti measures the sentiment pulse of a topic on the fediverse.");
    println!();
    println!("usage: senti <QUERY> [-n COUNT]");
    println!();
    println!("example queries: #rustlang, #climate, #worldcup, elections");
}

fn print_report(report: &SentiRunReport) {
    println!();
    println!("{:<4} {:<9} {:>9}  {}", "#", "LABEL", "COMPOUND", "TEXT");
    for (i, item) in report.scored.iter().enumerate() {
        println!(
            "{:<4} {:<9} {:>9.4}  {}",
            i + 1,
            item.label.to_string(),
            item.score.compound,
            preview(&item.post.text, 64)
        );
    }

    let breakdown = &report.breakdown;
    println!();
    println!(
        "{} posts for {:?}: {} positive ({}%), {} negative ({}%), {} neutral ({}%)",
        breakdown.total,
        report.query,
        breakdown.positive,
        breakdown.positive_pct,
        breakdown.negative,
        breakdown.negative_pct,
        breakdown.neutral,
        breakdown.neutral_pct
    );

    if !report.failures.is_empty() {
        println!();
        println!(
            "{} of {} posts could not be scored:",
            report.failures.len(),
            report.failures.len() + report.scored.len()
        );
        for failure in &report.failures {
            println!("  [{}] {}: {}", failure.index + 1, failure.url, failure.message);
        }
    }
}

/// First `max` characters of the text, ellipsized, newlines flattened.
fn preview(text: &str, max: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        flat
    } else {
        let mut cut: String = flat.chars().take(max).collect();
        cut.push_str("...");
        cut
    }
}
