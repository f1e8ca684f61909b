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

use std::fs;

use sentix::export::{SentiCsvWriter, EXPORT_HEADERS};
use sentix::post::{SentiPost, SentiScoredPost};
use sentix::score::SentiAnalyzer;

fn score_texts(texts: &[&str]) -> Vec<SentiScoredPost> {
    let analyzer = SentiAnalyzer::new();
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let post = SentiPost::new(*text, format!("https://example.social/@a/{}", i));
            analyzer.annotate(&post, text)
        })
        .collect()
}

fn read_back(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let records = reader.records().map(|r| r.unwrap()).collect();
    (headers, records)
}

#[test]
fn file_has_contract_header_and_one_row_per_post() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentiment.csv");
    let scored = score_texts(&[
        "I love this! #great",
        "Terrible day http://x.co @bob",
        "It is ok",
    ]);

    let stats = SentiCsvWriter::default().write(&scored, &path).unwrap();
    assert_eq!(stats.rows_written, 3);

    let (headers, records) = read_back(&path);
    assert_eq!(headers, EXPORT_HEADERS);
    assert_eq!(records.len(), 3);
    for record in &records {
        assert_eq!(record.len(), 9);
    }
}

#[test]
fn sentiment_column_holds_lowercase_labels_in_fetch_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentiment.csv");
    let scored = score_texts(&[
        "I love this! #great",
        "Terrible day http://x.co @bob",
        "It is ok",
    ]);

    SentiCsvWriter::default().write(&scored, &path).unwrap();

    let (_, records) = read_back(&path);
    assert_eq!(&records[0][2], "positive");
    assert_eq!(&records[1][2], "negative");
    assert_eq!(&records[2][2], "neutral");
    assert_eq!(&records[0][0], "I love this! #great");
    assert_eq!(&records[1][1], "https://example.social/@a/1");
}

#[test]
fn semicolons_and_quotes_survive_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentiment.csv");
    let awkward = "good; bad; \"mixed\" feelings";
    let scored = score_texts(&[awkward]);

    SentiCsvWriter::default().write(&scored, &path).unwrap();

    let (_, records) = read_back(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(&records[0][0], awkward);
}

#[test]
fn numeric_columns_parse_within_their_ranges() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentiment.csv");
    let scored = score_texts(&["What a wonderful, happy result!", "so bad it hurts"]);

    SentiCsvWriter::default().write(&scored, &path).unwrap();

    let (_, records) = read_back(&path);
    for record in &records {
        let polarity: f64 = record[3].parse().unwrap();
        let subjectivity: f64 = record[4].parse().unwrap();
        let pos: f64 = record[5].parse().unwrap();
        let neg: f64 = record[6].parse().unwrap();
        let neu: f64 = record[7].parse().unwrap();
        let compound: f64 = record[8].parse().unwrap();

        assert!((-1.0..=1.0).contains(&polarity));
        assert!((0.0..=1.0).contains(&subjectivity));
        assert!((0.0..=1.0).contains(&pos));
        assert!((0.0..=1.0).contains(&neg));
        assert!((0.0..=1.0).contains(&neu));
        assert!((-1.0..=1.0).contains(&compound));
    }
}

#[test]
fn empty_batch_writes_header_only_and_no_leftovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentiment.csv");

    let stats = SentiCsvWriter::default().write(&[], &path).unwrap();
    assert_eq!(stats.rows_written, 0);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "temp file left behind");
}
