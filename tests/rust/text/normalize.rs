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

use proptest::prelude::*;

use sentix::normalize::SentiNormalizer;

fn normalizer() -> SentiNormalizer {
    SentiNormalizer::new().unwrap()
}

#[test]
fn cleaning_sequence_end_to_end() {
    let n = normalizer();
    assert_eq!(n.normalize("Check https://x.com #Rust @you 42 times!!"), "check times");
}

#[test]
fn urls_are_removed_until_whitespace() {
    let n = normalizer();
    assert_eq!(n.normalize("see http://a.b/c?d=e,f now"), "see now");
    assert_eq!(n.normalize("https://only.url"), "");
}

#[test]
fn hashtags_and_mentions_vanish_whole() {
    let n = normalizer();
    assert_eq!(n.normalize("#TagOne text #tag_two"), "text");
    assert_eq!(n.normalize("@alice hi @bob_91"), "hi");
}

#[test]
fn corpus_joins_normalized_texts() {
    let n = normalizer();
    let texts = vec![
        "I love this! #great".to_string(),
        "Terrible day http://x.co @bob".to_string(),
    ];
    assert_eq!(n.corpus(&texts), "i love this terrible day");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "\\PC*") {
        let n = normalizer();
        let once = n.normalize(&text);
        let twice = n.normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_has_no_ascii_digits(text in "\\PC*") {
        let n = normalizer();
        let cleaned = n.normalize(&text);
        prop_assert!(!cleaned.chars().any(|c| c.is_ascii_digit()), "{:?}", cleaned);
    }

    #[test]
    fn output_is_lowercase(text in "\\PC*") {
        let n = normalizer();
        let cleaned = n.normalize(&text);
        prop_assert_eq!(cleaned.clone(), cleaned.to_lowercase());
    }

    #[test]
    fn output_has_single_space_separators(text in "\\PC*") {
        let n = normalizer();
        let cleaned = n.normalize(&text);
        prop_assert!(!cleaned.contains("  "), "{:?}", cleaned);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }
}
