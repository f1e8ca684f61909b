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

//! # Senti Export Module
//!
//! Writes a scored batch to a semicolon-delimited CSV so the run can be
//! inspected in a spreadsheet. One header row, one row per scored post,
//! nine columns from raw text through the compound score.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sentix::export::{SentiCsvWriter, SentiExportConfig};
//!
//! let writer = SentiCsvWriter::new(SentiExportConfig::default());
//! let stats = writer.write(&scored, &path)?;
//! ```

pub mod writer;

pub use writer::{SentiCsvWriter, SentiExportConfig, SentiExportStats, EXPORT_HEADERS};
