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

//! # Senti Error Module
//!
//! This module defines the error types and utilities used throughout Senti
//! for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Senti uses a structured error approach with the following principles:
//!
//! - **Explicit Error Types**: Each error variant represents a specific category
//!   of failure, making it easier to handle errors appropriately
//! - **Context-Rich**: Errors include relevant context (stage names, upstream
//!   service causes, detailed messages) to aid debugging
//! - **Recoverable**: A failed run surfaces as an explicit reported error state,
//!   never as a crashed session
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors
//! - **Http**: Transport-level failures talking to external services
//! - **Fetch**: Search-source failures (bad status, malformed payload)
//! - **Translate**: Translation-service failures for a single post
//! - **Validation**: Input validation failures (empty query, zero count)
//! - **Render**: Word-cloud or chart rendering failures
//! - **Export**: Tabular export failures
//! - **Serde**: Serialization/deserialization errors
//! - **Pipeline**: Failures while orchestrating an analysis run
//! - **Internal**: Unexpected internal failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Senti.
///
/// This is a type alias for `std::result::Result<T, SentiError>` that provides
/// a more concise way to write function signatures that return Senti errors.
pub type Result<T> = std::result::Result<T, SentiError>;

/// Canonical error enumeration for Senti.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SentiError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Transport-level errors talking to an external service.
    #[error("http error: {0}")]
    Http(String),

    /// Failures raised by the search source.
    #[error("fetch failed: {message}")]
    Fetch { message: String },

    /// Failures raised by the translation service for one post.
    #[error("translation failed: {message}")]
    Translate { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Failures while rendering a visualization.
    #[error("render error: {message}")]
    Render { message: String },

    /// Failures while writing the tabular export.
    #[error("export error: {message}")]
    Export { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failures that occur while orchestrating an analysis run.
    #[error("pipeline error at stage '{stage}': {message}")]
    Pipeline { stage: String, message: String },

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for SentiError {
    fn from(err: io::Error) -> Self {
        SentiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SentiError {
    fn from(err: serde_json::Error) -> Self {
        SentiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for SentiError {
    fn from(err: serde_yaml::Error) -> Self {
        SentiError::Serde(err.to_string())
    }
}

impl From<reqwest::Error> for SentiError {
    fn from(err: reqwest::Error) -> Self {
        SentiError::Http(err.to_string())
    }
}

impl From<csv::Error> for SentiError {
    fn from(err: csv::Error) -> Self {
        SentiError::Export {
            message: err.to_string(),
        }
    }
}

impl From<regex::Error> for SentiError {
    fn from(err: regex::Error) -> Self {
        SentiError::Internal(format!("regex compilation failed: {}", err))
    }
}

impl SentiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        SentiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct fetch errors.
    pub fn fetch<T: Into<String>>(message: T) -> Self {
        SentiError::Fetch {
            message: message.into(),
        }
    }

    /// Helper to construct translation errors.
    pub fn translate<T: Into<String>>(message: T) -> Self {
        SentiError::Translate {
            message: message.into(),
        }
    }

    /// Helper to construct render errors.
    pub fn render<T: Into<String>>(message: T) -> Self {
        SentiError::Render {
            message: message.into(),
        }
    }

    /// Helper to construct export errors.
    pub fn export<T: Into<String>>(message: T) -> Self {
        SentiError::Export {
            message: message.into(),
        }
    }

    /// Helper to construct pipeline errors.
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        SentiError::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        SentiError::Internal(message.into())
    }
}
