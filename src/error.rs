// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failures surfaced by the record store and the trackers built on it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No {collection} found with id '{id}'")]
    NotFound { collection: &'static str, id: String },

    #[error("Invalid {field} '{value}': must be greater than zero")]
    InvalidAmount { field: &'static str, value: Decimal },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            collection,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Rejects zero and negative amounts at a write boundary.
pub fn ensure_positive(field: &'static str, value: Decimal) -> Result<Decimal> {
    if value <= Decimal::ZERO {
        return Err(Error::InvalidAmount { field, value });
    }
    Ok(value)
}
