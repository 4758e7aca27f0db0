// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::store::{get, set, CollectionKey, RecordStore};
use serde::{Deserialize, Serialize};

/// Display preferences. They only change how amounts are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub currency: String,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "CRC".to_string(),
            currency_symbol: "₡".to_string(),
        }
    }
}

impl Settings {
    pub fn load<S: RecordStore>(store: &S) -> Self {
        get(store, CollectionKey::Settings, Settings::default())
    }

    pub fn save<S: RecordStore>(&self, store: &S) -> Result<()> {
        set(store, CollectionKey::Settings, self)
    }
}
