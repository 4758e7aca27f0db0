// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::Settings;
use crate::store::RecordStore;
use crate::utils::{pretty_table, required_arg};
use anyhow::Result;

pub fn handle<S: RecordStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let s = Settings::load(store);
            println!(
                "{}",
                pretty_table(&["Currency", "Symbol"], vec![vec![s.currency, s.currency_symbol]])
            );
        }
        Some(("currency", sub)) => {
            let settings = Settings {
                currency: required_arg(sub, "code")?.to_uppercase(),
                currency_symbol: required_arg(sub, "symbol")?.to_string(),
            };
            settings.save(store)?;
            println!(
                "Display currency set to {} ({})",
                settings.currency, settings.currency_symbol
            );
        }
        _ => {}
    }
    Ok(())
}
