// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::store::RecordStore;
use crate::utils::required_arg;
use anyhow::{bail, Result};
use std::path::Path;

pub fn handle<S: RecordStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let fmt = required_arg(sub, "format")?.to_lowercase();
            let out = required_arg(sub, "out")?;
            let count = export_transactions(&Ledger::new(store).list_all(), &fmt, Path::new(out))?;
            println!("Exported {} transaction(s) to {}", count, out);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Writes the ledger as `csv` or `json`. Unknown formats fail before the
/// output file is created.
pub fn export_transactions(txs: &[Transaction], fmt: &str, out: &Path) -> Result<usize> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id", "date", "type", "description", "category", "amount", "notes",
            ])?;
            for t in txs {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    t.amount.to_string(),
                    t.notes.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(txs)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    tracing::info!(count = txs.len(), format = fmt, "transactions exported");
    Ok(txs.len())
}
