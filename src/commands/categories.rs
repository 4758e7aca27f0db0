// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{TransactionKind, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::utils::{optional_arg, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let only = optional_arg(sub, "type")
            .map(str::parse::<TransactionKind>)
            .transpose()?;
        println!("{}", pretty_table(&["Type", "Category"], rows(only)));
    }
    Ok(())
}

/// Suggested categories, income first.
pub fn rows(only: Option<TransactionKind>) -> Vec<Vec<String>> {
    [
        (TransactionKind::Income, INCOME_CATEGORIES),
        (TransactionKind::Expense, EXPENSE_CATEGORIES),
    ]
    .into_iter()
    .filter(|(kind, _)| only.is_none_or(|k| k == *kind))
    .flat_map(|(kind, names)| {
        names
            .iter()
            .map(move |name| vec![kind.to_string(), name.to_string()])
    })
    .collect()
}
