// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::budgets::refresh_spent;
use crate::error::Error;
use crate::ledger::{Ledger, TransactionFilter};
use crate::models::{NewTransaction, Transaction, TransactionKind};
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::utils::{
    fmt_money, maybe_print_json, optional_arg, parse_date, parse_decimal, pretty_table,
    required_arg,
};
use anyhow::Result;

pub fn handle<S: RecordStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("totals", sub)) => totals(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = NewTransaction {
        description: required_arg(sub, "description")?.to_string(),
        amount: parse_decimal(required_arg(sub, "amount")?)?,
        kind: required_arg(sub, "type")?.parse::<TransactionKind>()?,
        category: required_arg(sub, "category")?.to_string(),
        date: parse_date(required_arg(sub, "date")?)?,
        notes: optional_arg(sub, "notes").unwrap_or_default().to_string(),
    };
    let tx = Ledger::new(store).add(data)?;
    refresh_spent(store)?;
    let symbol = Settings::load(store).currency_symbol;
    println!(
        "Recorded {} {} on {} '{}' (id: {})",
        tx.kind,
        fmt_money(&tx.amount, &symbol),
        tx.date,
        tx.description,
        tx.id
    );
    Ok(())
}

fn list<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = Settings::load(store).currency_symbol;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    fmt_money(&t.amount, &symbol),
                    t.notes.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Description", "Category", "Amount", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}

/// Transactions selected by the `list` flags, in ledger order.
pub fn query_rows<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let filter = TransactionFilter {
        kind: optional_arg(sub, "type")
            .map(str::parse::<TransactionKind>)
            .transpose()?,
        query: optional_arg(sub, "search").map(str::to_string),
    };
    let mut data = Ledger::new(store).search(&filter);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn edit<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let ledger = Ledger::new(store);
    let id = required_arg(sub, "id")?;
    let mut tx = ledger
        .find(id)
        .ok_or_else(|| Error::not_found("transaction", id))?;

    if let Some(v) = optional_arg(sub, "date") {
        tx.date = parse_date(v)?;
    }
    if let Some(v) = optional_arg(sub, "amount") {
        tx.amount = parse_decimal(v)?;
    }
    if let Some(v) = optional_arg(sub, "description") {
        tx.description = v.to_string();
    }
    if let Some(v) = optional_arg(sub, "type") {
        tx.kind = v.parse()?;
    }
    if let Some(v) = optional_arg(sub, "category") {
        tx.category = v.to_string();
    }
    if let Some(v) = sub.get_one::<String>("notes") {
        tx.notes = v.trim().to_string();
    }

    let tx = ledger.update(tx)?;
    refresh_spent(store)?;
    println!("Updated transaction {}", tx.id);
    Ok(())
}

fn remove<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let id = required_arg(sub, "id")?;
    Ledger::new(store).remove(id)?;
    refresh_spent(store)?;
    println!("Removed transaction {}", id);
    Ok(())
}

fn totals<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let totals = Ledger::new(store).totals();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let symbol = Settings::load(store).currency_symbol;
        println!(
            "{}",
            pretty_table(
                &["Income", "Expense", "Net balance"],
                vec![vec![
                    fmt_money(&totals.income, &symbol),
                    fmt_money(&totals.expense, &symbol),
                    fmt_money(&totals.net, &symbol),
                ]],
            )
        );
    }
    Ok(())
}
