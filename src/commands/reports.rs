// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budgets::BudgetTracker;
use crate::insights;
use crate::ledger::Ledger;
use crate::reports::{self, Window};
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::utils::{
    fmt_money, fmt_percent, maybe_print_json, optional_arg, parse_date, pretty_table, today,
};
use anyhow::Result;

pub fn handle<S: RecordStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("breakdown", sub)) => breakdown(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("insights", sub)) => show_insights(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = reports::summary(&Ledger::new(store).list_all());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = Settings::load(store).currency_symbol;
        println!(
            "{}",
            pretty_table(
                &["Income", "Expense", "Net balance", "Savings rate", "Transactions"],
                vec![vec![
                    fmt_money(&data.income, &symbol),
                    fmt_money(&data.expense, &symbol),
                    fmt_money(&data.net, &symbol),
                    fmt_percent(&data.savings_rate),
                    data.transactions.to_string(),
                ]],
            )
        );
    }
    Ok(())
}

fn breakdown<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let txs = Ledger::new(store).list_all();
    let data = if sub.get_flag("all") {
        let mut all = reports::expenses_by_category(&txs);
        all.sort_by(|a, b| b.amount.cmp(&a.amount));
        all
    } else {
        reports::category_breakdown(&txs)
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = Settings::load(store).currency_symbol;
        let rows = data
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    fmt_money(&c.amount, &symbol),
                    fmt_percent(&c.percent),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}

fn monthly<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let window = optional_arg(sub, "months")
        .map(str::parse::<Window>)
        .transpose()?
        .unwrap_or_default();
    let end = match optional_arg(sub, "end") {
        Some(v) => parse_date(v)?,
        None => today(),
    };
    let data = reports::monthly_series(&Ledger::new(store).list_all(), window, end);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = Settings::load(store).currency_symbol;
        let rows = data
            .iter()
            .map(|b| {
                vec![
                    b.month.clone(),
                    fmt_money(&b.income, &symbol),
                    fmt_money(&b.expense, &symbol),
                    fmt_money(&b.savings, &symbol),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Savings"], rows)
        );
    }
    Ok(())
}

fn show_insights<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let txs = Ledger::new(store).list_all();
    let budgets = BudgetTracker::new(store).list_all();
    let data = insights::generate(&txs, &budgets);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        for insight in &data {
            println!("[{:?}] {}", insight.tone, insight.text);
        }
    }
    Ok(())
}
