// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budgets::{BudgetStatus, BudgetTracker, SpendStrategy};
use crate::error::Error;
use crate::models::{Budget, BudgetPeriod, NewBudget};
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::utils::{
    fmt_money, fmt_percent, maybe_print_json, optional_arg, parse_decimal, pretty_table,
    required_arg,
};
use anyhow::Result;

pub fn handle<S: RecordStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("recompute", sub)) => recompute(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Refreshes the stored spend of every budget after the ledger changed.
pub fn refresh_spent<S: RecordStore>(store: &S) -> Result<Vec<Budget>> {
    Ok(BudgetTracker::new(store).update_all_spent()?)
}

fn strategy_arg(sub: &clap::ArgMatches) -> Result<SpendStrategy> {
    optional_arg(sub, "strategy")
        .map(str::parse::<SpendStrategy>)
        .unwrap_or(Ok(SpendStrategy::ByName))
}

fn add<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = NewBudget {
        name: required_arg(sub, "name")?.to_string(),
        limit: parse_decimal(required_arg(sub, "limit")?)?,
        category: required_arg(sub, "category")?.to_string(),
        period: optional_arg(sub, "period")
            .map(str::parse::<BudgetPeriod>)
            .transpose()?
            .unwrap_or_default(),
        color: optional_arg(sub, "color").unwrap_or("blue").to_string(),
    };
    let budget = BudgetTracker::new(store).add(data)?;
    let symbol = Settings::load(store).currency_symbol;
    println!(
        "Budget '{}' created with limit {} ({} spent so far, id: {})",
        budget.name,
        fmt_money(&budget.limit, &symbol),
        fmt_money(&budget.spent, &symbol),
        budget.id
    );
    Ok(())
}

fn list<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let tracker = BudgetTracker::with_strategy(store, strategy_arg(sub)?);
    let budgets = if sub.get_flag("stored") {
        tracker.list_stored()
    } else {
        tracker.list_all()
    };
    let statuses: Vec<BudgetStatus> = budgets.iter().map(BudgetStatus::of).collect();
    if !maybe_print_json(json_flag, jsonl_flag, &statuses)? {
        let symbol = Settings::load(store).currency_symbol;
        let rows: Vec<Vec<String>> = budgets
            .iter()
            .zip(&statuses)
            .map(|(b, s)| {
                vec![
                    b.id.clone(),
                    b.name.clone(),
                    b.category.clone(),
                    b.period.to_string(),
                    fmt_money(&s.limit, &symbol),
                    fmt_money(&s.spent, &symbol),
                    fmt_money(&s.remaining, &symbol),
                    s.utilization
                        .as_ref()
                        .map(fmt_percent)
                        .unwrap_or_else(|| "-".into()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Name", "Category", "Period", "Limit", "Spent", "Remaining", "Used"],
                rows,
            )
        );
    }
    Ok(())
}

fn edit<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let tracker = BudgetTracker::new(store);
    let id = required_arg(sub, "id")?;
    let mut budget = tracker
        .list_stored()
        .into_iter()
        .find(|b| b.id == id)
        .ok_or_else(|| Error::not_found("budget", id))?;

    if let Some(v) = optional_arg(sub, "name") {
        budget.name = v.to_string();
    }
    if let Some(v) = optional_arg(sub, "limit") {
        budget.limit = parse_decimal(v)?;
    }
    if let Some(v) = optional_arg(sub, "category") {
        budget.category = v.to_string();
    }
    if let Some(v) = optional_arg(sub, "period") {
        budget.period = v.parse()?;
    }
    if let Some(v) = optional_arg(sub, "color") {
        budget.color = v.to_string();
    }

    let budget = tracker.update(budget)?;
    println!("Updated budget '{}' ({})", budget.name, budget.id);
    Ok(())
}

fn remove<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let id = required_arg(sub, "id")?;
    BudgetTracker::new(store).remove(id)?;
    println!("Removed budget {}", id);
    Ok(())
}

fn recompute<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let budgets = BudgetTracker::with_strategy(store, strategy_arg(sub)?).update_all_spent()?;
    println!("Recomputed spend for {} budget(s)", budgets.len());
    Ok(())
}
