// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Error;
use crate::goals::GoalTracker;
use crate::models::{NewGoal, Priority};
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::utils::{
    fmt_money, fmt_percent, maybe_print_json, optional_arg, parse_date, parse_decimal,
    pretty_table, required_arg, today,
};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle<S: RecordStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("fund", sub)) => fund(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = NewGoal {
        name: required_arg(sub, "name")?.to_string(),
        icon: optional_arg(sub, "icon").unwrap_or("💰").to_string(),
        target_amount: parse_decimal(required_arg(sub, "target")?)?,
        current_amount: optional_arg(sub, "current")
            .map(parse_decimal)
            .transpose()?
            .unwrap_or(Decimal::ZERO),
        deadline: parse_date(required_arg(sub, "deadline")?)?,
        category: optional_arg(sub, "category").unwrap_or("savings").to_string(),
        priority: optional_arg(sub, "priority")
            .map(str::parse::<Priority>)
            .transpose()?
            .unwrap_or_default(),
        notes: optional_arg(sub, "notes").unwrap_or_default().to_string(),
    };
    let goal = GoalTracker::new(store).add(data)?;
    println!("Goal '{}' created (id: {})", goal.name, goal.id);
    Ok(())
}

#[derive(Serialize)]
struct GoalRow {
    id: String,
    name: String,
    category: String,
    priority: String,
    current_amount: Decimal,
    target_amount: Decimal,
    progress_percent: Decimal,
    deadline: String,
    days_left: i64,
}

fn list<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let category = optional_arg(sub, "category").unwrap_or("all");
    let now = today();
    let data: Vec<GoalRow> = GoalTracker::new(store)
        .by_category(category)
        .into_iter()
        .map(|g| GoalRow {
            progress_percent: g.progress_percent().round_dp(2),
            days_left: g.days_left(now),
            deadline: g.deadline.to_string(),
            priority: g.priority.to_string(),
            current_amount: g.current_amount,
            target_amount: g.target_amount,
            id: g.id,
            name: format!("{} {}", g.icon, g.name).trim().to_string(),
            category: g.category,
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = Settings::load(store).currency_symbol;
        let rows = data
            .iter()
            .map(|g| {
                vec![
                    g.id.clone(),
                    g.name.clone(),
                    g.category.clone(),
                    g.priority.clone(),
                    format!(
                        "{} / {}",
                        fmt_money(&g.current_amount, &symbol),
                        fmt_money(&g.target_amount, &symbol)
                    ),
                    fmt_percent(&g.progress_percent),
                    format!("{} ({} days)", g.deadline, g.days_left),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Goal", "Category", "Priority", "Saved", "Progress", "Deadline"],
                rows,
            )
        );
    }
    Ok(())
}

fn edit<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let tracker = GoalTracker::new(store);
    let id = required_arg(sub, "id")?;
    let mut goal = tracker
        .find(id)
        .ok_or_else(|| Error::not_found("goal", id))?;

    if let Some(v) = optional_arg(sub, "name") {
        goal.name = v.to_string();
    }
    if let Some(v) = optional_arg(sub, "target") {
        goal.target_amount = parse_decimal(v)?;
    }
    if let Some(v) = optional_arg(sub, "current") {
        goal.current_amount = parse_decimal(v)?;
    }
    if let Some(v) = optional_arg(sub, "deadline") {
        goal.deadline = parse_date(v)?;
    }
    if let Some(v) = optional_arg(sub, "icon") {
        goal.icon = v.to_string();
    }
    if let Some(v) = optional_arg(sub, "category") {
        goal.category = v.to_string();
    }
    if let Some(v) = optional_arg(sub, "priority") {
        goal.priority = v.parse()?;
    }
    if let Some(v) = sub.get_one::<String>("notes") {
        goal.notes = v.trim().to_string();
    }

    let goal = tracker.update(goal)?;
    println!("Updated goal '{}' ({})", goal.name, goal.id);
    Ok(())
}

fn fund<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let id = required_arg(sub, "id")?;
    let amount = parse_decimal(required_arg(sub, "amount")?)?;
    let goal = GoalTracker::new(store).add_funds(id, amount)?;
    let symbol = Settings::load(store).currency_symbol;
    println!(
        "Added {} to '{}': {} of {} ({})",
        fmt_money(&amount, &symbol),
        goal.name,
        fmt_money(&goal.current_amount, &symbol),
        fmt_money(&goal.target_amount, &symbol),
        fmt_percent(&goal.progress_percent())
    );
    Ok(())
}

fn remove<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let id = required_arg(sub, "id")?;
    GoalTracker::new(store).remove(id)?;
    println!("Removed goal {}", id);
    Ok(())
}
