// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn req(name: &'static str, help: &'static str) -> Arg {
    opt(name, help).required(true)
}

fn id_arg() -> Arg {
    req("id", "Record id")
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Income and expense transactions")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(req("date", "YYYY-MM-DD"))
                .arg(req("amount", "Positive amount"))
                .arg(req("description", "What the money was for"))
                .arg(req("type", "income|expense"))
                .arg(req("category", "Category name"))
                .arg(opt("notes", "Free-form notes")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions, most recently added first")
                .arg(opt("type", "Only income|expense"))
                .arg(opt("search", "Match description or category"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Show at most N rows"),
                ),
        ))
        .subcommand(
            Command::new("edit")
                .about("Replace fields of a transaction")
                .arg(id_arg())
                .arg(opt("date", "YYYY-MM-DD"))
                .arg(opt("amount", "Positive amount"))
                .arg(opt("description", "Description"))
                .arg(opt("type", "income|expense"))
                .arg(opt("category", "Category name"))
                .arg(opt("notes", "Free-form notes")),
        )
        .subcommand(Command::new("rm").about("Delete a transaction").arg(id_arg()))
        .subcommand(json_flags(
            Command::new("totals").about("Total income, expense and net balance"),
        ))
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Spending budgets matched by name")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Create a budget")
                .arg(req("name", "Matched against transaction descriptions"))
                .arg(req("limit", "Spending limit"))
                .arg(req("category", "Display category"))
                .arg(opt("period", "weekly|monthly|yearly").default_value("monthly"))
                .arg(opt("color", "Display color").default_value("blue")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("Budgets with live spend")
                .arg(opt("strategy", "name|category").default_value("name"))
                .arg(
                    Arg::new("stored")
                        .long("stored")
                        .action(ArgAction::SetTrue)
                        .help("Show the persisted spend instead of recomputing"),
                ),
        ))
        .subcommand(
            Command::new("edit")
                .about("Replace fields of a budget")
                .arg(id_arg())
                .arg(opt("name", "Budget name"))
                .arg(opt("limit", "Spending limit"))
                .arg(opt("category", "Display category"))
                .arg(opt("period", "weekly|monthly|yearly"))
                .arg(opt("color", "Display color")),
        )
        .subcommand(Command::new("rm").about("Delete a budget").arg(id_arg()))
        .subcommand(
            Command::new("recompute")
                .about("Recompute and store spend for every budget")
                .arg(opt("strategy", "name|category").default_value("name")),
        )
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Savings goals")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Create a goal")
                .arg(req("name", "Goal name"))
                .arg(req("target", "Target amount"))
                .arg(req("deadline", "YYYY-MM-DD"))
                .arg(opt("current", "Amount already saved").default_value("0"))
                .arg(opt("icon", "Display glyph").default_value("💰"))
                .arg(opt("category", "Goal category").default_value("savings"))
                .arg(opt("priority", "low|medium|high").default_value("medium"))
                .arg(opt("notes", "Free-form notes")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List goals")
                .arg(opt("category", "Only this category").default_value("all")),
        ))
        .subcommand(
            Command::new("edit")
                .about("Replace fields of a goal")
                .arg(id_arg())
                .arg(opt("name", "Goal name"))
                .arg(opt("target", "Target amount"))
                .arg(opt("current", "Amount saved"))
                .arg(opt("deadline", "YYYY-MM-DD"))
                .arg(opt("icon", "Display glyph"))
                .arg(opt("category", "Goal category"))
                .arg(opt("priority", "low|medium|high"))
                .arg(opt("notes", "Free-form notes")),
        )
        .subcommand(
            Command::new("fund")
                .about("Add money to a goal")
                .arg(id_arg())
                .arg(req("amount", "Positive contribution")),
        )
        .subcommand(Command::new("rm").about("Delete a goal").arg(id_arg()))
}

fn doc_cmd() -> Command {
    Command::new("doc")
        .about("Document metadata")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Register a document")
                .arg(req("name", "File name"))
                .arg(req("type", "receipt|bill|statement|tax|insurance|budget|other"))
                .arg(opt("date", "YYYY-MM-DD, defaults to today"))
                .arg(opt("size", "Display size, e.g. 1.2 MB").default_value("")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List documents, newest first")
                .arg(opt("type", "Only this document type"))
                .arg(opt("search", "Match document name")),
        ))
        .subcommand(Command::new("rm").about("Delete a document").arg(id_arg()))
}

fn portfolio_cmd() -> Command {
    Command::new("portfolio")
        .about("Manually priced investment holdings")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add a stock or crypto holding")
                .arg(req("kind", "stock|crypto"))
                .arg(req("name", "Holding name"))
                .arg(req("symbol", "Ticker or coin symbol"))
                .arg(req("quantity", "Shares or units"))
                .arg(req("buy-price", "Price paid per unit")),
        )
        .subcommand(json_flags(Command::new("list").about("List holdings")))
        .subcommand(
            Command::new("price")
                .about("Record the current price of a holding")
                .arg(id_arg())
                .arg(req("price", "Current price per unit")),
        )
        .subcommand(Command::new("rm").about("Delete a holding").arg(id_arg()))
        .subcommand(json_flags(
            Command::new("summary").about("Portfolio value and gain/loss"),
        ))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Summaries, breakdowns and insights")
        .subcommand_required(true)
        .subcommand(json_flags(
            Command::new("summary").about("Income, expense, net balance and savings rate"),
        ))
        .subcommand(json_flags(
            Command::new("breakdown")
                .about("Expenses by category")
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Do not fold small categories into Other"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("monthly")
                .about("Monthly income, expense and savings")
                .arg(opt("months", "1|3|6|12").default_value("6"))
                .arg(opt("end", "Window end YYYY-MM-DD, defaults to today")),
        ))
        .subcommand(json_flags(
            Command::new("insights").about("Observations about your finances"),
        ))
}

fn settings_cmd() -> Command {
    Command::new("settings")
        .about("Display preferences")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show current settings"))
        .subcommand(
            Command::new("currency")
                .about("Set the display currency")
                .arg(req("code", "ISO code, e.g. USD"))
                .arg(req("symbol", "Symbol shown before amounts")),
        )
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .version(clap::crate_version!())
        .about("Local-first personal finance: ledger, budgets, goals and reports")
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(tx_cmd())
        .subcommand(budget_cmd())
        .subcommand(goal_cmd())
        .subcommand(doc_cmd())
        .subcommand(portfolio_cmd())
        .subcommand(report_cmd())
        .subcommand(
            Command::new("category")
                .about("Suggested categories")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List suggested categories")
                        .arg(opt("type", "Only income|expense")),
                ),
        )
        .subcommand(settings_cmd())
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand_required(true)
                .subcommand(
                    Command::new("transactions")
                        .about("Export the ledger")
                        .arg(req("format", "csv|json"))
                        .arg(req("out", "Output file")),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        build_cli().debug_assert();
    }
}
