// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketbook::{cli, commands, db};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries tables and JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&store, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&store, sub)?,
        Some(("doc", sub)) => commands::documents::handle(&store, sub)?,
        Some(("portfolio", sub)) => commands::portfolio::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("settings", sub)) => commands::settings::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
