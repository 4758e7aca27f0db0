// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::documents::DocumentArchive;
use crate::models::{DocumentKind, NewDocument};
use crate::store::RecordStore;
use crate::utils::{maybe_print_json, optional_arg, parse_date, pretty_table, required_arg, today};
use anyhow::Result;

pub fn handle<S: RecordStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = NewDocument {
        name: required_arg(sub, "name")?.to_string(),
        kind: required_arg(sub, "type")?.parse::<DocumentKind>()?,
        date: match optional_arg(sub, "date") {
            Some(v) => parse_date(v)?,
            None => today(),
        },
        size: optional_arg(sub, "size").unwrap_or_default().to_string(),
    };
    let doc = DocumentArchive::new(store).add(data)?;
    println!("Registered {} '{}' (id: {})", doc.kind, doc.name, doc.id);
    Ok(())
}

fn list<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let kind = optional_arg(sub, "type")
        .map(str::parse::<DocumentKind>)
        .transpose()?;
    let data = DocumentArchive::new(store).filter(kind, optional_arg(sub, "search"));
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|d| {
                vec![
                    d.id.clone(),
                    d.date.to_string(),
                    d.kind.to_string(),
                    d.name.clone(),
                    d.size.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Type", "Name", "Size"], rows)
        );
    }
    Ok(())
}

fn remove<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let id = required_arg(sub, "id")?;
    DocumentArchive::new(store).remove(id)?;
    println!("Removed document {}", id);
    Ok(())
}
