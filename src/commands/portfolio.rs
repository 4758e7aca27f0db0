// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{HoldingKind, NewHolding};
use crate::portfolio::Portfolio;
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::utils::{
    fmt_money, fmt_percent, maybe_print_json, parse_decimal, pretty_table, required_arg,
};
use anyhow::Result;

pub fn handle<S: RecordStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("price", sub)) => price(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("summary", sub)) => summary(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = NewHolding {
        kind: required_arg(sub, "kind")?.parse::<HoldingKind>()?,
        name: required_arg(sub, "name")?.to_string(),
        symbol: required_arg(sub, "symbol")?.to_string(),
        quantity: parse_decimal(required_arg(sub, "quantity")?)?,
        buy_price: parse_decimal(required_arg(sub, "buy-price")?)?,
    };
    let holding = Portfolio::new(store).add(data)?;
    println!(
        "Added {} {} x{} (id: {})",
        holding.kind, holding.symbol, holding.quantity, holding.id
    );
    Ok(())
}

fn list<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = Portfolio::new(store).list_all();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = Settings::load(store).currency_symbol;
        let rows = data
            .iter()
            .map(|h| {
                vec![
                    h.id.clone(),
                    h.kind.to_string(),
                    h.symbol.clone(),
                    h.name.clone(),
                    h.quantity.normalize().to_string(),
                    fmt_money(&h.buy_price, &symbol),
                    fmt_money(&h.current_price, &symbol),
                    fmt_percent(&h.change),
                    fmt_money(&h.market_value(), &symbol),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Kind", "Symbol", "Name", "Qty", "Buy", "Price", "Change", "Value"],
                rows,
            )
        );
    }
    Ok(())
}

fn price<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let id = required_arg(sub, "id")?;
    let price = parse_decimal(required_arg(sub, "price")?)?;
    let holding = Portfolio::new(store).update_price(id, price)?;
    println!(
        "{} now at {} ({})",
        holding.symbol,
        fmt_money(&holding.current_price, &Settings::load(store).currency_symbol),
        fmt_percent(&holding.change)
    );
    Ok(())
}

fn remove<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let id = required_arg(sub, "id")?;
    Portfolio::new(store).remove(id)?;
    println!("Removed holding {}", id);
    Ok(())
}

fn summary<S: RecordStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = Portfolio::new(store).summary();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = Settings::load(store).currency_symbol;
        println!(
            "{}",
            pretty_table(
                &["Stocks", "Crypto", "Total value", "Cost", "Gain/Loss", "Return"],
                vec![vec![
                    fmt_money(&data.stock_value, &symbol),
                    fmt_money(&data.crypto_value, &symbol),
                    fmt_money(&data.total_value, &symbol),
                    fmt_money(&data.total_cost, &symbol),
                    fmt_money(&data.gain_loss, &symbol),
                    fmt_percent(&data.gain_loss_percent),
                ]],
            )
        );
    }
    Ok(())
}
