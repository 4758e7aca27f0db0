// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Manually priced stock and crypto holdings.

use crate::error::{ensure_positive, Result};
use crate::models::{Holding, HoldingKind, NewHolding};
use crate::store::{get, new_id, set, Collection, CollectionKey, Record, RecordStore};
use crate::utils::clamped_percent;
use rust_decimal::Decimal;
use serde::Serialize;

impl Record for Holding {
    const KEY: CollectionKey = CollectionKey::Investments;
    const LABEL: &'static str = "holding";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Holding {
    pub fn market_value(&self) -> Decimal {
        self.quantity.saturating_mul(self.current_price)
    }

    pub fn cost_basis(&self) -> Decimal {
        self.quantity.saturating_mul(self.buy_price)
    }
}

fn percent_change(from: Decimal, to: Decimal) -> Decimal {
    clamped_percent(to.saturating_sub(from), from)
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PortfolioSummary {
    pub stock_value: Decimal,
    pub crypto_value: Decimal,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
}

impl PortfolioSummary {
    pub fn of(holdings: &[Holding]) -> Self {
        let value_of = |kind: HoldingKind| -> Decimal {
            saturating_sum(
                holdings
                    .iter()
                    .filter(|h| h.kind == kind)
                    .map(Holding::market_value),
            )
        };
        let stock_value = value_of(HoldingKind::Stock);
        let crypto_value = value_of(HoldingKind::Crypto);
        let total_value = stock_value.saturating_add(crypto_value);
        let total_cost = saturating_sum(holdings.iter().map(Holding::cost_basis));
        PortfolioSummary {
            stock_value,
            crypto_value,
            total_value,
            total_cost,
            gain_loss: total_value.saturating_sub(total_cost),
            gain_loss_percent: percent_change(total_cost, total_value),
        }
    }
}

/// Holdings kept under the per-kind keys, stocks first, each tagged with the
/// kind its key implies.
pub fn legacy_holdings<S: RecordStore>(store: &S) -> Vec<Holding> {
    let tagged = |key: CollectionKey, kind: HoldingKind| {
        get::<Vec<Holding>, _>(store, key, Vec::new())
            .into_iter()
            .map(move |h| Holding { kind, ..h })
    };
    tagged(CollectionKey::LegacyStocks, HoldingKind::Stock)
        .chain(tagged(CollectionKey::LegacyCrypto, HoldingKind::Crypto))
        .collect()
}

fn has_investments<S: RecordStore>(store: &S) -> Result<bool> {
    Ok(store.read(CollectionKey::Investments.as_str())?.is_some())
}

pub struct Portfolio<'a, S: RecordStore> {
    store: &'a S,
    records: Collection<'a, S, Holding>,
}

impl<'a, S: RecordStore> Portfolio<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            records: Collection::new(store),
        }
    }

    /// Until the combined collection has been written, holdings are read from
    /// the legacy per-kind keys.
    pub fn list_all(&self) -> Vec<Holding> {
        match has_investments(self.store) {
            Ok(false) => legacy_holdings(self.store),
            _ => self.records.list(),
        }
    }

    /// Copies legacy holdings into the combined collection before its first
    /// write. The legacy keys are left in place.
    pub fn adopt_legacy(&self) -> Result<()> {
        self.store.exclusive(|store| {
            if has_investments(store)? {
                return Ok(());
            }
            let legacy = legacy_holdings(store);
            if !legacy.is_empty() {
                set(store, CollectionKey::Investments, &legacy)?;
                tracing::info!(count = legacy.len(), "legacy holdings adopted");
            }
            Ok(())
        })
    }

    pub fn add(&self, data: NewHolding) -> Result<Holding> {
        ensure_positive("quantity", data.quantity)?;
        ensure_positive("buy price", data.buy_price)?;
        self.adopt_legacy()?;
        let holding = Holding {
            id: new_id(),
            kind: data.kind,
            name: data.name,
            symbol: data.symbol.trim().to_uppercase(),
            quantity: data.quantity,
            buy_price: data.buy_price,
            current_price: data.buy_price,
            change: Decimal::ZERO,
        };
        let holding = self.records.append(holding)?;
        tracing::info!(id = %holding.id, symbol = %holding.symbol, "holding added");
        Ok(holding)
    }

    /// Records a manually entered price and the change against the buy price.
    pub fn update_price(&self, id: &str, price: Decimal) -> Result<Holding> {
        ensure_positive("price", price)?;
        self.adopt_legacy()?;
        self.records.modify(id, |h| {
            h.current_price = price;
            h.change = percent_change(h.buy_price, price);
            Ok(())
        })
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        self.adopt_legacy()?;
        if self.records.remove(id)? {
            tracing::info!(id, "holding removed");
        }
        Ok(())
    }

    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::of(&self.list_all())
    }
}
