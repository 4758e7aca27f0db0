// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Budgets and the rules that decide which transactions count against them.
//!
//! A budget's `spent` is derived from the ledger. The persisted value is a
//! cache refreshed by [`BudgetTracker::update_all_spent`]; [`BudgetTracker::list_all`]
//! always recomputes it.

use crate::error::{ensure_positive, Result};
use crate::ledger::Ledger;
use crate::models::{Budget, NewBudget, Transaction};
use crate::store::{new_id, Collection, CollectionKey, Record, RecordStore};
use crate::utils::percent_of;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

impl Record for Budget {
    const KEY: CollectionKey = CollectionKey::Budgets;
    const LABEL: &'static str = "budget";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Sums expenses whose description and the budget name contain one another,
/// ignoring case. "Gas" also catches "Gasolina", and an empty name matches
/// every expense.
pub fn spent_by_name(budget_name: &str, transactions: &[Transaction]) -> Decimal {
    let name = budget_name.to_lowercase();
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .filter(|t| {
            let description = t.description.to_lowercase();
            description.contains(&name) || name.contains(&description)
        })
        .map(|t| t.amount.abs())
        .sum()
}

/// Legacy rule: sums expenses whose category equals `category` exactly.
pub fn spent_by_category(category: &str, transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == category)
        .map(|t| t.amount)
        .sum()
}

/// How a budget's spend is attributed. The two rules give different totals on
/// the same data and are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpendStrategy {
    #[default]
    ByName,
    ByCategory,
}

impl SpendStrategy {
    pub fn spent(&self, budget_name: &str, category: &str, transactions: &[Transaction]) -> Decimal {
        match self {
            SpendStrategy::ByName => spent_by_name(budget_name, transactions),
            SpendStrategy::ByCategory => spent_by_category(category, transactions),
        }
    }

    pub fn spent_for(&self, budget: &Budget, transactions: &[Transaction]) -> Decimal {
        self.spent(&budget.name, &budget.category, transactions)
    }
}

impl FromStr for SpendStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SpendStrategy::ByName),
            "category" => Ok(SpendStrategy::ByCategory),
            other => Err(anyhow::anyhow!(
                "Unknown spend strategy '{}', expected name|category",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Health {
    OnTrack,
    Caution,
    Critical,
}

/// Where a budget stands against its limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub id: String,
    pub name: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// `None` when the limit is zero or the ratio overflows.
    pub utilization: Option<Decimal>,
    pub over_budget: bool,
    pub health: Health,
}

impl BudgetStatus {
    pub fn of(budget: &Budget) -> Self {
        let utilization = utilization(budget.spent, budget.limit);
        let health = match utilization {
            Some(pct) if pct < Decimal::from(60) => Health::OnTrack,
            Some(pct) if pct < Decimal::from(80) => Health::Caution,
            _ => Health::Critical,
        };
        BudgetStatus {
            id: budget.id.clone(),
            name: budget.name.clone(),
            limit: budget.limit,
            spent: budget.spent,
            remaining: budget.limit - budget.spent,
            utilization,
            over_budget: budget.spent > budget.limit,
            health,
        }
    }

    /// Near the limit: at least 80% used but not yet over 100%.
    pub fn near_limit(&self) -> bool {
        matches!(self.utilization, Some(pct) if pct >= Decimal::from(80) && pct < Decimal::ONE_HUNDRED)
    }
}

/// Percent of `limit` consumed by `spent`. `None` for a zero limit or when
/// the ratio does not fit in a `Decimal`.
pub fn utilization(spent: Decimal, limit: Decimal) -> Option<Decimal> {
    percent_of(spent, limit)
}

pub struct BudgetTracker<'a, S: RecordStore> {
    records: Collection<'a, S, Budget>,
    ledger: Ledger<'a, S>,
    strategy: SpendStrategy,
}

impl<'a, S: RecordStore> BudgetTracker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_strategy(store, SpendStrategy::default())
    }

    pub fn with_strategy(store: &'a S, strategy: SpendStrategy) -> Self {
        Self {
            records: Collection::new(store),
            ledger: Ledger::new(store),
            strategy,
        }
    }

    pub fn strategy(&self) -> SpendStrategy {
        self.strategy
    }

    /// Budgets with `spent` recomputed from the current ledger.
    pub fn list_all(&self) -> Vec<Budget> {
        let transactions = self.ledger.list_all();
        self.records
            .list()
            .into_iter()
            .map(|mut b| {
                b.spent = self.strategy.spent_for(&b, &transactions);
                b
            })
            .collect()
    }

    /// Budgets exactly as persisted, including possibly stale `spent`.
    pub fn list_stored(&self) -> Vec<Budget> {
        self.records.list()
    }

    pub fn statuses(&self) -> Vec<BudgetStatus> {
        self.list_all().iter().map(BudgetStatus::of).collect()
    }

    pub fn spent_for(&self, budget: &Budget) -> Decimal {
        self.strategy.spent_for(budget, &self.ledger.list_all())
    }

    pub fn add(&self, data: NewBudget) -> Result<Budget> {
        ensure_positive("limit", data.limit)?;
        let spent = self
            .strategy
            .spent(&data.name, &data.category, &self.ledger.list_all());
        let budget = self.records.append(data.into_record(new_id(), spent))?;
        tracing::info!(id = %budget.id, name = %budget.name, spent = %budget.spent, "budget added");
        Ok(budget)
    }

    pub fn update(&self, mut record: Budget) -> Result<Budget> {
        ensure_positive("limit", record.limit)?;
        record.spent = self.spent_for(&record);
        let budget = self.records.replace(record)?;
        tracing::info!(id = %budget.id, "budget updated");
        Ok(budget)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        if self.records.remove(id)? {
            tracing::info!(id, "budget removed");
        }
        Ok(())
    }

    /// Recomputes and persists `spent` for every budget. Call after any ledger
    /// mutation so the stored cache does not go stale.
    pub fn update_all_spent(&self) -> Result<Vec<Budget>> {
        let transactions = self.ledger.list_all();
        let strategy = self.strategy;
        let budgets = self
            .records
            .modify_all(|b| b.spent = strategy.spent_for(b, &transactions))?;
        tracing::debug!(count = budgets.len(), "budget spend recomputed");
        Ok(budgets)
    }
}
