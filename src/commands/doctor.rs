// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budgets::BudgetTracker;
use crate::documents::DocumentArchive;
use crate::goals::GoalTracker;
use crate::ledger::Ledger;
use crate::models::{Budget, Document, Goal, Holding, Transaction};
use crate::portfolio::Portfolio;
use crate::settings::Settings;
use crate::store::{CollectionKey, Record, RecordStore};
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub code: &'static str,
    pub detail: String,
}

impl Issue {
    fn new(code: &'static str, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }
}

pub fn handle<S: RecordStore>(store: &S) -> Result<()> {
    let issues = diagnose(store)?;
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.code.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Problems in the stored data that the app would otherwise paper over.
pub fn diagnose<S: RecordStore>(store: &S) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    // 1) Collections that load as empty because they do not parse
    for key in CollectionKey::ALL {
        let Some(raw) = store.read(key.as_str())? else {
            continue;
        };
        let ok = match key {
            CollectionKey::Transactions => parses::<Vec<Transaction>>(&raw),
            CollectionKey::Budgets => parses::<Vec<Budget>>(&raw),
            CollectionKey::Goals => parses::<Vec<Goal>>(&raw),
            CollectionKey::Documents => parses::<Vec<Document>>(&raw),
            CollectionKey::Investments
            | CollectionKey::LegacyStocks
            | CollectionKey::LegacyCrypto => parses::<Vec<Holding>>(&raw),
            CollectionKey::Settings => parses::<Settings>(&raw),
        };
        if !ok {
            issues.push(Issue::new("malformed_collection", key.as_str()));
        }
    }

    // 2) Amounts that should never have been stored
    let transactions = Ledger::new(store).list_all();
    for t in &transactions {
        if t.amount <= Decimal::ZERO {
            issues.push(Issue::new(
                "non_positive_amount",
                format!("transaction {} ({})", t.id, t.amount),
            ));
        }
    }
    let goals = GoalTracker::new(store).list_all();
    for g in &goals {
        if g.target_amount <= Decimal::ZERO {
            issues.push(Issue::new(
                "non_positive_target",
                format!("goal {} ({})", g.id, g.target_amount),
            ));
        }
    }

    // 3) Cached budget spend that no longer matches the ledger
    let tracker = BudgetTracker::new(store);
    let budgets = tracker.list_stored();
    for b in &budgets {
        let live = tracker.spent_for(b);
        if live != b.spent {
            issues.push(Issue::new(
                "stale_budget_spent",
                format!("{} stored {} live {}", b.name, b.spent, live),
            ));
        }
    }

    // 4) Ids that no longer identify a single record
    duplicate_ids(&transactions, &mut issues);
    duplicate_ids(&budgets, &mut issues);
    duplicate_ids(&goals, &mut issues);
    duplicate_ids(&DocumentArchive::new(store).list_all(), &mut issues);
    duplicate_ids(&Portfolio::new(store).list_all(), &mut issues);

    Ok(issues)
}

fn parses<T: DeserializeOwned>(raw: &str) -> bool {
    serde_json::from_str::<T>(raw).is_ok()
}

fn duplicate_ids<T: Record>(records: &[T], issues: &mut Vec<Issue>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for r in records {
        if !seen.insert(r.id()) && reported.insert(r.id()) {
            issues.push(Issue::new("duplicate_id", format!("{} {}", T::LABEL, r.id())));
        }
    }
}
