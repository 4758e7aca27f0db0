// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{ensure_positive, Result};
use crate::models::{NewTransaction, Transaction, TransactionKind};
use crate::store::{new_id, Collection, CollectionKey, Record, RecordStore};
use rust_decimal::Decimal;
use serde::Serialize;

impl Record for Transaction {
    const KEY: CollectionKey = CollectionKey::Transactions;
    const LABEL: &'static str = "transaction";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl Totals {
    pub fn of(transactions: &[Transaction]) -> Self {
        let income = sum_kind(transactions, TransactionKind::Income);
        let expense = sum_kind(transactions, TransactionKind::Expense);
        Totals {
            income,
            expense,
            net: income - expense,
        }
    }
}

fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Narrows a transaction list the way the transactions screen does.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    /// Case-insensitive match against description or category.
    pub query: Option<String>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        match self.query.as_deref().map(str::to_lowercase) {
            Some(q) if !q.is_empty() => {
                tx.description.to_lowercase().contains(&q) || tx.category.to_lowercase().contains(&q)
            }
            _ => true,
        }
    }
}

/// Transaction collection plus the totals derived from it. Every aggregate
/// re-reads the full collection.
pub struct Ledger<'a, S: RecordStore> {
    records: Collection<'a, S, Transaction>,
}

impl<'a, S: RecordStore> Ledger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            records: Collection::new(store),
        }
    }

    /// Most recently added first. Insertion order, not date order.
    pub fn list_all(&self) -> Vec<Transaction> {
        self.records.list()
    }

    pub fn find(&self, id: &str) -> Option<Transaction> {
        self.records.find(id)
    }

    pub fn search(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        self.list_all()
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect()
    }

    pub fn add(&self, data: NewTransaction) -> Result<Transaction> {
        ensure_positive("amount", data.amount)?;
        let tx = self.records.prepend(data.into_record(new_id()))?;
        tracing::info!(id = %tx.id, kind = %tx.kind, amount = %tx.amount, "transaction added");
        Ok(tx)
    }

    pub fn update(&self, record: Transaction) -> Result<Transaction> {
        ensure_positive("amount", record.amount)?;
        let tx = self.records.replace(record)?;
        tracing::info!(id = %tx.id, "transaction updated");
        Ok(tx)
    }

    /// Unknown ids are ignored.
    pub fn remove(&self, id: &str) -> Result<()> {
        if self.records.remove(id)? {
            tracing::info!(id, "transaction removed");
        }
        Ok(())
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.list_all())
    }

    pub fn total_income(&self) -> Decimal {
        sum_kind(&self.list_all(), TransactionKind::Income)
    }

    pub fn total_expense(&self) -> Decimal {
        sum_kind(&self.list_all(), TransactionKind::Expense)
    }

    pub fn net_balance(&self) -> Decimal {
        self.total_income() - self.total_expense()
    }
}
