// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::ledger::{Ledger, TransactionFilter};
use pocketbook::models::{NewTransaction, TransactionKind};
use pocketbook::store::{CollectionKey, MemoryStore};
use rust_decimal::Decimal;

fn new_tx(description: &str, amount: &str, kind: TransactionKind, category: &str) -> NewTransaction {
    NewTransaction {
        description: description.to_string(),
        amount: amount.parse().unwrap(),
        kind,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        notes: String::new(),
    }
}

#[test]
fn newest_transaction_comes_first_with_unique_ids() {
    let store = MemoryStore::new();
    let ledger = Ledger::new(&store);
    let first = ledger
        .add(new_tx("Salary", "1000", TransactionKind::Income, "Salary"))
        .unwrap();
    let second = ledger
        .add(new_tx("Groceries", "80.50", TransactionKind::Expense, "Food"))
        .unwrap();

    let all = ledger.list_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);
    assert_ne!(first.id, second.id);
    assert!(!first.id.is_empty());
}

#[test]
fn net_balance_is_income_minus_expense() {
    let store = MemoryStore::new();
    let ledger = Ledger::new(&store);
    ledger
        .add(new_tx("Salary", "1000", TransactionKind::Income, "Salary"))
        .unwrap();
    ledger
        .add(new_tx("Rent", "400", TransactionKind::Expense, "Housing"))
        .unwrap();
    ledger
        .add(new_tx("Coffee", "3.25", TransactionKind::Expense, "Food"))
        .unwrap();

    assert_eq!(ledger.total_income(), Decimal::from(1000));
    assert_eq!(ledger.total_expense(), "403.25".parse::<Decimal>().unwrap());
    assert_eq!(
        ledger.net_balance(),
        ledger.total_income() - ledger.total_expense()
    );
    let totals = ledger.totals();
    assert_eq!(totals.net, "596.75".parse::<Decimal>().unwrap());
}

#[test]
fn empty_ledger_totals_are_zero() {
    let store = MemoryStore::new();
    let totals = Ledger::new(&store).totals();
    assert_eq!(totals.income, Decimal::ZERO);
    assert_eq!(totals.expense, Decimal::ZERO);
    assert_eq!(totals.net, Decimal::ZERO);
}

#[test]
fn non_positive_amount_is_rejected() {
    let store = MemoryStore::new();
    let ledger = Ledger::new(&store);
    assert!(ledger
        .add(new_tx("Bad", "0", TransactionKind::Expense, "Food"))
        .is_err());
    assert!(ledger
        .add(new_tx("Bad", "-5", TransactionKind::Expense, "Food"))
        .is_err());
    assert!(ledger.list_all().is_empty());
}

#[test]
fn removing_unknown_id_leaves_stored_bytes_untouched() {
    let store = MemoryStore::new();
    let ledger = Ledger::new(&store);
    ledger
        .add(new_tx("Lunch", "12", TransactionKind::Expense, "Food"))
        .unwrap();
    let before = store.raw(CollectionKey::Transactions).unwrap();

    ledger.remove("does-not-exist").unwrap();

    assert_eq!(store.raw(CollectionKey::Transactions).unwrap(), before);
    assert_eq!(ledger.list_all().len(), 1);
}

#[test]
fn remove_drops_only_the_matching_record() {
    let store = MemoryStore::new();
    let ledger = Ledger::new(&store);
    let keep = ledger
        .add(new_tx("Lunch", "12", TransactionKind::Expense, "Food"))
        .unwrap();
    let gone = ledger
        .add(new_tx("Taxi", "9", TransactionKind::Expense, "Transport"))
        .unwrap();

    ledger.remove(&gone.id).unwrap();

    let all = ledger.list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
}

#[test]
fn update_replaces_in_place_and_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let ledger = Ledger::new(&store);
    let older = ledger
        .add(new_tx("Lunch", "12", TransactionKind::Expense, "Food"))
        .unwrap();
    ledger
        .add(new_tx("Taxi", "9", TransactionKind::Expense, "Transport"))
        .unwrap();

    let mut edited = older.clone();
    edited.amount = Decimal::from(15);
    edited.description = "Team lunch".into();
    ledger.update(edited).unwrap();

    let all = ledger.list_all();
    assert_eq!(all[1].id, older.id);
    assert_eq!(all[1].amount, Decimal::from(15));
    assert_eq!(all[1].description, "Team lunch");

    let before = ledger.list_all();
    let mut ghost = older;
    ghost.id = "ghost".into();
    let err = ledger.update(ghost).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(ledger.list_all(), before);
}

#[test]
fn search_matches_description_or_category_case_insensitively() {
    let store = MemoryStore::new();
    let ledger = Ledger::new(&store);
    ledger
        .add(new_tx("Pago de luz", "50", TransactionKind::Expense, "Utilities"))
        .unwrap();
    ledger
        .add(new_tx("Salary", "900", TransactionKind::Income, "Salary"))
        .unwrap();
    ledger
        .add(new_tx("Supermarket", "30", TransactionKind::Expense, "Food"))
        .unwrap();

    let by_text = ledger.search(&TransactionFilter {
        kind: None,
        query: Some("LUZ".into()),
    });
    assert_eq!(by_text.len(), 1);

    let by_category = ledger.search(&TransactionFilter {
        kind: Some(TransactionKind::Expense),
        query: Some("food".into()),
    });
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].description, "Supermarket");

    let income = ledger.search(&TransactionFilter {
        kind: Some(TransactionKind::Income),
        query: None,
    });
    assert_eq!(income.len(), 1);
}

#[test]
fn persisted_transactions_use_type_key() {
    let store = MemoryStore::new();
    Ledger::new(&store)
        .add(new_tx("Salary", "1000", TransactionKind::Income, "Salary"))
        .unwrap();
    let raw = store.raw(CollectionKey::Transactions).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["type"], "income");
    assert_eq!(value[0]["date"], "2025-03-10");
}
