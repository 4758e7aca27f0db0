// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::db::SqliteStore;
use pocketbook::goals::GoalTracker;
use pocketbook::ledger::Ledger;
use pocketbook::models::{NewTransaction, TransactionKind};
use pocketbook::settings::Settings;
use pocketbook::store::{CollectionKey, MemoryStore, RecordStore};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn salary() -> NewTransaction {
    NewTransaction {
        description: "Salary".to_string(),
        amount: Decimal::from(1200),
        kind: TransactionKind::Income,
        category: "Salary".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        notes: "June".to_string(),
    }
}

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("book.sqlite");

    let added = {
        let store = SqliteStore::open(&path).unwrap();
        Ledger::new(&store).add(salary()).unwrap()
    };

    let store = SqliteStore::open(&path).unwrap();
    let all = Ledger::new(&store).list_all();
    assert_eq!(all, vec![added]);
}

#[test]
fn missing_collection_reads_as_empty() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.read(CollectionKey::Goals.as_str()).unwrap().is_none());
    assert!(GoalTracker::new(&store).list_all().is_empty());
}

#[test]
fn malformed_collection_falls_back_to_empty() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .write(CollectionKey::Transactions.as_str(), "{not json")
        .unwrap();
    assert!(Ledger::new(&store).list_all().is_empty());

    let memory = MemoryStore::new();
    memory.insert_raw(CollectionKey::Transactions, r#"{"id":"not-an-array"}"#);
    assert!(Ledger::new(&memory).list_all().is_empty());
}

#[test]
fn writes_after_corruption_start_a_fresh_collection() {
    let memory = MemoryStore::new();
    memory.insert_raw(CollectionKey::Transactions, "garbage");
    let tx = Ledger::new(&memory).add(salary()).unwrap();
    assert_eq!(Ledger::new(&memory).list_all(), vec![tx]);
}

#[test]
fn legacy_records_keep_their_calendar_day() {
    let memory = MemoryStore::new();
    memory.insert_raw(
        CollectionKey::Transactions,
        r#"[{"id":"1","description":"Luz","amount":50,"type":"expense","category":"Utilities","date":"2025-03-05T00:00:00.000Z"}]"#,
    );
    let all = Ledger::new(&memory).list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
    assert_eq!(all[0].notes, "");
}

#[test]
fn settings_default_then_persist() {
    let store = SqliteStore::open_in_memory().unwrap();
    let defaults = Settings::load(&store);
    assert_eq!(defaults.currency, "CRC");
    assert_eq!(defaults.currency_symbol, "₡");

    Settings {
        currency: "USD".into(),
        currency_symbol: "$".into(),
    }
    .save(&store)
    .unwrap();
    assert_eq!(Settings::load(&store).currency_symbol, "$");

    let raw = store.read(CollectionKey::Settings.as_str()).unwrap().unwrap();
    assert!(raw.contains("currencySymbol"));
}

#[test]
fn collections_are_independent() {
    let store = SqliteStore::open_in_memory().unwrap();
    Ledger::new(&store).add(salary()).unwrap();
    for key in CollectionKey::ALL {
        let present = store.read(key.as_str()).unwrap().is_some();
        assert_eq!(present, key == CollectionKey::Transactions, "{}", key.as_str());
    }
}
