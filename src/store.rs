// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value record store and the generic collection repository on top of it.
//!
//! Each collection is one JSON document stored under a fixed key and always
//! written back whole.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Transactions,
    Budgets,
    Goals,
    Documents,
    Investments,
    Settings,
    /// Stock holdings written before both kinds shared `Investments`.
    LegacyStocks,
    /// Crypto holdings written before both kinds shared `Investments`.
    LegacyCrypto,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 8] = [
        CollectionKey::Transactions,
        CollectionKey::Budgets,
        CollectionKey::Goals,
        CollectionKey::Documents,
        CollectionKey::Investments,
        CollectionKey::Settings,
        CollectionKey::LegacyStocks,
        CollectionKey::LegacyCrypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Transactions => "finance_transactions",
            CollectionKey::Budgets => "finance_budgets",
            CollectionKey::Goals => "finance_goals",
            CollectionKey::Documents => "finance_documents",
            CollectionKey::Investments => "finance_investments",
            CollectionKey::Settings => "finance_settings",
            CollectionKey::LegacyStocks => "finance_stocks",
            CollectionKey::LegacyCrypto => "finance_crypto",
        }
    }
}

/// Durable key-value medium holding one serialized document per key.
pub trait RecordStore {
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Runs a read-modify-write cycle that no other writer may interleave with.
    fn exclusive<R>(&self, f: impl FnOnce(&Self) -> Result<R>) -> Result<R>
    where
        Self: Sized,
    {
        f(self)
    }
}

/// Loads a collection, falling back to `default` when the record is missing,
/// unreadable, or malformed.
pub fn get<T, S>(store: &S, key: CollectionKey, default: T) -> T
where
    T: DeserializeOwned,
    S: RecordStore + ?Sized,
{
    let raw = match store.read(key.as_str()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(err) => {
            tracing::warn!(key = key.as_str(), error = %err, "failed to read collection, using default");
            return default;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key = key.as_str(), error = %err, "malformed collection data, using default");
            default
        }
    }
}

pub fn set<T, S>(store: &S, key: CollectionKey, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: RecordStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    tracing::debug!(key = key.as_str(), bytes = raw.len(), "writing collection");
    store.write(key.as_str(), &raw)
}

/// In-process store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing serialization.
    pub fn insert_raw(&self, key: CollectionKey, raw: impl Into<String>) {
        self.records
            .borrow_mut()
            .insert(key.as_str().to_string(), raw.into());
    }

    pub fn raw(&self, key: CollectionKey) -> Option<String> {
        self.records.borrow().get(key.as_str()).cloned()
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// An entity persisted in its own collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KEY: CollectionKey;
    /// Singular noun used in error messages.
    const LABEL: &'static str;

    fn id(&self) -> &str;
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Repository over one collection of records.
pub struct Collection<'a, S: RecordStore, T: Record> {
    store: &'a S,
    _record: PhantomData<T>,
}

impl<'a, S: RecordStore, T: Record> Collection<'a, S, T> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub fn list(&self) -> Vec<T> {
        get(self.store, T::KEY, Vec::new())
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.list().into_iter().find(|r| r.id() == id)
    }

    /// Stores `record` ahead of every existing one.
    pub fn prepend(&self, record: T) -> Result<T> {
        self.store.exclusive(|store| {
            let mut records: Vec<T> = get(store, T::KEY, Vec::new());
            records.insert(0, record.clone());
            set(store, T::KEY, &records)?;
            Ok(record)
        })
    }

    pub fn append(&self, record: T) -> Result<T> {
        self.store.exclusive(|store| {
            let mut records: Vec<T> = get(store, T::KEY, Vec::new());
            records.push(record.clone());
            set(store, T::KEY, &records)?;
            Ok(record)
        })
    }

    /// Replaces the record sharing `record`'s id, keeping its position.
    pub fn replace(&self, record: T) -> Result<T> {
        let id = record.id().to_string();
        self.modify(&id, move |slot| {
            *slot = record;
            Ok(())
        })
    }

    /// Applies `f` to the record with `id` in place and persists the result.
    /// Nothing is written when `f` fails or the id is unknown.
    pub fn modify(&self, id: &str, f: impl FnOnce(&mut T) -> Result<()>) -> Result<T> {
        self.store.exclusive(|store| {
            let mut records: Vec<T> = get(store, T::KEY, Vec::new());
            let slot = records
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or_else(|| Error::not_found(T::LABEL, id))?;
            f(slot)?;
            let updated = slot.clone();
            set(store, T::KEY, &records)?;
            Ok(updated)
        })
    }

    /// Rewrites every record through `f` and persists the whole collection.
    pub fn modify_all(&self, mut f: impl FnMut(&mut T)) -> Result<Vec<T>> {
        self.store.exclusive(|store| {
            let mut records: Vec<T> = get(store, T::KEY, Vec::new());
            records.iter_mut().for_each(&mut f);
            set(store, T::KEY, &records)?;
            Ok(records)
        })
    }

    /// Drops the record with `id`. Returns whether anything was removed; an
    /// unknown id leaves the stored collection untouched.
    pub fn remove(&self, id: &str) -> Result<bool> {
        self.store.exclusive(|store| {
            let mut records: Vec<T> = get(store, T::KEY, Vec::new());
            let before = records.len();
            records.retain(|r| r.id() != id);
            if records.len() == before {
                return Ok(false);
            }
            set(store, T::KEY, &records)?;
            Ok(true)
        })
    }
}
