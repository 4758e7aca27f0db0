// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Document metadata. No file contents are stored.

use crate::error::Result;
use crate::models::{Document, DocumentKind, NewDocument};
use crate::store::{new_id, Collection, CollectionKey, Record, RecordStore};

impl Record for Document {
    const KEY: CollectionKey = CollectionKey::Documents;
    const LABEL: &'static str = "document";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct DocumentArchive<'a, S: RecordStore> {
    records: Collection<'a, S, Document>,
}

impl<'a, S: RecordStore> DocumentArchive<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            records: Collection::new(store),
        }
    }

    /// Newest first.
    pub fn list_all(&self) -> Vec<Document> {
        self.records.list()
    }

    pub fn filter(&self, kind: Option<DocumentKind>, query: Option<&str>) -> Vec<Document> {
        let query = query.map(str::to_lowercase).filter(|q| !q.is_empty());
        self.list_all()
            .into_iter()
            .filter(|d| kind.is_none_or(|k| d.kind == k))
            .filter(|d| {
                query
                    .as_deref()
                    .is_none_or(|q| d.name.to_lowercase().contains(q))
            })
            .collect()
    }

    pub fn add(&self, data: NewDocument) -> Result<Document> {
        let doc = Document {
            id: new_id(),
            icon: data.kind.as_str().to_string(),
            name: data.name,
            kind: data.kind,
            date: data.date,
            size: data.size,
        };
        let doc = self.records.prepend(doc)?;
        tracing::info!(id = %doc.id, kind = %doc.kind, "document added");
        Ok(doc)
    }

    pub fn update(&self, record: Document) -> Result<Document> {
        self.records.replace(record)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        if self.records.remove(id)? {
            tracing::info!(id, "document removed");
        }
        Ok(())
    }
}
