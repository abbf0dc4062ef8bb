// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searchable records and the JSON they come from.
//!
//! The engine itself never touches storage. This is the small amount of glue the
//! CLI needs to feed [`rank_records`](crate::rank_records) from a file:
//!
//! ```json
//! [
//!   { "id": "t-1", "name": "Paris weekend", "description": "...", "status": "published" },
//!   { "id": "t-2", "name": "Moscow parks", "status": "draft" }
//! ]
//! ```
//!
//! Every property other than `id` becomes a field. Field names should be lower
//! case to line up with `field:value` queries and weight tables.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// One searchable record: an id plus named text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl SearchRecord {
    pub fn new(id: impl Into<String>) -> Self {
        SearchRecord {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Parse a JSON array of records. Ids must be unique.
pub fn parse_records(json: &str) -> Result<Vec<SearchRecord>, RecordError> {
    let records: Vec<SearchRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            return Err(RecordError::DuplicateId(record.id.clone()));
        }
    }

    Ok(records)
}

/// Read and parse a records file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SearchRecord>, RecordError> {
    let json = fs::read_to_string(path)?;
    parse_records(&json)
}
