//! Remote/database record merging.

use std::collections::HashMap;

use crate::model::{Origin, Record};

/// Merge remote-sourced and database-sourced records into one canonical
/// list, deduplicated by merge key.
///
/// Remote records are inserted first, database records second. Database is
/// authoritative: an insertion whose key is already present overwrites only
/// when the incoming record is database-origin, so later database
/// duplicates replace earlier ones and remote duplicates never replace
/// anything. Output is sorted by identifier, case-insensitive; ties keep
/// first-insertion order (stable sort).
pub fn merge_records(remote: &[Record], database: &[Record]) -> Vec<Record> {
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<Record> = Vec::new();

    for record in remote.iter().chain(database) {
        let key = record.merge_key();
        match by_key.get(&key).copied() {
            None => {
                by_key.insert(key, merged.len());
                merged.push(record.clone());
            }
            Some(idx) if record.origin == Origin::Database => {
                merged[idx] = record.clone();
            }
            Some(_) => {}
        }
    }

    merged.sort_by_key(|r| r.identifier.to_lowercase());
    merged
}
