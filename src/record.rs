// 🗂️ Record - One language per input line
// RawRow mirrors the 9 canonical columns, LanguageRecord keeps the 3 we export.

use crate::cleaner::strip_parentheticals;
use crate::config::{CANONICAL_FIELDS, DISCARDED_FIELDS};
use serde::{Deserialize, Serialize};

// ============================================================================
// RAW ROW (all canonical columns)
// ============================================================================

/// Positional view of one accepted input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub nr_je: String,
    pub nr_be: String,
    pub native_name: String,
    pub name: String,
    pub code: String,
    pub iso639_3_code: String,
    pub official_language_in: String,
    pub added_je: String,
    pub added_be: String,
}

impl RawRow {
    /// Zip columns onto the canonical fields
    ///
    /// Returns `None` when there are fewer columns than canonical fields.
    /// Columns past the ninth are ignored.
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Option<Self> {
        if columns.len() < CANONICAL_FIELDS.len() {
            return None;
        }

        let col = |i: usize| columns[i].as_ref().to_string();

        Some(RawRow {
            nr_je: col(0),
            nr_be: col(1),
            native_name: col(2),
            name: col(3),
            code: col(4),
            iso639_3_code: col(5),
            official_language_in: col(6),
            added_je: col(7),
            added_be: col(8),
        })
    }

    /// Field mapping in canonical order, keyed by the input column names
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let values = [
            &self.nr_je,
            &self.nr_be,
            &self.native_name,
            &self.name,
            &self.code,
            &self.iso639_3_code,
            &self.official_language_in,
            &self.added_je,
            &self.added_be,
        ];

        CANONICAL_FIELDS
            .iter()
            .copied()
            .zip(values.into_iter().map(String::as_str))
            .collect()
    }

    /// Drop parenthetical notes from native_name in place
    pub fn clean_native_name(&mut self) {
        self.native_name = strip_parentheticals(&self.native_name);
    }
}

// ============================================================================
// LANGUAGE RECORD (retained columns)
// ============================================================================

/// What ends up in data.json. Field order is the JSON key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub native_name: String,
    pub name: String,
    pub code: String,
}

impl From<RawRow> for LanguageRecord {
    /// Field filter: every column named in DISCARDED_FIELDS is dropped,
    /// what is left lands in RETAINED_FIELDS order.
    fn from(row: RawRow) -> Self {
        let mut record = LanguageRecord::default();

        for (key, value) in row.fields() {
            if DISCARDED_FIELDS.contains(&key) {
                continue;
            }
            let slot = match key {
                "native_name" => &mut record.native_name,
                "name" => &mut record.name,
                "code" => &mut record.code,
                _ => continue,
            };
            *slot = value.to_string();
        }

        record
    }
}
