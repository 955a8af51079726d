// ⚙️ Config - Fixed file names and field lists
// Nothing here is read from the environment or the command line.

use std::path::PathBuf;

// ============================================================================
// FILE NAMES
// ============================================================================

/// Tab-separated language metadata, one language per line
pub const INPUT_FILE: &str = "seeding-data-input.txt";

/// JSON array consumed by the language seeder
pub const OUTPUT_FILE: &str = "data.json";

// ============================================================================
// FIELD LISTS
// ============================================================================

/// Canonical column order of the input file
pub const CANONICAL_FIELDS: [&str; 9] = [
    "nr_je",
    "nr_be",
    "native_name",
    "name",
    "code",
    "iso639-3_code",
    "official_language_in",
    "added_je",
    "added_be",
];

/// Columns dropped before serialization
pub const DISCARDED_FIELDS: [&str; 6] = [
    "added_je",
    "added_be",
    "official_language_in",
    "nr_je",
    "nr_be",
    "iso639-3_code",
];

/// Columns that survive into data.json, in output order
pub const RETAINED_FIELDS: [&str; 3] = ["native_name", "name", "code"];

/// Pretty-print indentation for data.json
pub const JSON_INDENT: &[u8] = b"    ";

// ============================================================================
// CONVERT CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConvertConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        ConvertConfig {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for ConvertConfig {
    /// Both files relative to the working directory
    fn default() -> Self {
        ConvertConfig::new(INPUT_FILE, OUTPUT_FILE)
    }
}
