// Language Seed Converter - Core Library
// seeding-data-input.txt (TSV) → data.json for the language seeder

pub mod config;
pub mod error;
pub mod cleaner;
pub mod record;
pub mod parser;
pub mod writer;
pub mod pipeline;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConvertConfig,
    CANONICAL_FIELDS, DISCARDED_FIELDS, RETAINED_FIELDS, INPUT_FILE, OUTPUT_FILE,
};
pub use error::SeedError;
pub use cleaner::strip_parentheticals;
pub use record::{RawRow, LanguageRecord};
pub use parser::{read_lines, split_lines, parse_row, split_columns, RejectedRow, RowOutcome};
pub use writer::{to_json_string, write_json};
pub use pipeline::{convert, process_lines, ConversionReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
