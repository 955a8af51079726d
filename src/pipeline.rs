// 🔄 Pipeline - read → parse → clean → filter → write
// Each row goes through on its own; only the output list accumulates.

use crate::config::ConvertConfig;
use crate::error::SeedError;
use crate::parser::{parse_row, read_lines, required_columns, RejectedRow, RowOutcome};
use crate::record::LanguageRecord;
use crate::writer::write_json;
use tracing::{info, warn};

// ============================================================================
// CONVERSION REPORT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Accepted rows in input order
    pub records: Vec<LanguageRecord>,
    pub rejected: Vec<RejectedRow>,
    pub total_rows: usize,
}

impl ConversionReport {
    pub fn accepted_count(&self) -> usize {
        self.records.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Run every line through parse → clean → filter
///
/// Malformed lines are logged and skipped, so this never fails.
pub fn process_lines<S: AsRef<str>>(lines: &[S]) -> ConversionReport {
    let mut report = ConversionReport {
        total_rows: lines.len(),
        ..Default::default()
    };

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let row_number = i + 1;
        info!("Row {}: {}", row_number, line);

        match parse_row(row_number, line) {
            RowOutcome::Accepted(mut row) => {
                row.clean_native_name();
                report.records.push(LanguageRecord::from(row));
            }
            RowOutcome::Rejected(rejected) => {
                warn!(
                    "Skipping row {} due to incorrect format ({} of {} columns): {}",
                    rejected.row_number,
                    rejected.column_count,
                    required_columns(),
                    rejected.content
                );
                report.rejected.push(rejected);
            }
        }
    }

    report
}

/// Full conversion: input file → data.json
///
/// A read failure returns before the output file is touched.
pub fn convert(config: &ConvertConfig) -> Result<ConversionReport, SeedError> {
    let lines = read_lines(&config.input_path)?;
    let report = process_lines(&lines);

    info!(
        "Processed {} rows: {} accepted, {} skipped",
        report.total_rows,
        report.accepted_count(),
        report.rejected_count()
    );

    write_json(&config.output_path, &report.records)?;
    info!("Data successfully saved to {}", config.output_path.display());

    Ok(report)
}
