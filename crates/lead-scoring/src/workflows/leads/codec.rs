use std::fmt::{self, Write as _};
use std::io::{self, Read};

use super::domain::{Lead, ScoreResult};

pub const LEAD_COLUMNS: usize = 6;
pub const RESULTS_HEADER: &str = "Name,Role,Company,Score,Intent,Reasoning";

#[derive(Debug, thiserror::Error)]
pub enum LeadImportError {
    #[error("failed to read lead upload: {0}")]
    Io(#[from] io::Error),
    #[error("invalid lead CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row on line {line} has {found} columns, expected 6 (name, role, company, industry, location, bio)")]
    MissingColumns { line: u64, found: usize },
}

/// Decode an uploaded lead file.
///
/// The first row is a header and is skipped without validation. Data rows are read
/// positionally; columns past the sixth are ignored and a short row fails the whole
/// upload. Nothing is returned unless every row decodes.
pub fn decode_leads<R: Read>(reader: R) -> Result<Vec<Lead>, LeadImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut leads = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        if record.len() < LEAD_COLUMNS {
            return Err(LeadImportError::MissingColumns {
                line: record.position().map_or(0, |position| position.line()),
                found: record.len(),
            });
        }

        leads.push(Lead {
            name: record[0].to_string(),
            role: record[1].to_string(),
            company: record[2].to_string(),
            industry: record[3].to_string(),
            location: record[4].to_string(),
            bio: record[5].to_string(),
        });
    }

    Ok(leads)
}

/// Encode results for export.
///
/// Name, role, company, intent, and reasoning are always wrapped in double quotes, even
/// when they look numeric; the score is written bare. Double quotes in the reasoning
/// become single quotes; quotes in other fields are escaped by doubling.
pub fn encode_results(results: &[ScoreResult]) -> String {
    let mut csv = String::from(RESULTS_HEADER);
    csv.push('\n');

    for result in results {
        let reasoning = result.reasoning.replace('"', "'");
        writeln!(
            csv,
            "{},{},{},{},{},{}",
            Quoted(&result.name),
            Quoted(&result.role),
            Quoted(&result.company),
            result.score,
            Quoted(result.intent.label()),
            Quoted(&reasoning),
        )
        .expect("write result row");
    }

    csv
}

struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.replace('"', "\"\""))
    }
}
