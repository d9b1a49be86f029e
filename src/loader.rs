use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::{BudgetError, Result};
use crate::models::RawRecord;

pub const DELIMITER: u8 = b';';

pub const DATE_COLUMN: &str = "Date";
pub const PARTY_COLUMN: &str = "Party";
pub const AMOUNT_COLUMN: &str = "Amount";

struct Columns {
    date: usize,
    party: usize,
    amount: usize,
}

fn locate_columns(header: &StringRecord) -> Result<Columns> {
    let find = |name: &str| {
        header
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
    };
    let (date, party, amount) = (find(DATE_COLUMN), find(PARTY_COLUMN), find(AMOUNT_COLUMN));

    let missing: Vec<String> = [(DATE_COLUMN, date), (PARTY_COLUMN, party), (AMOUNT_COLUMN, amount)]
        .iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| name.to_string())
        .collect();

    match (date, party, amount) {
        (Some(date), Some(party), Some(amount)) => Ok(Columns { date, party, amount }),
        _ => Err(BudgetError::Format { missing }),
    }
}

pub fn load_file(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    let records = load_reader(std::io::BufReader::new(file))?;
    tracing::debug!("loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Read Date/Party/Amount from a semicolon-delimited export. Other columns are ignored.
pub fn load_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = locate_columns(rdr.headers()?)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let cell = |idx: usize| record.get(idx).map(str::to_string);
        rows.push(RawRecord {
            date: cell(columns.date).unwrap_or_default(),
            party: cell(columns.party),
            amount: cell(columns.amount).unwrap_or_default(),
            line,
        });
    }
    Ok(rows)
}
