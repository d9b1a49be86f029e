use chrono::NaiveDate;

use crate::models::Transaction;

/// Which half of the ledger a view or category map applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Income,
    Outgo,
}

impl Side {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outgo => "outgo",
        }
    }

    pub fn select<T>(&self, split: (T, T)) -> T {
        match self {
            Self::Income => split.0,
            Self::Outgo => split.1,
        }
    }
}

/// Rows with `start <= date <= end`. An inverted range yields nothing.
pub fn filter_by_date(txns: &[Transaction], start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
    txns.iter()
        .filter(|t| t.date >= start && t.date <= end)
        .cloned()
        .collect()
}

/// Earliest and latest date present.
pub fn date_span(txns: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let min = txns.iter().map(|t| t.date).min()?;
    let max = txns.iter().map(|t| t.date).max()?;
    Some((min, max))
}

/// (income, outgo). Zero amounts land in neither.
pub fn split_by_sign(txns: &[Transaction]) -> (Vec<Transaction>, Vec<Transaction>) {
    let income = txns.iter().filter(|t| t.amount > 0.0).cloned().collect();
    let outgo = txns.iter().filter(|t| t.amount < 0.0).cloned().collect();
    (income, outgo)
}
