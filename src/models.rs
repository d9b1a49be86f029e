use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Placeholder party for rows whose Party cell is blank.
pub const MISSING_PARTY: &str = "data missing";

/// Label given to unmatched parties when collapsing.
pub const OTHER_LABEL: &str = "OTHER";

/// One row as read from the export, before any parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub date: String,
    pub party: Option<String>,
    pub amount: String,
    /// 1-based line in the source file.
    pub line: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub party: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: NaiveDate, party: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            party: party.into(),
            amount,
        }
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }
}

/// One summed total per distinct label.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRow {
    pub label: String,
    pub total: f64,
}

/// Calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_day() {
            Some(d) => write!(f, "{}", d.format("%b %Y")),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub month: MonthKey,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthPoint {
    pub month: MonthKey,
    pub magnitude: f64,
}

impl MonthPoint {
    pub fn label(&self) -> String {
        self.month.to_string()
    }
}
