use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::aggregate::aggregate;
use crate::categories::{categorize, CategoryMap, CategorySet};
use crate::cleaner::{clean_records, ParsePolicy, SkippedRow};
use crate::error::Result;
use crate::filter::{date_span, filter_by_date, split_by_sign, Side};
use crate::loader;
use crate::models::{AggregatedRow, RawRecord, Transaction};
use crate::monthly::{self, Chart};

/// Inclusive date bounds. Open ends default to the earliest/latest date loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }
}

pub struct Summary {
    pub income: Vec<AggregatedRow>,
    pub outgo: Vec<AggregatedRow>,
}

/// The cleaned table for one session. Every view is recomputed from it.
pub struct Ledger {
    transactions: Vec<Transaction>,
    skipped: Vec<SkippedRow>,
}

impl Ledger {
    pub fn open(path: &Path, policy: ParsePolicy) -> Result<Self> {
        Self::from_records(&loader::load_file(path)?, policy)
    }

    pub fn from_reader<R: Read>(reader: R, policy: ParsePolicy) -> Result<Self> {
        Self::from_records(&loader::load_reader(reader)?, policy)
    }

    fn from_records(records: &[RawRecord], policy: ParsePolicy) -> Result<Self> {
        let outcome = clean_records(records, policy)?;
        Ok(Self {
            transactions: outcome.transactions,
            skipped: outcome.skipped,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        date_span(&self.transactions)
    }

    pub fn slice(&self, range: DateRange) -> Vec<Transaction> {
        let Some((min, max)) = self.span() else {
            return Vec::new();
        };
        let start = range.from.unwrap_or(min);
        let end = range.to.unwrap_or(max);
        let sliced = filter_by_date(&self.transactions, start, end);
        tracing::debug!("{} of {} rows between {start} and {end}", sliced.len(), self.transactions.len());
        sliced
    }

    /// One half of the date slice, optionally relabeled by category.
    pub fn view(&self, range: DateRange, side: Side, categories: Option<(&CategoryMap, bool)>) -> Vec<Transaction> {
        let half = side.select(split_by_sign(&self.slice(range)));
        tracing::debug!("{} {} rows", half.len(), side.key());
        match categories {
            Some((map, collapse)) => categorize(&half, map, collapse),
            None => half,
        }
    }

    /// Categorized and aggregated income and outgo for the slice.
    pub fn summary(&self, range: DateRange, categories: &CategorySet, collapse: bool) -> Summary {
        let (income, outgo) = split_by_sign(&self.slice(range));
        Summary {
            income: aggregate(&categorize(&income, &categories.income, collapse)),
            outgo: aggregate(&categorize(&outgo, &categories.outgo, collapse)),
        }
    }

    pub fn monthly(&self, range: DateRange, side: Side) -> Result<Chart> {
        let buckets = monthly::group_by_month(&self.slice(range));
        let points = match side {
            Side::Income => monthly::monthly_income(&buckets),
            Side::Outgo => monthly::monthly_outgo(&buckets),
        };
        monthly::chart(points)
    }

    pub fn trend(&self, range: DateRange, outgo: &CategoryMap, label: &str) -> Result<Chart> {
        let buckets = monthly::group_by_month(&self.slice(range));
        monthly::chart(monthly::category_trend(&buckets, outgo, label))
    }
}
