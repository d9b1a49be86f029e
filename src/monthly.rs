use std::collections::BTreeMap;

use crate::aggregate::aggregate;
use crate::categories::{categorize, CategoryMap};
use crate::error::{BudgetError, Result};
use crate::filter::split_by_sign;
use crate::models::{MonthKey, MonthPoint, MonthlyBucket, Transaction};

/// Outcome of a chart computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    /// Nothing to plot: no months, or every month is zero.
    Empty,
    Series(Vec<MonthPoint>),
}

/// One bucket per calendar month from the earliest to the latest date, including empty
/// months in between. Transactions keep their input order within a bucket.
pub fn group_by_month(txns: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut by_month: BTreeMap<MonthKey, Vec<Transaction>> = BTreeMap::new();
    for t in txns {
        by_month.entry(t.month()).or_default().push(t.clone());
    }

    let (Some(&first), Some(&last)) = (by_month.keys().next(), by_month.keys().next_back()) else {
        return Vec::new();
    };

    let mut buckets = Vec::new();
    let mut month = first;
    while month <= last {
        buckets.push(MonthlyBucket {
            month,
            transactions: by_month.remove(&month).unwrap_or_default(),
        });
        month = month.next();
    }
    buckets
}

/// Per month, the summed magnitude of negative amounts.
pub fn monthly_outgo(buckets: &[MonthlyBucket]) -> Vec<MonthPoint> {
    buckets
        .iter()
        .map(|b| MonthPoint {
            month: b.month,
            magnitude: b
                .transactions
                .iter()
                .filter(|t| t.amount < 0.0)
                .map(|t| t.amount.abs())
                .sum(),
        })
        .collect()
}

pub fn monthly_income(buckets: &[MonthlyBucket]) -> Vec<MonthPoint> {
    buckets
        .iter()
        .map(|b| MonthPoint {
            month: b.month,
            magnitude: b.transactions.iter().filter(|t| t.amount > 0.0).map(|t| t.amount).sum(),
        })
        .collect()
}

/// Absolute outgo total of one category per month, 0 where the category is absent.
pub fn category_trend(buckets: &[MonthlyBucket], map: &CategoryMap, label: &str) -> Vec<MonthPoint> {
    buckets
        .iter()
        .map(|b| {
            let (_, outgo) = split_by_sign(&b.transactions);
            let rows = aggregate(&categorize(&outgo, map, false));
            let magnitude = rows
                .iter()
                .find(|r| r.label == label)
                .map(|r| r.total.abs())
                .unwrap_or(0.0);
            MonthPoint {
                month: b.month,
                magnitude,
            }
        })
        .collect()
}

pub fn chart(points: Vec<MonthPoint>) -> Result<Chart> {
    if let Some(bad) = points.iter().find(|p| !p.magnitude.is_finite()) {
        return Err(BudgetError::Computation(format!(
            "non-finite total for {}",
            bad.month
        )));
    }
    if points.iter().all(|p| p.magnitude == 0.0) {
        return Ok(Chart::Empty);
    }
    Ok(Chart::Series(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::CategoryConfig;
    use crate::filter::Side;
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, party: &str, amount: f64) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), party, amount)
    }

    fn key(year: i32, month: u32) -> MonthKey {
        MonthKey { year, month }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(2022, 12, 3, "VISA SPARKASSE DUISBURG", -100.0),
            txn(2022, 12, 20, "Landeskasse Duesseldorf fuer LBV", 2500.0),
            txn(2023, 2, 14, "VISA SPARKASSE DUISBURG", -40.0),
            txn(2023, 2, 1, "NETTO MARKEN-DISCOU.", -10.5),
            txn(2023, 2, 28, "VISA SPARKASSE DUISBURG", -20.0),
        ]
    }

    #[test]
    fn test_group_by_month_fills_gaps() {
        let buckets = group_by_month(&sample());
        let months: Vec<MonthKey> = buckets.iter().map(|b| b.month).collect();
        assert_eq!(months, vec![key(2022, 12), key(2023, 1), key(2023, 2)]);
        assert_eq!(buckets[0].transactions.len(), 2);
        assert!(buckets[1].transactions.is_empty());
        assert_eq!(buckets[2].transactions.len(), 3);
    }

    #[test]
    fn test_bucket_keeps_input_order() {
        let buckets = group_by_month(&sample());
        let parties: Vec<&str> = buckets[2].transactions.iter().map(|t| t.party.as_str()).collect();
        assert_eq!(
            parties,
            vec!["VISA SPARKASSE DUISBURG", "NETTO MARKEN-DISCOU.", "VISA SPARKASSE DUISBURG"]
        );
    }

    #[test]
    fn test_group_by_month_empty_input() {
        assert!(group_by_month(&[]).is_empty());
    }

    #[test]
    fn test_monthly_outgo_magnitudes() {
        let points = monthly_outgo(&group_by_month(&sample()));
        let values: Vec<f64> = points.iter().map(|p| p.magnitude).collect();
        assert_eq!(values, vec![100.0, 0.0, 70.5]);
        assert_eq!(points[0].label(), "Dec 2022");
    }

    #[test]
    fn test_monthly_income_magnitudes() {
        let points = monthly_income(&group_by_month(&sample()));
        let values: Vec<f64> = points.iter().map(|p| p.magnitude).collect();
        assert_eq!(values, vec![2500.0, 0.0, 0.0]);
    }

    #[test]
    fn test_category_trend_defaults_absent_months_to_zero() {
        let map = CategoryConfig::builtin().unwrap().build(Side::Outgo).unwrap();
        let buckets = group_by_month(&sample());
        let cash: Vec<f64> = category_trend(&buckets, &map, "CASH")
            .iter()
            .map(|p| p.magnitude)
            .collect();
        assert_eq!(cash, vec![100.0, 0.0, 60.0]);
        let groceries: Vec<f64> = category_trend(&buckets, &map, "GROCERIES")
            .iter()
            .map(|p| p.magnitude)
            .collect();
        assert_eq!(groceries, vec![0.0, 0.0, 10.5]);
    }

    #[test]
    fn test_chart_distinguishes_empty_from_series() {
        assert_eq!(chart(Vec::new()).unwrap(), Chart::Empty);
        let zeros = vec![MonthPoint { month: key(2023, 1), magnitude: 0.0 }];
        assert_eq!(chart(zeros).unwrap(), Chart::Empty);
        let points = vec![MonthPoint { month: key(2023, 1), magnitude: 3.0 }];
        assert!(matches!(chart(points).unwrap(), Chart::Series(p) if p.len() == 1));
    }

    #[test]
    fn test_chart_rejects_non_finite() {
        let points = vec![MonthPoint { month: key(2023, 1), magnitude: f64::INFINITY }];
        assert!(matches!(chart(points), Err(BudgetError::Computation(_))));
    }
}
