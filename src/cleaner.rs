use chrono::NaiveDate;

use crate::error::{BudgetError, Result};
use crate::models::{RawRecord, Transaction, MISSING_PARTY};

/// What to do with a row whose Date or Amount does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Abort the whole load on the first bad row.
    #[default]
    Strict,
    /// Skip bad rows and report them.
    Lenient,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedRow>,
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// "1.234,56" -> 1234.56. `.` is a thousands separator, `,` the decimal mark.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let s = raw.trim().replace('.', "").replace(',', ".");
    let value: f64 = s.parse().ok()?;
    value.is_finite().then_some(value)
}

/// "31.01.2023" -> 2023-01-31. Day and month may drop the leading zero; the year may not.
pub fn parse_date_dmy(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('.').collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return None;
    }
    if !parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }
    let d: u32 = parts[0].parse().ok()?;
    let m: u32 = parts[1].parse().ok()?;
    let y: i32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn clean_party(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => MISSING_PARTY.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

pub fn clean_record(record: &RawRecord) -> Result<Transaction> {
    let date = parse_date_dmy(&record.date).ok_or_else(|| BudgetError::Parse {
        line: record.line,
        field: "Date",
        value: record.date.clone(),
    })?;
    let amount = parse_amount(&record.amount).ok_or_else(|| BudgetError::Parse {
        line: record.line,
        field: "Amount",
        value: record.amount.clone(),
    })?;
    Ok(Transaction::new(date, clean_party(record.party.as_deref()), amount))
}

pub fn clean_records(records: &[RawRecord], policy: ParsePolicy) -> Result<CleanOutcome> {
    let mut outcome = CleanOutcome::default();
    for record in records {
        match clean_record(record) {
            Ok(txn) => outcome.transactions.push(txn),
            Err(BudgetError::Parse { line, field, value }) if policy == ParsePolicy::Lenient => {
                let reason = format!("unparsable {field} {value:?}");
                tracing::warn!("skipping line {line}: {reason}");
                outcome.skipped.push(SkippedRow { line, reason });
            }
            Err(e) => return Err(e),
        }
    }
    tracing::debug!(
        "cleaned {} rows, skipped {}",
        outcome.transactions.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::{day_month_year, locale_amount};

    fn raw(line: u64, date: &str, party: Option<&str>, amount: &str) -> RawRecord {
        RawRecord {
            date: date.to_string(),
            party: party.map(str::to_string),
            amount: amount.to_string(),
            line,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.234,56"), Some(1234.56));
        assert_eq!(parse_amount(" -10,50 "), Some(-10.5));
        assert_eq!(parse_amount("1.000.000"), Some(1_000_000.0));
        assert_eq!(parse_amount("42"), Some(42.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_parse_date_dmy() {
        assert_eq!(parse_date_dmy("01.01.2023"), Some(ymd(2023, 1, 1)));
        assert_eq!(parse_date_dmy(" 31.12.2022 "), Some(ymd(2022, 12, 31)));
        assert_eq!(parse_date_dmy("5.1.2023"), Some(ymd(2023, 1, 5)));
    }

    #[test]
    fn test_parse_date_dmy_rejects_invalid_dates() {
        assert_eq!(parse_date_dmy("31.02.2023"), None);
        assert_eq!(parse_date_dmy("01.13.2023"), None);
        assert_eq!(parse_date_dmy("2023-01-01"), None);
        assert_eq!(parse_date_dmy("01.01.23"), None);
        assert_eq!(parse_date_dmy(""), None);
    }

    #[test]
    fn test_parse_date_dmy_rejects_signs_and_spaces_in_parts() {
        assert_eq!(parse_date_dmy("01.01.-001"), None);
        assert_eq!(parse_date_dmy("01.01.+023"), None);
        assert_eq!(parse_date_dmy("+1.+1.2023"), None);
        assert_eq!(parse_date_dmy("01. 1.2023"), None);
        assert_eq!(parse_date_dmy("..2023"), None);
    }

    #[test]
    fn test_strict_fails_on_signed_year() {
        let records = vec![raw(2, "01.01.-001", Some("A"), "1,00")];
        let err = clean_records(&records, ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, BudgetError::Parse { line: 2, field: "Date", .. }));
    }

    #[test]
    fn test_clean_party() {
        assert_eq!(clean_party(Some("  Bundeskasse Trier ")), "Bundeskasse Trier");
        assert_eq!(clean_party(Some("   ")), MISSING_PARTY);
        assert_eq!(clean_party(None), MISSING_PARTY);
    }

    #[test]
    fn test_clean_record_example_row() {
        let txn = clean_record(&raw(2, "01.01.2023", Some("NETTO MARKEN-DISCOU."), "-10,50")).unwrap();
        assert_eq!(txn.date, ymd(2023, 1, 1));
        assert_eq!(txn.party, "NETTO MARKEN-DISCOU.");
        assert!((txn.amount + 10.50).abs() < 1e-9);
    }

    #[test]
    fn test_strict_fails_on_bad_amount() {
        let records = vec![
            raw(2, "01.01.2023", Some("A"), "1,00"),
            raw(3, "02.01.2023", Some("B"), "zwei"),
        ];
        let err = clean_records(&records, ParsePolicy::Strict).unwrap_err();
        match err {
            BudgetError::Parse { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "Amount");
                assert_eq!(value, "zwei");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_fails_on_bad_date() {
        let records = vec![raw(2, "2023/01/01", Some("A"), "1,00")];
        let err = clean_records(&records, ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, BudgetError::Parse { field: "Date", .. }));
    }

    #[test]
    fn test_lenient_skips_bad_rows_and_preserves_order() {
        let records = vec![
            raw(2, "01.01.2023", Some("A"), "1,00"),
            raw(3, "xx", Some("B"), "2,00"),
            raw(4, "03.01.2023", Some("C"), "-3,00"),
        ];
        let outcome = clean_records(&records, ParsePolicy::Lenient).unwrap();
        let parties: Vec<&str> = outcome.transactions.iter().map(|t| t.party.as_str()).collect();
        assert_eq!(parties, vec!["A", "C"]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].line, 3);
        assert_eq!(outcome.skipped[0].reason, "unparsable Date \"xx\"");
    }

    #[test]
    fn test_default_policy_is_strict() {
        assert_eq!(ParsePolicy::default(), ParsePolicy::Strict);
    }

    #[test]
    fn test_cleaning_rendered_output_is_a_no_op() {
        let records = vec![
            raw(2, "01.01.2023", Some(" NETTO MARKEN-DISCOU. "), "-10,50"),
            raw(3, "15.02.2023", None, "1.234,56"),
            raw(4, "28.02.2023", Some("Bundeskasse Trier"), "0,07"),
        ];
        let first = clean_records(&records, ParsePolicy::Strict).unwrap().transactions;
        let rendered: Vec<RawRecord> = first
            .iter()
            .enumerate()
            .map(|(i, t)| RawRecord {
                date: day_month_year(t.date),
                party: Some(t.party.clone()),
                amount: locale_amount(t.amount),
                line: i as u64 + 2,
            })
            .collect();
        let second = clean_records(&rendered, ParsePolicy::Strict).unwrap().transactions;
        assert_eq!(first, second);
    }
}
