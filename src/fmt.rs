use chrono::NaiveDate;

/// Group the integer digits of `val` (rounded to cents) with `.` and use `,` for decimals.
pub fn locale_amount(val: f64) -> String {
    let negative = val < 0.0 && (val * 100.0).round() != 0.0;
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-{grouped},{dec_part}")
    } else {
        format!("{grouped},{dec_part}")
    }
}

/// Euro amount for display: -1.234,56 €
pub fn money(val: f64) -> String {
    format!("{} \u{20ac}", locale_amount(val))
}

pub fn day_month_year(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
