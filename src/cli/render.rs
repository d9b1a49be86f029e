use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::aggregate::{grand_total, sort_by_magnitude};
use crate::categories::CategoryDef;
use crate::fmt::{day_month_year, money};
use crate::ledger::Summary;
use crate::models::{AggregatedRow, Transaction};
use crate::monthly::Chart;

const BAR_WIDTH: usize = 40;

fn amount_cell(val: f64) -> Cell {
    let s = money(val);
    let s = if val < 0.0 { s.red().to_string() } else { s.green().to_string() };
    Cell::new(s).set_alignment(CellAlignment::Right)
}

// ---------------------------------------------------------------------------
// Pure formatting functions (pipeline output → String)
// ---------------------------------------------------------------------------

pub fn format_transactions(txns: &[Transaction]) -> String {
    if txns.is_empty() {
        return "No transactions in range.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Party", "Amount"]);
    for t in txns {
        table.add_row(vec![
            Cell::new(day_month_year(t.date)),
            Cell::new(&t.party),
            amount_cell(t.amount),
        ]);
    }
    let total: f64 = txns.iter().map(|t| t.amount).sum();
    table.add_row(vec![Cell::new(""), Cell::new("Total".bold()), amount_cell(total)]);
    table.to_string()
}

fn add_section(table: &mut Table, heading: colored::ColoredString, rows: &[AggregatedRow], total_label: &str) {
    table.add_row(vec![Cell::new(heading), Cell::new("")]);
    let mut rows = rows.to_vec();
    sort_by_magnitude(&mut rows);
    for row in &rows {
        table.add_row(vec![Cell::new(format!("  {}", row.label)), amount_cell(row.total)]);
    }
    table.add_row(vec![Cell::new(total_label.bold()), amount_cell(grand_total(&rows))]);
    table.add_row(vec![Cell::new(""), Cell::new("")]);
}

pub fn format_summary(summary: &Summary) -> String {
    if summary.income.is_empty() && summary.outgo.is_empty() {
        return "No transactions in range.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount"]);
    if !summary.income.is_empty() {
        add_section(&mut table, "INCOME".green().bold(), &summary.income, "Total Income");
    }
    if !summary.outgo.is_empty() {
        add_section(&mut table, "EXPENSES".red().bold(), &summary.outgo, "Total Expenses");
    }
    let net = grand_total(&summary.income) + grand_total(&summary.outgo);
    table.add_row(vec![Cell::new("NET".bold()), amount_cell(net)]);
    table.to_string()
}

pub fn format_chart(chart: &Chart) -> String {
    let points = match chart {
        Chart::Empty => return "No data to plot.".to_string(),
        Chart::Series(points) => points,
    };
    let max = points.iter().map(|p| p.magnitude).fold(0.0_f64, f64::max);

    let mut table = Table::new();
    table.set_header(vec!["Month", "Amount", ""]);
    for p in points {
        let len = if max > 0.0 {
            ((p.magnitude / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        table.add_row(vec![
            Cell::new(p.label()),
            Cell::new(money(p.magnitude)).set_alignment(CellAlignment::Right),
            Cell::new("\u{2588}".repeat(len).cyan()),
        ]);
    }
    table.to_string()
}

pub fn format_categories(title: &str, defs: &[CategoryDef]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Parties"]);
    for def in defs {
        table.add_row(vec![Cell::new(def.label.as_str().bold()), Cell::new(def.parties.join("\n"))]);
    }
    format!("{title}\n{table}")
}
