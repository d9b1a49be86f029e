use std::collections::HashMap;

use crate::models::{AggregatedRow, Transaction};

/// Sum amounts per party label. One row per label, in first-occurrence order.
pub fn aggregate(txns: &[Transaction]) -> Vec<AggregatedRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<AggregatedRow> = Vec::new();

    for t in txns {
        match index.get(t.party.as_str()).copied() {
            Some(i) => rows[i].total += t.amount,
            None => {
                index.insert(t.party.as_str(), rows.len());
                rows.push(AggregatedRow {
                    label: t.party.clone(),
                    total: t.amount,
                });
            }
        }
    }
    rows
}

pub fn grand_total(rows: &[AggregatedRow]) -> f64 {
    rows.iter().map(|r| r.total).sum()
}

/// Largest absolute total first. Stable, so ties keep their order.
pub fn sort_by_magnitude(rows: &mut [AggregatedRow]) {
    rows.sort_by(|a, b| b.total.abs().total_cmp(&a.total.abs()));
}
