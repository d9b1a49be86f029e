use std::path::Path;

use crate::cli::render::format_chart;
use crate::cli::{Context, RangeArgs};
use crate::error::{BudgetError, Result};
use crate::filter::Side;
use crate::ledger::DateRange;

pub fn gross(ctx: &Context, file: &Path, range: &RangeArgs, side: Side) -> Result<()> {
    let ledger = ctx.open(file)?;
    let chart = ledger.monthly(range.range(), side)?;
    let title = match side {
        Side::Income => "Income per Month",
        Side::Outgo => "Euro Spent per Month",
    };
    println!("{title}\n{}", format_chart(&chart));
    Ok(())
}

/// `category` is an outgo label, or a party that no category claims.
pub fn trend(ctx: &Context, file: &Path, category: &str, range: &RangeArgs) -> Result<()> {
    let outgo = ctx.categories()?.build(Side::Outgo)?;
    let ledger = ctx.open(file)?;
    let known = outgo.is_label(category)
        || ledger
            .view(DateRange::default(), Side::Outgo, Some((&outgo, false)))
            .iter()
            .any(|t| t.party == category);
    if !known {
        return Err(BudgetError::Other(format!(
            "Unknown outgo category or party: {category} (categories: {})",
            outgo.labels().join(", ")
        )));
    }
    let chart = ledger.trend(range.range(), &outgo, category)?;
    println!("{category} per Month\n{}", format_chart(&chart));
    Ok(())
}
