use std::path::Path;

use crate::cli::render::format_transactions;
use crate::cli::{Context, RangeArgs};
use crate::error::Result;
use crate::filter::Side;
use crate::fmt::day_month_year;

pub fn run(ctx: &Context, file: &Path, range: &RangeArgs, side: Side, categorize: bool, other: bool) -> Result<()> {
    let ledger = ctx.open(file)?;
    let map = if categorize || other {
        Some(ctx.categories()?.build(side)?)
    } else {
        None
    };
    let rows = ledger.view(range.range(), side, map.as_ref().map(|m| (m, other)));

    let title = match side {
        Side::Income => "Income",
        Side::Outgo => "Expenses",
    };
    match ledger.span() {
        Some((min, max)) => {
            let from = range.from.unwrap_or(min);
            let to = range.to.unwrap_or(max);
            println!(
                "{title} {} to {} ({} of {} rows)",
                day_month_year(from),
                day_month_year(to),
                rows.len(),
                ledger.transactions().len()
            );
        }
        None => println!("{title}"),
    }
    println!("{}", format_transactions(&rows));
    Ok(())
}
