use std::path::Path;

use crate::cli::render::format_summary;
use crate::cli::{Context, RangeArgs};
use crate::error::Result;

pub fn run(ctx: &Context, file: &Path, range: &RangeArgs, other: bool) -> Result<()> {
    let ledger = ctx.open(file)?;
    let categories = ctx.categories()?.build_all()?;
    let summary = ledger.summary(range.range(), &categories, other);
    println!("Summary\n{}", format_summary(&summary));
    Ok(())
}
