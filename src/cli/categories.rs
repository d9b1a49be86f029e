use crate::cli::render::format_categories;
use crate::cli::Context;
use crate::error::Result;
use crate::filter::Side;

pub fn list(ctx: &Context, side: Option<Side>) -> Result<()> {
    let config = ctx.categories()?;
    // Inconsistent lists are an error, not something to print.
    let set = config.build_all()?;
    let maps = match side {
        Some(s) => vec![set.for_side(s)],
        None => vec![&set.income, &set.outgo],
    };
    for (i, map) in maps.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let title = match map.side() {
            Side::Income => "Income categories",
            Side::Outgo => "Outgo categories",
        };
        let title = format!(
            "{title} ({} labels, {} parties)",
            map.labels().len(),
            map.party_count()
        );
        println!("{}", format_categories(&title, config.defs(map.side())));
    }
    Ok(())
}
