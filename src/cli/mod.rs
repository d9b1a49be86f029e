pub mod categories;
pub mod init;
pub mod monthly;
pub mod render;
pub mod show;
pub mod summary;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::categories::CategoryConfig;
use crate::cleaner::{parse_date_dmy, ParsePolicy};
use crate::error::{BudgetError, Result};
use crate::filter::Side;
use crate::ledger::{DateRange, Ledger};
use crate::settings::{load_settings, shellexpand_path, Settings};

/// Accepts DD.MM.YYYY (as in the export) or YYYY-MM-DD.
pub(crate) fn parse_date_arg(s: &str) -> Result<NaiveDate> {
    parse_date_dmy(s)
        .or_else(|| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .ok_or_else(|| BudgetError::InvalidDate(s.to_string()))
}

#[derive(Parser)]
#[command(
    name = "budgetcheck",
    version,
    about = "Categorize and summarize semicolon-delimited bank exports."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Category map JSON file (overrides settings)
    #[arg(long, global = true)]
    pub categories: Option<String>,
    /// Skip rows with unparsable Date/Amount instead of failing
    #[arg(long, global = true, conflicts_with = "strict")]
    pub lenient: bool,
    /// Fail on the first unparsable row, even if settings say lenient
    #[arg(long, global = true)]
    pub strict: bool,
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Clone)]
pub struct RangeArgs {
    /// Start date, inclusive (default: earliest in file)
    #[arg(long = "from", value_parser = parse_date_arg)]
    pub from: Option<NaiveDate>,
    /// End date, inclusive (default: latest in file)
    #[arg(long = "to", value_parser = parse_date_arg)]
    pub to: Option<NaiveDate>,
}

impl RangeArgs {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List income (or expenses) in a date range.
    Show {
        /// Semicolon-delimited export with Date, Party and Amount columns ("-" for stdin)
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
        /// Show expenses instead of income
        #[arg(long)]
        expenses: bool,
        /// Replace party names with category labels
        #[arg(long)]
        categorize: bool,
        /// Collapse unmatched parties into OTHER (implies --categorize)
        #[arg(long)]
        other: bool,
    },
    /// Categorized totals for income and expenses.
    Summary {
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
        /// Collapse unmatched parties into OTHER
        #[arg(long)]
        other: bool,
    },
    /// Monthly gross expenses (or income) as a bar chart.
    Monthly {
        file: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
        /// Chart income instead of expenses
        #[arg(long)]
        income: bool,
    },
    /// Month-by-month spending in one category.
    Trend {
        file: PathBuf,
        /// Outgo category label (e.g. CASH) or an uncategorized party
        #[arg(long)]
        category: String,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Show the active category lists.
    Categories {
        /// Only show one side
        #[arg(long, value_enum)]
        side: Option<SideArg>,
    },
    /// Write settings and a starter category file.
    Init {
        /// Where to keep the category map (default: ~/.config/budgetcheck/categories.json)
        #[arg(long = "categories-file")]
        categories_file: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SideArg {
    Income,
    Outgo,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Income => Side::Income,
            SideArg::Outgo => Side::Outgo,
        }
    }
}

/// Parse policy and category file after merging flags with saved settings.
pub struct Context {
    pub policy: ParsePolicy,
    categories_path: Option<PathBuf>,
}

impl Context {
    pub fn resolve(global: &GlobalArgs) -> Self {
        Self::merge(global, load_settings())
    }

    fn merge(global: &GlobalArgs, settings: Settings) -> Self {
        let categories_path = global
            .categories
            .clone()
            .or(settings.categories_path)
            .map(|p| PathBuf::from(shellexpand_path(&p)));
        let policy = if !global.strict && (global.lenient || settings.lenient) {
            ParsePolicy::Lenient
        } else {
            ParsePolicy::Strict
        };
        Self {
            policy,
            categories_path,
        }
    }

    /// Read only by commands that categorize.
    pub fn categories(&self) -> Result<CategoryConfig> {
        CategoryConfig::load_or_builtin(self.categories_path.as_deref())
    }

    /// `-` reads the export from stdin.
    pub fn open(&self, file: &Path) -> Result<Ledger> {
        let ledger = if file == Path::new("-") {
            Ledger::from_reader(std::io::stdin().lock(), self.policy)?
        } else {
            Ledger::open(file, self.policy)?
        };
        if !ledger.skipped().is_empty() {
            eprintln!(
                "Skipped {} unparsable row(s) in {}",
                ledger.skipped().len(),
                file.display()
            );
            for row in ledger.skipped() {
                eprintln!("  line {}: {}", row.line, row.reason);
            }
        }
        Ok(ledger)
    }
}
