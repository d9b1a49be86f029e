mod aggregate;
mod categories;
mod cleaner;
mod cli;
mod error;
mod filter;
mod fmt;
mod ledger;
mod loader;
mod models;
mod monthly;
mod settings;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, Context, GlobalArgs};
use error::Result;
use filter::Side;

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(global: &GlobalArgs, command: Commands) -> Result<()> {
    match command {
        Commands::Init { categories_file } => cli::init::run(categories_file),
        Commands::Show {
            file,
            range,
            expenses,
            categorize,
            other,
        } => {
            let side = if expenses { Side::Outgo } else { Side::Income };
            cli::show::run(&Context::resolve(global), &file, &range, side, categorize, other)
        }
        Commands::Summary { file, range, other } => {
            cli::summary::run(&Context::resolve(global), &file, &range, other)
        }
        Commands::Monthly { file, range, income } => {
            let side = if income { Side::Income } else { Side::Outgo };
            cli::monthly::gross(&Context::resolve(global), &file, &range, side)
        }
        Commands::Trend {
            file,
            category,
            range,
        } => cli::monthly::trend(&Context::resolve(global), &file, &category, &range),
        Commands::Categories { side } => {
            cli::categories::list(&Context::resolve(global), side.map(Side::from))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.global.verbose);

    if let Err(e) = dispatch(&cli.global, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
