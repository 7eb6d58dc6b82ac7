mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    cli::logging::init(args.verbose);

    let result = Context::from_cli(&args).and_then(|ctx| match &args.command {
        Commands::Logs {
            filters,
            page,
            page_size,
        } => cli::commands::logs::execute(&ctx, filters, *page, *page_size),
        Commands::Search {
            keyword,
            page,
            page_size,
        } => cli::commands::search::execute(&ctx, keyword, *page, *page_size),
        Commands::Browse { filters } => cli::commands::browse::execute(&ctx, filters),
        Commands::PageSize { size } => cli::commands::page_size::execute(&ctx, *size),
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
