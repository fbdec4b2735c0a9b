use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod calculate_cmd;
mod cart_cmd;
mod classify_cmd;
mod cli;
mod error;
mod products_cmd;
mod regions_cmd;
mod shared;

use calculate_cmd::run_calculate;
use cart_cmd::run_cart;
use classify_cmd::run_classify;
use cli::{Cli, Commands};
use error::{output_format_hint, parse_output_format, render_error};
use products_cmd::run_products;
use regions_cmd::run_regions;

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let requested = cli.command.output_format().to_string();
    debug!(output_format = %requested, "parsed command line");
    let output_format = match parse_output_format(&requested) {
        Ok(format) => format,
        Err(err) => return render_error(&err, output_format_hint(&requested)),
    };

    let result = match cli.command {
        Commands::Calculate(args) => run_calculate(args, output_format),
        Commands::Classify(args) => run_classify(args, output_format),
        Commands::Regions(args) => run_regions(args, output_format),
        Commands::Products(args) => run_products(args, output_format),
        Commands::Cart(args) => run_cart(args, output_format),
    };

    match result {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}
