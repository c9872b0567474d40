use clap::Parser;
use soundtrack::{logging, setup};
use std::env;

/// print the dev environment setup commands for this machine
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
struct Cli {
    /// print the instructions for another platform instead of the detected one
    #[clap(short = 'p', long, value_enum)]
    platform: Option<setup::Platform>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let platform = cli.platform.unwrap_or_else(setup::Platform::detect);
    tracing::debug!(%platform, "printing setup commands");

    println!("{}", setup::banner());
    print!("{}", platform.commands().render());

    let cwd = env::current_dir().unwrap_or_default();
    print!("{}", setup::checkout_hint(&cwd));
}
