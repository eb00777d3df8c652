//! Gravatar URL printer
//!
//! Usage:
//!   gravatar-url example@example.com --protocol https --size 80 --rating pg
//!
//! Prints the URL on stdout. Nothing is fetched.

use anyhow::Result;
use clap::Parser;
use gravatar_cli::Args;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let url = args.url()?;
    println!("{url}");
    Ok(())
}
