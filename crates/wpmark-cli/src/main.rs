//! wpmark - Convert a WordPress XML export into markdown files.

use clap::Parser;
use wpmark_cli::{config, convert, logging, Cli, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> wpmark_cli::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = config::resolve(&cli)?;
    let stats = convert(&cli.source, config)?;

    let formatter = Formatter::new(cli.format, !cli.no_color);
    println!("{}", formatter.format_stats(&stats)?);
    Ok(())
}
