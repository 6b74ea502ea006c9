//! `oxygenc` CLI entry point.

use clap::Parser;
use oxygenc_drv::{init_logging, run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("error: {}", e);
        std::process::exit(2);
    }

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}
