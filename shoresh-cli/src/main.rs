//! Binary entry point for the alignment batch tool.

use clap::Parser;
use shoresh_cli::commands::AlignArgs;

fn main() {
    let args = AlignArgs::parse();
    if let Err(err) = args.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
