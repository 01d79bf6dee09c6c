//! Introductory exercise drills.
//!
//! Every exercise is exposed as a subcommand; see `drills --help`.

use clap::Parser;
use drills::cli::{Cli, run};
use drills::{exit_codes, logging};

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}
