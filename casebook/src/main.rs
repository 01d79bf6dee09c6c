mod case;
mod cli;
mod config;
mod judge;
mod outcome;
mod report;
mod results;
mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "casebook", version, about = "Recorded check cases for drills")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List cases under casebook/cases.
    List,
    /// Run a case, recording each run under casebook/results.
    Run {
        case_id: String,
        #[arg(long, default_value_t = 1)]
        runs: u32,
    },
    /// Summarise recorded runs for a case.
    Report {
        case_id: String,
    },
    /// Delete recorded results for a case.
    Clean {
        case_id: String,
    },
}

fn main() -> Result<()> {
    drills::logging::init();
    let cli = Cli::parse();
    let repo_root = std::env::current_dir()?;
    match cli.command {
        Command::List => cli::list_cases(&repo_root),
        Command::Run { case_id, runs } => cli::run_case_by_id(&repo_root, &case_id, runs),
        Command::Report { case_id } => cli::report_case(&repo_root, &case_id),
        Command::Clean { case_id } => cli::clean_case(&repo_root, &case_id),
    }
}
