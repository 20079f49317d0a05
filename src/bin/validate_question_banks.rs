//! Check that the question-bank JSON files parse

use std::path::PathBuf;

use clap::Parser;
use market_quiz::consts::DEFAULT_VALIDATE_FILES;
use market_quiz::question_bank::validate_files;

#[derive(Parser)]
#[command(name = "validate-question-banks")]
#[command(about = "Report whether each question-bank file is well-formed JSON", long_about = None)]
struct Cli {
    /// Files to check (defaults to the bundled question banks)
    paths: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let paths = if cli.paths.is_empty() {
        DEFAULT_VALIDATE_FILES.iter().map(|p| PathBuf::from(*p)).collect()
    } else {
        cli.paths
    };

    let reports = validate_files(&paths);
    for report in &reports {
        println!("{}", report.summary());
    }

    let valid = reports.iter().filter(|r| r.is_valid()).count();
    println!("\n{}/{} files valid", valid, reports.len());
}
