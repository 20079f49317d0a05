//! Count question ids (`L<level>-<section>-<topic>-<nnn>`) in a text bank

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use market_quiz::consts::{DEFAULT_QUESTIONS_TEXT, ID_SAMPLE_SIZE};
use market_quiz::question_bank::scan_question_ids_file;

#[derive(Parser)]
#[command(name = "count-question-ids")]
#[command(about = "Count question ids in a plain-text question bank", long_about = None)]
struct Cli {
    /// Question bank file
    #[arg(default_value = DEFAULT_QUESTIONS_TEXT)]
    path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let scan = scan_question_ids_file(&cli.path)?;
    println!("Found {} question ids in {}", scan.count, cli.path.display());

    println!("\nFirst {}:", ID_SAMPLE_SIZE);
    for id in &scan.first {
        println!("  {}", id);
    }

    println!("\nLast {}:", ID_SAMPLE_SIZE);
    for id in &scan.last {
        println!("  {}", id);
    }
    Ok(())
}
