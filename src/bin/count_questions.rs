//! Print the number of questions in a JSON question bank

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use market_quiz::consts::DEFAULT_QUESTIONS_JSON;
use market_quiz::question_bank::count_questions_file;

#[derive(Parser)]
#[command(name = "count-questions")]
#[command(about = "Count entries in a JSON question array", long_about = None)]
struct Cli {
    /// Question bank file
    #[arg(default_value = DEFAULT_QUESTIONS_JSON)]
    path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let count = count_questions_file(&cli.path)?;
    println!("{}: {} questions", cli.path.display(), count);
    Ok(())
}
