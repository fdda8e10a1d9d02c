mod combine;
mod count_empty;
mod dedup;
mod difficulty_cmd;
mod extract;
mod reformat;
mod split;
mod split_boards;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sudoprep")]
#[command(about = "Sudoku dataset preparation pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Split,
    CountEmpty,
    Difficulty,
    Dedup,
    Extract,
    Reformat,
    Combine,
    SplitBoards,
}

pub fn run(cli: Cli) {
    match cli.command {
        Commands::Split => split::run(),
        Commands::CountEmpty => count_empty::run(),
        Commands::Difficulty => difficulty_cmd::run(),
        Commands::Dedup => dedup::run(),
        Commands::Extract => extract::run(),
        Commands::Reformat => reformat::run(),
        Commands::Combine => combine::run(),
        Commands::SplitBoards => split_boards::run(),
    }
}
