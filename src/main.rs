use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gi_cleaner::logging;
use gi_cleaner::pipeline;

#[derive(Parser)]
#[command(name = "gi_cleaner")]
#[command(about = "Normalizes raw Goods Issue CSV exports into database-ready form")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean every CSV export in a directory
    Clean {
        /// Directory containing the raw CSV exports
        #[arg(long, default_value = "csv")]
        input: PathBuf,
        /// Directory the cleaned files are written into
        #[arg(long, default_value = "cleaned_csv")]
        output: PathBuf,
        /// File pattern to match (single * wildcard)
        #[arg(long, default_value = "*.csv")]
        pattern: String,
    },
}

fn main() {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            pattern,
        } => {
            println!("🧹 Cleaning CSV exports in {}...", input.display());
            let stats = pipeline::clean_directory(&input, &output, &pattern);

            println!("\n📊 Processing summary:");
            println!("   Files processed: {}", stats.files_processed);
            println!("   Rows processed: {}", stats.rows_processed);

            if stats.errors.is_empty() {
                println!("   No errors encountered");
            } else {
                println!("\n⚠️  Errors encountered:");
                for error in &stats.errors {
                    println!("   - {error}");
                }
            }
        }
    }
}
