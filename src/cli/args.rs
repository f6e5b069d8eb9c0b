// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regroup", version, about = "Structural refactoring recommender")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cluster methods over classes and print refactoring recommendations
    Analyze {
        /// Project model document (JSON)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Externally computed metrics table; stock calculators run when absent
        #[arg(long, value_name = "FILE")]
        metrics: Option<PathBuf>,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
        /// Include the all-pairs distance matrix
        #[arg(long)]
        matrix: bool,
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print the metrics table for a project model
    Metrics {
        /// Project model document (JSON)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },
}
