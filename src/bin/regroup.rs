// src/bin/regroup.rs
use anyhow::Result;
use clap::Parser;
use regroup_core::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
