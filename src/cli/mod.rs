// src/cli/mod.rs
//! Command dispatch for the `regroup` binary.

pub mod args;

pub use args::{Cli, Commands};

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::engine::AnalysisRun;
use crate::metrics::{compute_table, MetricContext};
use crate::model::ProjectModel;
use crate::reporting::{console, json};
use crate::vectors::MetricsTable;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            model,
            metrics,
            json,
            matrix,
            verbose,
        } => handle_analyze(&model, metrics.as_deref(), json, matrix, verbose),
        Commands::Metrics { model, json } => handle_metrics(&model, json),
    }
}

fn handle_analyze(
    model_path: &Path,
    metrics_path: Option<&Path>,
    as_json: bool,
    matrix: bool,
    verbose: bool,
) -> Result<()> {
    let mut config = Config::load()?;
    config.show_matrix = config.show_matrix || matrix;
    config.verbose = config.verbose || verbose;

    let model = ProjectModel::load(model_path)?;
    let run = AnalysisRun::bind(&model);
    let table = load_or_compute_table(&run, metrics_path, &config)?;

    if config.verbose && !as_json {
        println!(
            "{} {} classes, {} methods",
            "Universe:".dimmed(),
            run.index().classes().len(),
            run.index().methods().len()
        );
        println!();
    }

    let report = run.run(&table);
    if as_json {
        println!("{}", json::render_report(&report)?);
    } else {
        console::print_report(&report, config.show_matrix);
    }
    Ok(())
}

fn handle_metrics(model_path: &Path, as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let model = ProjectModel::load(model_path)?;
    let run = AnalysisRun::bind(&model);
    let ctx = MetricContext {
        model: &model,
        index: run.index(),
    };
    let table = compute_table(&ctx, &config.disabled_metrics);

    if as_json {
        println!("{}", json::render_metrics(&table)?);
    } else {
        console::print_metrics(&table);
    }
    Ok(())
}

fn load_or_compute_table(
    run: &AnalysisRun,
    metrics_path: Option<&Path>,
    config: &Config,
) -> Result<MetricsTable> {
    match metrics_path {
        Some(path) => Ok(MetricsTable::load(path)?),
        None => {
            let ctx = MetricContext {
                model: run.index().model(),
                index: run.index(),
            };
            Ok(compute_table(&ctx, &config.disabled_metrics))
        }
    }
}
