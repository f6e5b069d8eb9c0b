// src/reporting/console.rs
//! Colored console rendering of the refactoring report.

use colored::Colorize;

use crate::model::EntityKind;
use crate::recommend::RefactoringReport;
use crate::vectors::MetricsTable;

pub fn print_report(report: &RefactoringReport, show_matrix: bool) {
    print_block("CLUSTERIZATION", &report.clusterization);
    print_block("MOVE METHODS", &report.move_methods);
    print_block("CREATE CLASSES", &report.create_class);
    print_block("REMOVE CLASSES", &report.remove_class);
    print_block("STATISTICS", &report.statistics);
    if show_matrix {
        print_matrix(report);
    }
}

fn print_block(title: &str, body: &str) {
    println!("{}", title.cyan().bold());
    if body.trim().is_empty() {
        println!("  {}", "(none)".dimmed());
    } else {
        for line in body.trim_end().lines() {
            println!("  {line}");
        }
    }
    println!();
}

/// The matrix renders as an index legend plus one row per entity; `-`
/// marks incomparable pairs.
fn print_matrix(report: &RefactoringReport) {
    println!("{}", "DISTANCE MATRIX".cyan().bold());
    for (i, name) in report.names.iter().enumerate() {
        println!("  {} {name}", format!("[{i}]").blue());
    }
    println!();
    for (i, name) in report.names.iter().enumerate() {
        let Some(row) = report.distances.get(name) else {
            continue;
        };
        let cells: Vec<String> = row.iter().map(|d| format!("{:>8}", d.to_string())).collect();
        println!("  {} {}", format!("[{i}]").blue(), cells.join(" "));
    }
    println!();
}

pub fn print_metrics(table: &MetricsTable) {
    for (kind, label) in [
        (EntityKind::Class, "CLASS METRICS"),
        (EntityKind::Method, "METHOD METRICS"),
    ] {
        println!("{}", label.cyan().bold());
        let metrics = table.metrics_for(kind);
        if metrics.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for (metric, values) in metrics {
            println!("  {}", metric.yellow());
            for (entity, value) in values {
                println!("    {entity}: {value}");
            }
        }
        println!();
    }
}
