//! UI utilities for the CLI

use colored::*;
use crossterm::terminal::size;
use std::path::Path;

use crop_core::{format_reading, AssessmentResult, HealthTier, RiskLevel};

/// Display startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(60, terminal_width.saturating_sub(4)).max(50);

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.green());
    println!("{}", empty_line.green());

    let title = "Welcome to the Crop Health Estimator!";
    println!(
        "{}{}{}{}",
        "│  ".green(),
        title.green().bold(),
        " ".repeat(banner_width.saturating_sub(title.len() + 4)),
        "│".green()
    );

    println!("{}", empty_line.green());

    let feature_lines = [
        "Score field health for Wheat, Corn or Rice",
        "Spot disease risk and trends across fields",
        "Ask an LLM agronomist follow-up questions",
    ];

    for line in feature_lines {
        let content = format!("│  {}{}│", line, " ".repeat(banner_width.saturating_sub(line.len() + 4)));
        println!("{}", content.green());
    }

    println!("{}", empty_line.green());
    println!("{}", bottom_border.green());
}

/// Print a `=== Title ===` section header preceded by a blank line
pub fn print_section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold());
}

/// Print every field's result, colouring tier and risk
pub fn print_results(results: &[AssessmentResult]) {
    print_section("Crop Health Results");
    for r in results {
        println!("Field: {}", r.field_name.bold());
        println!(
            "Moisture: {}%, Temperature: {}°C, Vegetation: {}",
            format_reading(r.moisture),
            format_reading(r.temperature),
            format_reading(r.vegetation_score)
        );
        println!(
            "Score: {:.1}/100, Health: {}, Risk: {}",
            r.health_score,
            tier_colored(r.health_tier),
            risk_colored(r.risk)
        );
        println!("Tip: {}\n", r.tip);
    }
}

fn tier_colored(tier: HealthTier) -> ColoredString {
    match tier {
        HealthTier::Excellent => tier.as_str().green().bold(),
        HealthTier::Good => tier.as_str().green(),
        HealthTier::Fair => tier.as_str().yellow(),
        HealthTier::Poor => tier.as_str().red().bold(),
    }
}

fn risk_colored(risk: RiskLevel) -> ColoredString {
    match risk {
        RiskLevel::Low => risk.description().green(),
        RiskLevel::Moderate => risk.description().yellow(),
        RiskLevel::High => risk.description().red().bold(),
    }
}

/// Closing message once the log has been written
pub fn print_action_plan(log_path: &Path) {
    println!(
        "\n{} Results, trends, LLM advice, and Q&A saved to {}!",
        "✅".green(),
        log_path.display()
    );

    print_section("Action Plan");
    println!("1. Review {} for details.", log_path.display());
    println!("2. Update sensor data (moisture, vegetation).");
    println!("3. Follow LLM advice and Q&A for crop care.");
}
