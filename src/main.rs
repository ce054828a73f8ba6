use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crop_cli::{
    display_banner, print_action_plan, print_results, print_section, run_session, CropAdvisor,
    InputCollector, Renderer, SessionLog, TypingRenderer, DEFAULT_LOG_FILE,
};
use crop_core::{assess, AssessmentResult, Error, TrendSummary};
use crop_llm::CompletionClient;

#[derive(Parser)]
#[command(name = "crop-health")]
#[command(about = "Estimate crop health from field readings and ask an LLM for advice", long_about = None)]
struct Cli {
    /// File the assessment is appended to
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Delay between characters when printing answers
    #[arg(long, default_value_t = 30)]
    typing_delay_ms: u64,

    /// Print answers immediately
    #[arg(long)]
    no_typing: bool,

    /// Model to request instead of the configured one
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        println!("{}", report(&e).red());
        std::process::exit(1);
    }
}

/// Message shown when a run aborts
fn report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(Error::EndOfInput) => "Error: Unexpected end of input. Please restart.".to_string(),
        _ => format!("An error occurred: {}. Please restart.", err),
    }
}

async fn run(cli: Cli) -> Result<()> {
    display_banner();

    let mut client = CompletionClient::from_env()?;
    if let Some(model) = cli.model {
        client = client.with_model(model);
    }

    let renderer = if cli.no_typing {
        TypingRenderer::instant()
    } else {
        TypingRenderer::new(Duration::from_millis(cli.typing_delay_ms))
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let (crop, readings) = {
        let mut collector = InputCollector::new(&mut input, &mut output);
        let crop = collector.select_crop()?;
        println!("\nSelected Crop: {}", crop.name.bold());
        (crop, collector.collect_readings()?)
    };

    tracing::info!(crop = crop.name, fields = readings.len(), "readings collected");

    let results: Vec<AssessmentResult> = readings.iter().map(|r| assess(r, &crop)).collect();
    print_results(&results);

    let trend = TrendSummary::from_results(&results)?;
    print_section("Trend Analysis");
    println!("{}", trend);

    let advisor = CropAdvisor::new(client, crop.name, results, trend);

    print_section("Initial LLM Crop Advice");
    println!("{} Asking for advice...", "🌱".green());
    let initial_advice = advisor.initial_advice().await;
    renderer.render(&mut output, &initial_advice)?;

    let conversation = run_session(&advisor, &mut input, &mut output, &renderer).await?;

    let log = SessionLog {
        crop_name: advisor.crop_name(),
        results: advisor.results(),
        trend: advisor.trend(),
        initial_advice: &initial_advice,
        conversation: &conversation,
    };
    log.append(&cli.log_file).await?;

    print_action_plan(&cli.log_file);
    Ok(())
}
