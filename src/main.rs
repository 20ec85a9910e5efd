use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use igpay::batch::{self, BatchConfig, BatchTranslator};
use igpay::console;
use igpay::translator::SentenceTranslator;

#[derive(Parser, Debug)]
#[command(name = "igpay")]
#[command(about = "Case- and punctuation-preserving Pig Latin sentence translator")]
#[command(version)]
struct Args {
    /// Sentence to translate directly; starts the interactive shell when omitted
    text: Option<String>,

    /// Translate each line of this file instead of prompting
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write batch output to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Stats output file path for batch runs
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Abort batch runs on first read error
    #[arg(long)]
    fail_fast: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logs go to stderr; stdout carries only prompts and
    // translated sentences.
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("Starting igpay");
    info!(?args, "Parsed CLI arguments");

    if args.text.is_some() && args.input.is_some() {
        anyhow::bail!("--input cannot be combined with a sentence argument");
    }

    let translator = SentenceTranslator::with_default_rules();

    if let Some(text) = args.text {
        let translated = translator.translate_sentence(text.trim())?;
        println!("{translated}");
        return Ok(());
    }

    if let Some(input) = args.input {
        // Validate the input file early to fail with a clear error
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
        if !input.is_file() {
            anyhow::bail!("Input path is not a file: {}", input.display());
        }

        let batch_config = BatchConfig {
            fail_fast: args.fail_fast,
            ..BatchConfig::default()
        };
        let batch_translator = BatchTranslator::new(batch_config);

        info!("Starting batch translation of: {}", input.display());
        let stats = batch_translator
            .translate_file(&translator, &input, args.output.as_deref())
            .await?;

        info!(
            "Batch translation completed: {} lines translated, {} passed through, {} chars",
            stats.lines_translated, stats.lines_passed_through, stats.chars_processed
        );

        if let Some(ref error) = stats.read_error {
            info!("Batch run ended early: {}", error);
        }

        if let Some(stats_out) = args.stats_out {
            batch::write_stats(&stats, &stats_out).await?;
            info!("Stats written to {}", stats_out.display());
        }

        return Ok(());
    }

    console::run_interactive(&translator).await
}
