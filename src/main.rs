use anyhow::{Context, Result};
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use adverbial::lexicon::Lexicon;
use adverbial::matcher::AdverbMatcher;
use adverbial::server::{render_result, AdverbService};

#[derive(Parser, Debug)]
#[command(name = "adverbial")]
#[command(about = "Adverb detection engine and MCP tool server")]
#[command(version)]
struct Args {
    /// Dictionary file with one word or phrase per line; uses the built-in
    /// adverb list when omitted
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Check TEXT once, print the result, and exit instead of serving
    #[arg(long, value_name = "TEXT")]
    check: Option<String>,

    /// Print the one-shot result as JSON
    #[arg(long, requires = "check")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured logging must go to stderr; stdout carries the MCP stream
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Starting adverbial");

    // WHY: an unreadable dictionary is fatal before any request is served;
    // there is no partial or empty-lexicon fallback
    let lexicon = match &args.dictionary {
        Some(path) => Lexicon::from_file(path).await?,
        None => Lexicon::builtin(),
    };
    info!(
        words = lexicon.word_count(),
        phrases = lexicon.phrase_count(),
        "Lexicon ready"
    );

    let matcher = AdverbMatcher::new(lexicon).context("Failed to compile phrase patterns")?;

    if let Some(text) = args.check {
        let result = matcher.check(&text);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", render_result(&result));
        }
        return Ok(());
    }

    info!("Serving MCP on stdio");
    let service = AdverbService::new(Arc::new(matcher))
        .serve(stdio())
        .await
        .context("Failed to start MCP server")?;
    service.waiting().await?;

    Ok(())
}
