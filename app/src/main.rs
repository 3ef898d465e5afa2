use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use docchat_ai::chat::ChatEngine;
use docchat_ai::llm::DeepSeekLlm;
use docchat_core::config::DocChatConfig;
use docchat_core::error::AppError;
use docchat_core::ingest::ingest_path;
use docchat_core::session::SessionStore;
use tracing_subscriber::EnvFilter;

/// Load documents into a session, then answer one question per stdin line.
#[derive(Debug, Parser)]
#[command(name = "docchat", version, about)]
struct Cli {
    /// TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Session that uploads and questions are bound to.
    #[arg(short, long, default_value = "default")]
    session: String,

    /// Document to ingest before chatting (repeatable).
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Overrides generation.api_key.
    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<DocChatConfig, AppError> {
    let mut cfg = match cli.config.as_deref() {
        Some(path) => DocChatConfig::load(path)?,
        None => DocChatConfig::default(),
    };
    cfg.apply_env();
    if let Some(key) = cli.api_key.as_ref() {
        cfg.generation.api_key = Some(key.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = load_config(&cli)?;
    let store = Arc::new(SessionStore::new());
    let generator = Arc::new(DeepSeekLlm::from_config(&cfg.generation)?);
    let engine = ChatEngine::new(Arc::clone(&store), generator, &cfg);

    for path in &cli.files {
        let summary = ingest_path(&store, &cli.session, path, &cfg.chunking)?;
        eprintln!("loaded {} ({} chunks)", summary.file_id, summary.chunks_count);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| {
            AppError::new("CLI_STDIN_FAILED", "Failed to read question").with_details(e.to_string())
        })?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        let resp = engine.answer(&cli.session, message)?;
        let json = serde_json::to_string(&resp).map_err(|e| {
            AppError::new("CLI_OUTPUT_FAILED", "Failed to encode response").with_details(e.to_string())
        })?;
        writeln!(stdout, "{json}").map_err(|e| {
            AppError::new("CLI_OUTPUT_FAILED", "Failed to write response").with_details(e.to_string())
        })?;
    }
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = run(Cli::parse()) {
        tracing::error!(code = %e.code, details = ?e.details, "{}", e.message);
        eprintln!("{e}");
        std::process::exit(1);
    }
}
