//! cardforge - document-to-flashcards generator
//!
//! CLI entry point: run the HTTP server, or generate once in batch mode.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use cardforge::cli::{Cli, Command};
use cardforge::config::Config;
use cardforge::export::{self, ExportFormat};
use cardforge::extract::{self, SourceKind};
use cardforge::generate::Generator;
use cardforge::llm::create_model;
use cardforge::prompts::PromptLoader;
use cardforge::server::{self, AppState};
use cardforge::session::SessionStore;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let level = match cli_log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(
        provider = %config.llm.provider,
        model = %config.llm.model,
        "cardforge loaded config"
    );

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Serve { host, port }) => {
            debug!(?host, ?port, "main: matched Serve command");
            cmd_serve(config, host, port).await
        }
        Some(Command::Generate {
            file,
            text,
            count,
            export,
        }) => {
            debug!(?file, count, ?export, "main: matched Generate command");
            cmd_generate(&config, file, text, count, export).await
        }
        None => {
            debug!("main: no command specified, serving");
            cmd_serve(config, None, None).await
        }
    }
}

/// Run the HTTP server
async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    debug!(?host, ?port, "cmd_serve: called");
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let model = create_model(&config.llm).context("Failed to create model client")?;
    let prompts = PromptLoader::new(std::env::current_dir()?);

    let state = AppState {
        generator: Arc::new(Generator::new(model, prompts)),
        sessions: Arc::new(SessionStore::new()),
        config: Arc::new(config),
    };

    server::serve(state).await
}

/// Generate flashcards once (batch mode) and print or export them
async fn cmd_generate(
    config: &Config,
    file: Option<PathBuf>,
    text: Option<String>,
    count: u32,
    export_format: Option<String>,
) -> Result<()> {
    debug!(?file, count, ?export_format, "cmd_generate: called");

    let mut source_text = String::new();
    if let Some(path) = file {
        let kind = SourceKind::from_path(&path)
            .ok_or_else(|| eyre!("Unsupported file type: {}. Supported: pdf, docx, pptx, txt", path.display()))?;
        source_text = extract::extract(&path, kind).context("Failed to extract text")?;
        debug!(text_len = source_text.len(), %kind, "cmd_generate: extracted file text");
    }
    if let Some(text) = text {
        let text = text.trim();
        if !text.is_empty() {
            if !source_text.is_empty() {
                source_text.push('\n');
            }
            source_text.push_str(text);
        }
    }

    if source_text.trim().is_empty() {
        return Err(eyre!("No content provided. Pass --file and/or --text."));
    }

    let model = create_model(&config.llm).context("Failed to create model client")?;
    let generator = Generator::new(model, PromptLoader::new(std::env::current_dir()?));

    let cards = generator.generate(&source_text, count).await?;
    debug!(count = cards.len(), "cmd_generate: generation finished");

    if cards.is_empty() {
        println!("Model returned no usable flashcards.");
        return Ok(());
    }

    match export_format {
        Some(format) => {
            let format = ExportFormat::parse(&format)?;
            let path = export::export(&cards, format, &config.storage)?;
            println!("Wrote {} cards to {}", cards.len(), path.display());
        }
        None => {
            for (i, card) in cards.iter().enumerate() {
                println!("Q{}: {}", i + 1, card.question);
                println!("A{}: {}", i + 1, card.answer);
                println!();
            }
        }
    }

    Ok(())
}
