//! CLI entry point for nebula.

mod cli;

use clap::Parser;
use nebula::config::{load_config, resolve_provider};
use nebula::repl::{run_interactive, run_once};
use nebula::session::ChatSession;
use nebula::ui::render::{set_progress_enabled, Renderer};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = cli::Args::parse();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(prompt) = &args.system_prompt {
        if prompt.trim().is_empty() {
            eprintln!("error: --system-prompt must not be empty");
            std::process::exit(1);
        }
        config.chat.system_prompt = prompt.clone();
    }
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    set_progress_enabled(config.display.show_progress);
    let provider = resolve_provider();
    let session = ChatSession::new(&config, &provider);

    if let Some(prompt) = args.prompt.as_deref() {
        let code = run_once(&session, &renderer, prompt).await;
        std::process::exit(code);
    }

    let label = config
        .display
        .show_provider
        .then(|| provider.provider.display_name());
    renderer.header(label, &provider.model);

    if let Err(e) = run_interactive(&session, &renderer, BufReader::new(tokio::io::stdin())).await {
        renderer.error(&format!("failed to read input: {e}"));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `NEBULA_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("NEBULA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
