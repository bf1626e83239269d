//! CLI argument parsing via clap.

use clap::Parser;

/// Chat with OpenAI or OpenRouter from the terminal.
///
/// The provider is chosen by the PROVIDER environment variable
/// (`openai` or `openrouter`).
#[derive(Debug, Parser)]
#[command(name = "nebula", version)]
pub struct Args {
    /// Prompt to send. If provided, runs in one-shot mode and exits.
    pub prompt: Option<String>,

    /// Path to config file (default: ./nebula.toml or ~/.config/nebula/nebula.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the system instruction that seeds the conversation.
    #[arg(long = "system-prompt")]
    pub system_prompt: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
