//! Nebula: a terminal chat front-end for hosted completion APIs.
//!
//! A session keeps one transcript seeded with a system instruction, sends the
//! whole transcript to OpenAI or OpenRouter on every turn, and appends the
//! reply. Provider selection comes from the process environment; presentation
//! settings come from an optional `nebula.toml`.
//!
//! # Quick start
//!
//! ```no_run
//! use nebula::config::{load_config, resolve_provider};
//! use nebula::session::{ChatSession, TurnOutcome};
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let provider = resolve_provider();
//! let session = ChatSession::new(&config, &provider);
//! if let Ok(TurnOutcome::Replied(reply)) = session.submit("Hello!").await {
//!     println!("{reply}");
//! }
//! # }
//! ```

pub mod api;
pub mod config;
pub mod conversation;
pub mod error;
pub mod repl;
pub mod session;
pub mod tui;
pub mod types;
pub mod ui;
