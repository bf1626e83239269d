//! Chat session orchestration.
//!
//! A [`ChatSession`] owns one transcript and one completion client. Each
//! [`ChatSession::submit`] appends the user message, sends the whole
//! transcript to the provider, and appends the reply on success. Provider
//! failures stop here: they become [`TurnOutcome::Failed`] plus a
//! [`SessionEvent::ReplyFailed`] notification, and the session stays usable.
//!
//! At most one turn is in flight. A second submit while the first is awaiting
//! its reply is rejected with [`SessionBusy`]. A reset abandons the in-flight
//! turn, so its reply is dropped rather than landing in the new conversation.

use crate::api::{ApiClient, CompletionClient};
use crate::config::{Config, ProviderConfig};
use crate::conversation::Transcript;
use crate::error::{ProviderCallError, SessionBusy};
use crate::types::Message;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Orchestrator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

/// Notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The transcript was appended to or reset; re-render it.
    TranscriptChanged,
    /// The provider call for the latest user message failed.
    ReplyFailed { message: String },
}

/// Result of one accepted submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The reply was appended to the transcript.
    Replied(String),
    /// The call failed; only the user message was appended.
    Failed(ProviderCallError),
    /// The conversation was reset while the reply was in flight.
    Discarded,
}

struct SessionInner {
    transcript: Transcript,
    /// Ticket of the turn currently awaiting a reply.
    in_flight: Option<u64>,
    next_ticket: u64,
}

/// One user's conversation plus the client that answers it.
pub struct ChatSession {
    client: Box<dyn CompletionClient>,
    inner: Mutex<SessionInner>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<SessionEvent>>>,
}

impl ChatSession {
    /// Create a session talking to the resolved provider over HTTP.
    pub fn new(config: &Config, provider: &ProviderConfig) -> Self {
        info!(
            provider = %provider.provider,
            model = %provider.model,
            base_url = %provider.base_url,
            "starting chat session"
        );
        let client = Box::new(ApiClient::new(
            provider,
            Duration::from_secs(config.network.api_timeout_secs),
        ));
        Self::with_client(config.chat.system_prompt.clone(), client)
    }

    /// Create a session with an explicit completion client.
    ///
    /// Used for deterministic testing and alternative backends.
    pub fn with_client(system_prompt: impl Into<String>, client: Box<dyn CompletionClient>) -> Self {
        Self {
            client,
            inner: Mutex::new(SessionInner {
                transcript: Transcript::new(system_prompt),
                in_flight: None,
                next_ticket: 0,
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a new event subscriber.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        lock_ignoring_poison(&self.subscribers).push(tx);
        rx
    }

    pub fn state(&self) -> SessionState {
        if self.lock().in_flight.is_some() {
            SessionState::AwaitingReply
        } else {
            SessionState::Idle
        }
    }

    /// Snapshot of the current transcript.
    pub fn transcript(&self) -> Transcript {
        self.lock().transcript.clone()
    }

    /// Submit one user message and wait for the provider's reply.
    ///
    /// The text is appended as-is; callers trim and skip empty input.
    pub async fn submit(&self, user_text: &str) -> Result<TurnOutcome, SessionBusy> {
        let (turn, request) = {
            let mut inner = self.lock();
            if inner.in_flight.is_some() {
                return Err(SessionBusy);
            }
            let ticket = inner.next_ticket;
            inner.next_ticket = inner.next_ticket.wrapping_add(1);
            inner.in_flight = Some(ticket);
            inner.transcript.append(Message::user(user_text));
            let turn = TurnGuard {
                session: self,
                ticket,
            };
            (turn, inner.transcript.messages().to_vec())
        };
        self.emit(SessionEvent::TranscriptChanged);

        let result = self.client.complete(&request).await;

        match result {
            Ok(reply) => {
                let applied = {
                    let mut inner = self.lock();
                    if inner.in_flight == Some(turn.ticket) {
                        inner.transcript.append(Message::assistant(reply.clone()));
                        inner.in_flight = None;
                        true
                    } else {
                        false
                    }
                };
                drop(turn);
                if applied {
                    self.emit(SessionEvent::TranscriptChanged);
                    Ok(TurnOutcome::Replied(reply))
                } else {
                    debug!("discarding reply for a conversation that was reset");
                    Ok(TurnOutcome::Discarded)
                }
            }
            Err(err) => {
                let current = {
                    let mut inner = self.lock();
                    if inner.in_flight == Some(turn.ticket) {
                        inner.in_flight = None;
                        true
                    } else {
                        false
                    }
                };
                drop(turn);
                if current {
                    self.emit(SessionEvent::ReplyFailed {
                        message: err.message().to_string(),
                    });
                    Ok(TurnOutcome::Failed(err))
                } else {
                    debug!(error = %err, "discarding failure for a conversation that was reset");
                    Ok(TurnOutcome::Discarded)
                }
            }
        }
    }

    /// Discard all turns, keeping only the system message.
    ///
    /// Always allowed. A turn still in flight is abandoned.
    pub fn reset(&self) {
        {
            let mut inner = self.lock();
            inner.transcript.reset();
            inner.in_flight = None;
        }
        debug!("conversation reset");
        self.emit(SessionEvent::TranscriptChanged);
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        lock_ignoring_poison(&self.inner)
    }

    fn emit(&self, event: SessionEvent) {
        lock_ignoring_poison(&self.subscribers).retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Returns the session to `Idle` when a turn ends, including when the submit
/// future is dropped mid-call.
struct TurnGuard<'a> {
    session: &'a ChatSession,
    ticket: u64,
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.session.lock();
        if inner.in_flight == Some(self.ticket) {
            inner.in_flight = None;
        }
    }
}

fn lock_ignoring_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
