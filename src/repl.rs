//! Interactive and one-shot front-ends over a [`ChatSession`].
//!
//! Both read from the session's event stream to decide what to draw: the
//! transcript view is re-synced on every `TranscriptChanged`, and failed
//! replies are shown inline as errors. Neither path ends the process on a
//! provider failure.

use crate::session::{ChatSession, SessionEvent, SessionState, TurnOutcome};
use crate::tui::settings;
use crate::tui::{
    parse_slash_command, unescape_leading_slash, SlashCommandAction, SLASH_COMMANDS,
};
use crate::ui::render::{ProgressHandle, RenderSink};
use crate::ui::transcript::TranscriptView;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// What the input loop should do after one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Run the interactive loop until `/quit` or end of input.
pub async fn run_interactive<R>(
    session: &ChatSession,
    sink: &dyn RenderSink,
    input: R,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut events = session.subscribe();
    let mut view = TranscriptView::new();
    view.sync(sink, &session.transcript());

    let mut lines = input.lines();
    loop {
        sink.prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let outcome = handle_line(session, &mut view, &mut events, sink, &line).await;
        if outcome == LineOutcome::Quit {
            break;
        }
    }
    Ok(())
}

/// Handle one line of user input: a slash command or a chat message.
pub async fn handle_line(
    session: &ChatSession,
    view: &mut TranscriptView,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
    sink: &dyn RenderSink,
    line: &str,
) -> LineOutcome {
    let input = line.trim();
    if input.is_empty() {
        return LineOutcome::Continue;
    }

    if let Some(action) = parse_slash_command(input) {
        match action {
            SlashCommandAction::Quit => return LineOutcome::Quit,
            SlashCommandAction::Help => render_help(sink),
            SlashCommandAction::Reset => session.reset(),
            SlashCommandAction::Unknown(token) => {
                sink.warn(&format!("unknown command `{token}`; type /help for a list"));
            }
        }
        drain_events(session, view, events, sink);
        return LineOutcome::Continue;
    }

    let submit = session.submit(unescape_leading_slash(input));
    tokio::pin!(submit);
    let mut progress: Option<ProgressHandle> = None;

    // Pump events while the call is pending so the user turn is drawn before
    // the spinner starts.
    let result = loop {
        tokio::select! {
            biased;
            Some(event) = events.recv() => {
                apply_event(event, session, view, sink);
                if progress.is_none() && session.state() == SessionState::AwaitingReply {
                    progress = Some(sink.progress(settings::LABEL_PROGRESS));
                }
            }
            result = &mut submit => break result,
        }
    };
    drop(progress);

    drain_events(session, view, events, sink);
    if let Err(busy) = result {
        sink.warn(&busy.to_string());
    }
    LineOutcome::Continue
}

/// Submit a single prompt, print the reply, and return a process exit code.
pub async fn run_once(session: &ChatSession, sink: &dyn RenderSink, prompt: &str) -> i32 {
    let progress = sink.progress(settings::LABEL_PROGRESS);
    let outcome = session.submit(prompt).await;
    drop(progress);

    match outcome {
        Ok(TurnOutcome::Replied(reply)) => {
            sink.assistant_turn(&reply);
            0
        }
        Ok(TurnOutcome::Failed(err)) => {
            sink.error(err.message());
            1
        }
        Ok(TurnOutcome::Discarded) => {
            sink.error("conversation was reset before the reply arrived");
            1
        }
        Err(busy) => {
            sink.error(&busy.to_string());
            1
        }
    }
}

fn drain_events(
    session: &ChatSession,
    view: &mut TranscriptView,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
    sink: &dyn RenderSink,
) {
    while let Ok(event) = events.try_recv() {
        apply_event(event, session, view, sink);
    }
}

fn apply_event(
    event: SessionEvent,
    session: &ChatSession,
    view: &mut TranscriptView,
    sink: &dyn RenderSink,
) {
    match event {
        SessionEvent::TranscriptChanged => view.sync(sink, &session.transcript()),
        SessionEvent::ReplyFailed { message } => sink.error(&message),
    }
}

fn render_help(sink: &dyn RenderSink) {
    sink.section("commands");
    for command in SLASH_COMMANDS {
        sink.detail(&format!("{:<8} {}", command.name, command.description));
    }
}
