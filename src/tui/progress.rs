//! "processing reply" indicator shown on stderr while a provider call is pending.
//!
//! The indicator runs on its own thread and redraws one status line per tick.
//! Dropping the sender half of its stop channel ends it immediately, so a fast
//! reply never waits out a full tick.

use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

static PROGRESS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Owns a running indicator; stops and clears it on drop.
pub struct ProgressHandle {
    stop: Option<mpsc::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ProgressHandle {
    /// A handle with nothing running behind it.
    pub fn disabled() -> Self {
        Self {
            stop: None,
            thread: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }

    /// Stop the indicator and wait for its line to be cleared.
    pub fn finish(&mut self) {
        self.stop.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Globally enable/disable the indicator (`[display] show_progress`).
pub fn set_progress_enabled(enabled: bool) {
    PROGRESS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Start the pending-reply indicator. No-op when disabled or stderr is not a TTY.
pub fn start_progress(label: impl Into<String>, color: bool) -> ProgressHandle {
    if !PROGRESS_ENABLED.load(Ordering::Relaxed) || !io::stderr().is_terminal() {
        return ProgressHandle::disabled();
    }

    let pending = PendingReply {
        label: label.into(),
        started: Instant::now(),
        color,
    };
    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    let tick = Duration::from_millis(settings::PROGRESS_TICK_MS);

    let thread = thread::spawn(move || {
        let mut frame = 0usize;
        loop {
            draw(&pending.line(frame, pending.started.elapsed()));
            frame = frame.wrapping_add(1);
            match stop_rx.recv_timeout(tick) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        draw("");
    });

    ProgressHandle {
        stop: Some(stop_tx),
        thread: Some(thread),
    }
}

struct PendingReply {
    label: String,
    started: Instant,
    color: bool,
}

impl PendingReply {
    fn line(&self, frame: usize, elapsed: Duration) -> String {
        let glyph = settings::PROGRESS_FRAMES[frame % settings::PROGRESS_FRAMES.len()];
        let secs = elapsed.as_secs_f64();
        if !self.color {
            return format!("[{glyph}] {} ({secs:.1}s)", self.label);
        }
        format!(
            "{} {} {}",
            format!("[{glyph}]").with(settings::COLOR_PROGRESS_FRAME),
            self.label.as_str().with(settings::COLOR_PROGRESS_LABEL),
            format!("({secs:.1}s)").with(settings::COLOR_PROGRESS_ELAPSED),
        )
    }
}

/// Replace the current stderr line with `text`.
fn draw(text: &str) {
    let mut err = io::stderr();
    let _ = write!(err, "{}{text}", settings::PROGRESS_CLEAR_LINE);
    let _ = err.flush();
}
