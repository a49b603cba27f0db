//! Interactive status-region demo.
//!
//! The demo is the one embedding of the output controller in this crate:
//! it prints a fixed-height status region, then rewrites it in place as
//! commands arrive on stdin. An external harness drives it by scanning
//! stdout for [`READY_MARKER`] and writing scripted lines to stdin.

use std::io;
use std::io::BufRead;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::Duration;

use redraw_term::TerminalOutput;
use signal_hook::consts::SIGINT;
use signal_hook::consts::SIGTERM;
use tracing::debug;

use crate::color::Colors;
use crate::error::CliError;

/// Line printed to stdout once the demo accepts commands. External
/// harnesses scan stdout for this marker before writing to stdin.
pub const READY_MARKER: &str = "listening on stdin";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct DemoState {
    ticks: u64,
    history: Vec<String>,
    history_lines: usize,
    rendered_lines: u16,
}

impl DemoState {
    fn new(history_lines: u16) -> Self {
        Self {
            ticks: 0,
            history: Vec::new(),
            history_lines: usize::from(history_lines),
            rendered_lines: 0,
        }
    }

    fn push_message(&mut self, message: String) {
        self.history.push(message);
        let len = self.history.len();
        if len > self.history_lines {
            self.history.drain(..len - self.history_lines);
        }
    }
}

pub fn run_demo(history_lines: u16) -> Result<(), CliError> {
    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&shutdown))
            .map_err(|e| CliError::SignalSetup(e.to_string()))?;
    }

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        })
        .map_err(|e| CliError::Stdin(format!("failed to spawn stdin reader: {}", e)))?;

    let mut output = TerminalOutput::stdout();

    writeln!(
        output.get_mut(),
        "{}",
        Colors::bold("redraw demo: tick | say <text> | clear | quit")
    )?;
    writeln!(output.get_mut(), "{}", READY_MARKER)?;
    output.get_mut().flush()?;

    let mut state = DemoState::new(history_lines);
    render(&mut output, &mut state)?;

    loop {
        if shutdown.load(Ordering::SeqCst) {
            debug!("shutdown signal received, leaving demo loop");
            break;
        }

        let line = match rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                debug!("stdin closed, leaving demo loop");
                break;
            }
        };

        if !handle_command(&mut output, &mut state, line.trim())? {
            break;
        }
    }

    writeln!(output.get_mut())?;
    writeln!(
        output.get_mut(),
        "demo shut down after {} ticks",
        state.ticks
    )?;
    output.get_mut().flush()?;
    Ok(())
}

/// Returns false when the demo should exit.
fn handle_command<W: Write>(
    output: &mut TerminalOutput<W>,
    state: &mut DemoState,
    command: &str,
) -> Result<bool, CliError> {
    debug!(command, "stdin command received");

    match command {
        "" => return Ok(true),
        "quit" | "exit" => return Ok(false),
        "tick" => {
            state.ticks += 1;
        }
        "clear" => {
            output.clear_screen()?;
            state.rendered_lines = 0;
        }
        other => {
            if let Some(text) = other.strip_prefix("say ") {
                state.push_message(text.to_string());
            } else {
                state.push_message(format!("unknown command: {}", other));
            }
        }
    }

    redraw(output, state)?;
    Ok(true)
}

/// Erases the previously printed region and prints the current one.
fn redraw<W: Write>(output: &mut TerminalOutput<W>, state: &mut DemoState) -> Result<(), CliError> {
    output.clear_lines(state.rendered_lines)?;
    render(output, state)
}

/// Prints the status region without a trailing newline, so the cursor
/// stays on the last region line and `clear_lines(rendered_lines)` can
/// erase exactly what was printed.
fn render<W: Write>(output: &mut TerminalOutput<W>, state: &mut DemoState) -> Result<(), CliError> {
    let mut lines = Vec::with_capacity(1 + state.history_lines);
    lines.push(format!(
        "ticks: {} | messages: {}",
        state.ticks,
        state.history.len()
    ));
    for slot in 0..state.history_lines {
        match state.history.get(slot) {
            Some(message) => lines.push(format!("  {}", message)),
            None => lines.push("  -".to_string()),
        }
    }

    let sink = output.get_mut();
    write!(sink, "{}", lines.join("\n"))?;
    sink.flush()?;
    state.rendered_lines = lines.len() as u16;
    Ok(())
}
