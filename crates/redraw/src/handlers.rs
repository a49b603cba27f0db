//! Command handlers for the redraw CLI.
//!
//! Each subcommand gets a handler; the four erase/movement handlers are
//! thin shims that point the output controller at stdout.

use std::io::IsTerminal;

use redraw_term::TerminalOutput;
use serde_json::json;
use tracing::debug;

use crate::color;
use crate::color::Colors;
use crate::commands::OutputFormat;
use crate::error::CliError;

/// Result type for command handlers
pub type HandlerResult = Result<(), CliError>;

pub fn handle_clear_lines(count: u16) -> HandlerResult {
    debug!(count, "erasing lines");
    TerminalOutput::stdout().clear_lines(count)?;
    Ok(())
}

pub fn handle_clear_screen() -> HandlerResult {
    debug!("clearing screen");
    TerminalOutput::stdout().clear_screen()?;
    Ok(())
}

pub fn handle_cursor_up(count: u16) -> HandlerResult {
    debug!(count, "moving cursor up");
    TerminalOutput::stdout().cursor_up(count)?;
    Ok(())
}

pub fn handle_clear_end() -> HandlerResult {
    debug!("clearing from cursor to end of screen");
    TerminalOutput::stdout().clear_from_cursor()?;
    Ok(())
}

pub fn handle_env(format: OutputFormat) -> HandlerResult {
    let log_target =
        std::env::var("REDRAW_LOG").unwrap_or_else(|_| "(stderr)".to_string());
    let stdout_tty = std::io::stdout().is_terminal();

    match format {
        OutputFormat::Json => {
            let value = json!({
                "version": env!("CARGO_PKG_VERSION"),
                "color": !color::is_disabled(),
                "log_target": log_target,
                "stdout_tty": stdout_tty,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!("{}", Colors::bold("redraw environment:"));
            println!("  {} {}", Colors::dim("version:"), env!("CARGO_PKG_VERSION"));
            println!(
                "  {} {}",
                Colors::dim("color:"),
                if color::is_disabled() {
                    "disabled".to_string()
                } else {
                    Colors::success("enabled")
                }
            );
            println!("  {} {}", Colors::dim("log target:"), log_target);
            println!(
                "  {} {}",
                Colors::dim("stdout tty:"),
                if stdout_tty { "yes" } else { "no" }
            );
        }
    }
    Ok(())
}
