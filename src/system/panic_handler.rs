//! Panic handler module
//!
//! A panic inside the TUI would otherwise leave the terminal in raw mode on
//! the alternate screen. The hook restores the terminal first, then reports.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

use chrono::Utc;
use ratatui::crossterm::{
    execute,
    event::DisableBracketedPaste,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Install custom panic hook
pub fn install_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        tracing::error!("panic at {}: {}", location, message);

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        eprintln!();
        eprintln!("linkpane panicked: {}", message);
        eprintln!("Details saved to crash.log");
        eprintln!();
    }));
}

/// Best effort: the terminal may not be in raw mode at all
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableBracketedPaste);
}

fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "==========================================")?;
    writeln!(file, "Crash Report - {}", timestamp)?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
