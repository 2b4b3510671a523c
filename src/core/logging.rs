//! Logging and terminal output helpers.
//!
//! - File logging (JSON, daily rolling) via tracing-appender
//! - `log` crate macros bridged into tracing
//! - Terminal capability detection for plain-text fallback
//! - miette report configuration
//! - Styled one-line console messages for CLI subcommands

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use console::{style, Term};
use supports_color::Stream;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "lifewappen.log";

static TERMINAL_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();

/// Capabilities of stdout, detected once per process.
pub fn terminal_caps() -> &'static TerminalCapabilities {
    TERMINAL_CAPS.get_or_init(TerminalCapabilities::detect)
}

// ============================================================================
// Terminal Capability Detection
// ============================================================================

/// Terminal color support levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLevel {
    /// 24-bit TrueColor (16.7M colors)
    TrueColor,
    /// 256-color palette
    Ansi256,
    /// 16 ANSI colors
    Ansi16,
    /// No color support
    NoColor,
}

/// Detected terminal capabilities
#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color_level: ColorLevel,
    pub supports_unicode: bool,
    pub is_interactive: bool,
    pub width: u16,
}

impl TerminalCapabilities {
    /// Detect terminal capabilities from environment
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        let color_level = match supports_color::on(Stream::Stdout) {
            Some(support) if support.has_16m => ColorLevel::TrueColor,
            Some(support) if support.has_256 => ColorLevel::Ansi256,
            Some(support) if support.has_basic => ColorLevel::Ansi16,
            _ => ColorLevel::NoColor,
        };

        let is_interactive = io::stdout().is_terminal();
        let width = Term::stdout().size().1;

        let supports_unicode = std::env::var("TERM")
            .map(|t| !t.contains("dumb"))
            .unwrap_or(true)
            && std::env::var("LANG")
                .map(|l| l.contains("UTF-8") || l.contains("utf8"))
                .unwrap_or(true);

        Self {
            color_level,
            supports_unicode,
            is_interactive,
            width,
        }
    }

    /// Check if colors should be used
    pub fn should_colorize(&self) -> bool {
        self.is_interactive && self.color_level != ColorLevel::NoColor
    }
}

// ============================================================================
// Logging Initialization
// ============================================================================

fn log_dir() -> PathBuf {
    let log_dir = dirs::data_dir()
        .map(|d| d.join("lifewappen").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }
    log_dir
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging for one-shot CLI commands.
///
/// JSON lines go to the daily log file; a pretty copy goes to stderr so that
/// stdout stays clean for the printed card.
///
/// Returns a `WorkerGuard` which must be kept alive until exit so buffered
/// logs are flushed.
pub fn init() -> WorkerGuard {
    let log_dir = log_dir();
    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    // try_init: tests and repeated calls must not panic
    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = tracing_log::LogTracer::init() {
        log::debug!("LogTracer already set: {}", e);
    }

    init_miette();

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_PREFIX)
    );

    guard
}

/// Initialize logging for the interactive TUI.
///
/// Same file layer as [`init()`] but nothing is written to the terminal,
/// which ratatui owns while in raw / alternate-screen mode.
pub fn init_tui() -> WorkerGuard {
    let log_dir = log_dir();
    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter());

    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    if let Err(e) = tracing_log::LogTracer::init() {
        log::debug!("LogTracer already set: {}", e);
    }

    init_miette();

    guard
}

/// Initialize miette for error reports
fn init_miette() {
    let caps = terminal_caps();

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(caps.color_level == ColorLevel::TrueColor)
                .unicode(caps.supports_unicode)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .color(caps.should_colorize())
                .build(),
        )
    }))
    .ok(); // Ignore if already set
}

// ============================================================================
// Console Output Utilities
// ============================================================================

fn marker(unicode: &'static str, ascii: &'static str) -> &'static str {
    if terminal_caps().supports_unicode {
        unicode
    } else {
        ascii
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style(marker("✓", "+")).green(), style(message).green());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!(
        "{} {}",
        style(marker("⚠", "!")).yellow(),
        style(message).yellow().bold()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", style(marker("ℹ", "i")).blue(), style(message).blue());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_caps_detection() {
        let caps = TerminalCapabilities::detect();
        // Non-interactive stdout never colorizes.
        if !caps.is_interactive {
            assert!(!caps.should_colorize());
        }
    }

    #[test]
    fn test_terminal_caps_cached() {
        let a = terminal_caps() as *const TerminalCapabilities;
        let b = terminal_caps() as *const TerminalCapabilities;
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_color_level_never_colorizes() {
        let caps = TerminalCapabilities {
            color_level: ColorLevel::NoColor,
            supports_unicode: true,
            is_interactive: true,
            width: 80,
        };
        assert!(!caps.should_colorize());
    }
}
