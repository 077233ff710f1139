mod error_output;
mod text;

pub use error_output::ErrorOutput;
pub use text::TextFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Checks if `NO_COLOR` environment variable is set.
/// Per <https://no-color.org>: presence of the variable (any value) disables color.
fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}
