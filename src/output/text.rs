use std::fmt::Write;
use std::io::IsTerminal;

use crate::checker::CheckReport;

use super::{ColorMode, ansi, is_no_color_set};

pub const PROGRESS_LINE: &str = "Checking structure...";
pub const PASSED_LINE: &str = "Structure check passed.";
pub const FAILED_LINE: &str = "Structure check failed:";

/// Renders a [`CheckReport`] as the plain-text console report.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !is_no_color_set() && std::io::stdout().is_terminal(),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{color}{text}{}", ansi::BOLD, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// The line printed before any check runs.
    #[must_use]
    pub fn progress(&self) -> String {
        format!("{}\n", self.colorize(PROGRESS_LINE, ansi::CYAN))
    }

    /// Status line, then one `- ` line per violation when the check failed.
    #[must_use]
    pub fn format(&self, report: &CheckReport) -> String {
        if report.is_passed() {
            return format!("{}\n", self.colorize(PASSED_LINE, ansi::GREEN));
        }

        let mut output = String::new();
        let _ = writeln!(output, "{}", self.colorize(FAILED_LINE, ansi::RED));
        for violation in &report.violations {
            let _ = writeln!(output, "- {violation}");
        }
        output
    }

    /// Creates a formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
