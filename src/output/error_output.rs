//! Diagnostics for runs that could not complete.
//!
//! ```text
//! ✖ FileRead: /project/scripts/webapp.sh
//!   × Is a directory (os error 21)
//!   help: A directory exists where a file is expected
//! ```

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi, is_no_color_set};
use crate::error::StructureCheckError;

/// Renders a [`StructureCheckError`] to stderr.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !is_no_color_set() && std::io::stderr().is_terminal(),
        };
        Self { use_colors }
    }

    pub fn report(&self, err: &StructureCheckError) {
        let mut stderr = std::io::stderr().lock();
        self.write_report(&mut stderr, err);
    }

    pub fn write_report<W: Write>(&self, w: &mut W, err: &StructureCheckError) {
        let detail = err.detail();
        self.write_lines(
            w,
            err.error_type(),
            &err.message(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    fn paint(&self, text: &str, style: &str) -> String {
        if self.use_colors {
            format!("{style}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_lines<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let headline = format!("✖ {error_type}:");
        let bold_red = format!("{}{}", ansi::BOLD, ansi::RED);

        // Nothing useful can be done if stderr itself is gone.
        let _ = writeln!(w, "{} {message}", self.paint(&headline, &bold_red));
        if let Some(detail) = detail {
            let _ = writeln!(w, "  {}", self.paint(&format!("× {detail}"), ansi::DIM));
        }
        if let Some(suggestion) = suggestion {
            let _ = writeln!(w, "  {} {suggestion}", self.paint("help:", ansi::CYAN));
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
