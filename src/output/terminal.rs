//! ANSI-styled stdout printer used by the binary.

use super::{Printer, Style};
use crate::fmt::{BOLD, Color, DIM, colorize};
use std::io::{self, IsTerminal, Write};

/// Piped output and `NO_COLOR` users get plain text.
#[derive(Debug, Clone, Copy)]
pub struct ConsolePrinter {
    colors_enabled: bool,
}

impl Default for ConsolePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePrinter {
    /// Colors on only when stdout is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn new() -> Self {
        let colors_enabled = std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
        Self { colors_enabled }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.colors_enabled {
            return text.to_string();
        }
        let reset = Color::RESET;
        match style {
            Style::Plain => text.to_string(),
            Style::Bold => format!("{BOLD}{text}{reset}"),
            Style::Dim => format!("{DIM}{text}{reset}"),
            Style::Heading => format!("{BOLD}{}", colorize(text, Color::cyan())),
            Style::Brand => format!("{BOLD}{}", colorize(text, Color::purple())),
        }
    }

    fn colored_line(&self, text: &str, color: Color) {
        let text = if self.colors_enabled {
            colorize(text, color)
        } else {
            text.to_string()
        };
        emit(&text, true);
    }
}

/// `Printer` can't fail, so a broken stdout is reported as a diagnostic.
fn emit(text: &str, newline: bool) {
    emit_to(&mut io::stdout().lock(), text, newline);
}

fn emit_to<W: Write>(out: &mut W, text: &str, newline: bool) {
    if let Err(e) = write_text(out, text, newline) {
        tracing::warn!(target: "output", error = %e, "stdout write failed");
    }
}

fn write_text<W: Write>(out: &mut W, text: &str, newline: bool) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if newline {
        out.write_all(b"\n")?;
    }
    out.flush()
}

impl Printer for ConsolePrinter {
    fn line(&self, parts: &[(&str, Style)]) {
        let rendered: String = parts
            .iter()
            .map(|(text, style)| self.paint(text, *style))
            .collect();
        emit(&rendered, true);
    }

    fn raw(&self, text: &str) {
        emit(text, false);
    }

    fn success(&self, text: &str) {
        self.colored_line(text, Color::green());
    }

    fn error(&self, text: &str) {
        self.colored_line(text, Color::red());
    }

    fn warning(&self, text: &str) {
        self.colored_line(text, Color::yellow());
    }
}
