//! Everything slog shows the user goes through [`Printer`], so commands can be
//! asserted on through [`MemoryPrinter`] without capturing a real terminal.

mod memory;
mod terminal;

pub use memory::{Line, LineKind, MemoryPrinter};
pub use terminal::ConsolePrinter;

/// Presentation hint for a run of text. Sinks without styling ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Bold,
    Dim,
    /// Section titles such as "Current Configuration:".
    Heading,
    /// The program name in help and version banners.
    Brand,
}

/// Text-output sink with styled, success, error and warning variants.
pub trait Printer {
    /// Prints one line assembled from differently styled parts.
    fn line(&self, parts: &[(&str, Style)]);

    /// Prints `text` exactly, without appending a newline.
    fn raw(&self, text: &str);

    fn success(&self, text: &str);

    fn error(&self, text: &str);

    fn warning(&self, text: &str);

    fn styled(&self, text: &str, style: Style) {
        self.line(&[(text, style)]);
    }

    fn print(&self, text: &str) {
        self.styled(text, Style::Plain);
    }

    /// `Label: value` with the label emphasised.
    fn field(&self, label: &str, value: &str) {
        let label = format!("{label}: ");
        self.line(&[(label.as_str(), Style::Bold), (value, Style::Plain)]);
    }
}
