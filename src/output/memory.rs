//! Recording printer for tests.

use super::{Printer, Style};
use std::cell::RefCell;

/// Which [`Printer`] method produced a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Raw,
    Success,
    Error,
    Warning,
}

/// One recorded call, styling stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct MemoryPrinter {
    lines: RefCell<Vec<Line>>,
}

impl MemoryPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        self.lines.borrow().clone()
    }

    /// Text of every recorded call, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.lines.borrow().iter().map(|l| l.text.clone()).collect()
    }

    #[must_use]
    pub fn texts_of(&self, kind: LineKind) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.text.clone())
            .collect()
    }

    /// What a terminal would have shown: lines newline-terminated, raw text as-is.
    #[must_use]
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in self.lines.borrow().iter() {
            out.push_str(&line.text);
            if line.kind != LineKind::Raw {
                out.push('\n');
            }
        }
        out
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.text.contains(needle))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }

    fn record(&self, kind: LineKind, text: &str) {
        self.lines.borrow_mut().push(Line {
            kind,
            text: text.to_string(),
        });
    }
}

impl Printer for MemoryPrinter {
    fn line(&self, parts: &[(&str, Style)]) {
        let text: String = parts.iter().map(|(text, _)| *text).collect();
        self.record(LineKind::Plain, &text);
    }

    fn raw(&self, text: &str) {
        self.record(LineKind::Raw, text);
    }

    fn success(&self, text: &str) {
        self.record(LineKind::Success, text);
    }

    fn error(&self, text: &str) {
        self.record(LineKind::Error, text);
    }

    fn warning(&self, text: &str) {
        self.record(LineKind::Warning, text);
    }
}
