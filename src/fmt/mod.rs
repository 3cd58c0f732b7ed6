//! Terminal escape codes and the log entry line format.

mod color;
mod entry;

pub use color::{BOLD, Color, DIM, colorize};
pub use entry::{TIMESTAMP_FORMAT, format_entry, format_entry_now};
