//! One file per command; each owns its argument handling.

mod config;
mod log;
mod view;

pub use config::cmd_config;
pub use log::cmd_log;
pub use view::cmd_view;
