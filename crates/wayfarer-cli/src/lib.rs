mod args;
mod commands;
pub mod config;
mod handlers;
mod output;
pub mod store;
pub mod types;

pub use args::{Cli, Commands, VisitCommand};
pub use commands::run;
