//! Command-line interface module.

mod args;
pub mod load;

pub use args::Cli;
