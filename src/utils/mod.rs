//! Utility modules shared by the loader and the CLI.

pub mod path;
