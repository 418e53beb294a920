//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem paths (`normalize_path`, `relative_path`, `to_slash`)
//! - [`posix`]: Forward-slash strings (`posix_join`, `insert_suffix`)

pub mod fs;
pub mod posix;

pub use fs::{normalize_path, relative_path, to_slash};
pub use posix::{insert_suffix, posix_join, posix_normalize, split_extension};
