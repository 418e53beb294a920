//! Errors of a single loader invocation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::asset::Dimensions;
use crate::config::ConfigError;
use crate::template::TemplateError;

/// Why an invocation failed. No asset has been emitted when any variant
/// other than `Emit` is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to interpolate name: {0}")]
    Template(#[from] TemplateError),

    #[error(
        "images don't have the same size: {alternate} != {primary}\n{alternate_path} - {primary_path}"
    )]
    DimensionMismatch {
        primary: Dimensions,
        alternate: Dimensions,
        primary_path: String,
        alternate_path: String,
    },

    #[error("failed to read image size of `{}`", .path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to emit `{0}`")]
    Emit(String, #[source] io::Error),
}
