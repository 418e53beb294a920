//! Schema validation of [`LoaderOptions`].
//!
//! Runs once when a loader is constructed, before any path computation or
//! I/O. All violations are collected, not just the first.

use super::{ConfigDiagnostics, ConfigError, FieldPath, LoaderOptions, NameOption};

pub fn validate_options(options: &LoaderOptions) -> Result<(), ConfigError> {
    let mut diag = ConfigDiagnostics::new();

    if let NameOption::Template(template) = &options.name
        && template.trim().is_empty()
    {
        diag.error_with_hint(
            FieldPath::NAME,
            "name template must not be empty",
            "use a template such as `[contenthash].[ext]`",
        );
    }

    if let Some(context) = &options.context
        && context.as_os_str().is_empty()
    {
        diag.error_with_hint(
            FieldPath::CONTEXT,
            "context must not be empty",
            "omit `context` to use the project root",
        );
    }

    diag.into_result()
}
