//! Loader configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── options    # LoaderOptions and the literal-or-callback option types
//! ├── validate   # Schema validation (runs before any path computation)
//! ├── types/     # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs     # ConfigFile: `dusk.toml` parsing (this file)
//! ```
//!
//! # `dusk.toml`
//!
//! ```toml
//! context = "src"                      # base directory for [path]
//! name = "[contenthash].[ext]"         # output name template
//! output_path = "static"               # prefix for emitted files
//! public_path = "https://cdn.example/" # prefix for runtime references
//! emit_file = true                     # false = reference-only build
//! es_module = true                     # false = module.exports
//! reg_exp = "themes/([^/]+)/"          # captures for [1], [2], ...
//! variant_policy = "validate"          # validate | unchecked
//! ```
//!
//! Callback forms of `name`, `output_path`, `public_path` and
//! `post_transform_public_path` are only available through the library API.

mod options;
pub mod types;
mod util;
mod validate;

pub use options::{
    DEFAULT_NAME, LoaderOptions, NameFn, NameOption, PathFn, PathOption, PostTransform,
    TransformFn, VariantPolicy,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;
pub use validate::validate_options;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// config file
// ============================================================================

/// Root configuration structure representing `dusk.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub context: Option<PathBuf>,
    pub name: Option<String>,
    pub output_path: Option<String>,
    pub public_path: Option<String>,
    pub emit_file: Option<bool>,
    pub es_module: Option<bool>,
    pub reg_exp: Option<String>,
    pub variant_policy: VariantPolicy,
}

impl ConfigFile {
    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse(&content)
    }

    /// Parse TOML content; unknown keys are reported as diagnostics.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.error_with_hint(
                FieldPath::owned(field),
                "unknown field",
                "allowed: context, name, output_path, public_path, emit_file, es_module, reg_exp, variant_policy",
            );
        }
        diag.into_result()?;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Convert into validated [`LoaderOptions`].
    pub fn into_options(self) -> Result<LoaderOptions, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let reg_exp = match self.reg_exp.as_deref().map(Regex::new).transpose() {
            Ok(reg_exp) => reg_exp,
            Err(err) => {
                diag.error(FieldPath::REG_EXP, format!("invalid pattern: {err}"));
                None
            }
        };

        let defaults = LoaderOptions::default();
        let options = LoaderOptions {
            context: self.context,
            name: self.name.map_or(defaults.name, NameOption::Template),
            output_path: self.output_path.map(PathOption::Literal),
            public_path: self.public_path.map(PathOption::Literal),
            post_transform_public_path: None,
            emit_file: self.emit_file.unwrap_or(defaults.emit_file),
            es_module: self.es_module.unwrap_or(defaults.es_module),
            reg_exp,
            variant_policy: self.variant_policy,
        };

        if let Err(ConfigError::Diagnostics(more)) = validate_options(&options) {
            diag.extend(more);
        }
        diag.into_result()?;

        Ok(options)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = ConfigFile::parse(
            r#"
            context = "src"
            name = "[name].[contenthash:8].[ext]"
            output_path = "static"
            public_path = "/cdn/"
            emit_file = false
            es_module = false
            reg_exp = "themes/([^/]+)/"
            variant_policy = "unchecked"
            "#,
        )
        .unwrap();

        assert_eq!(config.context, Some(PathBuf::from("src")));
        assert_eq!(config.variant_policy, VariantPolicy::Unchecked);

        let options = config.into_options().unwrap();
        assert_eq!(options.name.template(), Some("[name].[contenthash:8].[ext]"));
        assert!(matches!(options.output_path, Some(PathOption::Literal(ref s)) if s == "static"));
        assert!(matches!(options.public_path, Some(PathOption::Literal(ref s)) if s == "/cdn/"));
        assert!(!options.emit_file);
        assert!(!options.es_module);
        assert!(options.reg_exp.is_some());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let options = ConfigFile::parse("").unwrap().into_options().unwrap();
        assert_eq!(options.name.template(), Some(DEFAULT_NAME));
        assert!(options.emit_file);
        assert!(options.es_module);
        assert_eq!(options.variant_policy, VariantPolicy::Validate);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = ConfigFile::parse("nmae = \"x\"\nemitFile = true").unwrap_err();
        let diagnostics = err.diagnostics().unwrap();
        let mut fields: Vec<_> = diagnostics.errors().iter().map(|d| d.field.as_str()).collect();
        fields.sort_unstable();
        assert_eq!(fields, ["emitFile", "nmae"]);
    }

    #[test]
    fn test_invalid_reg_exp() {
        let err = ConfigFile::parse("reg_exp = \"([a-z\"")
            .unwrap()
            .into_options()
            .unwrap_err();
        let diagnostics = err.diagnostics().unwrap();
        assert_eq!(diagnostics.errors()[0].field, FieldPath::REG_EXP);
    }

    #[test]
    fn test_invalid_policy_is_parse_error() {
        let err = ConfigFile::parse("variant_policy = \"sometimes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = ConfigFile::parse("name = \"\"")
            .unwrap()
            .into_options()
            .unwrap_err();
        assert_eq!(err.diagnostics().unwrap().errors()[0].field, FieldPath::NAME);
    }

    #[test]
    fn test_from_path_missing() {
        let err = ConfigFile::from_path(Path::new("/nonexistent/dusk.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
