//! Metadata handed to the host store with every emitted file.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::NameOption;

/// Bracketed `[hash]` / `[contenthash]` token, with optional type/digest/length.
static HASH_IN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[([^:\]]+:)?(hash|contenthash)(:[^\]]+)?\]")
        .expect("immutable name pattern is valid")
});

/// Store metadata of one emitted asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    /// Source file relative to the root context, forward slashes.
    pub source_filename: String,
    /// The output path changes whenever the content does; cache forever.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub immutable: bool,
}

impl AssetInfo {
    pub fn new(source_filename: impl Into<String>, immutable: bool) -> Self {
        Self {
            source_filename: source_filename.into(),
            immutable,
        }
    }
}

/// Whether outputs named by `name` are content-addressed.
///
/// Only literal templates qualify; the query suffix is ignored.
pub fn is_immutable_name(name: &NameOption) -> bool {
    name.template().is_some_and(|template| {
        let path = template.split_once('?').map_or(template, |(path, _)| path);
        HASH_IN_NAME.is_match(path)
    })
}
