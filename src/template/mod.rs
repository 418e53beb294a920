//! Name interpolation: turns a name template into a concrete output url.
//!
//! The loader only depends on the [`NameInterpolator`] trait. [`Interpolator`]
//! is the default implementation and understands these tokens
//! (case-insensitive):
//!
//! | Token                                   | Value                                   |
//! |-----------------------------------------|-----------------------------------------|
//! | `[ext]`                                 | extension without dot (`bin` if none)   |
//! | `[name]`                                | file stem (`file` if no directory)      |
//! | `[path]`                                | directory relative to context, with `/` |
//! | `[folder]`                              | last segment of `[path]`                |
//! | `[query]`                               | resource query, e.g. `?size=2`          |
//! | `[hash]` / `[contenthash]`              | content digest (blake3, hex, 20 chars)  |
//! | `[<type>:contenthash:<digest>:<len>]`   | content digest with explicit options    |
//! | `[N]`                                   | capture group `N` of `reg_exp`          |
//!
//! Interpolation is deterministic: identical inputs yield identical urls.

pub mod digest;

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::utils::path::{relative_path, split_extension, to_slash};
use digest::{DEFAULT_DIGEST_LENGTH, DigestEncoding, HashType, content_digest};

static HASH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(?:([^:\]]+):)?(?:hash|contenthash)(?::([a-z]+\d*))?(?::(\d+))?\]")
        .expect("hash token pattern is valid")
});

static PATH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(ext|name|path|folder|query)\]").expect("path token pattern is valid")
});

static CAPTURE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("capture token pattern is valid"));

/// Name interpolation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown hash type `{0}` (expected blake3 or fxhash)")]
    UnknownHashType(String),

    #[error("unknown digest encoding `{0}` (expected hex or base26..base64)")]
    UnknownDigest(String),
}

/// Everything a name template may draw on.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    /// Base directory `[path]` is relative to.
    pub context: &'a Path,
    /// Absolute path of the resource being processed.
    pub resource_path: &'a Path,
    /// Query string attached to the resource request (may be empty).
    pub resource_query: &'a str,
    /// Raw bytes of the resource.
    pub content: &'a [u8],
    /// Pattern matched against the resource path for `[N]` tokens.
    pub reg_exp: Option<&'a Regex>,
}

/// Turns a name template into a relative output url.
pub trait NameInterpolator: Send + Sync {
    fn interpolate(
        &self,
        template: &str,
        cx: &TemplateContext<'_>,
    ) -> Result<String, TemplateError>;
}

/// Default [`NameInterpolator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpolator;

impl NameInterpolator for Interpolator {
    fn interpolate(
        &self,
        template: &str,
        cx: &TemplateContext<'_>,
    ) -> Result<String, TemplateError> {
        let parts = ResourceParts::new(cx);

        let url = replace_hash_tokens(template, cx.content)?;
        let url = PATH_TOKEN.replace_all(&url, |caps: &Captures| {
            match caps[1].to_ascii_lowercase().as_str() {
                "ext" => parts.ext.clone(),
                "name" => parts.name.clone(),
                "path" => parts.directory.clone(),
                "folder" => parts.folder.clone(),
                _ => parts.query.clone(),
            }
        });

        Ok(match cx.reg_exp {
            Some(pattern) => replace_capture_tokens(&url, pattern, cx.resource_path),
            None => url.into_owned(),
        })
    }
}

/// Path-derived token values of one resource.
struct ResourceParts {
    ext: String,
    name: String,
    directory: String,
    folder: String,
    query: String,
}

impl ResourceParts {
    fn new(cx: &TemplateContext<'_>) -> Self {
        let file_name = cx
            .resource_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (stem, ext) = split_extension(&file_name);

        let ext = match ext.strip_prefix('.') {
            Some(ext) if !ext.is_empty() => ext.to_string(),
            _ => "bin".to_string(),
        };

        let parent = cx
            .resource_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty());

        let (name, directory) = match parent {
            Some(dir) => {
                let rel = to_slash(&relative_path(cx.context, dir)).replace("..", "_");
                let directory = if rel.is_empty() {
                    String::new()
                } else {
                    format!("{rel}/")
                };
                (stem.to_string(), directory)
            }
            None => ("file".to_string(), String::new()),
        };

        let folder = directory
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        let query = if cx.resource_query.len() > 1 {
            cx.resource_query.to_string()
        } else {
            String::new()
        };

        Self {
            ext,
            name,
            directory,
            folder,
            query,
        }
    }
}

/// Substitute every hash token with the content digest it asks for.
fn replace_hash_tokens(template: &str, content: &[u8]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in HASH_TOKEN.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let hash = caps
            .get(1)
            .map(|m| HashType::parse(m.as_str()))
            .transpose()?
            .unwrap_or_default();
        let encoding = caps
            .get(2)
            .map(|m| DigestEncoding::parse(m.as_str()))
            .transpose()?
            .unwrap_or_default();
        let length = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_DIGEST_LENGTH);

        out.push_str(&template[last..whole.start()]);
        out.push_str(&content_digest(content, hash, encoding, length));
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

/// Substitute `[N]` with capture group `N` of `pattern` on the resource path.
///
/// Indices beyond the pattern's group count are left untouched; groups that
/// did not participate in the match become empty.
fn replace_capture_tokens(url: &str, pattern: &Regex, resource_path: &Path) -> String {
    let subject = resource_path.to_string_lossy();
    let Some(found) = pattern.captures(&subject) else {
        return url.to_string();
    };

    CAPTURE_TOKEN
        .replace_all(url, |caps: &Captures| {
            match caps[1].parse::<usize>() {
                Ok(idx) if idx < found.len() => found
                    .get(idx)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}
