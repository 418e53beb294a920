//! Asset descriptor: where an asset goes and how code refers to it.

use super::AssetInfo;

/// One emitted (or referenced) file of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Path inside the output store (forward slashes).
    pub output_path: String,
    /// Serialized code expression, inserted verbatim into module source.
    pub public_expression: String,
    /// Source file relative to the root context.
    pub source_filename: String,
    pub immutable: bool,
}

impl AssetDescriptor {
    pub fn new(output_path: String, public_expression: String, info: AssetInfo) -> Self {
        Self {
            output_path,
            public_expression,
            source_filename: info.source_filename,
            immutable: info.immutable,
        }
    }

    /// Store metadata for this asset.
    pub fn info(&self) -> AssetInfo {
        AssetInfo::new(self.source_filename.clone(), self.immutable)
    }
}
