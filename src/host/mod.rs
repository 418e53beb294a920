//! The host a loader invocation runs inside.
//!
//! A host provides the resource being processed, the root context paths are
//! relative to, and the asset store emitted files go to.
//!
//! - [`FsHost`]: writes emitted files below an output directory (CLI)
//! - [`MemoryHost`]: records emitted files in memory (tests, embedding)

mod fs;
mod memory;

pub use fs::FsHost;
pub use memory::{EmittedFile, MemoryHost};

use std::io;
use std::path::Path;

use crate::asset::AssetInfo;

/// Host of one loader invocation.
///
/// `emit_file` takes `&self`: stores that record state use interior
/// mutability so one host can be shared by concurrent probes.
pub trait HostContext: Sync {
    /// Base directory of the project.
    fn root_context(&self) -> &Path;

    /// Absolute path of the resource being processed.
    fn resource_path(&self) -> &Path;

    /// Query attached to the resource request (e.g. `?size=2`).
    fn resource_query(&self) -> &str {
        ""
    }

    /// Write one file into the asset store.
    fn emit_file(
        &self,
        name: &str,
        content: &[u8],
        source_map: Option<&str>,
        info: &AssetInfo,
    ) -> io::Result<()>;
}
