//! In-memory host.

use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::HostContext;
use crate::asset::AssetInfo;

/// A file handed to [`MemoryHost::emit_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub name: String,
    pub content: Vec<u8>,
    pub info: AssetInfo,
}

/// Host that keeps emitted files in memory, in emission order.
#[derive(Debug)]
pub struct MemoryHost {
    root: PathBuf,
    resource: PathBuf,
    query: String,
    emitted: Mutex<Vec<EmittedFile>>,
}

impl MemoryHost {
    pub fn new(root: impl Into<PathBuf>, resource: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            resource: resource.into(),
            query: String::new(),
            emitted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Snapshot of emitted files.
    pub fn emitted(&self) -> Vec<EmittedFile> {
        self.emitted.lock().clone()
    }

    /// Names of emitted files, in emission order.
    pub fn names(&self) -> Vec<String> {
        self.emitted.lock().iter().map(|f| f.name.clone()).collect()
    }
}

impl HostContext for MemoryHost {
    fn root_context(&self) -> &Path {
        &self.root
    }

    fn resource_path(&self) -> &Path {
        &self.resource
    }

    fn resource_query(&self) -> &str {
        &self.query
    }

    fn emit_file(
        &self,
        name: &str,
        content: &[u8],
        _source_map: Option<&str>,
        info: &AssetInfo,
    ) -> io::Result<()> {
        self.emitted.lock().push(EmittedFile {
            name: name.to_string(),
            content: content.to_vec(),
            info: info.clone(),
        });
        Ok(())
    }
}
