//! Filesystem host: the asset store is an output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::HostContext;
use crate::asset::AssetInfo;
use crate::utils::path::posix_normalize;

/// Host writing emitted files below `output_dir`.
#[derive(Debug, Clone)]
pub struct FsHost {
    root: PathBuf,
    resource: PathBuf,
    query: String,
    output_dir: PathBuf,
}

impl FsHost {
    pub fn new(
        root: impl Into<PathBuf>,
        resource: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root: root.into(),
            resource: resource.into(),
            query: String::new(),
            output_dir: output_dir.into(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Destination of an emitted name; rejects names escaping `output_dir`.
    ///
    /// A `?query` tail is not part of the file name.
    pub fn destination(&self, name: &str) -> io::Result<PathBuf> {
        let name = name.split_once('?').map_or(name, |(path, _)| path);
        let normalized = posix_normalize(name);

        if normalized.starts_with('/')
            || normalized == "."
            || normalized == ".."
            || normalized.starts_with("../")
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("`{name}` is outside the output directory"),
            ));
        }
        Ok(self.output_dir.join(normalized))
    }
}

impl HostContext for FsHost {
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
        let dest = self.destination(name)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, content)?;

        crate::debug!("emit"; "{} -> {}{}", info.source_filename, dest.display(),
            if info.immutable { " (immutable)" } else { "" });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_emit_writes_nested_file() {
        let dir = TempDir::new().unwrap();
        let host = FsHost::new("/site", "/site/a.png", dir.path());

        host.emit_file("static/img/a.png", b"data", None, &AssetInfo::new("a.png", true))
            .unwrap();
        assert_eq!(fs::read(dir.path().join("static/img/a.png")).unwrap(), b"data");
    }

    #[test]
    fn test_query_is_not_part_of_file_name() {
        let dir = TempDir::new().unwrap();
        let host = FsHost::new("/site", "/site/a.png", dir.path());
        assert_eq!(host.destination("a.png?v=1").unwrap(), dir.path().join("a.png"));
    }

    #[test]
    fn test_rejects_escaping_names() {
        let host = FsHost::new("/site", "/site/a.png", "/out");
        for name in ["../a.png", "/etc/a.png", "x/../../a.png", ""] {
            let err = host.destination(name).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{name}");
        }
        assert_eq!(
            host.destination("x/../a.png").unwrap(),
            PathBuf::from("/out/a.png")
        );
    }
}
