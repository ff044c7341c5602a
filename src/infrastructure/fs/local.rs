//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::path::Path;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("deploy.yaml");
        std::fs::write(&file, "kind: Deployment").unwrap();

        assert_eq!(LocalFs::new().read(&file).unwrap(), "kind: Deployment");
    }

    #[test]
    fn local_fs_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing.yaml");

        let err = LocalFs::new().read(&file).unwrap_err();
        assert!(matches!(err, FsError::NotFound(p) if p == file));
    }

    #[test]
    fn local_fs_read_invalid_utf8_is_io() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("binary.yaml");
        std::fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

        let err = LocalFs::new().read(&file).unwrap_err();
        assert!(matches!(err, FsError::Io(_, _)));
    }

    #[test]
    fn local_fs_exists_only_for_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("exists.txt");
        let fs = LocalFs::new();

        assert!(!fs.exists(&file));
        assert!(!fs.exists(dir.path()));

        std::fs::write(&file, "content").unwrap();

        assert!(fs.exists(&file));
    }
}
