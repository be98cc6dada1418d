//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use crudgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CrudgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the service and keep
/// another to inspect what was written.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register a directory (and its ancestors) without going through the port.
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in normalize(path.as_ref()).components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(&normalize(path)).cloned()
    }

    /// Replace a file's content without going through the port (testing helper).
    pub fn tamper(&self, path: &Path, content: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(normalize(path), content.to_string());
        }
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of `write_file` calls made through the port.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop `.` components so `./Rate` and `Rate` name the same entry.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn parent_missing(dirs: &BTreeSet<PathBuf>, path: &Path) -> bool {
    path.parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty() && !dirs.contains(parent))
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> CrudgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockError)?;
        let key = normalize(path);

        if key.as_os_str().is_empty()
            || inner.directories.contains(&key)
            || inner.files.contains_key(&key)
        {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Entry already exists".into(),
            }
            .into());
        }
        if parent_missing(&inner.directories, &key) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.directories.insert(key);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockError)?;
        let key = normalize(path);

        if parent_missing(&inner.directories, &key) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(key, content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let key = normalize(path);
        // An empty key is the working directory itself.
        key.as_os_str().is_empty()
            || self
                .inner
                .read()
                .map(|inner| inner.files.contains_key(&key) || inner.directories.contains(&key))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_requires_parent() {
        let fs = MemoryFilesystem::new();

        assert!(fs.create_dir(Path::new("a/b")).is_err());
        fs.create_dir(Path::new("a")).unwrap();
        fs.create_dir(Path::new("a/b")).unwrap();
        assert!(fs.exists(Path::new("a/b")));
    }

    #[test]
    fn create_dir_rejects_existing_entry() {
        let fs = MemoryFilesystem::new().with_directory("Rate");
        assert!(fs.create_dir(Path::new("Rate")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new().with_directory("out");
        let handle = fs.clone();

        fs.write_file(Path::new("out/a.mjs"), "x").unwrap();

        assert_eq!(handle.read_file(Path::new("out/a.mjs")).as_deref(), Some("x"));
        assert_eq!(handle.write_count(), 1);
        assert_eq!(handle.list_files(), vec![PathBuf::from("out/a.mjs")]);
    }

    #[test]
    fn current_dir_prefix_names_the_same_entry() {
        let fs = MemoryFilesystem::new();

        assert!(fs.exists(Path::new(".")));
        fs.create_dir(Path::new("./Rate")).unwrap();
        fs.write_file(Path::new("./Rate/getRate.mjs"), "").unwrap();

        assert!(fs.exists(Path::new("Rate")));
        assert!(fs.create_dir(Path::new("Rate")).is_err());
        assert_eq!(fs.read_file(Path::new("Rate/getRate.mjs")).as_deref(), Some(""));
        assert_eq!(fs.list_files(), vec![PathBuf::from("Rate/getRate.mjs")]);
    }

    #[test]
    fn with_directory_registers_ancestors() {
        let fs = MemoryFilesystem::new().with_directory("a/b/c");
        assert_eq!(
            fs.list_directories(),
            vec![
                PathBuf::from("a"),
                PathBuf::from("a/b"),
                PathBuf::from("a/b/c")
            ]
        );
    }
}
