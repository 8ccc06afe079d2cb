//! Access to a domain's policy replication store.
//!
//! The cataloger and parser only need three things from the store: list the
//! policy objects under a root, ask whether a file exists, and read a file whole.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
};

use crate::utils::{is_readable_file, list_subdirectories, read_file};

pub trait PolicyStore {
    /// Immediate subdirectories of `root`, one per policy object, in a stable order.
    fn list_policy_objects(&self, root: &Path) -> io::Result<Vec<PathBuf>>;

    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Store backed by the local filesystem or a mounted SYSVOL share.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPolicyStore;

impl PolicyStore for FsPolicyStore {
    fn list_policy_objects(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        list_subdirectories(root)
    }

    fn exists(&self, path: &Path) -> bool {
        is_readable_file(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        read_file(path)
    }
}

/// In-memory store, handy for exercising the pipeline without a share.
#[derive(Debug, Default, Clone)]
pub struct MemoryPolicyStore {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a policy object directory.
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        self.dirs.insert(path.into());
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl PolicyStore for MemoryPolicyStore {
    fn list_policy_objects(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let children: Vec<PathBuf> = self
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(root))
            .cloned()
            .collect();
        if children.is_empty() && !self.dirs.iter().any(|d| d == root) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", root.display()),
            ));
        }
        Ok(children)
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}
