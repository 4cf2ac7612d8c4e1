use std::path::{Path, PathBuf};

/// Insertion-ordered, duplicate-free set of registered folders.
///
/// Insertion order is what makes startup re-scans deterministic: folders are
/// scanned in the order the user originally added them.
#[derive(Debug, Default)]
pub struct FolderRegistry {
    folders: Vec<PathBuf>,
}

impl FolderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a persisted folder list, dropping duplicates
    /// while keeping the first occurrence of each path.
    pub fn from_folders(folders: Vec<PathBuf>) -> Self {
        let mut registry = Self::new();
        for folder in folders {
            registry.register(&folder);
        }
        registry
    }

    /// Add a folder; returns `false` (and changes nothing) if it is already
    /// registered.
    pub fn register(&mut self, path: &Path) -> bool {
        if self.contains(path) {
            return false;
        }
        self.folders.push(path.to_path_buf());
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.folders.iter().any(|f| f == path)
    }

    /// Registered folders in insertion order.
    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
