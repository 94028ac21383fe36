//! Folder (project) directory.

/// Name of the folder every session starts with.
pub const DEFAULT_FOLDER: &str = "General";

/// Set of folder names in stable insertion order.
///
/// Insertion order is meaningful to the user as recency, so new folders are
/// appended and never re-sorted. Names are the identity; duplicates are
/// rejected by [`ensure`](Self::ensure).
#[derive(Debug, Clone)]
pub struct FolderDirectory {
    names: Vec<String>,
}

impl Default for FolderDirectory {
    fn default() -> Self {
        Self {
            names: vec![DEFAULT_FOLDER.to_string()],
        }
    }
}

impl FolderDirectory {
    /// Create a directory seeded with the default folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a folder name if absent. Idempotent.
    ///
    /// Returns `true` if the name was newly inserted.
    pub fn ensure(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Whether a folder with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// All folder names in insertion order.
    pub fn list(&self) -> &[String] {
        &self.names
    }
}
