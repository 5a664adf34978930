use std::path::{Path, PathBuf};

/// Paths of completed downloads, in completion order.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<PathBuf>,
}

impl History {
    pub fn record(&mut self, path: PathBuf) {
        self.entries.push(path);
    }

    pub fn list(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn locate(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
