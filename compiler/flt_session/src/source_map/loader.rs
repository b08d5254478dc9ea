#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait Loader {
    fn load(&self, path: &Path) -> Option<String>;
}

pub struct FileLoader;

impl Loader for FileLoader {
    fn load(&self, path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }
}

/// Serves sources from memory, for tests and embedders.
#[derive(Default)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<PathBuf>, src: impl Into<String>) -> Self {
        self.files.insert(path.into(), src.into());
        self
    }
}

impl Loader for MemoryLoader {
    fn load(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }
}
