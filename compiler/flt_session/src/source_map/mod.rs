pub mod loader;
pub mod source;

use std::path::PathBuf;

use appendlist::AppendList;
use loader::Loader;
use source::Source;

pub struct SourceMap<L: Loader> {
    loader: L,
    // never moves an element, so handed out references outlive later pushes
    sources: AppendList<Source>,
}

impl<L: Loader> SourceMap<L> {
    pub fn new(loader: L) -> SourceMap<L> {
        SourceMap {
            loader,
            sources: AppendList::new(),
        }
    }

    /// # Errors
    /// returns the original `path`
    pub fn load_source(&self, path: PathBuf) -> Result<&Source, PathBuf> {
        match self.loader.load(&path) {
            Some(src) => Ok(self.register_source(path.display().to_string(), src)),
            None => Err(path),
        }
    }

    pub fn register_source(&self, name: String, src: String) -> &Source {
        self.sources.push(Source::new(name, src));
        &self.sources[self.sources.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.len() == 0
    }
}
