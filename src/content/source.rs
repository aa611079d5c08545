//! Document sources.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rayon::prelude::*;
use thiserror::Error;

use super::{ContentDocument, FrontMatterExtractor};
use crate::core::ContentKind;
use crate::debug;
use crate::utils::path::to_slash;

/// The document listing failed. Fatal for the whole build.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("content directory `{0}` does not exist")]
    MissingContentDir(PathBuf),

    #[error("failed to walk `{0}`: {1}")]
    Walk(PathBuf, String),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("bad front-matter in `{0}`: {1}")]
    FrontMatter(PathBuf, String),
}

/// Supplies the complete set of content documents for one build.
pub trait DocumentSource {
    /// List every document. Either all documents or an error; never a partial list.
    fn documents(&self) -> Result<Vec<ContentDocument>, QueryError>;
}

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Filesystem source: every `.md`/`.mdx` file under a content directory.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Collect content file paths, sorted for stable document ids.
    fn collect_paths(&self) -> Result<Vec<PathBuf>, QueryError> {
        if !self.root.is_dir() {
            return Err(QueryError::MissingContentDir(self.root.clone()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).skip_hidden(true) {
            let entry = entry.map_err(|e| QueryError::Walk(self.root.clone(), e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_str().unwrap_or_default();
            if IGNORED_FILES.contains(&name) {
                continue;
            }
            let path = entry.path();
            if ContentKind::from_path(&path).is_some() {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn read_document(&self, path: &Path) -> Result<ContentDocument, QueryError> {
        let source =
            std::fs::read_to_string(path).map_err(|e| QueryError::Io(path.to_path_buf(), e))?;

        let front = FrontMatterExtractor
            .extract(&source)
            .map_err(|e| QueryError::FrontMatter(path.to_path_buf(), e.to_string()))?
            .map(|(front, _body)| front)
            .unwrap_or_default();

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        Ok(ContentDocument::new(to_slash(relative), front))
    }
}

impl DocumentSource for FsSource {
    fn documents(&self) -> Result<Vec<ContentDocument>, QueryError> {
        let paths = self.collect_paths()?;
        debug!("content"; "found {} files under {}", paths.len(), self.root.display());

        let mut docs = paths
            .par_iter()
            .map(|path| self.read_document(path))
            .collect::<Result<Vec<_>, _>>()?;

        // Sort by the slash form so ids do not depend on platform separators.
        docs.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(docs)
    }
}

impl DocumentSource for [ContentDocument] {
    fn documents(&self) -> Result<Vec<ContentDocument>, QueryError> {
        Ok(self.to_vec())
    }
}
