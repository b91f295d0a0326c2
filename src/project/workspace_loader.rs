use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::LoadError;
use super::file_loader::{self, SCRIPT_EXTENSIONS};
use crate::base::DocumentId;
use crate::ide::AnalysisHost;

/// Loads script files from disk into an [`AnalysisHost`].
#[derive(Clone, Debug)]
pub struct WorkspaceLoader {
    extensions: Vec<String>,
}

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self {
            extensions: SCRIPT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replace the accepted file extensions (without the leading dot).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// The document id a file is registered under.
    pub fn document_id(path: &Path) -> DocumentId {
        DocumentId::from(path.to_string_lossy().into_owned())
    }

    /// Loads all script files under a directory into the host.
    ///
    /// Files are read and parsed in parallel. Every readable file is
    /// loaded even if others fail; the failures are returned together.
    /// On success, returns the number of documents loaded.
    pub fn load_directory_into_host<P: Into<PathBuf>>(
        &self,
        path: P,
        host: &AnalysisHost,
    ) -> Result<usize, LoadError> {
        let path = path.into();
        let paths = file_loader::collect_file_paths_with(&path, &self.extensions)?;

        let errors: Vec<LoadError> = paths
            .par_iter()
            .filter_map(|file| self.load_file_into_host(file, host).err())
            .collect();

        let loaded = paths.len() - errors.len();
        tracing::info!(dir = %path.display(), loaded, failed = errors.len(), "loaded workspace");

        if errors.is_empty() {
            Ok(loaded)
        } else {
            Err(LoadError::Multiple(errors))
        }
    }

    /// Loads a single file into the host.
    pub fn load_file_into_host<P: AsRef<Path>>(
        &self,
        path: P,
        host: &AnalysisHost,
    ) -> Result<DocumentId, LoadError> {
        let path = path.as_ref();
        let text = file_loader::load_file_with(path, &self.extensions)?;
        let document = Self::document_id(path);
        host.on_document_changed(document.clone(), text);
        Ok(document)
    }
}

impl Default for WorkspaceLoader {
    fn default() -> Self {
        Self::new()
    }
}
