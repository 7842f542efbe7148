//! File discovery for expanding directory inputs.
//!
//! The batch runner itself takes a flat, ordered path list as-is; discovery
//! only serves callers that pass a directory and want its image files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ConversionConfig;

/// Discovers candidate image files under a directory.
pub struct FileDiscovery {
    config: ConversionConfig,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Discover all candidate image files at a path.
    ///
    /// If path is a file, returns it if it carries a supported extension.
    /// If path is a directory, recursively finds all candidates, sorted by
    /// path for deterministic ordering.
    pub fn discover(&self, path: &Path) -> Vec<PathBuf> {
        if path.is_file() {
            if self.is_candidate(path) {
                return vec![path.to_path_buf()];
            }
            return vec![];
        }

        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && self.is_candidate(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// Check if a file has a supported extension.
    fn is_candidate(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.config
                    .supported_formats
                    .iter()
                    .any(|fmt| fmt.to_lowercase() == ext_lower)
            })
            .unwrap_or(false)
    }
}
