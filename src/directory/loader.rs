use std::path::{Path, PathBuf};

use super::snapshot::{DirectoryError, DirectorySnapshot};

/// Source of directory snapshots for the refresh job
pub trait CorpusLoader: Send + Sync {
    /// Build a fresh snapshot from the source
    fn load(&self) -> Result<DirectorySnapshot, DirectoryError>;

    /// Short description of the source for log lines
    fn describe(&self) -> String;
}

/// Loads the exported directory from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusLoader for FileLoader {
    fn load(&self) -> Result<DirectorySnapshot, DirectoryError> {
        DirectorySnapshot::load_from_file(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_loader_reads_corpus() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name_cleaned": "john smith", "name": "John Smith"}}]"#
        )
        .unwrap();

        let loader = FileLoader::new(file.path());
        let snapshot = loader.load().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(loader.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_file_loader_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let loader = FileLoader::new(file.path());
        assert!(matches!(loader.load(), Err(DirectoryError::Parse(_))));
    }
}
