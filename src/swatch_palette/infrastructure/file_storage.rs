use std::fs;
use std::path::{Path, PathBuf};

use super::error::InfrastructureError;
use crate::domain::file_storage_trait::FileStorage;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorage for LocalFileStorage {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, InfrastructureError> {
        let list_error = |source| InfrastructureError::ListError {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            if entry.file_type().map_err(list_error)?.is_file() {
                files.push(entry.path());
            }
        }
        Ok(files)
    }

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        fs::read(path).map_err(|source| InfrastructureError::ReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        fs::write(path, data).map_err(|source| InfrastructureError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<(), InfrastructureError> {
        self.save_image(path, text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(test_name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "swatch_palette_storage_{}_{}",
            test_name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_then_read() {
        let dir = scratch_dir("write_then_read");
        let storage = LocalFileStorage::new();
        let path = dir.join("crop.png");

        storage.save_image(&path, &[1, 2, 3]).unwrap();
        assert_eq!(storage.read_image(&path).unwrap(), vec![1, 2, 3]);

        let text_path = dir.join("palette.txt");
        storage.write_text(&text_path, "Scarlet\t\t#ff0000").unwrap();
        assert_eq!(fs::read_to_string(&text_path).unwrap(), "Scarlet\t\t#ff0000");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_list_files_skips_directories() {
        let dir = scratch_dir("list_files");
        fs::write(dir.join("0001_Scarlet_a.jpg"), b"x").unwrap();
        fs::write(dir.join("notes.txt"), b"x").unwrap();
        fs::create_dir(dir.join("0002_Nested_b.jpg")).unwrap();

        let storage = LocalFileStorage::new();
        let mut files = storage.list_files(&dir).unwrap();
        files.sort();
        assert_eq!(files, vec![dir.join("0001_Scarlet_a.jpg"), dir.join("notes.txt")]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let storage = LocalFileStorage::new();
        let path = Path::new("definitely/not/here/0001_Scarlet_a.jpg");
        match storage.read_image(path) {
            Err(InfrastructureError::ReadError { path: reported, source }) => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected ReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_directory_fails_to_list() {
        let storage = LocalFileStorage::new();
        let result = storage.list_files(Path::new("definitely/not/here"));
        assert!(matches!(result, Err(InfrastructureError::ListError { .. })));
    }
}
