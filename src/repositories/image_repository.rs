// src/repositories/image_repository.rs
//
// Image Repository - filesystem access for the rename pipeline
//
// The trait is the filesystem collaborator: listing, existence checks,
// moves and removals. It carries no policy; overwrite and no-op decisions
// live in the rename service.

use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ImageRepository: Send + Sync {
    fn is_directory(&self, path: &Path) -> bool;

    /// File names of the regular files directly inside `dir`, unordered
    fn list_directory(&self, dir: &Path) -> AppResult<Vec<String>>;

    fn exists(&self, path: &Path) -> bool;

    fn move_file(&self, from: &Path, to: &Path) -> AppResult<()>;

    fn remove_file(&self, path: &Path) -> AppResult<()>;
}

pub struct LocalImageRepository;

impl LocalImageRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalImageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageRepository for LocalImageRepository {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_directory(&self, dir: &Path) -> AppResult<Vec<String>> {
        if !dir.is_dir() {
            return Err(AppError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut names = Vec::new();
        for entry in walkdir::WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AppError::Other(format!("Directory walk failed: {}", e)))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            } else {
                log::warn!("Skipping non UTF-8 file name: {:?}", entry.file_name());
            }
        }

        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn move_file(&self, from: &Path, to: &Path) -> AppResult<()> {
        if !from.exists() {
            return Err(AppError::Other(format!(
                "Source does not exist: {}",
                from.display()
            )));
        }
        fs::rename(from, to)?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> AppResult<()> {
        fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_list_directory_returns_files_only() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("b.png")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("c.jpg")).unwrap();

        let repo = LocalImageRepository::new();
        let mut names = repo.list_directory(dir.path()).unwrap();
        names.sort();

        assert_eq!(names, vec!["a.jpg".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn test_list_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let result = LocalImageRepository::new().list_directory(&missing);
        assert!(matches!(result, Err(AppError::DirectoryNotFound(_))));
    }

    #[test]
    fn test_move_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("old.jpg");
        let dest = dir.path().join("new.jpg");
        File::create(&src).unwrap().write_all(b"pixels").unwrap();

        let repo = LocalImageRepository::new();
        repo.move_file(&src, &dest).unwrap();

        assert!(!repo.exists(&src));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "pixels");

        repo.remove_file(&dest).unwrap();
        assert!(!repo.exists(&dest));
    }

    #[test]
    fn test_move_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocalImageRepository::new()
            .move_file(&dir.path().join("ghost.jpg"), &dir.path().join("x.jpg"));
        assert!(result.is_err());
    }
}
