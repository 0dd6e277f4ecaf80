use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// @module: File and path utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file, replacing any existing content atomically.
    /// The content is staged in a temporary file in the target directory and
    /// renamed into place, so readers never observe a half-written file.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::ensure_dir(&parent)?;

        let mut tmp = NamedTempFile::new_in(&parent)
            .with_context(|| format!("Failed to create temporary file in {:?}", parent))?;
        tmp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write temporary file for {:?}", path))?;
        tmp.persist(path)
            .with_context(|| format!("Failed to replace file: {:?}", path))?;

        Ok(())
    }

    // @generates: Checkpoint path derived from the output path
    // @params: output_path, checkpoint count
    pub fn checkpoint_path<P: AsRef<Path>>(output_path: P, count: usize) -> PathBuf {
        let output_path = output_path.as_ref();
        let stem = output_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "output".to_string());
        let filename = format!("{}.checkpoint.{}.json", stem, count);
        match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(filename),
            _ => PathBuf::from(filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writeAtomic_shouldReplaceExistingContent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        FileManager::write_atomic(&path, "first").unwrap();
        FileManager::write_atomic(&path, "second").unwrap();
        assert_eq!(FileManager::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_checkpointPath_shouldDeriveFromOutputStem() {
        let path = FileManager::checkpoint_path("out/glossary_ja.json", 300);
        assert_eq!(path, PathBuf::from("out/glossary_ja.checkpoint.300.json"));
    }

    #[test]
    fn test_checkpointPath_withBareFilename_shouldStayRelative() {
        let path = FileManager::checkpoint_path("glossary_ja.json", 100);
        assert_eq!(path, PathBuf::from("glossary_ja.checkpoint.100.json"));
    }
}
