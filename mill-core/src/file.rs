use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a standalone [`File`] rooted at `base`
    fn to_file(&self, base: &Path) -> File {
        File::new(self.path(base), self.render())
    }

    /// Write the file to disk, returning the written path
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let file = self.to_file(base);
        file.write()?;
        Ok(file.path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, replacing any previous content.
    ///
    /// The handle is closed before this returns, on success and on failure.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("greetings").join("Hello.txt")
        }

        fn render(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "original").unwrap();

        File::new(&path, "updated").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_error_names_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = File::new(blocker.join("Inner.java"), "x").write().unwrap_err();

        assert!(format!("{err}").contains("blocker"));
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let written = Greeting.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("greetings/Hello.txt"));
        assert_eq!(fs::read_to_string(written).unwrap(), "hello");
    }
}
