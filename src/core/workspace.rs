use crate::config::toml_config::PathsConfig;
use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Output and logging directories under a run root.
///
/// Nothing touches the filesystem until [`Workspace::init`] is called.
#[derive(Debug, Clone)]
pub struct Workspace {
    output_dir: PathBuf,
    logging_dir: PathBuf,
    log_file: PathBuf,
}

impl Workspace {
    /// Resolves the configured directories against `root` and creates them.
    pub fn init<P: AsRef<Path>>(root: P, paths: &PathsConfig) -> Result<Self> {
        let root = root.as_ref();
        let output_dir = root.join(&paths.output_dir);
        let logging_dir = root.join(&paths.logging_dir);
        let log_file = logging_dir.join(&paths.log_file);

        fs::create_dir_all(&output_dir)?;
        fs::create_dir_all(&logging_dir)?;
        tracing::debug!(
            "Workspace ready: output={}, logging={}",
            output_dir.display(),
            logging_dir.display()
        );

        Ok(Self {
            output_dir,
            logging_dir,
            log_file,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn logging_dir(&self) -> &Path {
        &self.logging_dir
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn output_storage(&self) -> LocalStorage {
        LocalStorage::new(self.output_dir.clone())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.full_path(path))?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = Workspace::init(temp_dir.path(), &PathsConfig::default()).unwrap();

        assert!(workspace.output_dir().is_dir());
        assert!(workspace.logging_dir().is_dir());
        assert_eq!(workspace.output_dir(), temp_dir.path().join("output"));
        assert_eq!(
            workspace.log_file(),
            temp_dir.path().join("logging").join("app.log")
        );
        // the log file itself is created by the logger, not here
        assert!(!workspace.log_file().exists());
    }

    #[test]
    fn test_init_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        Workspace::init(temp_dir.path(), &PathsConfig::default()).unwrap();
        assert!(Workspace::init(temp_dir.path(), &PathsConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_local_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("nested/data.csv", b"bsn\n").await.unwrap();

        assert!(temp_dir.path().join("nested/data.csv").exists());
        assert_eq!(storage.read_file("nested/data.csv").await.unwrap(), b"bsn\n");
    }
}
