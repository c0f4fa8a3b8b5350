use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Key under which the serialized task-state map is stored
pub const TASK_STATES_KEY: &str = "task_states";

/// Key under which the last active mode name is stored
pub const LAST_MODE_KEY: &str = "last_mode";

/// Storage failure. Never fatal: loads degrade to absent, saves are
/// reported as a status-line warning.
#[derive(Debug, Error)]
#[error("storage unavailable for '{key}': {source}")]
pub struct StorageError {
    pub key: String,
    #[source]
    pub source: anyhow::Error,
}

/// File-backed key-value gateway over the grind directory.
///
/// Each key maps to one file under the directory. Writes go through a
/// temp-file + rename in that same directory, so a crash mid-save never
/// corrupts the previous snapshot of a key.
#[derive(Debug, Clone)]
pub struct FileGateway {
    dir: PathBuf,
}

impl FileGateway {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Locate the storage directory: the nearest `.grind` walking up from
    /// the current directory, else the global `~/.grind`. Creates the
    /// directory if it does not exist yet.
    pub fn discover() -> Result<Self> {
        let current = env::current_dir().context("Could not determine current directory")?;

        let dir = match find_up(&current) {
            Some(local) => local,
            None => {
                let home = dirs::home_dir().context("Could not determine home directory")?;
                home.join(".grind")
            }
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        Ok(Self { dir })
    }

    /// Initialize a local `.grind` directory in the current directory
    /// (the `grind init` subcommand)
    pub fn init_local() -> Result<PathBuf> {
        let current = env::current_dir().context("Could not determine current directory")?;
        init_in(&current)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Load the value for a key. Missing files and read failures are both
    /// treated as "absent" so a broken store degrades to a fresh state.
    pub fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Save a value under a key
    pub fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write_atomic(&self.key_path(key), value)
            .map_err(|source| StorageError {
                key: key.to_string(),
                source,
            })
    }

    /// Write content via temp file + rename. The temp file lives in the
    /// gateway directory so the rename stays on one filesystem.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let mut temp_file =
            NamedTempFile::new_in(&self.dir).context("Failed to create temporary file")?;

        temp_file
            .write_all(content.as_bytes())
            .context("Failed to write to temporary file")?;

        temp_file
            .as_file()
            .sync_all()
            .context("Failed to sync temporary file")?;

        temp_file
            .persist(path)
            .with_context(|| format!("Failed to persist file: {}", path.display()))?;

        Ok(())
    }
}

/// Find the nearest `.grind` directory walking up from `start`
fn find_up(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".grind"))
        .find(|candidate| candidate.is_dir())
}

fn init_in(parent: &Path) -> Result<PathBuf> {
    let dir = parent.join(".grind");

    if dir.exists() {
        anyhow::bail!("Grind directory already exists: {}", dir.display());
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_absent_key() {
        let dir = tempdir().unwrap();
        let gateway = FileGateway::new(dir.path().to_path_buf());

        assert_eq!(gateway.load("missing"), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let gateway = FileGateway::new(dir.path().to_path_buf());

        gateway.save(LAST_MODE_KEY, "Short").unwrap();
        assert_eq!(gateway.load(LAST_MODE_KEY).as_deref(), Some("Short"));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let gateway = FileGateway::new(dir.path().to_path_buf());

        gateway.save(LAST_MODE_KEY, "Short").unwrap();
        gateway.save(LAST_MODE_KEY, "Holiday").unwrap();
        assert_eq!(gateway.load(LAST_MODE_KEY).as_deref(), Some("Holiday"));
    }

    #[test]
    fn test_save_into_missing_dir_fails_without_panicking() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        let gateway = FileGateway::new(gone);

        let err = gateway.save(TASK_STATES_KEY, "{}").unwrap_err();
        assert_eq!(err.key, TASK_STATES_KEY);
    }

    #[test]
    fn test_keys_map_to_separate_files() {
        let dir = tempdir().unwrap();
        let gateway = FileGateway::new(dir.path().to_path_buf());

        gateway.save(TASK_STATES_KEY, "{}").unwrap();
        gateway.save(LAST_MODE_KEY, "Long").unwrap();

        assert!(dir.path().join(TASK_STATES_KEY).is_file());
        assert!(dir.path().join(LAST_MODE_KEY).is_file());
    }

    #[test]
    fn test_find_up_locates_ancestor_grind_dir() {
        let root = tempdir().unwrap();
        let grind = root.path().join(".grind");
        fs::create_dir(&grind).unwrap();

        let nested = root.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_up(&nested), Some(grind));
    }

    #[test]
    fn test_find_up_misses_when_no_grind_dir_exists() {
        let root = tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        // A plain file named .grind is not a storage directory
        fs::write(root.path().join(".grind"), "").unwrap();

        assert_eq!(find_up(&nested), None);
    }

    #[test]
    fn test_init_in_creates_once_then_refuses() {
        let root = tempdir().unwrap();

        let created = init_in(root.path()).unwrap();
        assert!(created.is_dir());
        assert!(init_in(root.path()).is_err());
    }

    #[test]
    fn test_discover_yields_a_usable_gateway() {
        let gateway = FileGateway::discover().unwrap();
        assert!(gateway.dir().to_string_lossy().contains(".grind"));
    }
}
