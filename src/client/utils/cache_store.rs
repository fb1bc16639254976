use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value store holding the last fetched result per endpoint
/// and the theme flag. One file per key under the store root; a save
/// overwrites any prior value.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.txt", key))
    }

    pub fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    pub fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(s) => {
                let s = s.trim().to_string();
                if s.is_empty() {
                    None
                } else {
                    Some(s)
                }
            }
            Err(e) => {
                log::warn!("failed to read cache entry {}: {}", key, e);
                None
            }
        }
    }

    pub fn clear(&self, key: &str) -> anyhow::Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn round_trips_a_value() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        store.save("lastFact", "Cats sleep 70% of their lives.").unwrap();
        assert_eq!(
            store.load("lastFact").as_deref(),
            Some("Cats sleep 70% of their lives.")
        );
    }

    #[test]
    fn save_overwrites_the_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        store.save("lastActivity", "Learn to juggle").unwrap();
        store.save("lastActivity", "Go stargazing").unwrap();
        assert_eq!(store.load("lastActivity").as_deref(), Some("Go stargazing"));
    }

    #[test]
    fn absent_key_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        assert_eq!(store.load("lastFact"), None);
    }

    #[test]
    fn blank_values_load_as_none() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        store.save("theme", "  \n").unwrap();
        assert_eq!(store.load("theme"), None);
    }

    #[test]
    fn clear_removes_the_entry() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        store.save("theme", "dark").unwrap();
        store.clear("theme").unwrap();
        assert_eq!(store.load("theme"), None);
        // clearing an absent key is not an error
        store.clear("theme").unwrap();
    }
}
