use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Persists the bearer token across application restarts.
///
/// Counterpart of the web client's `auth_token` cookie (`path=/`,
/// `SameSite=Lax`): an opaque string that outlives the process and carries
/// no server-side guarantees. Persistence failures must never poison the
/// in-memory session; callers log and continue.
pub trait TokenStore: Send + Sync {
    /// Loads a previously persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persists the token.
    fn save(&self, token: &str) -> io::Result<()>;

    /// Removes any persisted token.
    fn clear(&self) -> io::Result<()>;
}

/// Keeps the token in memory only. Sessions do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
        Ok(())
    }
}

/// Stores the token in a plain file so a session survives restarts.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a new `FileTokenStore` backed by the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("abrakdabra_{}_{}", name, stamp))
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::default();
        assert!(store.load().is_none());

        store.save("tok_123").unwrap();
        assert_eq!(store.load().as_deref(), Some("tok_123"));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let path = temp_path("round_trip");
        let store = FileTokenStore::new(&path);

        assert!(store.load().is_none());
        store.save("tok_456").unwrap();
        assert_eq!(store.load().as_deref(), Some("tok_456"));

        store.clear().unwrap();
        assert!(store.load().is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_store_ignores_blank_content() {
        let path = temp_path("blank");
        fs::write(&path, "  \n").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.load().is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn clearing_a_missing_file_is_not_an_error() {
        let store = FileTokenStore::new(temp_path("missing"));
        store.clear().unwrap();
    }
}
