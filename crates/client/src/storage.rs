use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use shared_types::AppError;

/// Device-local key under which a pending payment-intent id lives
/// between leaving for the external checkout and returning.
pub const CURRENT_PAYMENT_KEY: &str = "current_payment";

/// Process-wide persisted state with explicit init and teardown.
///
/// The app stores only small strings (a pending payment id, in-flight
/// form drafts), so the interface is a flat string map. Backends are
/// swappable; the donation flow is generic over this trait.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        (**self).remove(key)
    }
}

/// JSON-file-backed store. The file holds one flat string map and is
/// rewritten on every mutation; missing file reads as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, AppError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| AppError::server(format!("Corrupt store file: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(AppError::server(format!("Failed to read store: {}", e))),
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), AppError> {
        let contents = serde_json::to_string(map)
            .map_err(|e| AppError::server(format!("Failed to encode store: {}", e)))?;
        std::fs::write(&self.path, contents)
            .map_err(|e| AppError::server(format!("Failed to write store: {}", e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().unwrap();
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().unwrap();
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().unwrap();
        let mut map = self.read_map()?;
        map.remove(key);
        self.write_map(&map)
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.inner.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.inner.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.inner.lock().unwrap().remove(key);
        Ok(())
    }
}
