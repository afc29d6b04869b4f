//! Keyed storage for rendered output.
//!
//! The renderer only needs `get` and `set`. Entries are never invalidated:
//! whatever is stored under a key is returned verbatim until it is
//! overwritten.

use std::{
    collections::HashMap,
    fmt::Write as _,
    fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Failures reported by a [`RenderCache`].
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("cache unavailable: {0}")]
    Unavailable(String),
    #[error("cache entry `{key}` is not valid UTF-8")]
    Encoding { key: String },
}

/// Storage for previously rendered HTML.
pub trait RenderCache {
    /// Look up `key`, returning `Ok(None)` on a miss.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous entry.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// In-process cache backed by a map.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries. A poisoned map counts as empty.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |map| map.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> CacheError {
    CacheError::Unavailable("memory cache lock poisoned".to_string())
}

impl RenderCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let map = self.entries.lock().map_err(poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut map = self.entries.lock().map_err(poisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Cache storing one file per key inside a directory.
///
/// File names are the hex-encoded key with an `.html` extension, so any key
/// maps to a portable name. Entries are written to a temporary file in the
/// same directory and renamed into place, so a reader sees either no entry
/// or a complete one.
#[derive(Clone, Debug)]
pub struct DirCache {
    root: PathBuf,
}

impl DirCache {
    /// Use `root` as the cache directory. It is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Use `root` as the cache directory, creating it now.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let cache = Self::new(root);
        fs::create_dir_all(&cache.root)?;
        Ok(cache)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name = key
            .bytes()
            .fold(String::with_capacity(key.len() * 2 + 5), |mut acc, b| {
                let _ = write!(acc, "{b:02x}");
                acc
            });
        self.root.join(name + ".html")
    }
}

impl RenderCache for DirCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read(self.entry_path(key)) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| CacheError::Encoding {
                    key: key.to_string(),
                }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.root)?;
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(self.entry_path(key)).map_err(|err| err.error)?;
        Ok(())
    }
}
