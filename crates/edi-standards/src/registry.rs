#![deny(unsafe_code)]

//! Registry of constructed directories, cached per parameter key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::directory::Directory;
use crate::error::Result;
use crate::params::DirectoryKey;
use crate::paths::SearchPath;

/// Owns the directory cache and its caching flag.
///
/// Directories parsed from plain text files can be memory-consuming, so by
/// default each distinct parameter key is constructed once and the shared
/// instance handed out on every later request. All cache operations are
/// serialized behind one mutex; the directories themselves are immutable
/// and need no further locking.
#[derive(Debug)]
pub struct DirectoryRegistry {
    search: SearchPath,
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    caching: bool,
    cache: HashMap<DirectoryKey, Arc<Directory>>,
}

impl DirectoryRegistry {
    /// New registry with caching enabled.
    pub fn new(search: SearchPath) -> Self {
        Self {
            search,
            inner: Mutex::new(Inner {
                caching: true,
                cache: HashMap::new(),
            }),
        }
    }

    /// New registry reading the search path from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(SearchPath::from_env()?))
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search
    }

    /// Directory for a parameter key.
    ///
    /// With caching enabled this constructs at most once per distinct key
    /// and returns the identical instance on every later call; the lock is
    /// held across construction so concurrent callers cannot race a key
    /// into being built twice. With caching disabled, every call constructs
    /// a fresh directory with identical contents.
    pub fn directory(&self, key: &DirectoryKey) -> Result<Arc<Directory>> {
        let mut inner = self.lock();
        if !inner.caching {
            drop(inner);
            return Ok(Arc::new(Directory::load(key, &self.search)?));
        }
        if let Some(dir) = inner.cache.get(key) {
            return Ok(Arc::clone(dir));
        }
        let dir = Arc::new(Directory::load(key, &self.search)?);
        inner.cache.insert(key.clone(), Arc::clone(&dir));
        Ok(dir)
    }

    /// Turn caching on or off. Turning it off only changes future
    /// [`directory`](Self::directory) calls; existing entries stay until
    /// [`flush`](Self::flush).
    pub fn set_caching(&self, enabled: bool) {
        self.lock().caching = enabled;
    }

    pub fn caching_enabled(&self) -> bool {
        self.lock().caching
    }

    /// Release all cached directories, regardless of the caching flag.
    /// Needed primarily between test runs to reclaim memory.
    pub fn flush(&self) {
        self.lock().cache.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
