//! Thread-safe handle over an AtomSpace.

use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};
use crate::space::config::AtomSpaceConfig;
use crate::space::store::AtomSpace;

/// Shared AtomSpace with single-writer discipline.
///
/// Readers run concurrently; writers are serialized and exclusive, so every
/// mutation (and the index updates that go with it) is observed as a whole.
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct SharedAtomSpace {
    inner: Arc<RwLock<AtomSpace>>,
}

impl SharedAtomSpace {
    /// Wrap an existing store.
    pub fn new(space: AtomSpace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(space)),
        }
    }

    /// Create an empty shared store with the given configuration.
    pub fn with_config(config: AtomSpaceConfig) -> Self {
        Self::new(AtomSpace::with_config(config))
    }

    /// Run `f` with shared read access.
    pub fn read<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&AtomSpace) -> T,
    {
        let space = self
            .inner
            .read()
            .map_err(|e| Error::Internal(format!("Failed to lock AtomSpace for reading: {}", e)))?;
        Ok(f(&space))
    }

    /// Run `f` with exclusive write access.
    pub fn write<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut AtomSpace) -> T,
    {
        let mut space = self
            .inner
            .write()
            .map_err(|e| Error::Internal(format!("Failed to lock AtomSpace for writing: {}", e)))?;
        Ok(f(&mut space))
    }
}

impl From<AtomSpace> for SharedAtomSpace {
    fn from(space: AtomSpace) -> Self {
        Self::new(space)
    }
}
