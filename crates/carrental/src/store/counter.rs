//! Persisted registration counter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A single decimal integer kept in a small text file.
///
/// Counts registrations so numbering resumes across runs. It is never
/// decremented and is not a user identifier.
#[derive(Debug, Clone)]
pub struct SequenceCounter {
    path: PathBuf,
}

impl SequenceCounter {
    /// Create a counter backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the counter file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current value. A missing or unparsable file reads as zero.
    #[must_use]
    pub fn load(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Ignoring unparsable counter in {}: {:?}",
                    self.path.display(),
                    text.trim()
                );
                0
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!("Could not read counter {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrite the file with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, value: u64) -> Result<()> {
        fs::write(&self.path, value.to_string())
            .map_err(|e| Error::store("write", &self.path, e))?;
        debug!("Saved counter {} to {}", value, self.path.display());
        Ok(())
    }
}
