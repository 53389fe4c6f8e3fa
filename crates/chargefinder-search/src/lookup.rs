//! Zip code lookup collaborator.

use std::collections::HashMap;

use chargefinder_core::ZipLocation;

use crate::error::LookupError;

/// Resolves a numeric zip code to a city/state entry.
///
/// `Ok(None)` means the code is unknown, which is not an error.
pub trait ZipLookup {
    /// # Errors
    ///
    /// Returns [`LookupError`] when the collaborator itself fails.
    fn lookup(&self, zipcode: u32) -> Result<Option<ZipLocation>, LookupError>;
}

impl<T: ZipLookup + ?Sized> ZipLookup for &T {
    fn lookup(&self, zipcode: u32) -> Result<Option<ZipLocation>, LookupError> {
        (**self).lookup(zipcode)
    }
}

/// In-memory zip directory keyed by numeric zip code.
#[derive(Debug, Clone, Default)]
pub struct ZipDirectory {
    entries: HashMap<u32, ZipLocation>,
}

impl ZipDirectory {
    /// Build a directory from loaded entries.
    ///
    /// Entries whose zip code does not parse as a number are skipped; the
    /// loader in `chargefinder-core` already rejects them.
    #[must_use]
    pub fn new(locations: Vec<ZipLocation>) -> Self {
        let entries = locations
            .into_iter()
            .filter_map(|location| {
                let key = location.zipcode.parse::<u32>().ok()?;
                Some((key, location))
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ZipLookup for ZipDirectory {
    fn lookup(&self, zipcode: u32) -> Result<Option<ZipLocation>, LookupError> {
        Ok(self.entries.get(&zipcode).cloned())
    }
}
