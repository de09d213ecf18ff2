//! Static radical table.
use std::path::Path;

use super::{LookupError, RadicalLookup};
use crate::{dictionary::RadicalDictionary, error::Error};

/// Read-only provider over a [RadicalDictionary].
///
/// Unlike the resolver cache, the table is never written back.
#[derive(Debug, Default)]
pub struct TableLookup {
    table: RadicalDictionary,
}

impl TableLookup {
    pub fn new(table: RadicalDictionary) -> Self {
        Self { table }
    }

    /// Load a table from a record file (same format as the resolver dictionary).
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Ok(Self::new(RadicalDictionary::from_path(path)?))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl RadicalLookup for TableLookup {
    fn lookup(&self, character: char) -> Result<String, LookupError> {
        self.table
            .get(character)
            .map(str::to_string)
            .ok_or(LookupError::NotFound)
    }
}
