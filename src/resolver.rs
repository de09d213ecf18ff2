/*! Two-tier radical resolution.

The [RadicalResolver] first looks into its [RadicalDictionary], then asks its [RadicalLookup] provider
on a miss. Radicals learnt from the provider are kept in memory and only written back on [RadicalResolver::persist].
!*/
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::{dictionary::RadicalDictionary, error::Error, lookup::RadicalLookup};

/// Resolution counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolverStats {
    cache_hits: usize,
    remote_hits: usize,
    failures: usize,
}

impl ResolverStats {
    /// Characters answered by the dictionary.
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// Characters answered by the provider.
    pub fn remote_hits(&self) -> usize {
        self.remote_hits
    }

    /// Characters nobody could answer.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Number of times the provider was called.
    pub fn lookups(&self) -> usize {
        self.remote_hits + self.failures
    }
}

pub struct RadicalResolver {
    dictionary: RadicalDictionary,
    path: PathBuf,
    // dictionary size at load (or at last persist)
    origin_len: usize,
    lookup: Box<dyn RadicalLookup>,
    stats: ResolverStats,
}

impl RadicalResolver {
    /// Load the dictionary located at `path`.
    pub fn new(path: &Path, lookup: Box<dyn RadicalLookup>) -> Result<Self, Error> {
        let dictionary = RadicalDictionary::from_path(path)?;
        Ok(Self::with_dictionary(dictionary, path, lookup))
    }

    /// Use an already loaded dictionary. `path` is where [RadicalResolver::persist] writes.
    pub fn with_dictionary(
        dictionary: RadicalDictionary,
        path: &Path,
        lookup: Box<dyn RadicalLookup>,
    ) -> Self {
        Self {
            origin_len: dictionary.len(),
            dictionary,
            path: path.to_path_buf(),
            lookup,
            stats: ResolverStats::default(),
        }
    }

    /// Get the radical of `character`.
    ///
    /// Cached characters never reach the provider.
    /// Provider failures are logged and give `None`.
    pub fn resolve(&mut self, character: char) -> Option<String> {
        if let Some(radical) = self.dictionary.get(character) {
            self.stats.cache_hits += 1;
            return Some(radical.to_string());
        }

        match self.lookup.lookup(character) {
            Ok(radical) => {
                debug!("{} -> {} (remote)", character, radical);
                self.stats.remote_hits += 1;
                self.dictionary.insert(character, radical.clone());
                Some(radical)
            }
            Err(e) => {
                warn!("could not get radical of {}: {:?}", character, e);
                self.stats.failures += 1;
                None
            }
        }
    }

    /// Rewrite the dictionary file if new radicals were learnt since load.
    ///
    /// Returns `true` if the file has been written.
    pub fn persist(&mut self) -> Result<bool, Error> {
        if self.dictionary.len() <= self.origin_len {
            debug!("no new radical, not saving {:?}", self.path);
            return Ok(false);
        }

        info!(
            "saving {} new radicals to {:?}",
            self.dictionary.len() - self.origin_len,
            self.path
        );
        self.dictionary.save(&self.path)?;
        self.origin_len = self.dictionary.len();
        Ok(true)
    }

    pub fn dictionary(&self) -> &RadicalDictionary {
        &self.dictionary
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stats(&self) -> &ResolverStats {
        &self.stats
    }
}
