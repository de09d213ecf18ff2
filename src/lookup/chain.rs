//! Provider chaining.
use log::debug;

use super::{LookupError, RadicalLookup};

/// Asks every provider in insertion order and returns the first radical found.
///
/// If every provider fails, the error of the last one is returned.
/// An empty chain always answers [LookupError::NotFound], which makes it an offline provider.
#[derive(Default)]
pub struct LookupChain(Vec<Box<dyn RadicalLookup>>);

impl LookupChain {
    pub fn add(&mut self, provider: Box<dyn RadicalLookup>) -> &mut LookupChain {
        self.0.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl RadicalLookup for LookupChain {
    fn lookup(&self, character: char) -> Result<String, LookupError> {
        let mut last_error = LookupError::NotFound;
        for (idx, provider) in self.0.iter().enumerate() {
            match provider.lookup(character) {
                Ok(radical) => return Ok(radical),
                Err(e) => {
                    debug!("provider {} failed on {}: {:?}", idx, character, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
