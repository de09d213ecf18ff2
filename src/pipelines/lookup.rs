//! Single character lookups.
use log::info;

use crate::{error::Error, resolver::RadicalResolver};

use super::Pipeline;

/// Resolves a list of characters, in order.
///
/// Unlike the annotation pipeline, characters are not classified:
/// everything is sent to the resolver.
pub struct Lookup {
    characters: Vec<char>,
    resolver: RadicalResolver,
    save: bool,
}

impl Lookup {
    pub fn new(characters: Vec<char>, resolver: RadicalResolver, save: bool) -> Self {
        Self {
            characters,
            resolver,
            save,
        }
    }

    pub fn resolver(&self) -> &RadicalResolver {
        &self.resolver
    }
}

impl Pipeline<Vec<(char, Option<String>)>> for Lookup {
    fn run(&mut self) -> Result<Vec<(char, Option<String>)>, Error> {
        let resolved = self
            .characters
            .iter()
            .map(|c| (*c, self.resolver.resolve(*c)))
            .collect();

        if self.save {
            self.resolver.persist()?;
        } else {
            info!("not saving {:?}", self.resolver.path());
        }

        Ok(resolved)
    }
}
