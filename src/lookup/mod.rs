/*! Radical lookup providers.

Anything that can answer "what is the radical of this character" implements [RadicalLookup].
The resolver only talks to providers through this trait, so that the remote dictionary page
can be swapped for a static table, a chain of providers or a test stub.

- [HanyuLookup]: scrapes the online Hanyu dictionary page.
- [TableLookup]: read-only static table loaded from a record file.
- [LookupChain]: asks providers in order, first answer wins.
!*/
mod chain;
mod hanyu;
mod table;

pub use chain::LookupChain;
pub use hanyu::{HanyuLookup, DEFAULT_TIMEOUT, DEFAULT_URL_TEMPLATE};
pub use table::TableLookup;

/// Reasons a provider could not give a radical.
#[derive(Debug)]
pub enum LookupError {
    /// Timeouts, DNS and connection failures, non-2xx statuses.
    Transport(reqwest::Error),
    /// The page was fetched but holds no radical element or no text in it.
    MissingRadical,
    /// A CSS selector could not be built.
    Selector(String),
    /// The provider has no entry for the character.
    NotFound,
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}

pub trait RadicalLookup {
    /// Get the radical of `character`.
    fn lookup(&self, character: char) -> Result<String, LookupError>;
}
