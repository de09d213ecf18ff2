//! Error enum
//!
//! Lookup failures are not part of this enum: they live in [crate::lookup::LookupError]
//! and are turned into `NotFound` by the resolver.

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Http(reqwest::Error),
    /// A radical record with less than two fields, at 1-based `line`.
    MalformedRecord {
        line: u64,
    },
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
