pub mod annotate;
pub mod dictionary;
pub mod error;
pub mod io;
pub mod lookup;
pub mod pipelines;
pub mod resolver;
