//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// pipelines can report what they did.
///
/// `run` takes `&mut self` since pipelines own the resolver, whose cache grows while running.
pub trait Pipeline<T> {
    fn run(&mut self) -> Result<T, Error>;
}
