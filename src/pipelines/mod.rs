//! Pipelines.
//!
//! Batch jobs driving the resolver and the annotator.
//! The module provides a light [pipeline::Pipeline] trait that every job implements.
pub mod annotation;
pub mod lookup;
pub mod pipeline;

pub use annotation::{Annotation, AnnotationReport};
pub use lookup::Lookup;
pub use pipeline::Pipeline;
