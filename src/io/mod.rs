/*!
# IO utilities

Corpus reading and annotated corpus writing. Both work on UTF-8 text, one record per line.
!*/
pub mod reader;
pub mod writer;

pub use reader::CorpusReader;
pub use writer::TextWriter;
