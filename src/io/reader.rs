/*! Corpus reading.

[CorpusReader] yields lines without their terminator (`\n` or `\r\n`).
Blank lines are yielded as empty strings: skipping them is up to the caller.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::Path,
};

use crate::error::Error;

#[derive(Debug)]
pub struct CorpusReader<T> {
    lines: Lines<BufReader<T>>,
}

impl CorpusReader<File> {
    pub fn new(src: &Path) -> Result<Self, Error> {
        let file = File::open(src)?;
        Ok(Self::from_reader(file))
    }
}

impl<T> CorpusReader<T>
where
    T: Read,
{
    pub fn from_reader(reader: T) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }
}

impl<T> Iterator for CorpusReader<T>
where
    T: Read,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| line.map_err(Error::Io))
    }
}

/// Read a whole corpus in memory.
pub fn read_corpus(src: &Path) -> Result<Vec<String>, Error> {
    CorpusReader::new(src)?.collect()
}
