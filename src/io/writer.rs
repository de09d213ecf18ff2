//! Line-oriented text writer.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::error::Error;

/// Writes newline-terminated records to a truncated file.
pub struct TextWriter {
    out: BufWriter<File>,
    nb_lines: u64,
}

impl TextWriter {
    /// Create (or truncate) `dst`.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        debug!("creating {:?}", dst);
        let out = BufWriter::new(File::create(dst)?);
        Ok(Self {
            out,
            nb_lines: 0,
        })
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.nb_lines += 1;
        Ok(())
    }

    /// Write every line of `lines`, then flush.
    pub fn write_all<I, S>(&mut self, lines: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.out.flush()?;
        Ok(())
    }

    pub fn nb_lines(&self) -> u64 {
        self.nb_lines
    }
}
