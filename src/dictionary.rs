/*! Radical dictionary.

In-memory `character -> radical` mapping backed by a flat record file:

```text
中,丨
国,囗
```

No header, two fields per record. Duplicated characters are allowed in the file, the last record wins.
Entries are kept sorted by character, so that saving the same dictionary twice yields the same file.
!*/
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::{debug, warn};

use crate::error::Error;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RadicalDictionary {
    entries: BTreeMap<String, String>,
}

impl RadicalDictionary {
    /// Load a dictionary from a record file.
    ///
    /// A missing file is not an error: an empty dictionary is returned
    /// and the file will be created by the first save.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("{:?} does not exist, starting from an empty dictionary", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let dictionary = Self::from_reader(BufReader::new(file))?;
        debug!("loaded {} radicals from {:?}", dictionary.len(), path);
        Ok(dictionary)
    }

    /// Read records from any reader.
    /// Blank lines are skipped, fields after the second one are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut entries = BTreeMap::new();
        for record in rdr.records() {
            let record = record?;
            match (record.get(0), record.get(1)) {
                (Some(character), Some(radical)) => {
                    entries.insert(character.to_string(), radical.to_string());
                }
                _ => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    return Err(Error::MalformedRecord { line });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Write every entry as a `character,radical` record.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        for (character, radical) in &self.entries {
            wtr.write_record([character, radical])?;
        }
        wtr.flush()?;

        Ok(())
    }

    /// Truncate `path` and write the whole dictionary in it.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        debug!("saved {} radicals to {:?}", self.len(), path);
        Ok(())
    }

    pub fn get(&self, character: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.entries
            .get(character.encode_utf8(&mut buf) as &str)
            .map(String::as_str)
    }

    /// Insert or replace a radical, returning the previous one.
    pub fn insert(&mut self, character: char, radical: String) -> Option<String> {
        self.entries.insert(character.to_string(), radical)
    }

    pub fn contains(&self, character: char) -> bool {
        self.get(character).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(character, radical)| (character.as_str(), radical.as_str()))
    }
}

impl<'a> FromIterator<(char, &'a str)> for RadicalDictionary {
    fn from_iter<T: IntoIterator<Item = (char, &'a str)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(character, radical)| (character.to_string(), radical.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_records() {
        let records = "中,丨\n国,囗\n";
        let d = RadicalDictionary::from_reader(records.as_bytes()).unwrap();

        assert_eq!(d.len(), 2);
        assert_eq!(d.get('中'), Some("丨"));
        assert_eq!(d.get('国'), Some("囗"));
        assert_eq!(d.get('江'), None);
    }

    #[test]
    fn last_record_wins() {
        let records = "中,丨\n中,口\n";
        let d = RadicalDictionary::from_reader(records.as_bytes()).unwrap();

        assert_eq!(d.len(), 1);
        assert_eq!(d.get('中'), Some("口"));
    }

    #[test]
    fn blank_lines_and_extra_fields() {
        let records = "中,丨\r\n\r\n国,囗,extra\r\n";
        let d = RadicalDictionary::from_reader(records.as_bytes()).unwrap();

        assert_eq!(d.len(), 2);
        assert_eq!(d.get('国'), Some("囗"));
    }

    #[test]
    fn malformed_record() {
        let records = "中,丨\n国\n";
        let d = RadicalDictionary::from_reader(records.as_bytes());

        match d {
            Err(Error::MalformedRecord { line }) => assert_eq!(line, 2),
            other => panic!("expected a malformed record error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let d = RadicalDictionary::from_path(&dir.path().join("nope.csv")).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xinhua.csv");

        let d: RadicalDictionary = vec![('中', "丨"), ('国', "囗"), ('江', "氵")]
            .into_iter()
            .collect();
        d.save(&path).unwrap();

        let reloaded = RadicalDictionary::from_path(&path).unwrap();
        assert_eq!(d, reloaded);
    }

    #[test]
    fn written_in_key_order() {
        let d: RadicalDictionary = vec![('国', "囗"), ('中', "丨")].into_iter().collect();
        let mut out = Vec::new();
        d.write_to(&mut out).unwrap();

        // 中 (U+4E2D) sorts before 国 (U+56FD)
        assert_eq!(String::from_utf8(out).unwrap(), "中,丨\n国,囗\n");
    }
}
