/*! Corpus annotation.

Turns each character of a corpus into a `character_radical` token:

```text
中国国庆假期香江将涌入人潮
```

becomes

```text
中_丨 国_囗 国_囗 庆_广 假_亻 期_月 香_香 江_氵 将_寸 涌_氵 入_入 人_人 潮_氵
```

Characters with no known radical (non-Han characters, failed lookups) get [SENTINEL].

Radicals are resolved once per distinct character ([extract_characters] then [CorpusAnnotator::resolve_all]),
the corpus is then rendered with [CorpusAnnotator::annotate].
!*/
mod classify;
mod extract;

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;
use log::debug;

pub use classify::Classifier;
pub use extract::{extract_characters, CharacterSet};

use crate::{error::Error, resolver::RadicalResolver};

/// No Radical Available.
pub const SENTINEL: &str = "NRA";
/// Joins a character and its radical.
pub const SEPARATOR: &str = "_";

/// Characters with a known radical.
pub type RadicalMap = BTreeMap<char, String>;
/// Characters without radical, all mapped to [SENTINEL].
pub type UnresolvedMap = BTreeMap<char, String>;

#[derive(Debug, Default, Clone, Copy)]
pub struct CorpusAnnotator {
    classifier: Classifier,
}

impl CorpusAnnotator {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> Classifier {
        self.classifier
    }

    /// `true` if `c` is a candidate for a radical lookup.
    pub fn classify(&self, c: char) -> bool {
        self.classifier.classify(c)
    }

    /// Partition `characters` into found and unresolved ones.
    ///
    /// Non-Han characters are never sent to the resolver.
    /// Each character ends up in exactly one of the two maps.
    pub fn resolve_all(
        &self,
        characters: &CharacterSet,
        resolver: &mut RadicalResolver,
    ) -> (RadicalMap, UnresolvedMap) {
        let mut found = RadicalMap::new();
        let mut unresolved = UnresolvedMap::new();

        for c in characters.iter() {
            let radical = if self.classify(c) {
                resolver.resolve(c)
            } else {
                None
            };

            match radical {
                Some(radical) => {
                    found.insert(c, radical);
                }
                None => {
                    debug!("no radical for {:?}", c);
                    unresolved.insert(c, SENTINEL.to_string());
                }
            }
        }

        (found, unresolved)
    }

    /// Render a single line. Blank lines give blank lines.
    pub fn annotate_line(line: &str, radicals: &RadicalMap) -> String {
        line.chars()
            .map(|c| {
                let radical = radicals.get(&c).map(String::as_str).unwrap_or(SENTINEL);
                format!("{c}{SEPARATOR}{radical}")
            })
            .join(" ")
    }

    /// Render every line, blank ones included.
    pub fn annotate<I, S>(lines: I, radicals: &RadicalMap) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| Self::annotate_line(line.as_ref(), radicals))
            .collect()
    }

    /// Write found radicals to `path` as `character radical` lines.
    ///
    /// Only characters accepted by the classifier are written.
    /// Returns the number of written lines.
    pub fn save_found(&self, path: &Path, radicals: &RadicalMap) -> Result<usize, Error> {
        let rows = radicals.iter().filter(|(c, _)| self.classify(**c));
        write_table(File::create(path)?, rows)
    }

    /// Write unresolved characters to `path` as `character NRA` lines.
    pub fn save_unresolved(&self, path: &Path, unresolved: &UnresolvedMap) -> Result<usize, Error> {
        write_table(File::create(path)?, unresolved.iter())
    }
}

/// Write `character value` lines, returns the number of lines.
fn write_table<'a, W, I>(writer: W, rows: I) -> Result<usize, Error>
where
    W: Write,
    I: Iterator<Item = (&'a char, &'a String)>,
{
    let mut writer = BufWriter::new(writer);
    let mut nb_rows = 0;
    for (c, value) in rows {
        writeln!(writer, "{} {}", c, value)?;
        nb_rows += 1;
    }
    writer.flush()?;

    Ok(nb_rows)
}
