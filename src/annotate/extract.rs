//! Distinct character extraction.
use std::collections::HashSet;

use log::info;

// progress is logged every PROGRESS_STEP non-blank lines.
const PROGRESS_STEP: usize = 100_000;

/// Distinct characters, iterated in order of first occurrence.
#[derive(Debug, Default, Clone)]
pub struct CharacterSet {
    order: Vec<char>,
    seen: HashSet<char>,
}

impl CharacterSet {
    /// Add a character. Returns `false` if it was already there.
    pub fn insert(&mut self, c: char) -> bool {
        if self.seen.insert(c) {
            self.order.push(c);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.seen.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }
}

impl Extend<char> for CharacterSet {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

/// Collect the distinct characters of `lines`.
///
/// Blank lines are skipped and not counted.
/// Returns the set and the number of non-blank lines.
pub fn extract_characters<I, S>(lines: I) -> (CharacterSet, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut characters = CharacterSet::default();
    let mut nb_lines = 0;

    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }

        nb_lines += 1;
        characters.extend(line.chars());

        if nb_lines % PROGRESS_STEP == 0 {
            info!(
                "{} lines read, {} distinct characters",
                nb_lines,
                characters.len()
            );
        }
    }

    (characters, nb_lines)
}
