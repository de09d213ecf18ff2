/*! Corpus annotation pipeline.

Reads a corpus, resolves the radical of each distinct character and writes:

- the annotated corpus (`dst`),
- the characters with a radical (`dst.found` by default),
- the characters without one (`dst.unresolved` by default).

The resolver dictionary is persisted as soon as every character is resolved.
!*/
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    annotate::{extract_characters, Classifier, CorpusAnnotator},
    error::Error,
    io::{reader::read_corpus, TextWriter},
    resolver::{RadicalResolver, ResolverStats},
};

use super::Pipeline;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationReport {
    /// non-blank lines of the corpus
    pub nb_lines: usize,
    /// lines of the annotated corpus
    pub nb_written: u64,
    pub nb_characters: usize,
    pub nb_found: usize,
    pub nb_unresolved: usize,
    /// `true` if the dictionary file has been rewritten
    pub persisted: bool,
    pub stats: ResolverStats,
}

pub struct Annotation {
    src: PathBuf,
    dst: PathBuf,
    found: PathBuf,
    unresolved: PathBuf,
    annotator: CorpusAnnotator,
    resolver: RadicalResolver,
    drop_blank_lines: bool,
}

/// `dst` with `suffix` appended to its file name.
fn suffixed(dst: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(dst.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

impl Annotation {
    pub fn new(src: PathBuf, dst: PathBuf, resolver: RadicalResolver) -> Self {
        let found = suffixed(&dst, ".found");
        let unresolved = suffixed(&dst, ".unresolved");
        Self {
            src,
            dst,
            found,
            unresolved,
            annotator: CorpusAnnotator::default(),
            resolver,
            drop_blank_lines: false,
        }
    }

    /// Set the found characters table location.
    pub fn found(mut self, found: PathBuf) -> Self {
        self.found = found;
        self
    }

    /// Set the unresolved characters table location.
    pub fn unresolved(mut self, unresolved: PathBuf) -> Self {
        self.unresolved = unresolved;
        self
    }

    pub fn classifier(mut self, classifier: Classifier) -> Self {
        self.annotator = CorpusAnnotator::new(classifier);
        self
    }

    /// Do not write blank corpus lines in the annotated corpus.
    ///
    /// By default they are kept, so that the annotated corpus is line-aligned with the source one.
    pub fn drop_blank_lines(mut self, drop_blank_lines: bool) -> Self {
        self.drop_blank_lines = drop_blank_lines;
        self
    }

    pub fn resolver(&self) -> &RadicalResolver {
        &self.resolver
    }
}

impl Pipeline<AnnotationReport> for Annotation {
    fn run(&mut self) -> Result<AnnotationReport, Error> {
        info!("reading corpus from {:?}", self.src);
        let lines = read_corpus(&self.src)?;

        let (characters, nb_lines) = extract_characters(&lines);
        info!(
            "{} lines, {} distinct characters",
            nb_lines,
            characters.len()
        );

        let (found, unresolved) = self.annotator.resolve_all(&characters, &mut self.resolver);
        info!(
            "{} characters with a radical, {} without",
            found.len(),
            unresolved.len()
        );

        let persisted = self.resolver.persist()?;

        info!("writing annotated corpus to {:?}", self.dst);
        let drop_blank_lines = self.drop_blank_lines;
        let kept = lines
            .iter()
            .filter(|line| !(drop_blank_lines && line.is_empty()));
        let mut writer = TextWriter::new(&self.dst)?;
        writer.write_all(CorpusAnnotator::annotate(kept, &found))?;

        let nb_found = self.annotator.save_found(&self.found, &found)?;
        debug!("{} found characters written to {:?}", nb_found, self.found);
        let nb_unresolved = self
            .annotator
            .save_unresolved(&self.unresolved, &unresolved)?;
        debug!(
            "{} unresolved characters written to {:?}",
            nb_unresolved, self.unresolved
        );

        let stats = self.resolver.stats().clone();
        info!(
            "done: {} cache hits, {} remote hits, {} failed lookups",
            stats.cache_hits(),
            stats.remote_hits(),
            stats.failures()
        );

        Ok(AnnotationReport {
            nb_lines,
            nb_written: writer.nb_lines(),
            nb_characters: characters.len(),
            nb_found: found.len(),
            nb_unresolved: unresolved.len(),
            persisted,
            stats,
        })
    }
}
