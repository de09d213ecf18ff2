use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use bushou::annotate::Classifier;
use bushou::dictionary::RadicalDictionary;
use bushou::lookup::{LookupChain, LookupError, RadicalLookup, TableLookup};
use bushou::pipelines::{Annotation, Pipeline};
use bushou::resolver::RadicalResolver;

/// Records asked characters, answers from a table.
struct Recording {
    asked: Rc<RefCell<Vec<char>>>,
    table: TableLookup,
}

impl RadicalLookup for Recording {
    fn lookup(&self, character: char) -> Result<String, LookupError> {
        self.asked.borrow_mut().push(character);
        self.table.lookup(character)
    }
}

struct Unreachable;
impl RadicalLookup for Unreachable {
    fn lookup(&self, character: char) -> Result<String, LookupError> {
        panic!("lookup called for {}", character);
    }
}

fn write_dict(path: &Path, entries: Vec<(char, &str)>) {
    let d: RadicalDictionary = entries.into_iter().collect();
    d.save(path).unwrap();
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn cached_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("corpus.txt");
    let dst = dir.path().join("corpus.radical.txt");
    let dict = dir.path().join("xinhua.csv");

    std::fs::write(&src, "中国\nA国\n").unwrap();
    write_dict(&dict, vec![('中', "丨"), ('国', "囗")]);
    let before = read(&dict);

    let resolver = RadicalResolver::new(&dict, Box::new(Unreachable)).unwrap();
    let report = Annotation::new(src, dst.clone(), resolver).run().unwrap();

    assert_eq!(read(&dst), "中_丨 国_囗\nA_NRA 国_囗\n");
    assert_eq!(report.nb_lines, 2);
    assert_eq!(report.nb_characters, 3);
    assert_eq!(report.nb_found, 2);
    assert_eq!(report.nb_unresolved, 1);
    assert!(!report.persisted);
    assert_eq!(read(&dict), before);

    assert_eq!(
        read(&dir.path().join("corpus.radical.txt.found")),
        "中 丨\n国 囗\n"
    );
    assert_eq!(
        read(&dir.path().join("corpus.radical.txt.unresolved")),
        "A NRA\n"
    );
}

#[test]
fn one_lookup_per_distinct_character() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("corpus.txt");
    let dst = dir.path().join("out.txt");
    let dict = dir.path().join("xinhua.csv");

    std::fs::write(&src, "香江香江\n\n江河\n").unwrap();
    write_dict(&dict, vec![('中', "丨")]);

    let asked = Rc::new(RefCell::new(Vec::new()));
    let remote = Recording {
        asked: asked.clone(),
        table: TableLookup::new(vec![('香', "香"), ('江', "氵")].into_iter().collect()),
    };
    let resolver = RadicalResolver::new(&dict, Box::new(remote)).unwrap();
    let report = Annotation::new(src, dst.clone(), resolver).run().unwrap();

    // first occurrence order
    assert_eq!(*asked.borrow(), vec!['香', '江', '河']);

    // blank line kept in the output
    assert_eq!(
        read(&dst),
        "香_香 江_氵 香_香 江_氵\n\n江_氵 河_NRA\n"
    );
    assert_eq!(report.nb_lines, 2);
    assert_eq!(report.nb_written, 3);
    assert_eq!(report.stats.remote_hits(), 2);
    assert_eq!(report.stats.failures(), 1);

    // learnt radicals are persisted, failures are not
    assert!(report.persisted);
    let reloaded = RadicalDictionary::from_path(&dict).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.get('江'), Some("氵"));
    assert!(!reloaded.contains('河'));
}

#[test]
fn drop_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("corpus.txt");
    let dst = dir.path().join("out.txt");
    let dict = dir.path().join("xinhua.csv");

    std::fs::write(&src, "中\n\n中\n").unwrap();
    write_dict(&dict, vec![('中', "丨")]);

    let resolver = RadicalResolver::new(&dict, Box::new(Unreachable)).unwrap();
    let report = Annotation::new(src, dst.clone(), resolver)
        .drop_blank_lines(true)
        .run()
        .unwrap();

    assert_eq!(read(&dst), "中_丨\n中_丨\n");
    assert_eq!(report.nb_written, 2);
}

#[test]
fn offline_without_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("corpus.txt");
    let dst = dir.path().join("out.txt");
    let found = dir.path().join("found.txt");
    let unresolved = dir.path().join("unresolved.txt");
    let dict = dir.path().join("missing.csv");

    std::fs::write(&src, "中国\n").unwrap();

    let resolver = RadicalResolver::new(&dict, Box::new(LookupChain::default())).unwrap();
    let report = Annotation::new(src, dst.clone(), resolver)
        .found(found.clone())
        .unresolved(unresolved.clone())
        .run()
        .unwrap();

    assert_eq!(read(&dst), "中_NRA 国_NRA\n");
    assert_eq!(read(&found), "");
    assert_eq!(read(&unresolved), "中 NRA\n国 NRA\n");
    assert!(!report.persisted);
    assert!(!dict.exists());
}

#[test]
fn full_han_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("corpus.txt");
    let dst = dir.path().join("out.txt");
    let dict = dir.path().join("xinhua.csv");

    // U+9FA6 is outside the legacy range
    std::fs::write(&src, "\u{9FA6}中\n").unwrap();
    write_dict(&dict, vec![('中', "丨"), ('\u{9FA6}', "口")]);

    let resolver = RadicalResolver::new(&dict, Box::new(Unreachable)).unwrap();
    Annotation::new(src.clone(), dst.clone(), resolver)
        .run()
        .unwrap();
    assert_eq!(read(&dst), "\u{9FA6}_NRA 中_丨\n");

    let resolver = RadicalResolver::new(&dict, Box::new(Unreachable)).unwrap();
    Annotation::new(src, dst.clone(), resolver)
        .classifier(Classifier::HanScript)
        .run()
        .unwrap();
    assert_eq!(read(&dst), "\u{9FA6}_口 中_丨\n");
}

#[test]
fn missing_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = RadicalResolver::with_dictionary(
        RadicalDictionary::default(),
        &dir.path().join("xinhua.csv"),
        Box::new(Unreachable),
    );

    let mut p = Annotation::new(
        dir.path().join("nope.txt"),
        dir.path().join("out.txt"),
        resolver,
    );
    assert!(p.run().is_err());
}
