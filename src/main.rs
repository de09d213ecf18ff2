//! # Bushou
//!
//! Bushou (部首, radical) annotates Chinese corpora with the radical of each character.
//!
//! Radicals come from a local dictionary file first, then from the online Hanyu dictionary.
//! Radicals found online are added to the local dictionary.
//!
//! ## Getting started
//!
//! ```sh
//! bushou 0.1.0
//! Chinese radical extraction tool.
//!
//! USAGE:
//!     bushou <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     annotate    Annotate a corpus with character radicals
//!     help        Prints this message or the help of the given subcommand(s)
//!     lookup      Get the radical of some characters
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=info bushou annotate giga.txt giga.radical.txt`).

use std::time::Duration;

use bushou::{
    annotate::{Classifier, SENTINEL},
    error::Error,
    lookup::{HanyuLookup, LookupChain, RadicalLookup, TableLookup},
    pipelines::{Annotation, Lookup, Pipeline},
    resolver::RadicalResolver,
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

/// Build the provider chain: extra table first, then the online dictionary.
fn lookup_chain(sources: &cli::Sources) -> Result<Box<dyn RadicalLookup>, Error> {
    let mut chain = LookupChain::default();

    if let Some(extra_dict) = &sources.extra_dict {
        let table = TableLookup::from_path(extra_dict)?;
        info!("using {} radicals from {:?}", table.len(), extra_dict);
        chain.add(Box::new(table));
    }

    if sources.offline {
        info!("offline: the online dictionary will not be queried");
    } else {
        let hanyu = HanyuLookup::with_template(
            &sources.url_template,
            Duration::from_secs(sources.timeout),
        )?;
        chain.add(Box::new(hanyu));
    }

    if chain.is_empty() {
        warn!("no radical provider: characters missing from the dictionary will get {SENTINEL}");
    } else {
        debug!("{} radical provider(s)", chain.len());
    }

    Ok(Box::new(chain))
}

fn run(opt: cli::Bushou) -> Result<(), Error> {
    match opt {
        cli::Bushou::Annotate(a) => {
            let resolver = RadicalResolver::new(&a.sources.dict, lookup_chain(&a.sources)?)?;
            let classifier = if a.full_han {
                Classifier::HanScript
            } else {
                Classifier::Legacy
            };

            let mut p = Annotation::new(a.src, a.dst, resolver)
                .classifier(classifier)
                .drop_blank_lines(a.drop_blank_lines);
            if let Some(found) = a.found {
                p = p.found(found);
            }
            if let Some(unresolved) = a.unresolved {
                p = p.unresolved(unresolved);
            }

            let report = p.run()?;
            debug!("{:#?}", report);
        }

        cli::Bushou::Lookup(l) => {
            let resolver = RadicalResolver::new(&l.sources.dict, lookup_chain(&l.sources)?)?;
            let characters = l.characters.iter().flat_map(|s| s.chars()).collect();

            let mut p = Lookup::new(characters, resolver, !l.no_save);
            for (c, radical) in p.run()? {
                println!("{} {}", c, radical.as_deref().unwrap_or(SENTINEL));
            }
        }
    };
    Ok(())
}

fn main() {
    env_logger::init();

    let opt = cli::Bushou::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("stopping: {:?}", e);
        std::process::exit(1);
    }
}
