//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "bushou", about = "Chinese radical extraction tool.")]
/// Holds every command that is callable by the `bushou` command.
pub enum Bushou {
    #[structopt(about = "Annotate a corpus with character radicals")]
    Annotate(Annotate),
    #[structopt(about = "Get the radical of some characters")]
    Lookup(Lookup),
}

/// Radical sources, shared by every command.
#[derive(Debug, StructOpt)]
pub struct Sources {
    #[structopt(
        parse(from_os_str),
        long = "dict",
        help = "radical dictionary, updated with newly found radicals",
        default_value = "xinhua.csv"
    )]
    pub dict: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "extra-dict",
        help = "read-only radical table, checked before the online dictionary"
    )]
    pub extra_dict: Option<PathBuf>,
    #[structopt(long = "offline", help = "never query the online dictionary")]
    pub offline: bool,
    #[structopt(
        long = "timeout",
        help = "online dictionary timeout, in seconds",
        default_value = "5"
    )]
    pub timeout: u64,
    #[structopt(
        long = "url-template",
        help = "online dictionary url, {} is replaced by the encoded character",
        default_value = "http://hanyu.baidu.com/zici/s?ptype=zici&wd={}"
    )]
    pub url_template: String,
}

#[derive(Debug, StructOpt)]
/// Annotate command and parameters.
///
/// ```sh
/// bushou-annotate 0.1.0
/// Annotate a corpus with character radicals
///
/// USAGE:
///     bushou annotate [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///         --drop-blank-lines    do not copy blank lines in the annotated corpus
///         --full-han            look up every Han character, not only U+4E00..U+9FA5
///         --offline             never query the online dictionary
///
/// OPTIONS:
///         --dict <dict>                    radical dictionary [default: xinhua.csv]
///         --found <found>                  found characters table [default: <dst>.found]
///         --unresolved <unresolved>        unresolved characters table [default: <dst>.unresolved]
///
/// ARGS:
///     <src>    corpus, one sentence per line
///     <dst>    annotated corpus destination
/// ```
pub struct Annotate {
    #[structopt(parse(from_os_str), help = "corpus, one sentence per line")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "annotated corpus destination")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "found",
        help = "found characters table. Default is <dst>.found"
    )]
    pub found: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "unresolved",
        help = "unresolved characters table. Default is <dst>.unresolved"
    )]
    pub unresolved: Option<PathBuf>,
    #[structopt(
        long = "full-han",
        help = "look up every Han character, not only U+4E00..U+9FA5"
    )]
    pub full_han: bool,
    #[structopt(
        long = "drop-blank-lines",
        help = "do not copy blank lines in the annotated corpus"
    )]
    pub drop_blank_lines: bool,
    #[structopt(flatten)]
    pub sources: Sources,
}

#[derive(Debug, StructOpt)]
/// Lookup command and parameters.
pub struct Lookup {
    #[structopt(help = "characters to look up", required = true)]
    pub characters: Vec<String>,
    #[structopt(long = "no-save", help = "do not update the radical dictionary")]
    pub no_save: bool,
    #[structopt(flatten)]
    pub sources: Sources,
}
