//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub string_pointers: bool,
    pub time_as_string: bool,
    pub indent_spaces: Option<usize>,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            string_pointers: m.get_flag("string_pointers"),
            time_as_string: m.get_flag("time_as_string"),
            indent_spaces: m.get_one::<usize>("indent_spaces").copied(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            string_pointers: p.string_pointers,
            time_as_string: p.time_as_string,
            indent_spaces: p.indent_spaces,
        }
    }
}

pub struct CheckParams {
    pub input: Option<PathBuf>,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self { input: p.input }
    }
}

/// `-` means stdin, same as no input at all.
fn parse_input(m: &ArgMatches) -> Option<PathBuf> {
    m.get_one::<PathBuf>("input")
        .filter(|path| path.as_os_str() != "-")
        .cloned()
}
