//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Serialized node forest (positional, `-` for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Node tree JSON file (reads stdin when absent or '-')")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write declarations to FILE instead of stdout")
}

/// Pointer fields for missing string keys (--string-pointers).
pub fn string_pointers_arg() -> Arg {
    Arg::new("string_pointers")
        .long("string-pointers")
        .action(ArgAction::SetTrue)
        .help("Declare non-required string fields as *string")
}

/// Timestamps as plain strings (--time-as-string).
pub fn time_as_string_arg() -> Arg {
    Arg::new("time_as_string")
        .long("time-as-string")
        .action(ArgAction::SetTrue)
        .help("Declare timestamps as string instead of time.Time")
}

/// Space indentation (--indent-spaces).
pub fn indent_spaces_arg() -> Arg {
    Arg::new("indent_spaces")
        .long("indent-spaces")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Indent with N spaces instead of tabs")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
