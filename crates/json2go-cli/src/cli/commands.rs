//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("json2go")
        .about("Go type declarations from inferred JSON type trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Emit Go declarations for a node forest.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Emit Go type declarations")
        .override_usage(
            "\
  json2go generate [INPUT] [-o <FILE>]
  cat tree.json | json2go generate",
        )
        .after_help(
            r#"EXAMPLES:
  json2go generate tree.json                     # print to stdout
  json2go generate tree.json -o types.go         # write to a file
  json2go generate tree.json --string-pointers   # *string for missing keys
  json2go generate - --indent-spaces 4 < t.json  # spaces instead of tabs"#,
        )
        .arg(input_arg())
        .arg(output_arg())
        .arg(string_pointers_arg())
        .arg(time_as_string_arg())
        .arg(indent_spaces_arg())
        .arg(verbose_arg())
}

/// Validate a node forest without emitting.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a node tree")
        .override_usage(
            "\
  json2go check [INPUT]",
        )
        .after_help(
            r#"EXAMPLES:
  json2go check tree.json         # prints the number of declarations
  cat tree.json | json2go check   # read from stdin"#,
        )
        .arg(input_arg())
        .arg(verbose_arg())
}
