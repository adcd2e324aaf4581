use std::path::PathBuf;

use json2go_lib::parse_forest;

use super::input::{CommandError, exit_with, read_input};

pub struct CheckArgs {
    pub input: Option<PathBuf>,
}

pub fn run(args: CheckArgs) {
    match check(&args) {
        Ok(count) => println!("{count}"),
        Err(err) => exit_with(err),
    }
}

/// Parse and validate the input forest, returning its declaration count.
pub fn check(args: &CheckArgs) -> Result<usize, CommandError> {
    let source = read_input(args.input.as_deref())?;
    let roots = parse_forest(&source)?;
    Ok(roots.len())
}
