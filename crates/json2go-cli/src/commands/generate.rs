use std::path::PathBuf;

use json2go_lib::{Config, Indent, emit_json};
use tracing::info;

use super::input::{CommandError, exit_with, read_input, write_output};

pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub string_pointers: bool,
    pub time_as_string: bool,
    pub indent_spaces: Option<usize>,
}

impl GenerateArgs {
    fn config(&self) -> Config {
        let indent = match self.indent_spaces {
            Some(n) => Indent::Spaces(n),
            None => Indent::Tab,
        };
        Config::new()
            .string_pointers_when_key_missing(self.string_pointers)
            .time_as_str(self.time_as_string)
            .indent(indent)
    }
}

pub fn run(args: GenerateArgs) {
    if let Err(err) = generate(&args) {
        exit_with(err);
    }
}

/// Emit declarations for the input forest and write them out.
pub fn generate(args: &GenerateArgs) -> Result<(), CommandError> {
    let source = read_input(args.input.as_deref())?;
    let output = emit_json(&source, args.config())?;
    write_output(args.output.as_deref(), &output)?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), "wrote declarations");
    }
    Ok(())
}
