//! Reading node forests and writing results.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Failure of a CLI command, printed as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write stdout: {0}")]
    Stdout(io::Error),

    #[error("input is empty")]
    EmptyInput,

    #[error(transparent)]
    Forest(#[from] json2go_lib::Error),
}

/// Read the serialized forest from `path`, or stdin when absent.
pub fn read_input(path: Option<&Path>) -> Result<String, CommandError> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CommandError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CommandError::Stdin)?;
            buf
        }
    };

    debug!(bytes = text.len(), from = ?path, "read input");
    if text.trim().is_empty() {
        return Err(CommandError::EmptyInput);
    }
    Ok(text)
}

/// Write `text` plus a trailing newline to `path`, or stdout when absent.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<(), CommandError> {
    let mut contents = String::with_capacity(text.len() + 1);
    contents.push_str(text);
    if !text.is_empty() {
        contents.push('\n');
    }

    match path {
        Some(path) => fs::write(path, contents).map_err(|source| CommandError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .write_all(contents.as_bytes())
            .map_err(CommandError::Stdout),
    }
}

/// Print the error and exit with status 1.
pub fn exit_with(err: CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
