//! Input resolution and reading.

use std::{
    fs,
    io::{self, ErrorKind, IsTerminal, Read},
};

use crate::{
    error::{Error, Result},
    invocation::Source,
};

/// Read the input source to a string. Exactly one read per run.
pub fn read(source: &Source) -> Result<String> {
    match source {
        Source::File(path) => match fs::read_to_string(path) {
            Ok(contents) => Ok(contents),
            Err(error) if error.kind() == ErrorKind::NotFound => Err(Error::InputNotFound {
                path: path.clone(),
            }),
            Err(error) => Err(Error::InputRead {
                path: path.clone(),
                source: error,
            }),
        },
        Source::Stdin => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .map_err(|error| Error::StdinRead { source: error })?;
            Ok(contents)
        }
    }
}

/// Whether standard input is attached to a terminal.
///
/// When it is and no filename was given, there is nothing to read; the CLI
/// shows the furball and help instead of blocking.
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}
