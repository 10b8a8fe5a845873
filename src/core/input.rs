//! Reading a response from a file or stdin.

use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
}

const BOM: char = '\u{feff}';

/// Read the whole response. `None` or `-` reads stdin. A leading BOM is dropped.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    let content = match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).map_err(|source| InputError::File {
                path: p.display().to_string(),
                source,
            })?
        }
        _ => io::read_to_string(io::stdin()).map_err(InputError::Stdin)?,
    };
    Ok(match content.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => content,
    })
}
