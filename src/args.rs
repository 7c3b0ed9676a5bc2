use bank::Result;

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments. The only, optional, argument is a script file to read operator
/// input from instead of stdin.
pub fn parse_input_arg() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);

    let filename = match args.next() {
        Some(filename) => filename,
        None => return Ok(None),
    };

    if args.next().is_some() {
        Err(InputArgsError::Parse("Expected at most one argument: the script file.".to_string()))?
    }

    let path = fs::canonicalize(&filename)
        .with_context(|| InputArgsError::FileNotFound(filename.clone()))?;

    Ok(Some(path))
}
