use atm::Result;

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

#[derive(Debug)]
pub struct InputArgs {
    pub requests: PathBuf,
    pub inventory: Option<PathBuf>,
}

/// Parses the input arguments: a requests file, optionally followed by an inventory file
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = env::args().skip(1);

    let requests = args.next().ok_or_else(|| {
        InputArgsError::Parse("First argument must be the requests file.".to_string())
    })?;

    let inventory = args.next();

    if args.next().is_some() {
        Err(InputArgsError::Parse(
            "Expected at most two arguments: <requests.csv> [inventory.csv]".to_string(),
        ))?
    }

    let requests = canonicalize(requests)?;
    let inventory = inventory.map(canonicalize).transpose()?;

    return Ok(InputArgs {
        requests,
        inventory,
    });
}

fn canonicalize(filename: String) -> Result<PathBuf> {
    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}
