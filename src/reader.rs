use bank::Result;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

/// Operator input comes from the script file when one is given, stdin otherwise
pub fn build_input_reader(filepath: Option<PathBuf>) -> Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = match filepath {
        Some(filepath) => Box::new(BufReader::new(File::open(filepath)?)),
        None => Box::new(io::stdin().lock()),
    };

    return Ok(reader);
}
