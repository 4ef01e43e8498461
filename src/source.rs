//! Reading word lists, one entry per line.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{word, Error};

/// Reads and sanitizes every line of `reader`. Blank lines come back as empty strings.
pub fn parse_words<B: BufRead>(reader: B) -> Result<Vec<String>, Error> {
    reader
        .lines()
        .map(|line| -> Result<String, Error> { Ok(word::sanitize(&line?)) })
        .collect()
}

/// Reads and sanitizes the word list at `path`.
pub fn read_words(path: &Path) -> Result<Vec<String>, Error> {
    let file = File::open(path)?;
    let words = parse_words(BufReader::new(file))?;

    log::debug!("Read {} entries from {}", words.len(), path.display());

    Ok(words)
}
