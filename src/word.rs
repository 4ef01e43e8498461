//! Cleaning and validation of the raw words that go into a puzzle.

use crate::Error;

/// Stands in for a space inside a multi-word entry, so that every entry is one contiguous token.
pub const SPACE_MARKER: char = '`';

/// Characters trimmed from both ends of a raw entry after whitespace.
const TRIMMED_PUNCTUATION: [char; 2] = [',', ';'];

/// How many cells narrower than the grid's smaller side a word must be.
const LENGTH_MARGIN: usize = 3;

/// Why a single word can't be used in the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The word has more letters than the grid allows.
    #[error("is too long ({length} letters, at most {max} fit)")]
    TooLong {
        /// Length of the word, counting the space marker.
        length: usize,
        /// The longest length allowed for the grid.
        max: usize,
    },

    /// The word contains something other than letters and spaces.
    #[error("contains illegal characters. Only letters are allowed")]
    IllegalCharacters,
}

/// What a caller wants done with a rejected word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Leave the word out and carry on with the rest of the list.
    Drop,

    /// Give up on the whole puzzle.
    Abort,
}

/// Decides what happens to a word that failed validation.
///
/// The word passed to [`RejectionPolicy::decide`] is in display form, with spaces restored.
pub trait RejectionPolicy {
    /// Returns the verdict for `word`, which was rejected for `rejection`.
    fn decide(&mut self, word: &str, rejection: &Rejection) -> Verdict;
}

impl<F> RejectionPolicy for F
where
    F: FnMut(&str, &Rejection) -> Verdict,
{
    fn decide(&mut self, word: &str, rejection: &Rejection) -> Verdict {
        self(word, rejection)
    }
}

/// Drops every rejected word.
#[derive(Clone, Copy, Debug, Default)]
pub struct DropRejected;

impl RejectionPolicy for DropRejected {
    fn decide(&mut self, _word: &str, _rejection: &Rejection) -> Verdict {
        Verdict::Drop
    }
}

/// Aborts on the first rejected word.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbortOnRejected;

impl RejectionPolicy for AbortOnRejected {
    fn decide(&mut self, _word: &str, _rejection: &Rejection) -> Verdict {
        Verdict::Abort
    }
}

/// Cleans up a raw entry: trims whitespace and stray commas or semicolons from the ends, then
/// replaces inner spaces with [`SPACE_MARKER`].
pub fn sanitize(raw: &str) -> String {
    raw.trim()
        .trim_matches(TRIMMED_PUNCTUATION[0])
        .trim_matches(TRIMMED_PUNCTUATION[1])
        .replace(' ', &SPACE_MARKER.to_string())
}

/// Turns a sanitized word back into the form shown to a reader.
pub fn display_form(word: &str) -> String {
    word.replace(SPACE_MARKER, " ")
}

/// The letters of a sanitized word that actually go into the grid, uppercased.
pub fn grid_letters(word: &str) -> Vec<char> {
    word.chars()
        .filter(|&ch| ch != SPACE_MARKER)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// The longest word that fits a grid of the given size.
pub fn max_word_length(num_columns: usize, num_rows: usize) -> usize {
    num_columns.min(num_rows).saturating_sub(LENGTH_MARGIN)
}

/// The most words a grid of the given size may hold, or [`None`] if the grid is too big to count.
pub fn capacity(num_columns: usize, num_rows: usize) -> Option<usize> {
    num_columns
        .checked_mul(num_rows)?
        .checked_mul(3)
        .map(|cells| cells / 8)
}

/// Classifies a sanitized word, without deciding what to do about it.
pub fn validate(word: &str, num_columns: usize, num_rows: usize) -> Result<(), Rejection> {
    let length = word.chars().count();
    let max = max_word_length(num_columns, num_rows);

    if length > max {
        return Err(Rejection::TooLong { length, max });
    }

    let mut letters = word.chars().filter(|&ch| ch != SPACE_MARKER).peekable();

    if letters.peek().is_none() || !letters.all(|ch| ch.is_ascii_alphabetic()) {
        return Err(Rejection::IllegalCharacters);
    }

    Ok(())
}

/// Fails with [`Error::CapacityExceeded`] when there are too many words for the grid.
pub fn check_capacity(count: usize, num_columns: usize, num_rows: usize) -> Result<(), Error> {
    let max = capacity(num_columns, num_rows).ok_or(Error::GridTooLarge {
        num_columns,
        num_rows,
    })?;

    if count > max {
        return Err(Error::CapacityExceeded { count, max });
    }

    Ok(())
}

/// Validates a list of sanitized words, asking `policy` about each one that fails.
///
/// Empty entries are skipped without consulting the policy. The surviving words keep their order.
/// Once every word has been classified the list as a whole is checked against the grid's
/// [`capacity`].
pub fn check_words<P>(
    words: &[String],
    num_columns: usize,
    num_rows: usize,
    policy: &mut P,
) -> Result<Vec<String>, Error>
where
    P: RejectionPolicy + ?Sized,
{
    let mut accepted = Vec::with_capacity(words.len());

    for word in words.iter().filter(|word| !word.is_empty()) {
        match validate(word, num_columns, num_rows) {
            Ok(()) => accepted.push(word.clone()),
            Err(reason) => {
                let shown = display_form(word);

                match policy.decide(&shown, &reason) {
                    Verdict::Drop => log::info!("Dropped '{}': {}", shown, reason),
                    Verdict::Abort => return Err(Error::WordRejected { word: shown, reason }),
                }
            }
        }
    }

    check_capacity(accepted.len(), num_columns, num_rows)?;

    Ok(accepted)
}
