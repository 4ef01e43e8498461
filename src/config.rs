//! Checking the options a puzzle is built from.

use std::path::PathBuf;

use crate::Error;

/// The widest grid allowed, and the width used when none is given.
pub const MAX_COLUMNS: usize = 25;

/// The tallest grid allowed, and the height used when none is given.
pub const MAX_ROWS: usize = 15;

/// The document title used when none is given.
pub const DEFAULT_TITLE: &str = "WORD SEARCH";

/// One thing wrong with the options.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigProblem {
    /// No word list was named.
    #[error("No source file. Specify a source file: -s")]
    MissingSource,

    /// The grid is wider than allowed.
    #[error("Total number of columns must be at most {max} (got {given})")]
    TooManyColumns {
        /// The requested width.
        given: usize,
        /// The widest grid allowed.
        max: usize,
    },

    /// The grid is taller than allowed.
    #[error("Total number of rows must be at most {max} (got {given})")]
    TooManyRows {
        /// The requested height.
        given: usize,
        /// The tallest grid allowed.
        max: usize,
    },
}

/// Raw options as they come from the command line, any of which may be missing.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// The word list to read.
    pub source: Option<PathBuf>,

    /// The directory the document is written to.
    pub dest: Option<PathBuf>,

    /// The number of columns in the grid.
    pub num_columns: Option<usize>,

    /// The number of rows in the grid.
    pub num_rows: Option<usize>,

    /// The heading of the document.
    pub title: Option<String>,
}

/// Options that passed validation, with defaults filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// The word list to read.
    pub source: PathBuf,

    /// The directory the document is written to.
    pub dest: PathBuf,

    /// The number of columns in the grid.
    pub num_columns: usize,

    /// The number of rows in the grid.
    pub num_rows: usize,

    /// The heading of the document.
    pub title: String,
}

impl Options {
    /// Checks every option and either fills in the defaults or reports all the problems at once.
    pub fn validate(self) -> Result<Settings, Error> {
        let mut problems = Vec::new();

        if self.source.is_none() {
            problems.push(ConfigProblem::MissingSource);
        }

        let num_columns = self.num_columns.unwrap_or(MAX_COLUMNS);
        if num_columns > MAX_COLUMNS {
            problems.push(ConfigProblem::TooManyColumns {
                given: num_columns,
                max: MAX_COLUMNS,
            });
        }

        let num_rows = self.num_rows.unwrap_or(MAX_ROWS);
        if num_rows > MAX_ROWS {
            problems.push(ConfigProblem::TooManyRows {
                given: num_rows,
                max: MAX_ROWS,
            });
        }

        match self.source {
            Some(source) if problems.is_empty() => Ok(Settings {
                source,
                dest: self.dest.unwrap_or_else(|| PathBuf::from(".")),
                num_columns,
                num_rows,
                title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            }),
            _ => Err(Error::Configuration(problems)),
        }
    }
}
