#![warn(missing_docs)]

//! # Word search builder
//!
//! Hides a list of words in a grid of letters, each running along one of four directions either
//! forwards or backwards, then fills every other cell with random letters.
//!
//! Words are cleaned with [`word::sanitize`], checked with [`word::check_words`] and handed to
//! [`WordSearch::new`]. The finished puzzle can be written out with [`render::write_html`].

use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub mod compositor;
pub mod config;
pub mod direction;
pub mod logging;
pub mod placement;
pub mod render;
pub mod source;
pub mod word;

pub use compositor::Compositor;
pub use config::{ConfigProblem, Options, Settings};
pub use direction::{Direction, ReadingOrder};
pub use placement::{Placement, PlacementMap};
pub use word::{AbortOnRejected, DropRejected, Rejection, RejectionPolicy, Verdict};

/// An error that happened while building the word search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The options were unusable. Every problem found is listed.
    #[error("{}", join_problems(.0))]
    Configuration(Vec<ConfigProblem>),

    /// A word couldn't be used and the caller chose not to go on without it.
    #[error("'{word}' {reason}")]
    WordRejected {
        /// The word, with spaces restored.
        word: String,
        /// Why the word was rejected.
        reason: Rejection,
    },

    /// There are more words than the grid has room for.
    #[error("The number of words in the list ({count}) exceeds the number allowed ({max})")]
    CapacityExceeded {
        /// How many words were given.
        count: usize,
        /// The most the grid can hold.
        max: usize,
    },

    /// The grid has more cells than can be counted or allocated.
    #[error("A {num_columns}x{num_rows} grid is too large")]
    GridTooLarge {
        /// Width of the grid.
        num_columns: usize,
        /// Height of the grid.
        num_rows: usize,
    },

    /// A word can't be written in any direction on the grid.
    #[error("'{word}' ({length} letters) doesn't fit anywhere in a {num_columns}x{num_rows} grid")]
    InfeasiblePlacement {
        /// The word, with spaces restored.
        word: String,
        /// The number of letters that go into the grid.
        length: usize,
        /// Width of the grid.
        num_columns: usize,
        /// Height of the grid.
        num_rows: usize,
    },

    /// Every candidate placement for a word clashed with words already placed.
    #[error("Couldn't place '{word}' after {attempts} attempts; try a bigger grid or fewer words")]
    PlacementExhausted {
        /// The word, with spaces restored.
        word: String,
        /// How many candidates were tried.
        attempts: usize,
    },

    /// Reading the word list or writing the document failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join_problems(problems: &[ConfigProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The configuration for the word search. See [`WordSearch::new`] for details.
///
/// [`WordSearch::new`]: struct.WordSearch.html#method.new
#[derive(Debug)]
pub struct WordSearchConfig<'a> {
    /// The number of rows.
    pub num_rows: usize,

    /// The number of columns.
    pub num_columns: usize,

    /// The sanitized words that will appear in the word search, in order.
    pub words: &'a [String],

    /// How many candidate placements each word gets before giving up. Defaults to
    /// [`Compositor::default_max_attempts`].
    pub max_attempts: Option<usize>,
}

/// A word search object that contains a grid of characters and a list of each word and their positions within the grid.
#[derive(Debug)]
pub struct WordSearch {
    grid: Array2D<char>,
    words: Vec<String>,
    placements: PlacementMap,
}

impl WordSearch {
    /// Creates and generates a new word search with the specified configuration, or returns an error if the word search can't be created.
    ///
    /// Every word must already pass [`word::validate`] and the list must fit within
    /// [`word::capacity`]; nothing is placed otherwise. Words are placed in order, each at a random
    /// spot that doesn't clash with the words before it, and the remaining cells get random
    /// letters from `A` to `Z`.
    pub fn new(config: &WordSearchConfig<'_>) -> Result<Self, Error> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Like [`WordSearch::new`], but the same seed always gives the same puzzle.
    pub fn with_seed(config: &WordSearchConfig<'_>, seed: u64) -> Result<Self, Error> {
        Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Like [`WordSearch::new`], drawing every random choice from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        config: &WordSearchConfig<'_>,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let (num_columns, num_rows) = (config.num_columns, config.num_rows);

        if Compositor::grid_area(num_columns, num_rows).is_none() {
            return Err(Error::GridTooLarge {
                num_columns,
                num_rows,
            });
        }

        for entry in config.words {
            word::validate(entry, num_columns, num_rows).map_err(|reason| Error::WordRejected {
                word: word::display_form(entry),
                reason,
            })?;
        }

        word::check_capacity(config.words.len(), num_columns, num_rows)?;

        let mut compositor = Compositor::new(num_columns, num_rows);
        if let Some(max_attempts) = config.max_attempts {
            compositor = compositor.with_max_attempts(max_attempts);
        }

        let mut attempts = 0;
        for entry in config.words {
            attempts += compositor.place(entry, rng)?;
        }

        log::info!(
            "Placed {} words in a {}x{} grid ({} attempts)",
            config.words.len(),
            num_columns,
            num_rows,
            attempts
        );

        let (grid, placements) = compositor.fill(rng);
        let words = config
            .words
            .iter()
            .map(|entry| word::display_form(entry))
            .collect();

        Ok(Self {
            grid,
            words,
            placements,
        })
    }

    /// The number of rows in the word search grid.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// The number of columns in the word search grid.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Provides a reference to the inner word search grid, indexed by `(row, column)`.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the character at the specified coordinate, returning [`Option::None`] if the coordinates are out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row, column).copied()
    }

    /// The hidden words in their original order, with spaces restored.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Each sanitized word paired with where it sits in the grid. Placement coordinates are
    /// `(x, y)`, that is `(column, row)`.
    pub fn placements(&self) -> &[(String, Placement)] {
        self.placements.entries()
    }

    /// The full record of occupied cells.
    pub fn placement_map(&self) -> &PlacementMap {
        &self.placements
    }
}

impl Index<(usize, usize)> for WordSearch {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for WordSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.words.iter();

        for row in self.grid.rows_iter() {
            for &ch in row {
                write!(f, "{} ", ch)?;
            }

            writeln!(f, "| {}", words_iter.next().map_or("", String::as_str))?;
        }

        // Words that didn't get a row of their own
        for word in words_iter {
            writeln!(f, "{:width$}| {}", "", word, width = self.num_columns() * 2)?;
        }

        Ok(())
    }
}
