//! Writing directions and where a word may start.

use std::{fmt::Display, ops::Range};

use rand::Rng;

/// The axis a word is written along. Combined with a [ReadingOrder] this covers all eight ways a
/// word can run through the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,

    /// Top to bottom along a column.
    Vertical,

    /// Diagonally down and to the right.
    Dexter,

    /// Diagonally up and to the right.
    Sinister,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Dexter,
        Direction::Sinister,
    ];

    /// How far the `(x, y)` coordinate moves between one letter and the next.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Dexter => (1, 1),
            Direction::Sinister => (1, -1),
        }
    }

    /// Returns a random direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// The ranges of start `x` and `y` for which a word of `len` letters stays in the grid, or
    /// [`None`] if no start position works.
    ///
    /// Both ranges keep a one cell margin on the side the word grows towards.
    pub fn start_bounds(
        self,
        len: usize,
        num_columns: usize,
        num_rows: usize,
    ) -> Option<(Range<usize>, Range<usize>)> {
        let (dx, dy) = self.step();

        let x_range = match dx {
            0 => 0..num_columns,
            _ => 0..num_columns.checked_sub(len)?,
        };

        let y_range = match dy {
            0 => 0..num_rows,
            1 => 0..num_rows.checked_sub(len)?,
            _ => len..num_rows,
        };

        (!x_range.is_empty() && !y_range.is_empty()).then_some((x_range, y_range))
    }

    /// Picks a uniformly random start coordinate for a word of `len` letters, or [`None`] if the
    /// word can't fit in this direction at all.
    pub fn sample_start<R: Rng + ?Sized>(
        self,
        len: usize,
        num_columns: usize,
        num_rows: usize,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        let (x_range, y_range) = self.start_bounds(len, num_columns, num_rows)?;

        Some((rng.gen_range(x_range), rng.gen_range(y_range)))
    }

    /// The directions in which a word of `len` letters fits somewhere in the grid.
    pub fn feasible(len: usize, num_columns: usize, num_rows: usize) -> Vec<Direction> {
        Self::ALL
            .into_iter()
            .filter(|direction| {
                direction
                    .start_bounds(len, num_columns, num_rows)
                    .is_some()
            })
            .collect()
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Dexter => "dexter",
            Direction::Sinister => "sinister",
        };

        f.write_str(name)
    }
}

/// Whether a word's letters are laid down in order or back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadingOrder {
    /// First letter at the start coordinate.
    Forward,

    /// Last letter at the start coordinate.
    Reversed,
}

impl ReadingOrder {
    /// Returns a random reading order, either one equally likely.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            ReadingOrder::Forward
        } else {
            ReadingOrder::Reversed
        }
    }
}
