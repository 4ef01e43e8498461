//! Places words one at a time and fills the rest of the grid.

use array2d::Array2D;
use rand::Rng;

use crate::{
    direction::{Direction, ReadingOrder},
    placement::{Placement, PlacementMap},
    word, Error,
};

/// Candidate placements tried per grid cell before a word is given up on.
const ATTEMPTS_PER_CELL: usize = 100;

/// Owns the grid being built and the map of everything committed to it.
#[derive(Debug)]
pub struct Compositor {
    num_columns: usize,
    num_rows: usize,
    max_attempts: usize,
    placements: PlacementMap,
}

impl Compositor {
    /// Creates an empty compositor for a grid of the given dimensions.
    pub fn new(num_columns: usize, num_rows: usize) -> Self {
        Self {
            num_columns,
            num_rows,
            max_attempts: Self::default_max_attempts(num_columns, num_rows),
            placements: PlacementMap::new(),
        }
    }

    /// The number of candidates tried for each word unless told otherwise.
    pub fn default_max_attempts(num_columns: usize, num_rows: usize) -> usize {
        num_columns
            .saturating_mul(num_rows)
            .max(1)
            .saturating_mul(ATTEMPTS_PER_CELL)
    }

    /// The number of cells in a grid of the given size, or [`None`] if a grid that big can't be
    /// allocated.
    pub fn grid_area(num_columns: usize, num_rows: usize) -> Option<usize> {
        let area = num_columns.checked_mul(num_rows)?;
        let bytes = area.checked_mul(std::mem::size_of::<Option<char>>())?;

        (bytes <= isize::MAX as usize).then_some(area)
    }

    /// Sets how many candidate placements each word gets.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Everything committed so far.
    pub fn placements(&self) -> &PlacementMap {
        &self.placements
    }

    /// Finds a home for a sanitized `entry` that agrees with every committed word, and commits it.
    ///
    /// Returns the number of candidates it took.
    pub fn place<R: Rng + ?Sized>(&mut self, entry: &str, rng: &mut R) -> Result<usize, Error> {
        let (num_columns, num_rows) = (self.num_columns, self.num_rows);
        let letters = word::grid_letters(entry);
        let len = letters.len();

        let infeasible = || Error::InfeasiblePlacement {
            word: word::display_form(entry),
            length: len,
            num_columns,
            num_rows,
        };

        let directions = Direction::feasible(len, num_columns, num_rows);

        if directions.is_empty() {
            return Err(infeasible());
        }

        for attempt in 1..=self.max_attempts {
            let direction = if directions.len() == Direction::ALL.len() {
                Direction::random(rng)
            } else {
                directions[rng.gen_range(0..directions.len())]
            };
            let order = ReadingOrder::random(rng);
            let begin = direction
                .sample_start(len, num_columns, num_rows, rng)
                .ok_or_else(infeasible)?;

            let candidate = Placement::new(letters.clone(), begin, direction, order);

            if self.placements.collides(&candidate)
                || self.placements.repeats(entry, &candidate)
            {
                continue;
            }

            log::debug!(
                "Placed '{}' {} {:?} at {:?} after {} attempt(s)",
                word::display_form(entry),
                direction,
                order,
                begin,
                attempt
            );

            self.placements.commit(entry.to_string(), candidate);

            return Ok(attempt);
        }

        Err(Error::PlacementExhausted {
            word: word::display_form(entry),
            attempts: self.max_attempts,
        })
    }

    /// Writes every committed letter into a fresh grid and fills all other cells with random
    /// letters from `A` to `Z`.
    ///
    /// The grid is indexed by `(row, column)`.
    pub fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> (Array2D<char>, PlacementMap) {
        let mut pending = Array2D::filled_with(None, self.num_rows, self.num_columns);

        for ((x, y), letter) in self.placements.occupied() {
            pending[(y, x)] = Some(letter);
        }

        let mut cells = pending.elements_row_major_iter();

        let grid = Array2D::filled_by_row_major(
            || match cells.next() {
                Some(&Some(letter)) => letter,
                _ => random_letter(rng),
            },
            self.num_rows,
            self.num_columns,
        );

        (grid, self.placements)
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.gen_range(b'A'..=b'Z'))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn placed_words_stay_in_bounds_and_agree() {
        let words = ["apple", "banana", "cherry", "grape", "lemon", "melon", "peach", "plum"];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut compositor = Compositor::new(12, 10);

            for word in words {
                compositor.place(word, &mut rng).unwrap();
            }

            let placements = compositor.placements();
            assert_eq!(placements.len(), words.len());

            for (word, placement) in placements.entries() {
                assert!(placement.in_bounds(12, 10), "{word} out of bounds");

                for (coord, letter) in placement.cells() {
                    assert_eq!(placements.letter_at(coord), Some(letter));
                }
            }
        }
    }

    #[test]
    fn fill_leaves_only_uppercase_letters() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut compositor = Compositor::new(9, 7);
        compositor.place("hot`dog", &mut rng).unwrap();
        compositor.place("bun", &mut rng).unwrap();

        let (grid, placements) = compositor.fill(&mut rng);

        assert_eq!(grid.num_rows(), 7);
        assert_eq!(grid.num_columns(), 9);
        assert!(grid.elements_row_major_iter().all(|ch| ch.is_ascii_uppercase()));

        for ((x, y), letter) in placements.occupied() {
            assert_eq!(grid[(y, x)], letter);
        }
    }

    #[test]
    fn marker_is_not_placed() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut compositor = Compositor::new(10, 10);
        compositor.place("ice`cream", &mut rng).unwrap();

        let (_, placement) = &compositor.placements().entries()[0];
        assert_eq!(placement.len(), 8);
        assert!(placement.letters().iter().all(|ch| ch.is_ascii_uppercase()));
    }

    #[test]
    fn every_direction_gets_used() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut compositor = Compositor::new(25, 15);

        for _ in 0..40 {
            compositor.place("ab", &mut rng).unwrap();
        }

        let directions: std::collections::HashSet<_> = compositor
            .placements()
            .entries()
            .iter()
            .map(|(_, placement)| placement.direction)
            .collect();
        assert_eq!(directions.len(), 4);
    }

    #[test]
    fn only_feasible_directions_are_used() {
        // Nine letters fit a 10x8 grid horizontally and nowhere else.
        let mut rng = StdRng::seed_from_u64(4);
        let mut compositor = Compositor::new(10, 8);

        for _ in 0..3 {
            compositor.place("abcdefghi", &mut rng).unwrap();
        }

        assert!(compositor
            .placements()
            .entries()
            .iter()
            .all(|(_, placement)| placement.direction == Direction::Horizontal));
    }

    #[test]
    fn repeated_words_get_their_own_cells() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut compositor = Compositor::new(6, 6);
            compositor.place("cat", &mut rng).unwrap();
            compositor.place("cat", &mut rng).unwrap();

            let entries = compositor.placements().entries();
            let mut first = entries[0].1.indices();
            let mut second = entries[1].1.indices();
            first.sort_unstable();
            second.sort_unstable();
            assert_ne!(first, second, "seed {seed}");
            assert!(compositor.placements().occupied().count() >= 5);
        }
    }

    #[test]
    fn oversized_grids() {
        assert_eq!(Compositor::grid_area(25, 15), Some(375));
        assert_eq!(Compositor::grid_area(1 << 40, 1 << 40), None);
        assert_eq!(Compositor::grid_area(1 << 31, 1 << 31), None);
        assert_eq!(Compositor::default_max_attempts(usize::MAX, 3), usize::MAX);
        assert_eq!(Compositor::default_max_attempts(0, 0), 100);
    }

    #[test]
    fn too_long_for_any_direction() {
        let mut compositor = Compositor::new(5, 5);
        let result = compositor.place("abcdef", &mut StdRng::seed_from_u64(0));

        assert!(matches!(
            result,
            Err(Error::InfeasiblePlacement { length: 6, .. })
        ));
        assert!(compositor.placements().is_empty());
    }

    #[test]
    fn gives_up_after_max_attempts() {
        // A 4x1 grid only takes two letter words horizontally at x = 0 or 1, so any two of
        // them share the second cell.
        let mut rng = StdRng::seed_from_u64(2);
        let mut compositor = Compositor::new(4, 1).with_max_attempts(50);
        compositor.place("ab", &mut rng).unwrap();

        match compositor.place("cd", &mut rng) {
            Err(Error::PlacementExhausted { word, attempts }) => {
                assert_eq!(word, "cd");
                assert_eq!(attempts, 50);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(compositor.placements().len(), 1);
    }
}
