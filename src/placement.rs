//! Where a word's letters go, and the record of every word committed so far.

use std::collections::HashMap;

use crate::direction::{Direction, ReadingOrder};

/// A word bound to a start coordinate, a [Direction] and a [ReadingOrder].
///
/// Coordinates are `(x, y)`, that is `(column, row)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The coordinate of the first cell written.
    pub begin: (usize, usize),

    /// The axis the letters are written along.
    pub direction: Direction,

    /// Whether the letters are written back to front.
    pub order: ReadingOrder,

    letters: Vec<char>,
}

impl Placement {
    /// Creates a new [Placement] for the given grid letters.
    pub fn new(
        letters: Vec<char>,
        begin: (usize, usize),
        direction: Direction,
        order: ReadingOrder,
    ) -> Self {
        Self {
            begin,
            direction,
            order,
            letters,
        }
    }

    /// The number of cells the word covers.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the word covers no cells at all.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The word's letters as it is spelled, before any reversal.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns all coordinates the word spans across, in the order they are written.
    pub fn indices(&self) -> Vec<(usize, usize)> {
        let (dx, dy) = self.direction.step();

        (0..self.letters.len() as isize)
            .map(|i| {
                (
                    self.begin.0.wrapping_add_signed(dx * i),
                    self.begin.1.wrapping_add_signed(dy * i),
                )
            })
            .collect()
    }

    /// Each coordinate paired with the letter written there.
    pub fn cells(&self) -> Vec<((usize, usize), char)> {
        let mut letters = self.letters.clone();

        if self.order == ReadingOrder::Reversed {
            letters.reverse();
        }

        self.indices().into_iter().zip(letters).collect()
    }

    /// Returns whether every cell of the word lies inside a grid of the given dimensions.
    pub fn in_bounds(&self, num_columns: usize, num_rows: usize) -> bool {
        self.indices()
            .iter()
            .all(|&(x, y)| x < num_columns && y < num_rows)
    }
}

/// Every committed word with its placement, plus the letter claimed at each occupied cell.
#[derive(Clone, Debug, Default)]
pub struct PlacementMap {
    entries: Vec<(String, Placement)>,
    cells: HashMap<(usize, usize), char>,
}

impl PlacementMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `candidate` disagrees with a committed word at any cell they share.
    ///
    /// Every shared cell is checked, so one matching crossing doesn't hide a clash elsewhere.
    pub fn collides(&self, candidate: &Placement) -> bool {
        candidate.cells().iter().any(|(coord, letter)| {
            self.cells
                .get(coord)
                .is_some_and(|existing| existing != letter)
        })
    }

    /// Returns whether `word` is already committed on exactly the cells `candidate` would take,
    /// which would leave one copy in the grid for two entries in the list.
    pub fn repeats(&self, word: &str, candidate: &Placement) -> bool {
        let mut cells = candidate.indices();
        cells.sort_unstable();

        self.entries
            .iter()
            .filter(|(existing, _)| existing == word)
            .any(|(_, placement)| {
                let mut taken = placement.indices();
                taken.sort_unstable();
                taken == cells
            })
    }

    /// Records `placement` as the home of `word`.
    pub fn commit(&mut self, word: String, placement: Placement) {
        debug_assert!(!self.collides(&placement));

        self.cells.extend(placement.cells());
        self.entries.push((word, placement));
    }

    /// The letter claimed at `coord`, if any word covers it.
    pub fn letter_at(&self, coord: (usize, usize)) -> Option<char> {
        self.cells.get(&coord).copied()
    }

    /// All occupied cells with their letters, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = ((usize, usize), char)> + '_ {
        self.cells.iter().map(|(&coord, &letter)| (coord, letter))
    }

    /// The committed words in the order they were placed.
    pub fn entries(&self) -> &[(String, Placement)] {
        &self.entries
    }

    /// The number of committed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(
        word: &str,
        begin: (usize, usize),
        direction: Direction,
        order: ReadingOrder,
    ) -> Placement {
        Placement::new(word.chars().collect(), begin, direction, order)
    }

    #[test]
    fn cells_follow_direction() {
        let span = placement("CAT", (1, 4), Direction::Sinister, ReadingOrder::Forward);
        assert_eq!(span.cells(), vec![((1, 4), 'C'), ((2, 3), 'A'), ((3, 2), 'T')]);

        let span = placement("CAT", (0, 0), Direction::Vertical, ReadingOrder::Reversed);
        assert_eq!(span.cells(), vec![((0, 0), 'T'), ((0, 1), 'A'), ((0, 2), 'C')]);
    }

    #[test]
    fn bounds_check() {
        let span = placement("DOG", (7, 7), Direction::Dexter, ReadingOrder::Forward);
        assert!(span.in_bounds(10, 10));
        assert!(!span.in_bounds(9, 10));

        let span = placement("DOG", (0, 1), Direction::Sinister, ReadingOrder::Forward);
        assert!(!span.in_bounds(10, 10));
    }

    #[test]
    fn matching_crossing_is_allowed() {
        let mut map = PlacementMap::new();
        map.commit(
            String::from("cat"),
            placement("CAT", (0, 0), Direction::Horizontal, ReadingOrder::Forward),
        );

        let crossing = placement("ART", (1, 0), Direction::Vertical, ReadingOrder::Forward);
        assert!(!map.collides(&crossing));

        map.commit(String::from("art"), crossing);
        assert_eq!(map.len(), 2);
        assert_eq!(map.letter_at((1, 0)), Some('A'));
        assert_eq!(map.occupied().count(), 5);
    }

    #[test]
    fn mismatch_is_rejected() {
        let mut map = PlacementMap::new();
        map.commit(
            String::from("cat"),
            placement("CAT", (0, 0), Direction::Horizontal, ReadingOrder::Forward),
        );

        let clash = placement("DOG", (1, 0), Direction::Vertical, ReadingOrder::Forward);
        assert!(map.collides(&clash));
    }

    #[test]
    fn later_mismatch_is_not_hidden_by_earlier_match() {
        let mut map = PlacementMap::new();
        map.commit(
            String::from("cab"),
            placement("CAB", (0, 0), Direction::Horizontal, ReadingOrder::Forward),
        );

        // The first two cells agree, the third lands on the B with a different letter.
        let candidate = placement("CAT", (0, 0), Direction::Horizontal, ReadingOrder::Forward);
        assert!(map.collides(&candidate));
    }

    #[test]
    fn repeated_word_on_same_cells() {
        let mut map = PlacementMap::new();
        map.commit(
            String::from("cat"),
            placement("CAT", (0, 0), Direction::Horizontal, ReadingOrder::Forward),
        );

        let twin = placement("CAT", (0, 0), Direction::Horizontal, ReadingOrder::Forward);
        assert!(!map.collides(&twin));
        assert!(map.repeats("cat", &twin));
        assert!(!map.repeats("dog", &twin));

        let elsewhere = placement("CAT", (0, 1), Direction::Horizontal, ReadingOrder::Forward);
        assert!(!map.repeats("cat", &elsewhere));

        // Same letters over the same cells, written from the other end.
        let map = {
            let mut map = PlacementMap::new();
            map.commit(
                String::from("aha"),
                placement("AHA", (0, 0), Direction::Vertical, ReadingOrder::Forward),
            );
            map
        };
        let backwards = placement("AHA", (0, 0), Direction::Vertical, ReadingOrder::Reversed);
        assert!(map.repeats("aha", &backwards));
    }

    #[test]
    fn no_overlap_never_collides() {
        let mut map = PlacementMap::new();
        assert!(map.is_empty());
        map.commit(
            String::from("cat"),
            placement("CAT", (0, 0), Direction::Horizontal, ReadingOrder::Forward),
        );

        let apart = placement("DOG", (0, 5), Direction::Dexter, ReadingOrder::Reversed);
        assert!(!map.collides(&apart));
    }
}
