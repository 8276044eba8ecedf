use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Direction;

/// Words and cells are referenced by integer id / array index, never by
/// direct reference.
pub type WordId = u32;

/// A word with its clue, as supplied by the content collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordDefinition {
    pub id: WordId,
    pub word: String,
    pub clue: String,
}

/// A word located on a crossword grid.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlacedWord {
    pub id: WordId,
    pub number: u32,
    pub word: String,
    pub clue: String,
    pub direction: Direction,
    pub anchor_row: usize,
    pub anchor_col: usize,
    pub solved: bool,
}

impl PlacedWord {
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Grid coordinates covered by this word, anchor first.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        (0..self.len())
            .map(|i| {
                (
                    (self.anchor_row as i32 + dr * i as i32) as usize,
                    (self.anchor_col as i32 + dc * i as i32) as usize,
                )
            })
            .collect()
    }
}

/// The four directions a word-search word may run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SearchDirection {
    Right,
    Down,
    DiagDownRight,
    DiagDownLeft,
}

impl SearchDirection {
    pub const ALL: [SearchDirection; 4] = [
        SearchDirection::Right,
        SearchDirection::Down,
        SearchDirection::DiagDownRight,
        SearchDirection::DiagDownLeft,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            SearchDirection::Right => (0, 1),
            SearchDirection::Down => (1, 0),
            SearchDirection::DiagDownRight => (1, 1),
            SearchDirection::DiagDownLeft => (1, -1),
        }
    }
}

/// A word located on a word-search grid.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchPlacement {
    pub id: WordId,
    pub word: String,
    pub origin_row: usize,
    pub origin_col: usize,
    pub direction: SearchDirection,
    pub solved: bool,
}

impl SearchPlacement {
    /// Grid coordinates covered by this word, origin first.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        (0..self.word.chars().count())
            .map(|i| {
                (
                    (self.origin_row as i32 + dr * i as i32) as usize,
                    (self.origin_col as i32 + dc * i as i32) as usize,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_word_cells() {
        let word = PlacedWord {
            id: 1,
            number: 1,
            word: "CHAGI".to_string(),
            clue: "Kick".to_string(),
            direction: Direction::Across,
            anchor_row: 3,
            anchor_col: 2,
            solved: false,
        };

        assert_eq!(
            word.cells(),
            vec![(3, 2), (3, 3), (3, 4), (3, 5), (3, 6)]
        );
    }

    #[test]
    fn test_search_placement_diagonal_cells() {
        let placement = SearchPlacement {
            id: 7,
            word: "KICK".to_string(),
            origin_row: 1,
            origin_col: 5,
            direction: SearchDirection::DiagDownLeft,
            solved: false,
        };

        assert_eq!(placement.cells(), vec![(1, 5), (2, 4), (3, 3), (4, 2)]);
    }
}
