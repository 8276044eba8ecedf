use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::WordId;

/// Orientation of a crossword word or the typing cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn toggled(&self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Step delta as (row, col).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// One board position. An unfilled cell is black in a crossword; in a
/// finished word-search grid every cell is filled.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cell {
    pub letter: char,
    pub filled: bool,
    pub number: Option<u32>,
    pub across_word_id: Option<WordId>,
    pub down_word_id: Option<WordId>,
}

impl Cell {
    pub fn empty() -> Self {
        Self {
            letter: ' ',
            filled: false,
            number: None,
            across_word_id: None,
            down_word_id: None,
        }
    }
}

/// The puzzle board: a square arena of cells, stored row-major and indexed
/// by (row, col). Owned exclusively by one puzzle session and rebuilt
/// wholesale when a new session is set up.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::empty(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.size + col]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row * self.size + col]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            Some(self.cell(row, col))
        } else {
            None
        }
    }

    /// The canonical letter at a position, or None when the cell is black
    /// or out of bounds.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.get(row, col)
            .and_then(|cell| cell.filled.then_some(cell.letter))
    }

    /// Iterate cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i / self.size, i % self.size), cell))
    }
}

/// Per-cell display state layered over the base grid.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CellView {
    pub letter: char,
    pub filled: bool,
    pub number: Option<u32>,
    pub selected: bool,
    pub found: bool,
}

/// Read-only grid snapshot handed to the rendering collaborator each frame.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GridView {
    pub size: usize,
    pub cells: Vec<CellView>,
}

impl GridView {
    pub fn cell(&self, row: usize, col: usize) -> &CellView {
        &self.cells[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(10);
        assert_eq!(grid.size(), 10);
        assert!(grid.iter().all(|(_, cell)| !cell.filled));
        assert_eq!(grid.letter_at(0, 0), None);
    }

    #[test]
    fn test_bounds_checks() {
        let grid = Grid::new(5);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 4));
        assert!(!grid.in_bounds(5, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(grid.get(5, 0).is_none());
    }

    #[test]
    fn test_letter_at_requires_filled() {
        let mut grid = Grid::new(5);
        let cell = grid.cell_mut(2, 3);
        cell.letter = 'K';
        cell.filled = true;
        assert_eq!(grid.letter_at(2, 3), Some('K'));
        assert_eq!(grid.letter_at(2, 4), None);
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(Direction::Across.toggled(), Direction::Down);
        assert_eq!(Direction::Down.toggled(), Direction::Across);
    }
}
