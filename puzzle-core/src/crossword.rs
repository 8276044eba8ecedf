use std::cmp::Reverse;

use puzzle_types::{Direction, Grid, PlacedWord, WordDefinition};

use crate::WordList;

/// Output of one crossword construction pass. Words that could not be
/// placed are dropped from the puzzle; they are reported here so a host can
/// warn, but the builder itself raises no error.
#[derive(Debug, Clone)]
pub struct CrosswordBuild {
    pub grid: Grid,
    pub words: Vec<PlacedWord>,
    pub dropped: Vec<WordDefinition>,
}

/// Single-pass constructive crossword builder. Deterministic for a fixed
/// input order; makes no attempt at globally optimal packing and never
/// backtracks once a word is committed.
pub struct CrosswordGridBuilder {
    size: usize,
}

impl CrosswordGridBuilder {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn build(&self, list: &WordList) -> CrosswordBuild {
        let mut grid = Grid::new(self.size);
        let mut words: Vec<PlacedWord> = Vec::new();
        let mut dropped: Vec<WordDefinition> = Vec::new();
        let mut next_number: u32 = 1;

        // Longest first; stable on ties so input order breaks them.
        let mut defs: Vec<&WordDefinition> = list.entries().iter().collect();
        defs.sort_by_key(|def| Reverse(def.word.chars().count()));

        for def in defs {
            let chars: Vec<char> = def.word.chars().collect();

            let placement = if words.is_empty() {
                self.centered(&chars)
            } else {
                self.find_intersecting(&grid, &chars)
                    .or_else(|| self.find_disconnected(&grid, &chars))
            };

            match placement {
                Some((row, col, direction)) => {
                    let placed =
                        Self::commit(&mut grid, &mut next_number, def, &chars, row, col, direction);
                    tracing::debug!(
                        word = %placed.word,
                        number = placed.number,
                        row,
                        col,
                        ?direction,
                        "placed crossword word"
                    );
                    words.push(placed);
                }
                None => {
                    tracing::debug!(word = %def.word, "no legal placement, dropping word");
                    dropped.push(def.clone());
                }
            }
        }

        CrosswordBuild { grid, words, dropped }
    }

    /// First word: horizontal, centered.
    fn centered(&self, chars: &[char]) -> Option<(usize, usize, Direction)> {
        if chars.len() > self.size {
            return None;
        }
        let row = self.size / 2;
        let col = (self.size - chars.len()) / 2;
        Some((row, col, Direction::Across))
    }

    /// Scan the word's letters in order, and for each one scan the grid
    /// row-major for a matching filled cell; try placing perpendicular to
    /// the word that owns the matched cell, with the matched letter landing
    /// on it. First legal placement wins.
    fn find_intersecting(&self, grid: &Grid, chars: &[char]) -> Option<(usize, usize, Direction)> {
        for (i, &ch) in chars.iter().enumerate() {
            for row in 0..self.size {
                for col in 0..self.size {
                    let cell = grid.cell(row, col);
                    if !cell.filled || cell.letter != ch {
                        continue;
                    }
                    let direction = match (cell.across_word_id, cell.down_word_id) {
                        (Some(_), None) => Direction::Down,
                        (None, Some(_)) => Direction::Across,
                        // Already an intersection of two words; a third
                        // cannot pass through.
                        _ => continue,
                    };
                    let (dr, dc) = direction.delta();
                    let anchor_row = row as i32 - dr * i as i32;
                    let anchor_col = col as i32 - dc * i as i32;
                    if self.is_legal(grid, chars, anchor_row, anchor_col, direction) {
                        return Some((anchor_row as usize, anchor_col as usize, direction));
                    }
                }
            }
        }
        None
    }

    /// Fallback: first grid position, row-major, where the word fits in
    /// either orientation.
    fn find_disconnected(&self, grid: &Grid, chars: &[char]) -> Option<(usize, usize, Direction)> {
        for row in 0..self.size {
            for col in 0..self.size {
                for direction in [Direction::Across, Direction::Down] {
                    if self.is_legal(grid, chars, row as i32, col as i32, direction) {
                        return Some((row, col, direction));
                    }
                }
            }
        }
        None
    }

    /// A placement is legal when the whole path is in bounds, every path
    /// cell is empty or already holds the identical letter (crossing, not
    /// running along, any existing word), every non-intersecting position
    /// has empty perpendicular neighbors, and the cells immediately before
    /// the start and after the end are empty. The adjacency rules keep
    /// separate words from fusing into accidental longer ones.
    fn is_legal(
        &self,
        grid: &Grid,
        chars: &[char],
        anchor_row: i32,
        anchor_col: i32,
        direction: Direction,
    ) -> bool {
        let (dr, dc) = direction.delta();
        let len = chars.len() as i32;

        let occupied = |row: i32, col: i32| -> bool {
            grid.in_bounds(row, col) && grid.cell(row as usize, col as usize).filled
        };

        if occupied(anchor_row - dr, anchor_col - dc) {
            return false;
        }
        if occupied(anchor_row + dr * len, anchor_col + dc * len) {
            return false;
        }

        for (i, &ch) in chars.iter().enumerate() {
            let row = anchor_row + dr * i as i32;
            let col = anchor_col + dc * i as i32;
            if !grid.in_bounds(row, col) {
                return false;
            }
            let cell = grid.cell(row as usize, col as usize);
            if cell.filled {
                if cell.letter != ch {
                    return false;
                }
                let parallel_owner = match direction {
                    Direction::Across => cell.across_word_id,
                    Direction::Down => cell.down_word_id,
                };
                if parallel_owner.is_some() {
                    return false;
                }
            } else {
                // Perpendicular neighbors must be clear at non-intersections.
                if occupied(row + dc, col + dr) || occupied(row - dc, col - dr) {
                    return false;
                }
            }
        }

        true
    }

    /// Write the word into the grid and assign its clue number. A cell
    /// keeps the number it received when the first word started there.
    fn commit(
        grid: &mut Grid,
        next_number: &mut u32,
        def: &WordDefinition,
        chars: &[char],
        anchor_row: usize,
        anchor_col: usize,
        direction: Direction,
    ) -> PlacedWord {
        let number = match grid.cell(anchor_row, anchor_col).number {
            Some(existing) => existing,
            None => {
                let assigned = *next_number;
                *next_number += 1;
                assigned
            }
        };
        grid.cell_mut(anchor_row, anchor_col).number = Some(number);

        let (dr, dc) = direction.delta();
        for (i, &ch) in chars.iter().enumerate() {
            let row = (anchor_row as i32 + dr * i as i32) as usize;
            let col = (anchor_col as i32 + dc * i as i32) as usize;
            let cell = grid.cell_mut(row, col);
            cell.letter = ch;
            cell.filled = true;
            match direction {
                Direction::Across => cell.across_word_id = Some(def.id),
                Direction::Down => cell.down_word_id = Some(def.id),
            }
        }

        PlacedWord {
            id: def.id,
            number,
            word: def.word.clone(),
            clue: def.clue.clone(),
            direction,
            anchor_row,
            anchor_col,
            solved: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_types::WordId;

    fn def(id: WordId, word: &str) -> WordDefinition {
        WordDefinition {
            id,
            word: word.to_string(),
            clue: String::new(),
        }
    }

    fn build(words: &[(WordId, &str)], size: usize) -> CrosswordBuild {
        let defs: Vec<WordDefinition> = words.iter().map(|&(id, w)| def(id, w)).collect();
        CrosswordGridBuilder::new(size).build(&WordList::new(&defs, size))
    }

    #[test]
    fn test_first_word_centered_across() {
        let build = build(&[(1, "chagi")], 10);
        assert_eq!(build.words.len(), 1);
        let placed = &build.words[0];
        assert_eq!(placed.direction, Direction::Across);
        assert_eq!(placed.anchor_row, 5);
        assert_eq!(placed.anchor_col, 2);
        assert_eq!(placed.number, 1);
        assert_eq!(build.grid.letter_at(5, 2), Some('C'));
        assert_eq!(build.grid.letter_at(5, 6), Some('I'));
    }

    #[test]
    fn test_two_words_intersect_on_shared_letter() {
        let build = build(&[(1, "chagi"), (2, "makgi")], 10);
        assert_eq!(build.words.len(), 2);
        assert!(build.dropped.is_empty());

        let across = build.words.iter().find(|w| w.direction == Direction::Across);
        let down = build.words.iter().find(|w| w.direction == Direction::Down);
        assert!(across.is_some() && down.is_some());

        let across_cells = across.unwrap().cells();
        let down_cells = down.unwrap().cells();
        let shared: Vec<_> = across_cells
            .iter()
            .filter(|cell| down_cells.contains(cell))
            .collect();
        assert_eq!(shared.len(), 1);

        // The letter-scan tries MAKGI's letters in order; 'A' is the first
        // one present in CHAGI, so the crossing lands on the A cell.
        let &(row, col) = shared[0];
        assert_eq!(build.grid.letter_at(row, col), Some('A'));
    }

    #[test]
    fn test_shared_cells_agree_on_letters() {
        let build = build(
            &[(1, "taekwondo"), (2, "dojang"), (3, "makgi"), (4, "chagi"), (5, "kick")],
            15,
        );
        for word in &build.words {
            for (&(row, col), ch) in word.cells().iter().zip(word.word.chars()) {
                assert_eq!(build.grid.letter_at(row, col), Some(ch));
            }
        }
    }

    #[test]
    fn test_no_orphan_cells() {
        let build = build(&[(1, "taekwondo"), (2, "dojang"), (3, "makgi"), (4, "kick")], 15);
        assert!(build.words.len() >= 2);
        for ((_, _), cell) in build.grid.iter() {
            if cell.filled {
                assert!(cell.across_word_id.is_some() || cell.down_word_id.is_some());
            }
        }
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let words = [(1, "taekwondo"), (2, "dojang"), (3, "makgi"), (4, "chagi")];
        let first = build(&words, 15);
        let second = build(&words, 15);
        assert_eq!(first.words.len(), second.words.len());
        for (a, b) in first.words.iter().zip(second.words.iter()) {
            assert_eq!((a.id, a.anchor_row, a.anchor_col, a.direction, a.number),
                       (b.id, b.anchor_row, b.anchor_col, b.direction, b.number));
        }
    }

    #[test]
    fn test_longest_word_placed_first_stable_ties() {
        // Same length: input order decides which becomes word number 1.
        let build = build(&[(1, "makgi"), (2, "chagi")], 10);
        assert_eq!(build.words[0].id, 1);
        assert_eq!(build.words[0].number, 1);
    }

    #[test]
    fn test_unshareable_word_uses_disconnected_fallback() {
        // No common letters, so the second word cannot intersect.
        let build = build(&[(1, "chagi"), (2, "do")], 10);
        assert_eq!(build.words.len(), 2);
        let second = build.words.iter().find(|w| w.id == 2).unwrap();
        let first_cells = build.words.iter().find(|w| w.id == 1).unwrap().cells();
        assert!(second.cells().iter().all(|cell| !first_cells.contains(cell)));
    }

    #[test]
    fn test_word_longer_than_grid_is_dropped() {
        let build = build(&[(1, "chagi"), (2, "taekwondospirit")], 10);
        // The oversized word never survives normalization against the grid.
        assert_eq!(build.words.len(), 1);
    }

    #[test]
    fn test_unplaceable_word_is_dropped_not_an_error() {
        // A tiny grid fills up fast; later words that no longer fit are
        // reported in `dropped`.
        let build = build(&[(1, "abc"), (2, "cab"), (3, "bca"), (4, "acb"), (5, "bac")], 3);
        assert_eq!(build.words.len() + build.dropped.len(), 5);
        assert!(!build.dropped.is_empty());
    }

    #[test]
    fn test_number_reused_when_words_share_a_start_cell() {
        let mut grid = Grid::new(10);
        let mut next_number = 2;
        let across = commit_word(&mut grid, &mut next_number, 1, "KICK", 4, 4, Direction::Across);
        assert_eq!(across.number, 2);
        // A down word starting on the same cell reuses the number.
        let down = commit_word(&mut grid, &mut next_number, 2, "KWON", 4, 4, Direction::Down);
        assert_eq!(down.number, 2);
        assert_eq!(next_number, 3);
    }

    fn commit_word(
        grid: &mut Grid,
        next_number: &mut u32,
        id: WordId,
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> PlacedWord {
        let chars: Vec<char> = word.chars().collect();
        CrosswordGridBuilder::commit(grid, next_number, &def(id, word), &chars, row, col, direction)
    }
}
