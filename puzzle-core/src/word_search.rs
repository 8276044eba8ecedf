use puzzle_types::{Grid, SearchDirection, SearchPlacement, WordDefinition};
use rand::Rng;

use crate::WordList;

/// Placement attempts per word before it is dropped.
pub const MAX_PLACEMENT_TRIALS: usize = 100;

/// Output of one word-search construction pass. As with the crossword
/// builder, unplaceable words are dropped and reported, never errored on.
#[derive(Debug, Clone)]
pub struct WordSearchBuild {
    pub grid: Grid,
    pub words: Vec<SearchPlacement>,
    pub dropped: Vec<WordDefinition>,
}

/// Randomized word-search builder. Every cell of the finished grid is
/// filled; the caller injects the generator so output is reproducible from
/// a seed.
pub struct WordSearchGridBuilder {
    size: usize,
}

impl WordSearchGridBuilder {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn build(&self, list: &WordList, rng: &mut impl Rng) -> WordSearchBuild {
        let mut grid = Grid::new(self.size);
        let mut words: Vec<SearchPlacement> = Vec::new();
        let mut dropped: Vec<WordDefinition> = Vec::new();

        for def in list.entries() {
            match self.try_place(&mut grid, def, rng) {
                Some(placement) => {
                    tracing::debug!(
                        word = %placement.word,
                        row = placement.origin_row,
                        col = placement.origin_col,
                        direction = ?placement.direction,
                        "placed search word"
                    );
                    words.push(placement);
                }
                None => {
                    tracing::debug!(word = %def.word, "placement trials exhausted, dropping word");
                    dropped.push(def.clone());
                }
            }
        }

        self.fill_remaining(&mut grid, rng);

        WordSearchBuild { grid, words, dropped }
    }

    /// Up to [`MAX_PLACEMENT_TRIALS`] uniformly random (direction, origin)
    /// draws; the first trial whose full path stays in bounds and collides
    /// only on matching letters is written immediately.
    fn try_place(
        &self,
        grid: &mut Grid,
        def: &WordDefinition,
        rng: &mut impl Rng,
    ) -> Option<SearchPlacement> {
        let chars: Vec<char> = def.word.chars().collect();

        for _ in 0..MAX_PLACEMENT_TRIALS {
            let direction = SearchDirection::ALL[rng.random_range(0..SearchDirection::ALL.len())];
            let origin_row = rng.random_range(0..self.size);
            let origin_col = rng.random_range(0..self.size);

            if !self.fits(grid, &chars, origin_row, origin_col, direction) {
                continue;
            }

            let (dr, dc) = direction.delta();
            for (i, &ch) in chars.iter().enumerate() {
                let row = (origin_row as i32 + dr * i as i32) as usize;
                let col = (origin_col as i32 + dc * i as i32) as usize;
                let cell = grid.cell_mut(row, col);
                cell.letter = ch;
                cell.filled = true;
            }

            return Some(SearchPlacement {
                id: def.id,
                word: def.word.clone(),
                origin_row,
                origin_col,
                direction,
                solved: false,
            });
        }

        None
    }

    fn fits(
        &self,
        grid: &Grid,
        chars: &[char],
        origin_row: usize,
        origin_col: usize,
        direction: SearchDirection,
    ) -> bool {
        let (dr, dc) = direction.delta();
        for (i, &ch) in chars.iter().enumerate() {
            let row = origin_row as i32 + dr * i as i32;
            let col = origin_col as i32 + dc * i as i32;
            if !grid.in_bounds(row, col) {
                return false;
            }
            let cell = grid.cell(row as usize, col as usize);
            if cell.filled && cell.letter != ch {
                return false;
            }
        }
        true
    }

    /// Fill every leftover cell with a uniformly random uppercase letter.
    /// Filler is not screened: a run of random letters may coincidentally
    /// spell a target word or its reverse, and the grid keeps it.
    fn fill_remaining(&self, grid: &mut Grid, rng: &mut impl Rng) {
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = grid.cell_mut(row, col);
                if !cell.filled {
                    cell.letter = (b'A' + rng.random_range(0..26u8)) as char;
                    cell.filled = true;
                }
            }
        }
    }
}
