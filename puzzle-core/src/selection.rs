use puzzle_types::{Direction, Grid};

/// Transient drag state for the word-search board. The anchor is where the
/// pointer went down; `current` follows it. The realized path always runs
/// in a single straight direction, it never bends.
#[derive(Debug, Clone, Copy)]
pub struct DragSelection {
    anchor: (usize, usize),
    current: (usize, usize),
}

impl DragSelection {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            anchor: (row, col),
            current: (row, col),
        }
    }

    pub fn update(&mut self, row: usize, col: usize) {
        self.current = (row, col);
    }

    /// Cells from the anchor toward the current cell along the dominant
    /// direction only: vertical when |dRow| > |dCol|, horizontal when
    /// |dCol| > |dRow|, diagonal when both are equal and nonzero. Steps
    /// clip at the grid edge.
    pub fn path(&self, size: usize) -> Vec<(usize, usize)> {
        let d_row = self.current.0 as i32 - self.anchor.0 as i32;
        let d_col = self.current.1 as i32 - self.anchor.1 as i32;

        let (step_row, step_col) = if d_row.abs() > d_col.abs() {
            (d_row.signum(), 0)
        } else if d_col.abs() > d_row.abs() {
            (0, d_col.signum())
        } else if d_row != 0 {
            (d_row.signum(), d_col.signum())
        } else {
            return vec![self.anchor];
        };

        let steps = d_row.abs().max(d_col.abs());
        let mut cells = vec![self.anchor];
        for i in 1..=steps {
            let row = self.anchor.0 as i32 + step_row * i;
            let col = self.anchor.1 as i32 + step_col * i;
            if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
                break;
            }
            cells.push((row as usize, col as usize));
        }
        cells
    }
}

/// A key press routed to the crossword board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    Backspace,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Cursor, typing direction, and the player's letter buffer for the
/// crossword board. The buffer is grid-shaped and entirely separate from
/// the canonical grid; solved detection compares the two.
#[derive(Debug, Clone)]
pub struct CrosswordInput {
    cursor: (usize, usize),
    direction: Direction,
    buffer: Vec<Option<char>>,
    size: usize,
}

impl CrosswordInput {
    /// Cursor starts on the first non-black cell, scanning row-major.
    pub fn new(grid: &Grid) -> Self {
        let cursor = grid
            .iter()
            .find(|(_, cell)| cell.filled)
            .map(|(pos, _)| pos)
            .unwrap_or((0, 0));

        Self {
            cursor,
            direction: Direction::Across,
            buffer: vec![None; grid.size() * grid.size()],
            size: grid.size(),
        }
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn entry(&self, row: usize, col: usize) -> Option<char> {
        self.buffer[row * self.size + col]
    }

    /// Point the cursor at a cell; requests outside the grid or on black
    /// cells are no-ops.
    pub fn set_cursor(&mut self, row: usize, col: usize, grid: &Grid) {
        if grid.letter_at(row, col).is_some() {
            self.cursor = (row, col);
        }
    }

    /// Apply one key press. Returns true when the letter buffer changed,
    /// which is the signal to re-evaluate word completion.
    pub fn handle_key(&mut self, key: InputKey, grid: &Grid) -> bool {
        match key {
            InputKey::Char(c) => self.type_char(c, grid),
            InputKey::Backspace => self.erase(grid),
            InputKey::Tab => {
                self.direction = self.direction.toggled();
                false
            }
            InputKey::ArrowUp => self.move_cursor((-1, 0), grid),
            InputKey::ArrowDown => self.move_cursor((1, 0), grid),
            InputKey::ArrowLeft => self.move_cursor((0, -1), grid),
            InputKey::ArrowRight => self.move_cursor((0, 1), grid),
        }
    }

    fn type_char(&mut self, c: char, grid: &Grid) -> bool {
        if !c.is_ascii_alphabetic() {
            return false;
        }
        let (row, col) = self.cursor;
        if grid.letter_at(row, col).is_none() {
            return false;
        }
        self.buffer[row * self.size + col] = Some(c.to_ascii_uppercase());

        let (dr, dc) = self.direction.delta();
        if let Some(next) = Self::next_open(self.cursor, (dr, dc), grid) {
            self.cursor = next;
        }
        true
    }

    /// Clear the current cell in place when it holds a letter; otherwise
    /// step backward (skipping black cells) and clear there.
    fn erase(&mut self, grid: &Grid) -> bool {
        let (row, col) = self.cursor;
        let index = row * self.size + col;
        if self.buffer[index].is_some() {
            self.buffer[index] = None;
            return true;
        }

        let (dr, dc) = self.direction.delta();
        if let Some((back_row, back_col)) = Self::next_open(self.cursor, (-dr, -dc), grid) {
            self.cursor = (back_row, back_col);
            let back_index = back_row * self.size + back_col;
            let had_letter = self.buffer[back_index].is_some();
            self.buffer[back_index] = None;
            return had_letter;
        }
        false
    }

    /// Arrow movement never touches the buffer.
    fn move_cursor(&mut self, delta: (i32, i32), grid: &Grid) -> bool {
        if let Some(next) = Self::next_open(self.cursor, delta, grid) {
            self.cursor = next;
        }
        false
    }

    /// The next non-black cell stepping by `delta`, skipping black cells,
    /// or None when the grid edge is reached first.
    fn next_open(from: (usize, usize), delta: (i32, i32), grid: &Grid) -> Option<(usize, usize)> {
        let (mut row, mut col) = (from.0 as i32, from.1 as i32);
        loop {
            row += delta.0;
            col += delta.1;
            if !grid.in_bounds(row, col) {
                return None;
            }
            if grid.cell(row as usize, col as usize).filled {
                return Some((row as usize, col as usize));
            }
        }
    }
}
