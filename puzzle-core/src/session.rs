use std::collections::{HashMap, HashSet};

use puzzle_types::{
    CellView, Grid, GridView, PlacedWord, PuzzleConfig, PuzzleError, PuzzleResult, SearchPlacement,
    SessionPhase, WordDefinition, WordId,
};
use rand::Rng;
use uuid::Uuid;

use crate::{
    CrosswordGridBuilder, CrosswordInput, DragSelection, InputKey, PuzzleEvent, PuzzleEventBus,
    WordList, WordSearchGridBuilder,
};

pub type SessionId = Uuid;

/// Variant-specific board state. Exactly one board, one grid, and one
/// transient selection exist per session.
enum Board {
    Crossword {
        words: Vec<PlacedWord>,
        input: CrosswordInput,
    },
    WordSearch {
        words: Vec<SearchPlacement>,
        selection: Option<DragSelection>,
        found_paths: HashMap<WordId, Vec<(usize, usize)>>,
    },
}

/// One puzzle attempt: timer, scoring, completion detection, and the final
/// result payload. Built in `Setup`, runs through `Playing`, and ends in
/// the terminal `Finished` phase; replaying means building a new session.
///
/// The session has no internal threads. The host drives it: key and
/// pointer input through the methods below, and the countdown through
/// [`PuzzleSession::tick`] once per second while the session is playing.
pub struct PuzzleSession {
    id: SessionId,
    config: PuzzleConfig,
    phase: SessionPhase,
    grid: Grid,
    board: Board,
    seconds_left: u32,
    started_at: Option<String>,
    score: i32,
    solved_ids: HashSet<WordId>,
    total_words: usize,
    result: Option<PuzzleResult>,
    dropped: Vec<WordDefinition>,
    pub event_bus: PuzzleEventBus,
}

impl PuzzleSession {
    /// Set up a crossword session. Construction is deterministic for a
    /// fixed word list.
    pub fn crossword(config: PuzzleConfig, definitions: &[WordDefinition]) -> Self {
        let list = WordList::new(definitions, config.grid_size);
        let build = CrosswordGridBuilder::new(config.grid_size).build(&list);
        let input = CrosswordInput::new(&build.grid);
        Self::from_parts(
            config,
            build.grid,
            build.words.len(),
            build.dropped,
            Board::Crossword {
                words: build.words,
                input,
            },
        )
    }

    /// Set up a word-search session. The caller injects the generator, so
    /// a seeded rng reproduces the same board.
    pub fn word_search(
        config: PuzzleConfig,
        definitions: &[WordDefinition],
        rng: &mut impl Rng,
    ) -> Self {
        let list = WordList::new(definitions, config.grid_size);
        let build = WordSearchGridBuilder::new(config.grid_size).build(&list, rng);
        Self::from_parts(
            config,
            build.grid,
            build.words.len(),
            build.dropped,
            Board::WordSearch {
                words: build.words,
                selection: None,
                found_paths: HashMap::new(),
            },
        )
    }

    fn from_parts(
        config: PuzzleConfig,
        grid: Grid,
        total_words: usize,
        dropped: Vec<WordDefinition>,
        board: Board,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            seconds_left: config.time_limit_secs,
            config,
            phase: SessionPhase::Setup,
            grid,
            board,
            started_at: None,
            score: 0,
            solved_ids: HashSet::new(),
            total_words,
            result: None,
            dropped,
            event_bus: PuzzleEventBus::new(),
        }
    }

    /// Enter `Playing`. A puzzle that ended up with no placed words refuses
    /// to start; per-word credit would otherwise divide by zero.
    pub fn start(&mut self) -> Result<(), PuzzleError> {
        if self.phase != SessionPhase::Setup {
            return Err(PuzzleError::NotInSetup {
                current: self.phase,
            });
        }
        if self.total_words == 0 {
            return Err(PuzzleError::EmptyPuzzle);
        }

        self.phase = SessionPhase::Playing;
        self.started_at = Some(chrono::Utc::now().to_rfc3339());
        tracing::info!(
            session_id = %self.id,
            category = %self.config.category,
            total_words = self.total_words,
            "session started"
        );
        self.event_bus.publish(PuzzleEvent::SessionStarted {
            session_id: self.id,
            category: self.config.category.clone(),
            total_words: self.total_words,
        });
        Ok(())
    }

    /// One-second countdown tick, scheduled by the host while the session
    /// is playing. A tick against any other phase is a no-op, so a timer
    /// the host failed to cancel cannot touch a finished session. When a
    /// completion and the timeout land on the same tick, completion wins.
    pub fn tick(&mut self) -> Option<PuzzleResult> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        if self.solved_ids.len() == self.total_words {
            return Some(self.finish());
        }

        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left == 0 {
            tracing::info!(session_id = %self.id, "time expired");
            self.event_bus
                .publish(PuzzleEvent::TimeExpired { session_id: self.id });
            return Some(self.finish());
        }
        None
    }

    /// Route a key press to the crossword board. After any input that
    /// changes the letter buffer, every not-yet-solved word is re-checked
    /// against the canonical grid. Returns the final result when this
    /// input solves the last word.
    pub fn handle_key(&mut self, key: InputKey) -> Option<PuzzleResult> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        let grid = &self.grid;
        let Board::Crossword { words, input } = &mut self.board else {
            return None;
        };

        if !input.handle_key(key, grid) {
            return None;
        }

        let mut newly_solved: Vec<(WordId, String)> = Vec::new();
        for word in words.iter_mut().filter(|w| !w.solved) {
            let complete = word
                .cells()
                .iter()
                .all(|&(row, col)| input.entry(row, col) == grid.letter_at(row, col));
            if complete {
                word.solved = true;
                newly_solved.push((word.id, word.word.clone()));
            }
        }

        for (word_id, word) in newly_solved {
            self.award(word_id, &word);
        }
        self.finish_if_all_solved()
    }

    /// Point the crossword cursor at a cell (mouse/tap placement). Out of
    /// range or black-cell targets are no-ops.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let grid = &self.grid;
        if let Board::Crossword { input, .. } = &mut self.board {
            input.set_cursor(row, col, grid);
        }
    }

    /// Start a drag selection on the word-search board. Out-of-range
    /// anchors are no-ops.
    pub fn begin_selection(&mut self, row: usize, col: usize) {
        if self.phase != SessionPhase::Playing || self.grid.get(row, col).is_none() {
            return;
        }
        if let Board::WordSearch { selection, .. } = &mut self.board {
            *selection = Some(DragSelection::new(row, col));
        }
    }

    /// Update the drag target (hover). Out-of-range targets are no-ops.
    pub fn update_selection(&mut self, row: usize, col: usize) {
        if self.phase != SessionPhase::Playing || self.grid.get(row, col).is_none() {
            return;
        }
        if let Board::WordSearch { selection: Some(selection), .. } = &mut self.board {
            selection.update(row, col);
        }
    }

    /// Release the drag. The selected letters, forward or reversed, are
    /// matched against the word list; a first-time match is credited and
    /// its path kept for permanent highlighting. Rediscovering an already
    /// solved word changes nothing. The transient selection is always
    /// cleared.
    pub fn release_selection(&mut self) -> Option<PuzzleResult> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        let grid = &self.grid;
        let Board::WordSearch {
            words,
            selection,
            found_paths,
        } = &mut self.board
        else {
            return None;
        };

        let path = selection.take()?.path(grid.size());
        if path.len() < 2 {
            return None;
        }

        let attempt: String = path
            .iter()
            .filter_map(|&(row, col)| grid.letter_at(row, col))
            .collect();
        let reversed: String = attempt.chars().rev().collect();

        let hit = words
            .iter_mut()
            .find(|w| w.word == attempt || w.word == reversed)?;
        if hit.solved {
            return None;
        }
        hit.solved = true;
        let (word_id, word) = (hit.id, hit.word.clone());
        found_paths.insert(word_id, path);

        self.award(word_id, &word);
        self.finish_if_all_solved()
    }

    /// Read-only snapshot for the rendering collaborator: the base grid
    /// with per-cell selected/found flags layered on top. The crossword
    /// view shows the player's typed letters; the word-search view shows
    /// the board letters.
    pub fn snapshot(&self) -> GridView {
        let size = self.grid.size();
        let mut cells: Vec<CellView> = self
            .grid
            .iter()
            .map(|(_, cell)| CellView {
                letter: cell.letter,
                filled: cell.filled,
                number: cell.number,
                selected: false,
                found: false,
            })
            .collect();

        match &self.board {
            Board::Crossword { words, input } => {
                for (index, view) in cells.iter_mut().enumerate() {
                    if view.filled {
                        view.letter = input.entry(index / size, index % size).unwrap_or(' ');
                    }
                }
                let (row, col) = input.cursor();
                cells[row * size + col].selected = true;
                for word in words.iter().filter(|w| w.solved) {
                    for (row, col) in word.cells() {
                        cells[row * size + col].found = true;
                    }
                }
            }
            Board::WordSearch {
                selection,
                found_paths,
                ..
            } => {
                if let Some(selection) = selection {
                    for (row, col) in selection.path(size) {
                        cells[row * size + col].selected = true;
                    }
                }
                for path in found_paths.values() {
                    for &(row, col) in path {
                        cells[row * size + col].found = true;
                    }
                }
            }
        }

        GridView { size, cells }
    }

    fn award(&mut self, word_id: WordId, word: &str) {
        if !self.solved_ids.insert(word_id) {
            return;
        }
        let credit = self.word_credit();
        self.score += credit;
        tracing::debug!(session_id = %self.id, word, credit, "word solved");
        self.event_bus.publish(PuzzleEvent::WordSolved {
            session_id: self.id,
            word_id,
            word: word.to_string(),
            points: credit,
        });
    }

    fn word_credit(&self) -> i32 {
        self.config.total_points / self.total_words as i32
    }

    fn finish_if_all_solved(&mut self) -> Option<PuzzleResult> {
        (self.solved_ids.len() == self.total_words).then(|| self.finish())
    }

    /// Terminal transition. Runs at most once per session: every path here
    /// is guarded by a `Playing` phase check.
    fn finish(&mut self) -> PuzzleResult {
        self.phase = SessionPhase::Finished;

        let solved_words = self.solved_ids.len();
        let perfect_score = solved_words == self.total_words;
        if perfect_score {
            // Per-word credit is integer division; a fully solved puzzle
            // reports exactly the configured total instead of the rounded
            // accumulation.
            self.score = self.config.total_points;
        }

        let time_used_secs = self.config.time_limit_secs - self.seconds_left;
        let completion_rate = (solved_words * 100 / self.total_words) as u32;
        let time_per_word = if solved_words == 0 {
            0.0
        } else {
            time_used_secs as f32 / solved_words as f32
        };

        let result = PuzzleResult {
            category: self.config.category.clone(),
            score: self.score,
            time_used_secs,
            perfect_score,
            total_words: self.total_words,
            solved_words,
            completion_rate,
            time_per_word,
            finished_at: chrono::Utc::now().to_rfc3339(),
        };

        tracing::info!(
            session_id = %self.id,
            score = result.score,
            completion_rate = result.completion_rate,
            "session finished"
        );
        self.result = Some(result.clone());
        self.event_bus.publish(PuzzleEvent::SessionFinished {
            session_id: self.id,
            result: result.clone(),
        });
        result
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn started_at(&self) -> Option<&str> {
        self.started_at.as_deref()
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn solved_words(&self) -> usize {
        self.solved_ids.len()
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The final payload, available once the session has finished.
    pub fn result(&self) -> Option<&PuzzleResult> {
        self.result.as_ref()
    }

    /// Words the builder could not place, reported so a host can warn.
    pub fn dropped_words(&self) -> &[WordDefinition] {
        &self.dropped
    }

    /// Clue list, when this is a crossword session.
    pub fn placed_words(&self) -> Option<&[PlacedWord]> {
        match &self.board {
            Board::Crossword { words, .. } => Some(words),
            Board::WordSearch { .. } => None,
        }
    }

    /// Target words, when this is a word-search session.
    pub fn search_words(&self) -> Option<&[SearchPlacement]> {
        match &self.board {
            Board::WordSearch { words, .. } => Some(words),
            Board::Crossword { .. } => None,
        }
    }

    /// Cursor and buffer state, when this is a crossword session.
    pub fn input(&self) -> Option<&CrosswordInput> {
        match &self.board {
            Board::Crossword { input, .. } => Some(input),
            Board::WordSearch { .. } => None,
        }
    }
}
