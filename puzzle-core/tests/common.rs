use std::sync::{Arc, Mutex};

use puzzle_core::{InputKey, PuzzleEvent, PuzzleEventHandler, PuzzleSession};
use puzzle_types::{PuzzleConfig, PuzzleResult, WordDefinition, WordId};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Taekwondo vocabulary used across the scenario tests.
pub fn taekwondo_words() -> Vec<WordDefinition> {
    [
        (1, "chagi", "Kick"),
        (2, "makgi", "Block"),
        (3, "jirugi", "Punch"),
        (4, "dojang", "Training hall"),
        (5, "kick", "Strike with the foot"),
    ]
    .into_iter()
    .map(|(id, word, clue)| WordDefinition {
        id,
        word: word.to_string(),
        clue: clue.to_string(),
    })
    .collect()
}

pub fn word_definitions(words: &[(WordId, &str)]) -> Vec<WordDefinition> {
    words
        .iter()
        .map(|&(id, word)| WordDefinition {
            id,
            word: word.to_string(),
            clue: String::new(),
        })
        .collect()
}

pub fn standard_config(grid_size: usize, total_points: i32, time_limit_secs: u32) -> PuzzleConfig {
    PuzzleConfig {
        category: "taekwondo-basics".to_string(),
        grid_size,
        total_points,
        time_limit_secs,
    }
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Types a word into a crossword session starting from the current cursor.
pub fn type_word(session: &mut PuzzleSession, word: &str) -> Option<PuzzleResult> {
    let mut last = None;
    for c in word.chars() {
        last = session.handle_key(InputKey::Char(c));
    }
    last
}

/// Drags across a straight run of cells and releases.
pub fn select_path(
    session: &mut PuzzleSession,
    from: (usize, usize),
    to: (usize, usize),
) -> Option<PuzzleResult> {
    session.begin_selection(from.0, from.1);
    session.update_selection(to.0, to.1);
    session.release_selection()
}

/// Event collector for asserting on event emissions.
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<PuzzleEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PuzzleEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn has_event(&self, check: impl Fn(&PuzzleEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check)
    }

    pub fn count(&self, check: impl Fn(&PuzzleEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check(e)).count()
    }
}

impl PuzzleEventHandler for EventCollector {
    fn handle_event(&mut self, event: PuzzleEvent) {
        self.events.lock().unwrap().push(event);
    }
}
