use std::collections::HashSet;

use puzzle_types::{WordDefinition, WordId};

/// Normalized word list fed to the builders. Input from the content
/// collaborator is untrusted: entries are trimmed, uppercased, and dropped
/// when non-alphabetic, shorter than two letters, longer than the grid, or
/// duplicates of an earlier entry (by id or by text). Input order is
/// preserved for the survivors.
#[derive(Debug, Clone)]
pub struct WordList {
    entries: Vec<WordDefinition>,
}

impl WordList {
    pub fn new(definitions: &[WordDefinition], grid_size: usize) -> Self {
        let mut seen_ids: HashSet<WordId> = HashSet::new();
        let mut seen_words: HashSet<String> = HashSet::new();

        let entries = definitions
            .iter()
            .filter_map(|def| {
                let word: String = def.word.trim().to_uppercase();
                if word.chars().count() < 2 || word.chars().count() > grid_size {
                    return None;
                }
                if !word.chars().all(|c| c.is_alphabetic()) {
                    return None;
                }
                if !seen_ids.insert(def.id) || !seen_words.insert(word.clone()) {
                    return None;
                }
                Some(WordDefinition {
                    id: def.id,
                    word,
                    clue: def.clue.trim().to_string(),
                })
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[WordDefinition] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a word by its normalized text.
    pub fn find_by_text(&self, text: &str) -> Option<&WordDefinition> {
        self.entries.iter().find(|def| def.word == text)
    }
}
