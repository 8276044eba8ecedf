use anyhow::Result;
use puzzle_types::PuzzleResult;

/// Storage seam for the progress-tracking collaborator. The engine never
/// persists anything itself; the host records the final payload at session
/// boundaries through whatever implementation it injects.
pub trait ProgressStore {
    fn record(&mut self, result: &PuzzleResult) -> Result<()>;
}

/// In-memory store, useful in tests and as a trivial host adapter.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    results: Vec<PuzzleResult>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[PuzzleResult] {
        &self.results
    }
}

impl ProgressStore for MemoryProgressStore {
    fn record(&mut self, result: &PuzzleResult) -> Result<()> {
        self.results.push(result.clone());
        Ok(())
    }
}
