use puzzle_types::{PuzzleResult, WordId};

use crate::SessionId;

#[derive(Debug, Clone)]
pub enum PuzzleEvent {
    SessionStarted {
        session_id: SessionId,
        category: String,
        total_words: usize,
    },
    WordSolved {
        session_id: SessionId,
        word_id: WordId,
        word: String,
        points: i32,
    },
    TimeExpired {
        session_id: SessionId,
    },
    SessionFinished {
        session_id: SessionId,
        result: PuzzleResult,
    },
}

impl PuzzleEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            PuzzleEvent::SessionStarted { session_id, .. } => *session_id,
            PuzzleEvent::WordSolved { session_id, .. } => *session_id,
            PuzzleEvent::TimeExpired { session_id } => *session_id,
            PuzzleEvent::SessionFinished { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for observing session progress
pub trait PuzzleEventHandler {
    fn handle_event(&mut self, event: PuzzleEvent);
}

/// Simple event bus for distributing session events to the host
pub struct PuzzleEventBus {
    handlers: Vec<Box<dyn PuzzleEventHandler>>,
}

impl PuzzleEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn PuzzleEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: PuzzleEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for PuzzleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    struct CountingHandler {
        seen: Arc<Mutex<Vec<PuzzleEvent>>>,
    }

    impl PuzzleEventHandler for CountingHandler {
        fn handle_event(&mut self, event: PuzzleEvent) {
            self.seen.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_event_bus_delivers_to_handlers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = PuzzleEventBus::new();
        bus.add_handler(Box::new(CountingHandler { seen: seen.clone() }));

        let session_id = Uuid::new_v4();
        bus.publish(PuzzleEvent::TimeExpired { session_id });

        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].session_id(), session_id);
    }
}
