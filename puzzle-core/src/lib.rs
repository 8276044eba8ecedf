pub mod crossword;
pub mod events;
pub mod progress;
pub mod selection;
pub mod session;
pub mod word_list;
pub mod word_search;

// Re-export main components
pub use crossword::*;
pub use events::*;
pub use progress::*;
pub use selection::*;
pub use session::*;
pub use word_list::*;
pub use word_search::*;
