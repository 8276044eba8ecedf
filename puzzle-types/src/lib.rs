pub mod errors;
pub mod grid;
pub mod session;
pub mod words;

// Re-export all types
pub use errors::*;
pub use grid::*;
pub use session::*;
pub use words::*;
