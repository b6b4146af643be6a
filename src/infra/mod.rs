//! Infrastructure adapters for hosting strategies outside a live game.

pub mod memory;

pub use memory::InMemoryGame;
