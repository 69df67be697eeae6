//! Handler module declarations and re-exports

pub mod evaluate;
pub mod scene;

// Re-export all handlers for convenient access
pub use evaluate::*;
pub use scene::*;
