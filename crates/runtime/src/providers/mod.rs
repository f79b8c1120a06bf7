//! Action provider implementations for the two sides.

pub mod ai;
pub mod scripted;

pub use ai::SearchAiProvider;
pub use scripted::ScriptedActionProvider;
