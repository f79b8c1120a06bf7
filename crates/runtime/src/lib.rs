//! Match orchestration for the duel.
//!
//! This crate wires the action provider abstraction, the search engine and
//! the core rules into a round-by-round runtime. Consumers build a
//! [`Runtime`] with one provider per side and call [`Runtime::step`] (or
//! [`Runtime::run`]) to play.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the provider trait and error types
//! - [`providers`] holds the search-backed and scripted providers
//! - [`state`] tracks the live match and its terminal conditions
pub mod api;
pub mod providers;
pub mod runtime;
pub mod state;

pub use api::{ActionProvider, PassActionProvider, Result, RuntimeError};
pub use providers::{ScriptedActionProvider, SearchAiProvider};
pub use runtime::{RoundReport, Runtime, RuntimeBuilder, RuntimeConfig};
pub use state::{DuelState, Outcome};
