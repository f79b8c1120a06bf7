//! Deterministic duel rules shared across the search, runtime and clients.
//!
//! `duel-core` defines the canonical rules (actions, actor state, round
//! resolution) and exposes pure APIs. The legality predicate on
//! [`ActorState`] is the single source of truth for which actions a side may
//! take; the command reader, the runtime and the search all defer to it.
pub mod action;
pub mod combat;
pub mod config;
pub mod error;
pub mod state;

pub use action::{Action, ActionKind, Tier};
pub use combat::{Effect, RoundResolution, resolve, resolve_round};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError, IllegalActionError};
pub use state::{ActionList, ActorState, Side};
