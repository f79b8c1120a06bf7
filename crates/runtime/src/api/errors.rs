//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from action providers and rule validation so clients can
//! bubble them up with consistent context.
use duel_core::{IllegalActionError, Side};
use thiserror::Error;

use crate::state::Outcome;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} action provider not set")]
    ProviderNotSet { side: Side },

    #[error("action provider input closed")]
    ProviderClosed,

    #[error("match aborted by {side}")]
    Aborted { side: Side },

    #[error("{side} submitted an illegal action")]
    IllegalAction {
        side: Side,
        #[source]
        source: IllegalActionError,
    },

    #[error("match already decided: {outcome}")]
    GameOver { outcome: Outcome },

    #[error("action provider i/o failed")]
    Io(#[from] std::io::Error),
}
