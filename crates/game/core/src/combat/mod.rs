//! Round resolution.
//!
//! This module provides pure functions for resolving one round.
//! All logic is deterministic and touches only the states passed in.
//!
//! # Core Functions
//!
//! - [`resolve`]: one side's half of a round against a fixed pair of actions
//! - [`resolve_round`]: both halves, for the live states outside the search

pub mod resolve;
pub mod round;

pub use resolve::{Effect, resolve};
pub use round::{RoundResolution, resolve_round};
