//! Terminal frontend for the duel.
//!
//! Reads player commands line by line from stdin, plays them against the
//! search engine through the runtime, and prints the match as plain text.
//!
//! # Architecture
//!
//! - [`input`] parses commands and implements the player's action provider
//! - [`presentation`] renders actors, rounds and results
//! - [`app`] owns the runtime and drives the display loop
//! - [`config`] and [`logging`] cover start-up
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::{CliApp, SessionEnd};
pub use config::DuelConfig;
pub use input::{CliActionProvider, Command, ParseCommandError, parse_command};
pub use presentation::Theme;
