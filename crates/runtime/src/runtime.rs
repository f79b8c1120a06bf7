//! High-level runtime orchestrator.
//!
//! The runtime owns the live match state and both action providers, and
//! drives rounds one at a time. Clients render between steps.

use duel_core::{Action, ActorState, RoundResolution, Side, resolve_round};

use crate::api::{ActionProvider, Result, RuntimeError};
use crate::state::{DuelState, Outcome};

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Declare a draw after this many rounds. `None` plays until a terminal
    /// state.
    pub max_rounds: Option<u32>,
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    pub resolution: RoundResolution,
    /// State after the round.
    pub player: ActorState,
    pub engine: ActorState,
}

impl RoundReport {
    pub fn action(&self, side: Side) -> Action {
        match side {
            Side::Player => self.resolution.player_action,
            Side::Engine => self.resolution.engine_action,
        }
    }
}

/// Main runtime that runs a match round by round.
pub struct Runtime {
    config: RuntimeConfig,
    state: DuelState,
    player_provider: Box<dyn ActionProvider>,
    engine_provider: Box<dyn ActionProvider>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn state(&self) -> &DuelState {
        &self.state
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Terminal check including the configured round limit.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome().or_else(|| {
            self.config
                .max_rounds
                .filter(|&limit| self.state.round >= limit)
                .map(|_| Outcome::Draw)
        })
    }

    /// Plays one round.
    ///
    /// The engine commits first, so its search never sees the player's
    /// choice. Both actions are checked against the legality predicate before
    /// anything is applied.
    pub async fn step(&mut self) -> Result<RoundReport> {
        if let Some(outcome) = self.outcome() {
            return Err(RuntimeError::GameOver { outcome });
        }

        let engine_action = self
            .engine_provider
            .provide_action(Side::Engine, &self.state)
            .await?;
        let player_action = self
            .player_provider
            .provide_action(Side::Player, &self.state)
            .await?;

        validate(&self.state, Side::Engine, engine_action)?;
        validate(&self.state, Side::Player, player_action)?;

        let DuelState {
            player,
            engine,
            round,
        } = &mut self.state;
        let resolution = resolve_round(player, engine, player_action, engine_action);
        *round += 1;

        let report = RoundReport {
            round: *round,
            resolution,
            player: *player,
            engine: *engine,
        };

        tracing::info!(
            "round {}: player {:?} ({:?}), engine {:?} ({:?}) -> player hp {}, engine hp {}",
            report.round,
            player_action,
            resolution.player_effect,
            engine_action,
            resolution.engine_effect,
            report.player.vitality,
            report.engine.vitality
        );

        Ok(report)
    }

    /// Plays rounds until the match is decided.
    pub async fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.outcome() {
                tracing::info!("match finished after {} rounds: {}", self.state.round, outcome);
                return Ok(outcome);
            }
            self.step().await?;
        }
    }
}

fn validate(state: &DuelState, side: Side, action: Action) -> Result<()> {
    state.actor(side).check(action).map_err(|source| {
        tracing::warn!("{} submitted illegal action {:?}: {}", side, action, source);
        RuntimeError::IllegalAction { side, source }
    })
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<DuelState>,
    player_provider: Option<Box<dyn ActionProvider>>,
    engine_provider: Option<Box<dyn ActionProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            player_provider: None,
            engine_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial match state. Defaults to fresh starting states.
    pub fn initial_state(mut self, state: DuelState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set player action provider
    pub fn player_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.player_provider = Some(Box::new(provider));
        self
    }

    /// Set engine action provider
    pub fn engine_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.engine_provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime. Both providers are required.
    pub fn build(self) -> Result<Runtime> {
        let player_provider = self.player_provider.ok_or(RuntimeError::ProviderNotSet {
            side: Side::Player,
        })?;
        let engine_provider = self.engine_provider.ok_or(RuntimeError::ProviderNotSet {
            side: Side::Engine,
        })?;

        Ok(Runtime {
            config: self.config,
            state: self.state.unwrap_or_default(),
            player_provider,
            engine_provider,
        })
    }
}
