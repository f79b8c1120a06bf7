use duel_core::{Action, ActorState, Effect, IllegalActionError, Side, Tier};
use duel_runtime::{
    DuelState, Outcome, PassActionProvider, Runtime, RuntimeConfig, RuntimeError,
    ScriptedActionProvider, SearchAiProvider,
};
use duel_search::SearchConfig;

/// A one-round-lookahead engine against a player that never acts.
///
/// The engine spends its heavy offense first, guards while it has nothing
/// better to do, and finishes with a medium hit.
#[tokio::test]
async fn engine_beats_a_passive_player() {
    let mut runtime = Runtime::builder()
        .player_provider(PassActionProvider)
        .engine_provider(SearchAiProvider::new(SearchConfig::new(1)))
        .build()
        .expect("both providers set");

    let mut engine_actions = Vec::new();
    while runtime.outcome().is_none() {
        let report = runtime.step().await.expect("round resolves");
        assert_eq!(report.action(Side::Player), Action::NoOp);
        engine_actions.push(report.action(Side::Engine));
    }

    assert_eq!(
        engine_actions,
        vec![
            Action::Offense(Tier::Three),
            Action::Offense(Tier::Three),
            Action::Offense(Tier::Three),
            Action::Defense,
            Action::Defense,
            Action::Defense,
            Action::Offense(Tier::Two),
        ]
    );

    let state = runtime.state();
    assert_eq!(state.round, 7);
    assert_eq!(state.player.vitality, -1);
    assert_eq!(state.engine.vitality, 10);
    assert_eq!(runtime.outcome(), Some(Outcome::Winner(Side::Engine)));
}

#[tokio::test]
async fn run_plays_to_completion() {
    let mut runtime = Runtime::builder()
        .player_provider(PassActionProvider)
        .engine_provider(SearchAiProvider::new(SearchConfig::new(1)))
        .build()
        .unwrap();

    let outcome = runtime.run().await.unwrap();
    assert_eq!(outcome, Outcome::Winner(Side::Engine));
    assert_eq!(runtime.state().round, 7);
}

#[tokio::test]
async fn guard_reflects_engine_offense() {
    let mut runtime = Runtime::builder()
        .player_provider(ScriptedActionProvider::new([Action::Defense]))
        .engine_provider(ScriptedActionProvider::new([Action::Offense(Tier::Two)]))
        .build()
        .unwrap();

    let report = runtime.step().await.unwrap();

    assert_eq!(report.round, 1);
    assert!(report.resolution.engine_reflected());
    assert_eq!(report.resolution.player_effect, Effect::Guarded);
    assert_eq!(report.player.vitality, 10);
    assert_eq!(report.player.guards, 1);
    assert_eq!(report.engine.vitality, 8);
    assert_eq!(report.engine.remaining_uses(Tier::Two), 2);
    assert_eq!(&report.player, &runtime.state().player);
}

#[tokio::test]
async fn illegal_action_is_rejected_without_side_effects() {
    let mut runtime = Runtime::builder()
        .player_provider(ScriptedActionProvider::new([
            Action::Defense,
            Action::Defense,
            Action::Defense,
        ]))
        .engine_provider(PassActionProvider)
        .build()
        .unwrap();

    runtime.step().await.unwrap();
    runtime.step().await.unwrap();
    let before = runtime.state().clone();

    let err = runtime.step().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::IllegalAction {
            side: Side::Player,
            source: IllegalActionError::GuardsExhausted,
        }
    ));
    assert_eq!(runtime.state(), &before);
}

#[tokio::test]
async fn stepping_a_decided_match_fails() {
    let mut runtime = Runtime::builder()
        .initial_state(DuelState::new(
            ActorState::player().with_vitality(0),
            ActorState::engine(),
        ))
        .player_provider(PassActionProvider)
        .engine_provider(PassActionProvider)
        .build()
        .unwrap();

    let err = runtime.step().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::GameOver {
            outcome: Outcome::Winner(Side::Engine)
        }
    ));
    assert_eq!(runtime.state().round, 0);
}

#[tokio::test]
async fn round_limit_ends_in_a_draw() {
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            max_rounds: Some(3),
        })
        .player_provider(PassActionProvider)
        .engine_provider(PassActionProvider)
        .build()
        .unwrap();

    assert_eq!(runtime.run().await.unwrap(), Outcome::Draw);
    assert_eq!(runtime.state().round, 3);
}

#[tokio::test]
async fn builder_requires_both_providers() {
    let err = Runtime::builder()
        .player_provider(PassActionProvider)
        .build()
        .err()
        .expect("engine provider missing");
    assert!(matches!(
        err,
        RuntimeError::ProviderNotSet { side: Side::Engine }
    ));

    let err = Runtime::builder().build().err().expect("nothing set");
    assert!(matches!(
        err,
        RuntimeError::ProviderNotSet { side: Side::Player }
    ));
}
