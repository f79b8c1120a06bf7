//! Glue code tying the runtime, the command reader and the text output together.
use anyhow::Result;
use duel_runtime::{
    ActionProvider, Outcome, Runtime, RuntimeError, SearchAiProvider,
};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::config::DuelConfig;
use crate::input::CliActionProvider;
use crate::presentation::{RULES, Theme};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    /// The player quit or closed input before the match was decided.
    Abandoned,
}

pub struct CliApp {
    theme: Theme,
    runtime: Runtime,
}

impl CliApp {
    /// Human on stdin against the search engine.
    pub fn new(config: &DuelConfig) -> Result<Self> {
        Self::with_player(config, CliActionProvider::stdio())
    }

    /// Search engine against an arbitrary player provider.
    pub fn with_player(config: &DuelConfig, player: impl ActionProvider + 'static) -> Result<Self> {
        tracing::info!(
            "starting match: lookahead={} tie_break={} transposition={} max_rounds={:?}",
            config.search.lookahead_rounds,
            config.search.tie_break,
            config.search.transposition,
            config.runtime.max_rounds
        );

        let runtime = Runtime::builder()
            .config(config.runtime.clone())
            .player_provider(player)
            .engine_provider(SearchAiProvider::new(config.search.clone()))
            .build()?;

        Ok(Self {
            theme: Theme::new(config.ui.color),
            runtime,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Plays the match, writing the display to `out`.
    pub async fn run<W>(&mut self, out: &mut W) -> Result<SessionEnd>
    where
        W: AsyncWrite + Unpin,
    {
        write_block(out, RULES).await?;

        loop {
            write_block(out, &self.theme.render_state(self.runtime.state())).await?;

            if let Some(outcome) = self.runtime.outcome() {
                tracing::info!("match over after {} rounds: {}", self.runtime.state().round, outcome);
                write_block(out, &format!("\n{}", self.theme.render_outcome(outcome))).await?;
                return Ok(SessionEnd::Finished(outcome));
            }

            let report = match self.runtime.step().await {
                Ok(report) => report,
                Err(RuntimeError::ProviderClosed | RuntimeError::Aborted { .. }) => {
                    tracing::info!("player left in round {}", self.runtime.state().round + 1);
                    write_block(out, "\nbye.").await?;
                    return Ok(SessionEnd::Abandoned);
                }
                Err(err) => return Err(err.into()),
            };

            write_block(out, &format!("\n{}\n", self.theme.render_round(&report))).await?;
        }
    }
}

async fn write_block<W>(out: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::Side;
    use duel_runtime::{PassActionProvider, ScriptedActionProvider};
    use duel_search::SearchConfig;

    fn config() -> DuelConfig {
        let mut config = DuelConfig::default();
        config.search = SearchConfig::new(1);
        config.ui.color = false;
        config
    }

    #[tokio::test]
    async fn plays_a_full_match() {
        let mut app = CliApp::with_player(&config(), PassActionProvider).unwrap();
        let mut out = Vec::new();

        let end = app.run(&mut out).await.unwrap();
        assert_eq!(end, SessionEnd::Finished(Outcome::Winner(Side::Engine)));

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(RULES));
        assert_eq!(text.matches(">> engine:").count(), 7);
        assert!(text.contains("player:\thp = 0, attack = [3, 3, 3], guard = 2."));
        assert!(text.trim_end().ends_with("engine win..."));
    }

    #[tokio::test]
    async fn shows_reflection_after_a_guard() {
        let mut config = config();
        config.runtime.max_rounds = Some(1);
        let player = ScriptedActionProvider::new([duel_core::Action::Defense]);
        let mut app = CliApp::with_player(&config, player).unwrap();
        let mut out = Vec::new();

        let end = app.run(&mut out).await.unwrap();
        assert_eq!(end, SessionEnd::Finished(Outcome::Draw));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(">> engine: attack = 3\n\nreflection, to engine -> 3."));
        assert!(text.contains("engine:\thp = 7, attack = [3, 3, 2], guard = 3."));
        assert!(text.trim_end().ends_with("draw."));
    }

    #[tokio::test]
    async fn closed_input_abandons_the_session() {
        let player = CliActionProvider::new(&b""[..], Vec::new());
        let mut app = CliApp::with_player(&config(), player).unwrap();
        let mut out = Vec::new();

        let end = app.run(&mut out).await.unwrap();
        assert_eq!(end, SessionEnd::Abandoned);
        assert_eq!(app.runtime().state().round, 0);
        assert!(String::from_utf8(out).unwrap().trim_end().ends_with("bye."));
    }
}
