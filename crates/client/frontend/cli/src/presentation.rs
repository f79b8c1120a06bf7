//! Text rendering for the match.
//!
//! Everything here returns plain `String`s; the app decides where they go.
use crossterm::style::{Color, Stylize, style};
use duel_core::{Action, ActorState, Side};
use duel_runtime::{DuelState, Outcome, RoundReport};

/// Rules shown once at start-up.
pub const RULES: &str = "\
>> ** how to play **
>> - hp     : reach zero and you lose.
>> - attack : remaining uses per power, [1, 2, 3].
>> - guard  : remaining guards. A guard reflects the opponent's attack back at them.
>> type 1, 2 or 3 to attack, g to guard, p to pass, help for all commands.";

/// Colour scheme for terminal output.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).bold().to_string()
        } else {
            text.to_owned()
        }
    }

    fn side_color(side: Side) -> Color {
        match side {
            Side::Player => Color::Yellow,
            Side::Engine => Color::Red,
        }
    }

    fn label(&self, side: Side) -> String {
        self.paint(&format!("{side}:"), Self::side_color(side))
    }

    /// `player:\thp = 10, attack = [3, 3, 3], guard = 2.`
    pub fn render_actor(&self, side: Side, actor: &ActorState) -> String {
        format!("{}\t{}", self.label(side), actor)
    }

    /// Both actors, player first.
    pub fn render_state(&self, state: &DuelState) -> String {
        format!(
            "{}\n{}",
            self.render_actor(Side::Player, &state.player),
            self.render_actor(Side::Engine, &state.engine)
        )
    }

    /// The engine's move plus any reflection in either direction.
    pub fn render_round(&self, report: &RoundReport) -> String {
        let resolution = &report.resolution;
        let mut out = format!(
            ">> {} {}",
            self.label(Side::Engine),
            describe(resolution.engine_action)
        );

        if resolution.engine_reflected() {
            out.push_str(&format!(
                "\n\n{}",
                self.paint(
                    &format!(
                        "reflection, to {} -> {}.",
                        Side::Engine,
                        resolution.engine_effect.mover_loss()
                    ),
                    Color::Cyan
                )
            ));
        }
        if resolution.player_reflected() {
            out.push_str(&format!(
                "\n\n{}",
                self.paint(
                    &format!(
                        "reflection, to {} -> {}.",
                        Side::Player,
                        resolution.player_effect.mover_loss()
                    ),
                    Color::Cyan
                )
            ));
        }

        out
    }

    pub fn render_outcome(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Winner(Side::Player) => self.paint("player win!", Color::Green),
            Outcome::Winner(Side::Engine) => self.paint("engine win...", Color::Red),
            Outcome::Draw => self.paint("draw.", Color::Grey),
        }
    }
}

fn describe(action: Action) -> String {
    match action {
        Action::Offense(_) => action.to_string(),
        Action::Defense => "guard.".to_owned(),
        Action::NoOp => "pass...".to_owned(),
    }
}
