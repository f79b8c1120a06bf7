use async_trait::async_trait;
use duel_core::{Action, ActorState, Side};
use duel_runtime::{ActionProvider, DuelState, RuntimeError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;

use super::{COMMAND_HELP, Command, ParseCommandError, parse_command};

const PROMPT: &str = "\n>> ";

/// Line-oriented command prompt over any async reader/writer pair.
pub struct CommandReader<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> CommandReader<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prompts until a legal action for `actor` is entered.
    ///
    /// Unknown words and actions whose resources are spent print a message
    /// and prompt again. End of input maps to
    /// [`RuntimeError::ProviderClosed`] and `quit` to
    /// [`RuntimeError::Aborted`].
    pub async fn read_action(
        &mut self,
        side: Side,
        actor: &ActorState,
    ) -> duel_runtime::Result<Action> {
        let mut line = String::new();

        loop {
            self.writer.write_all(PROMPT.as_bytes()).await?;
            self.writer.flush().await?;

            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                return Err(RuntimeError::ProviderClosed);
            }

            match parse_command(&line) {
                Ok(Command::Act(action)) => match actor.check(action) {
                    Ok(()) => return Ok(action),
                    Err(err) => {
                        tracing::debug!("rejected {:?} for {}: {}", action, side, err);
                        self.say(&format!("{err}, choose again.")).await?;
                    }
                },
                Ok(Command::Help) => self.say(COMMAND_HELP).await?,
                Ok(Command::Quit) => return Err(RuntimeError::Aborted { side }),
                Err(ParseCommandError::Empty) => {}
                Err(err) => {
                    self.say(&format!("{err}; type `help` for the list."))
                        .await?
                }
            }
        }
    }

    async fn say(&mut self, message: &str) -> std::io::Result<()> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }
}

/// Action provider that waits for the human to type a command.
pub struct CliActionProvider<R, W> {
    /// Wrapped in a Mutex for interior mutability behind `&self`.
    reader: Mutex<CommandReader<R, W>>,
}

impl<R, W> CliActionProvider<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(CommandReader { reader, writer }),
        }
    }

    pub fn into_inner(self) -> CommandReader<R, W> {
        self.reader.into_inner()
    }
}

impl CliActionProvider<BufReader<Stdin>, Stdout> {
    /// Provider bound to the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait]
impl<R, W> ActionProvider for CliActionProvider<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn provide_action(
        &self,
        side: Side,
        state: &DuelState,
    ) -> duel_runtime::Result<Action> {
        let mut reader = self.reader.lock().await;
        reader.read_action(side, state.actor(side)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::Tier;

    fn provider(input: &'static str) -> CliActionProvider<&'static [u8], Vec<u8>> {
        CliActionProvider::new(input.as_bytes(), Vec::new())
    }

    fn output(provider: CliActionProvider<&'static [u8], Vec<u8>>) -> String {
        let (_, writer) = provider.into_inner().into_parts();
        String::from_utf8(writer).expect("prompt output is utf-8")
    }

    #[tokio::test]
    async fn returns_first_legal_action() {
        let provider = provider("3\n");
        let action = provider
            .provide_action(Side::Player, &DuelState::default())
            .await
            .unwrap();
        assert_eq!(action, Action::Offense(Tier::Three));
        assert_eq!(output(provider), PROMPT);
    }

    #[tokio::test]
    async fn reprompts_after_unknown_input() {
        let provider = provider("\nfireball\nhelp\nG\n");
        let action = provider
            .provide_action(Side::Player, &DuelState::default())
            .await
            .unwrap();
        assert_eq!(action, Action::Defense);

        let text = output(provider);
        assert!(text.contains("unrecognized command `fireball`"));
        assert!(text.contains(COMMAND_HELP));
        assert_eq!(text.matches(PROMPT).count(), 4);
    }

    #[tokio::test]
    async fn reprompts_after_illegal_action() {
        let mut state = DuelState::default();
        state.player = ActorState::new(10, [3, 3, 0], 0);

        let provider = provider("g\n3\np\n");
        let action = provider
            .provide_action(Side::Player, &state)
            .await
            .unwrap();
        assert_eq!(action, Action::NoOp);

        let text = output(provider);
        assert!(text.contains("no guards left, choose again."));
        assert!(text.contains("no uses left for offense tier 3, choose again."));
    }

    #[tokio::test]
    async fn end_of_input_closes_the_provider() {
        let provider = provider("");
        let err = provider
            .provide_action(Side::Player, &DuelState::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RuntimeError::ProviderClosed));
    }

    #[tokio::test]
    async fn quit_aborts_the_match() {
        let provider = provider("quit\n3\n");
        let err = provider
            .provide_action(Side::Player, &DuelState::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Aborted { side: Side::Player }));
    }
}
