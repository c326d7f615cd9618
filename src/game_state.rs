pub const QUIT_COMMAND: &str = "quit";

// Where the game loop currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Starting,
    AwaitingInput,
    Processing(String), // Player input waiting to be narrated.
    Terminated,
}

impl GameState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, GameState::Terminated)
    }
}

pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT_COMMAND)
}
