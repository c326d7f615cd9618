use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    ai::{Narrator, narration_or_fallback},
    error::AppError,
    game_state::{GameState, is_quit},
    message::{Transcript, Turn},
    scenario::ScenarioGenerator,
};

pub const WELCOME: &str =
    "Welcome to the AI-driven text-based adventure game! Type 'quit' to exit.";
pub const INPUT_PROMPT: &str = "What do you do? ";
pub const FAREWELL: &str = "Thanks for playing! Goodbye.";

const DEFAULT_WRAP_WIDTH: usize = 80;

pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((width, _)) if width > 0 => width as usize,
        _ => DEFAULT_WRAP_WIDTH,
    }
}

/// The interactive session: one narrator, one player, one transcript.
pub struct App<N: Narrator, R: BufRead, W: Write> {
    narrator: N,
    input: R,
    output: W,
    state: GameState,
    transcript: Transcript,
    wrap_width: usize,
}

impl<N: Narrator, R: BufRead, W: Write> App<N, R, W> {
    pub fn new(narrator: N, input: R, output: W) -> Self {
        Self {
            narrator,
            input,
            output,
            state: GameState::Starting,
            transcript: Transcript::new(),
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }

    pub fn wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width.max(1);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive the session until the player quits or input runs out.
    pub async fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), AppError> {
        while !self.state.is_terminated() {
            self.step(rng).await?;
        }
        Ok(())
    }

    /// Advance the state machine by exactly one transition.
    pub async fn step<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), AppError> {
        // A failed transition leaves the current state in place.
        let next = match self.state.clone() {
            GameState::Starting => self.start(rng).await?,
            GameState::AwaitingInput => self.read_input()?,
            GameState::Processing(input) => self.process(input).await?,
            GameState::Terminated => GameState::Terminated,
        };
        self.state = next;
        Ok(())
    }

    async fn start<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<GameState, AppError> {
        writeln!(self.output, "{WELCOME}")?;
        self.output.flush()?;

        let intro = ScenarioGenerator::new(&self.narrator).generate(rng).await;
        self.print_narration(&intro)?;
        self.transcript.append(Turn::narrator(intro));

        Ok(GameState::AwaitingInput)
    }

    fn read_input(&mut self) -> Result<GameState, AppError> {
        write!(self.output, "\n{INPUT_PROMPT}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            log::info!("Input closed, ending session");
            writeln!(self.output)?;
            return self.terminate();
        }
        let line = String::from_utf8_lossy(&buf);

        if is_quit(&line) {
            return self.terminate();
        }

        Ok(GameState::Processing(line.trim().to_string()))
    }

    async fn process(&mut self, input: String) -> Result<GameState, AppError> {
        log::debug!(
            "Narrating player input with {} turns of context",
            self.transcript.len()
        );
        let result = self.narrator.respond(&input, &self.transcript).await;
        let narration = narration_or_fallback(result);

        self.print_narration(&narration)?;
        self.transcript.append(Turn::player(input));
        self.transcript.append(Turn::narrator(narration));

        Ok(GameState::AwaitingInput)
    }

    fn terminate(&mut self) -> Result<GameState, AppError> {
        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;

        log::info!("Session ended after {} turns", self.transcript.len());
        match self.transcript.to_json() {
            Ok(json) => log::debug!("Final transcript: {json}"),
            Err(e) => log::warn!("Could not serialize transcript: {e}"),
        }

        Ok(GameState::Terminated)
    }

    fn print_narration(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "\n{}", textwrap::fill(text, self.wrap_width))?;
        self.output.flush()?;
        Ok(())
    }
}
