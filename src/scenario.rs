use rand::Rng;
use rand::seq::IteratorRandom;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::ai::{Narrator, narration_or_fallback};

// Opening settings the story can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount)]
pub enum Theme {
    #[default]
    #[strum(to_string = "a haunted mansion full of ghosts")]
    HauntedMansion,
    #[strum(to_string = "a futuristic cyberpunk city with hackers and AI")]
    CyberpunkCity,
    #[strum(to_string = "a medieval kingdom under siege")]
    MedievalSiege,
    #[strum(to_string = "a stranded spaceship lost in deep space")]
    StrandedSpaceship,
    #[strum(to_string = "a detective mystery in a noir-style city")]
    NoirMystery,
    #[strum(to_string = "a pirate adventure on the high seas")]
    PirateAdventure,
}

// Uniform draw over every theme.
pub fn pick_theme<R: Rng + ?Sized>(rng: &mut R) -> Theme {
    Theme::iter().choose(rng).unwrap_or_default()
}

pub fn scenario_prompt(theme: Theme) -> String {
    format!(
        "Create an interactive text-based game where the player explores {theme}. \
         Start with an engaging introduction and an opening choice for the player."
    )
}

/// Produces the opening narration of a session.
pub struct ScenarioGenerator<'a, N: Narrator> {
    narrator: &'a N,
}

impl<'a, N: Narrator> ScenarioGenerator<'a, N> {
    pub fn new(narrator: &'a N) -> Self {
        Self { narrator }
    }

    /// Pick a theme and ask for an introduction. Always yields printable text.
    pub async fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let theme = pick_theme(rng);
        log::info!("Starting scenario: {theme}");
        let prompt = scenario_prompt(theme);
        narration_or_fallback(self.narrator.generate(&prompt).await)
    }
}
