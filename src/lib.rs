pub mod ai;
pub mod app;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod message;
pub mod scenario;
pub mod settings;

// Re-export commonly used items for easier access
pub use ai::{GameAI, Narrator, narration_or_fallback};
pub use app::App;
pub use error::{AIError, AppError, ConfigError};
pub use game_state::GameState;
pub use message::{Role, Transcript, Turn};
pub use scenario::{ScenarioGenerator, Theme};
pub use settings::{Provider, Settings};
