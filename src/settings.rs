use std::fmt;
use std::path::PathBuf;

use log::LevelFilter;
use strum_macros::{Display, EnumString};

use crate::error::ConfigError;

pub const PROVIDER_VAR: &str = "ADVENTURE_PROVIDER";
pub const MODEL_VAR: &str = "ADVENTURE_MODEL";
pub const LOG_LEVEL_VAR: &str = "ADVENTURE_LOG";
pub const LOG_DIR_VAR: &str = "ADVENTURE_LOG_DIR";

// Hosted text-generation services we know how to reach.
// Both speak the OpenAI chat completions protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Provider {
    #[default]
    Gemini,
    OpenAI,
}

impl Provider {
    pub fn api_key_var(self) -> &'static str {
        match self {
            Provider::Gemini => "GOOGLE_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }

    pub fn api_base(self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai",
            Provider::OpenAI => "https://api.openai.com/v1",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.0-flash",
            Provider::OpenAI => "gpt-4o-mini",
        }
    }
}

// Everything the game needs from its environment, read once at startup
// and passed by reference from there on.
#[derive(Clone)]
pub struct Settings {
    pub provider: Provider,
    api_key: String,
    pub model: String,
    pub log_level: LevelFilter,
    pub log_dir: Option<PathBuf>, // None falls back to the home directory.
}

impl Settings {
    pub fn new(provider: Provider, api_key: impl Into<String>) -> Self {
        Settings {
            provider,
            api_key: api_key.into(),
            model: provider.default_model().to_string(),
            log_level: LevelFilter::Info,
            log_dir: None,
        }
    }

    // Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Build settings from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let provider = match read(PROVIDER_VAR) {
            Some(name) => name
                .parse::<Provider>()
                .map_err(|_| ConfigError::InvalidProvider(name))?,
            None => Provider::default(),
        };

        let api_key_var = provider.api_key_var();
        let api_key = read(api_key_var).ok_or(ConfigError::MissingApiKey { var: api_key_var })?;

        let mut settings = Settings::new(provider, api_key);

        if let Some(model) = read(MODEL_VAR) {
            settings.model = model;
        }

        if let Some(level) = read(LOG_LEVEL_VAR) {
            settings.log_level = level
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }

        settings.log_dir = read(LOG_DIR_VAR).map(PathBuf::from);

        Ok(settings)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// The API key must never end up in a log line.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}
