use thiserror::Error;

// Top level errors surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError), // Bad or missing environment at startup.

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error), // Terminal read or write failures.
}

// Startup configuration errors. All of them abort before the game starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not found. Set {var} in the environment or in a .env file.")]
    MissingApiKey { var: &'static str },

    #[error("Unknown provider '{0}', expected 'gemini' or 'openai'")]
    InvalidProvider(String),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}

// Errors from a single exchange with the remote model.
// These never end the session, they are turned into narration instead.
#[derive(Debug, Error)]
pub enum AIError {
    #[error("OpenAI API error: {0}")]
    OpenAI(#[from] async_openai::error::OpenAIError),

    #[error("No message found")]
    NoMessageFound, // The provider answered with nothing usable.
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger already set: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}
