use std::io;

use ai_adventure::{
    ai::GameAI,
    app::{App, terminal_width},
    error::AppError,
    logging,
    settings::Settings,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    // A missing .env is fine, the variables may come from the shell.
    let _ = dotenvy::dotenv();
    color_eyre::install()?;

    start().await?;
    Ok(())
}

async fn start() -> Result<(), AppError> {
    let settings = Settings::from_env()?;

    let log_dir = settings
        .log_dir
        .clone()
        .unwrap_or_else(logging::default_log_dir);
    match logging::init(&log_dir, settings.log_level) {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {e}"),
    }
    log::info!("Session started: {settings:?}");

    let narrator = GameAI::new(&settings);
    log::debug!("Narrator model: {}", narrator.model());

    let mut app = App::new(narrator, io::stdin().lock(), io::stdout().lock())
        .wrap_width(terminal_width());
    let mut rng = rand::rng();
    app.run(&mut rng).await
}
