use clap::Parser;
use console_game::config::{Cli, GameConfig};
use console_game::{game, status};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_cli(Cli::parse());
    log::debug!("Config: {:?}", config);

    let (character, summary) = match game::new_game(&config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to load item catalog: {}", e);
            return Err(e.into());
        }
    };

    log::info!(
        "{} starts with {} items ({} rejected)",
        character.name(),
        summary.added,
        summary.rejected.len()
    );

    status::show_status(&character)?;

    Ok(())
}
