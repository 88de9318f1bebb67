use std::io::{self, BufRead, ErrorKind, Write};

use crate::{
    cli::{favorites::favorites_menu, lookup::lookup, prompt::Prompter},
    config::Config,
    football::FootballClient,
    info,
    management::FavoritesRegistry,
    warning,
};

const MENU: &str = "\n--- Main Menu ---\n\
1 - Look up player statistics\n\
2 - Manage favorite players\n\
3 - Exit";
const MENU_OPTIONS: &[&str] = &["1", "2", "3"];

/// Opens the football menu on stdin/stdout.
pub async fn session(config: &Config) {
    let client = match config.api.clone() {
        Some(api) => match FootballClient::new(api) {
            Ok(client) => Some(client),
            Err(e) => {
                warning!("Cannot build the API client. Err: {}", e);
                None
            }
        },
        None => None,
    };
    let mut registry = FavoritesRegistry::open(&config.favorites_path);
    let mut prompt = Prompter::stdio();

    finish(run_session(&mut prompt, config, client.as_ref(), &mut registry).await);
}

/// The main menu loop. `client` is `None` when no API key is configured.
pub async fn run_session<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    config: &Config,
    client: Option<&FootballClient>,
    registry: &mut FavoritesRegistry,
) -> io::Result<()> {
    info!("Welcome to the women's football information channel!");

    loop {
        prompt.line(MENU)?;

        let choice = prompt.choose("Choose an option:", MENU_OPTIONS, "Invalid option.")?;
        match choice.as_str() {
            "1" => match client {
                Some(client) => lookup(prompt, client, config, registry).await?,
                None => warning!(
                    "Set {} to look up statistics.",
                    crate::config::API_KEY_VAR
                ),
            },
            "2" => favorites_menu(prompt, registry).await?,
            _ => {
                info!("Closing the system...");
                return Ok(());
            }
        }
    }
}

/// Reports how an interactive session ended.
pub fn finish(result: io::Result<()>) {
    match result {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => info!("Input closed, leaving."),
        Err(e) => warning!("Console error. Err: {}", e),
    }
}
