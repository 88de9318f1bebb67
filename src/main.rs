use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use bolacli::{cli, config, error, management::FavoritesRegistry, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Defaults to the interactive session
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interactive menu: statistics lookup and favorites
    Session,

    /// Handle favorite players
    Favorites(FavoritesOptions),

    /// List the league's teams for a season
    Teams(TeamsOptions),

    /// List a team's players for a season
    Players(PlayersOptions),

    /// Interactive flood report registry
    Floods,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle favorite players",
    args_conflicts_with_subcommands = true // disallow mixing --search with subcommands
)]
pub struct FavoritesOptions {
    /// Only show favorites whose name, nickname or note contains this
    #[clap(long)]
    pub search: Option<String>,

    /// Subcommands under `favorites` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<FavoritesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesSubcommand {
    /// Change nickname and/or note
    Update(FavoritesUpdateOpts),

    /// Delete a favorite
    Delete(FavoritesDeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct FavoritesUpdateOpts {
    #[clap(long)]
    pub id: u32,

    #[clap(long)]
    pub nickname: Option<String>,

    #[clap(long)]
    pub note: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct FavoritesDeleteOpts {
    #[clap(long)]
    pub id: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct TeamsOptions {
    #[clap(long)]
    season: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayersOptions {
    /// Team id as shown by `teams`
    #[clap(long)]
    team: u64,
    #[clap(long)]
    season: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command.unwrap_or(Command::Session) {
        Command::Session => cli::session(&config).await,

        Command::Favorites(opt) => {
            let registry = FavoritesRegistry::open(&config.favorites_path);
            match opt.command {
                Some(FavoritesSubcommand::Update(u)) => {
                    cli::update_favorite(&registry, u.id, u.nickname, u.note).await
                }
                Some(FavoritesSubcommand::Delete(d)) => cli::delete_favorite(&registry, d.id).await,
                None => cli::list_favorites(&registry, opt.search).await,
            }
        }

        Command::Teams(opt) => cli::list_teams(&config, &opt.season).await,
        Command::Players(opt) => cli::list_players(&config, opt.team, &opt.season).await,
        Command::Floods => cli::floods(&config).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
