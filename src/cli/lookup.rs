use std::io::{self, BufRead, Write};

use tabled::Table;

use crate::{
    cli::prompt::Prompter,
    config::Config,
    error,
    football::{FootballClient, LookupError},
    info,
    management::FavoritesRegistry,
    success,
    types::{NewFavorite, Player, PlayerEntry, PlayerTableRow, Statistics, TeamEntry, TeamTableRow},
    warning,
};

/// Season → team → player → statistics, then an offer to keep the player.
pub async fn lookup<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    client: &FootballClient,
    config: &Config,
    registry: &mut FavoritesRegistry,
) -> io::Result<()> {
    prompt.line("\n--- Women's Football Lookup ---")?;

    let season = prompt.choose(
        &format!("Which season? [{}]", config.seasons.join(", ")),
        config.seasons.as_slice(),
        "Season is not in the list!",
    )?;

    let teams = client
        .teams(config.league, &season)
        .await
        .unwrap_or_else(|e| {
            report_lookup_error(&e);
            Vec::new()
        });
    if teams.is_empty() {
        info!("No teams found for season {}.", season);
        return Ok(());
    }
    print_teams(&teams);

    let team_names: Vec<String> = teams.iter().map(|t| t.team.name.clone()).collect();
    let team_name = prompt.choose(
        "Which team's players do you want to see?",
        team_names.as_slice(),
        "Team is not in the list!",
    )?;
    let Some(team) = teams.iter().find(|t| t.team.name == team_name) else {
        return Ok(());
    };

    info!("Fetching players of {}", team_name);
    let players = client
        .players(team.team.id, &season)
        .await
        .unwrap_or_else(|e| {
            report_lookup_error(&e);
            Vec::new()
        });
    if players.is_empty() {
        info!("No players found for {}.", team_name);
        return Ok(());
    }
    print_players(&players);

    let player_names: Vec<String> = players.iter().map(|p| p.player.name.clone()).collect();
    let player_name = prompt.choose(
        "Which player's statistics do you want to see?",
        player_names.as_slice(),
        "Player is not in the list!",
    )?;
    let Some(chosen) = players.iter().find(|p| p.player.name == player_name) else {
        return Ok(());
    };

    info!("Fetching statistics of {}", player_name);
    let entry = match client.player(chosen.player.id, &season).await {
        Ok(entry) => entry,
        Err(e) => {
            report_lookup_error(&e);
            info!("No statistics found for this player in season {}.", season);
            return Ok(());
        }
    };
    let Some(stats) = entry.statistics.first() else {
        info!("No statistics found for this player in season {}.", season);
        return Ok(());
    };

    print_statistics(prompt, &entry.player, stats)?;
    offer_favorite(prompt, registry, &entry.player, stats, &team_name, &season).await
}

async fn offer_favorite<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    registry: &mut FavoritesRegistry,
    player: &Player,
    stats: &Statistics,
    club: &str,
    season: &str,
) -> io::Result<()> {
    if !prompt.confirm("Add this player to your favorites?")? {
        return Ok(());
    }

    let mut favorite = NewFavorite::from_lookup(player, stats, club, season);
    favorite.nickname = prompt.text("Nickname (optional, leave blank to skip):")?;
    favorite.note = prompt.text("Note (optional, leave blank to skip):")?;

    let name = favorite.name.clone();
    match registry.add(favorite).await {
        Ok(id) => success!("'{}' added to favorites with id {}.", name, id),
        Err(e) => warning!("Failed to save favorite. Err: {}", e),
    }
    Ok(())
}

fn report_lookup_error(e: &LookupError) {
    warning!("Lookup failed [{}]: {}", e.classification(), e);
}

fn print_teams(teams: &[TeamEntry]) {
    let rows: Vec<TeamTableRow> = teams
        .iter()
        .map(|t| TeamTableRow {
            id: t.team.id,
            name: t.team.name.clone(),
            country: t.team.country.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn print_players(players: &[PlayerEntry]) {
    let rows: Vec<PlayerTableRow> = players
        .iter()
        .map(|p| PlayerTableRow {
            id: p.player.id,
            name: p.player.name.clone(),
            nationality: p.player.nationality.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn print_statistics<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    player: &Player,
    stats: &Statistics,
) -> io::Result<()> {
    let report = format!(
        "\n--- Statistics of {} ({}) ---\n\
         Team: {}\n\
         League: {}\n\
         Position: {}\n\
         Appearances: {}\n\
         Goals: {}\n\
         Assists: {}",
        crate::utils::player_full_name(player),
        player.name,
        stats.team.name.as_deref().unwrap_or("-"),
        stats.league.name.as_deref().unwrap_or("-"),
        stats.games.position.as_deref().unwrap_or("-"),
        stats.games.appearences.unwrap_or(0),
        stats.goals.total.unwrap_or(0),
        stats.goals.assists.unwrap_or(0),
    );
    prompt.line(&report)
}

fn api_client(config: &Config) -> FootballClient {
    let api = match config.api() {
        Ok(api) => api.clone(),
        Err(e) => error!("Cannot look up statistics. Err: {}", e),
    };
    match FootballClient::new(api) {
        Ok(client) => client,
        Err(e) => error!("Cannot build the API client. Err: {}", e),
    }
}

/// One-shot `teams` command.
pub async fn list_teams(config: &Config, season: &str) {
    let client = api_client(config);
    match client.teams(config.league, season).await {
        Ok(teams) if teams.is_empty() => info!("No teams found for season {}.", season),
        Ok(teams) => print_teams(&teams),
        Err(e) => report_lookup_error(&e),
    }
}

/// One-shot `players` command.
pub async fn list_players(config: &Config, team: u64, season: &str) {
    let client = api_client(config);
    match client.players(team, season).await {
        Ok(players) if players.is_empty() => info!("No players found for team {}.", team),
        Ok(players) => print_players(&players),
        Err(e) => report_lookup_error(&e),
    }
}
