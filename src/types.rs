use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub errors: serde_json::Value,
    #[serde(default)]
    pub response: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamEntry {
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub country: Option<String>,
    pub founded: Option<u32>,
}

#[derive(Tabled)]
pub struct TeamTableRow {
    pub id: u64,
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub player: Player,
    #[serde(default)]
    pub statistics: Vec<Statistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Tabled)]
pub struct PlayerTableRow {
    pub id: u64,
    pub name: String,
    pub nationality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub team: NamedRef,
    pub league: NamedRef,
    pub games: Games,
    pub goals: Goals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Games {
    /// The service spells it this way.
    pub appearences: Option<u32>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goals {
    pub total: Option<u32>,
    pub assists: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteStats {
    pub position: String,
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
}

impl From<&Statistics> for FavoriteStats {
    fn from(stats: &Statistics) -> Self {
        Self {
            position: stats.games.position.clone().unwrap_or_default(),
            appearances: stats.games.appearences.unwrap_or(0),
            goals: stats.goals.total.unwrap_or(0),
            assists: stats.goals.assists.unwrap_or(0),
        }
    }
}

/// A favorite player as stored in the favorites file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u32,
    pub name: String,
    pub club: String,
    pub season_year: String,
    pub nickname: String,
    pub note: String,
    pub statistics: FavoriteStats,
}

/// A favorite before the registry has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub name: String,
    pub club: String,
    pub season_year: String,
    pub nickname: String,
    pub note: String,
    pub statistics: FavoriteStats,
}

impl NewFavorite {
    /// Captures a looked-up player; nickname and note start empty.
    pub fn from_lookup(player: &Player, stats: &Statistics, club: &str, season_year: &str) -> Self {
        Self {
            name: utils::player_full_name(player),
            club: club.to_string(),
            season_year: season_year.to_string(),
            nickname: String::new(),
            note: String::new(),
            statistics: FavoriteStats::from(stats),
        }
    }

    pub fn with_id(self, id: u32) -> Favorite {
        Favorite {
            id,
            name: self.name,
            club: self.club,
            season_year: self.season_year,
            nickname: self.nickname,
            note: self.note,
            statistics: self.statistics,
        }
    }
}

#[derive(Tabled)]
pub struct FavoriteTableRow {
    pub id: u32,
    pub name: String,
    pub nickname: String,
    pub note: String,
    pub club: String,
    pub season: String,
}

impl From<Favorite> for FavoriteTableRow {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id,
            name: f.name,
            nickname: f.nickname,
            note: f.note,
            club: f.club,
            season: f.season_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloodReport {
    pub water_level: u8,
    pub blocked_roads: String,
    pub power_outage: String,
    pub water_outage: String,
    #[serde(default)]
    pub notes: String,
}

/// Flood reports keyed by neighborhood.
pub type FloodReports = BTreeMap<String, FloodReport>;

#[derive(Tabled)]
pub struct FloodTableRow {
    pub neighborhood: String,
    pub water_level: u8,
    pub blocked_roads: String,
    pub power_outage: String,
    pub water_outage: String,
    pub notes: String,
}

impl From<(String, FloodReport)> for FloodTableRow {
    fn from((neighborhood, r): (String, FloodReport)) -> Self {
        Self {
            neighborhood,
            water_level: r.water_level,
            blocked_roads: r.blocked_roads,
            power_outage: r.power_outage,
            water_outage: r.water_outage,
            notes: r.notes,
        }
    }
}
