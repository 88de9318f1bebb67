use crate::{
    football::client::{FootballClient, LookupError, Normalized, Resource},
    types::PlayerEntry,
};

impl FootballClient {
    /// Squad of `team` in `season`, via `GET /players?team={team}&season={season}`.
    ///
    /// Only the first page is requested.
    pub async fn players(&self, team: u64, season: &str) -> Result<Vec<PlayerEntry>, LookupError> {
        let params = [("team", team.to_string()), ("season", season.to_string())];
        let players = self.query(Resource::Players, &params).await?;
        Ok(players.into_vec())
    }

    /// One player with their statistics for `season`.
    ///
    /// Uses `GET /players?id={id}&season={season}`; an empty response is
    /// [`LookupError::NotFound`].
    pub async fn player(&self, id: u64, season: &str) -> Result<PlayerEntry, LookupError> {
        let params = [("id", id.to_string()), ("season", season.to_string())];
        match self.query(Resource::Players, &params).await? {
            Normalized::One(player) => Ok(player),
            Normalized::Many(players) => players.into_iter().next().ok_or(LookupError::NotFound),
        }
    }
}
