use crate::{
    football::client::{FootballClient, LookupError, Resource},
    types::TeamEntry,
};

impl FootballClient {
    /// Teams playing `league` in `season`.
    ///
    /// Uses `GET /teams?league={league}&season={season}`. An empty list is a
    /// valid answer; the caller decides how to report it.
    pub async fn teams(&self, league: u32, season: &str) -> Result<Vec<TeamEntry>, LookupError> {
        let params = [("league", league.to_string()), ("season", season.to_string())];
        let teams = self.query(Resource::Teams, &params).await?;
        Ok(teams.into_vec())
    }
}
