use crate::model::{
    ids::{LevelId, RunId},
    level::LevelInfo,
    run::{Run, RunDetails},
};

use super::gameapi::{
    client::{ApiClient, ClientInitError, GameApi, RequestError},
    parsing::{leaderboard::normalize_leaderboard, level::parse_level_info, run::parse_run_details},
};

/// Mediates between the API client and the parsed models. Nothing is cached;
/// every call is one upstream round trip.
pub struct DataManager {
    api: Box<dyn GameApi>,
}

impl DataManager {
    pub fn new() -> Result<Self, ClientInitError> {
        let client = ApiClient::new()?;
        Ok(Self::with_api(Box::new(client)))
    }

    /// Substitutes the upstream, used by tests to run without a network.
    pub fn with_api(api: Box<dyn GameApi>) -> Self {
        Self { api }
    }

    pub fn get_level_info(&self, level_id: &LevelId) -> DataRetrievalResult<LevelInfo> {
        let json = self.api.level_details(level_id)?;
        Ok(parse_level_info(&json))
    }

    pub fn get_leaderboard(&self, level_id: &LevelId) -> DataRetrievalResult<Vec<Run>> {
        let json = self.api.leaderboard(level_id)?;
        Ok(normalize_leaderboard(&json))
    }

    pub fn get_run_details(&self, run_id: &RunId) -> DataRetrievalResult<RunDetails> {
        let json = self.api.run_details(run_id)?;
        Ok(parse_run_details(&json))
    }
}

pub type DataRetrievalResult<T> = Result<T, RequestError>;
