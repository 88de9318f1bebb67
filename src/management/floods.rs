use std::{fmt, ops::RangeInclusive, path::PathBuf};

use crate::{
    management::store::{JsonFileStore, StoreError},
    types::{FloodReport, FloodReports},
};

pub const WATER_LEVELS: RangeInclusive<u8> = 1..=5;

#[derive(Debug)]
pub enum FloodError {
    AlreadyReported(String),
    NotFound(String),
    Invalid(String),
    StoreError(StoreError),
}

impl From<StoreError> for FloodError {
    fn from(err: StoreError) -> Self {
        FloodError::StoreError(err)
    }
}

impl fmt::Display for FloodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloodError::AlreadyReported(n) => write!(f, "a flood in {} was already reported", n),
            FloodError::NotFound(n) => write!(f, "no flood reported in {}", n),
            FloodError::Invalid(reason) => write!(f, "invalid report: {}", reason),
            FloodError::StoreError(e) => write!(f, "failed to save flood reports: {}", e),
        }
    }
}

impl std::error::Error for FloodError {}

/// Flood reports keyed by neighborhood, one report per neighborhood.
pub struct FloodRegistry {
    store: JsonFileStore,
}

impl FloodRegistry {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileStore::new(path))
    }

    pub async fn is_reported(&self, neighborhood: &str) -> bool {
        self.find(neighborhood).await.is_some()
    }

    pub async fn report(&self, neighborhood: &str, report: FloodReport) -> Result<(), FloodError> {
        if neighborhood.trim().is_empty() {
            return Err(FloodError::Invalid("neighborhood is empty".to_string()));
        }
        if !WATER_LEVELS.contains(&report.water_level) {
            return Err(FloodError::Invalid(format!(
                "water level {} is outside 1 to 5",
                report.water_level
            )));
        }

        let mut reports: FloodReports = self.store.load().await;
        if reports.contains_key(neighborhood) {
            return Err(FloodError::AlreadyReported(neighborhood.to_string()));
        }

        reports.insert(neighborhood.to_string(), report);
        self.store.save(&reports).await?;
        Ok(())
    }

    pub async fn find(&self, neighborhood: &str) -> Option<FloodReport> {
        let mut reports: FloodReports = self.store.load().await;
        reports.remove(neighborhood)
    }

    pub async fn remove(&self, neighborhood: &str) -> Result<FloodReport, FloodError> {
        let mut reports: FloodReports = self.store.load().await;
        let removed = reports
            .remove(neighborhood)
            .ok_or_else(|| FloodError::NotFound(neighborhood.to_string()))?;

        self.store.save(&reports).await?;
        Ok(removed)
    }

    /// All reports ordered by neighborhood.
    pub async fn list(&self) -> Vec<(String, FloodReport)> {
        let reports: FloodReports = self.store.load().await;
        reports.into_iter().collect()
    }
}
