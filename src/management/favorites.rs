use std::{fmt, path::PathBuf};

use crate::{
    management::store::{JsonFileStore, StoreError},
    types::{Favorite, NewFavorite},
    utils,
};

#[derive(Debug)]
pub enum RegistryError {
    /// The snapshot had no records to look in.
    Empty,
    NotFound(u32),
    /// Every id up to `u32::MAX` is already taken.
    IdExhausted,
    StoreError(StoreError),
}

impl RegistryError {
    /// True when the id could not be located, including in an empty list.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::Empty | RegistryError::NotFound(_))
    }
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        RegistryError::StoreError(err)
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Empty => write!(f, "the favorites list is empty"),
            RegistryError::NotFound(id) => write!(f, "no favorite with id {}", id),
            RegistryError::IdExhausted => write!(f, "no free favorite id left"),
            RegistryError::StoreError(e) => write!(f, "failed to save favorites: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Favorite players kept in a JSON file.
///
/// Ids are `max(existing) + 1`. The registry also remembers the highest id it
/// handed out so an id freed by a delete is not assigned again in the same
/// run.
pub struct FavoritesRegistry {
    store: JsonFileStore,
    last_assigned: u32,
}

impl FavoritesRegistry {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store,
            last_assigned: 0,
        }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileStore::new(path))
    }

    /// Appends a favorite and returns its id.
    ///
    /// The record only counts as added once the file was written.
    pub async fn add(&mut self, favorite: NewFavorite) -> Result<u32, RegistryError> {
        let mut favorites: Vec<Favorite> = self.store.load().await;
        let id = utils::next_id(&favorites)
            .zip(self.last_assigned.checked_add(1))
            .map(|(next, after_last)| next.max(after_last))
            .ok_or(RegistryError::IdExhausted)?;

        favorites.push(favorite.with_id(id));
        self.store.save(&favorites).await?;

        self.last_assigned = id;
        Ok(id)
    }

    /// Returns all favorites in stored order, or those matching `filter`.
    pub async fn list(&self, filter: Option<&str>) -> Vec<Favorite> {
        let mut favorites: Vec<Favorite> = self.store.load().await;
        if let Some(term) = filter.map(str::trim).filter(|t| !t.is_empty()) {
            favorites.retain(|f| utils::favorite_matches(f, term));
        }
        favorites
    }

    /// Replaces the nickname and/or note of the favorite with `id`.
    ///
    /// `snapshot` is the collection the caller listed before asking for the
    /// id. Blank values leave the field untouched.
    pub async fn update(
        &self,
        mut snapshot: Vec<Favorite>,
        id: u32,
        nickname: Option<&str>,
        note: Option<&str>,
    ) -> Result<Favorite, RegistryError> {
        if snapshot.is_empty() {
            return Err(RegistryError::Empty);
        }

        let favorite = snapshot
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        if let Some(nickname) = non_blank(nickname) {
            favorite.nickname = nickname.to_string();
        }
        if let Some(note) = non_blank(note) {
            favorite.note = note.to_string();
        }
        let updated = favorite.clone();

        self.store.save(&snapshot).await?;
        Ok(updated)
    }

    /// Removes the favorite with `id` from `snapshot` and saves the rest.
    pub async fn delete(
        &self,
        mut snapshot: Vec<Favorite>,
        id: u32,
    ) -> Result<Favorite, RegistryError> {
        if snapshot.is_empty() {
            return Err(RegistryError::Empty);
        }

        let index = snapshot
            .iter()
            .position(|f| f.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        let removed = snapshot.remove(index);

        self.store.save(&snapshot).await?;
        Ok(removed)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
