use std::io::{self, BufRead, Write};

use tabled::Table;

use crate::{
    cli::prompt::Prompter,
    info,
    management::{FavoritesRegistry, RegistryError},
    success,
    types::{Favorite, FavoriteTableRow},
    warning,
};

const MENU: &str = "\n--- Favorites ---\n\
1 - List all favorites\n\
2 - Search favorites (name, nickname or note)\n\
3 - Change the nickname/note of a favorite\n\
4 - Delete a favorite\n\
5 - Back to the main menu";
const MENU_OPTIONS: &[&str] = &["1", "2", "3", "4", "5"];

/// The favorites submenu: list, search, update, delete, back.
pub async fn favorites_menu<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    registry: &FavoritesRegistry,
) -> io::Result<()> {
    loop {
        prompt.line(MENU)?;

        let choice = prompt.choose("Choose an option:", MENU_OPTIONS, "Invalid option.")?;
        match choice.as_str() {
            "1" => {
                show_favorites(registry, None).await;
            }
            "2" => {
                let term = prompt.text("Search term (name, nickname or note):")?;
                show_favorites(registry, Some(&term)).await;
            }
            "3" => {
                let snapshot = show_favorites(registry, None).await;
                update_interactive(prompt, registry, snapshot).await?;
            }
            "4" => {
                let snapshot = show_favorites(registry, None).await;
                delete_interactive(prompt, registry, snapshot).await?;
            }
            _ => return Ok(()),
        }
    }
}

/// Prints the (filtered) favorites and returns what was printed.
pub async fn show_favorites(registry: &FavoritesRegistry, filter: Option<&str>) -> Vec<Favorite> {
    let favorites = registry.list(filter).await;

    if favorites.is_empty() {
        match filter.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => info!("No favorite matches '{}'.", term),
            None => info!("The favorites list is empty."),
        }
        return favorites;
    }

    let rows: Vec<FavoriteTableRow> = favorites.iter().cloned().map(Into::into).collect();
    println!("{}", Table::new(rows));
    favorites
}

async fn update_interactive<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    registry: &FavoritesRegistry,
    snapshot: Vec<Favorite>,
) -> io::Result<()> {
    if snapshot.is_empty() {
        info!("There are no favorites to update.");
        return Ok(());
    }

    loop {
        let id = prompt.integer("Id of the favorite to change (0 to cancel):")?;
        if id == 0 {
            info!("Update cancelled.");
            return Ok(());
        }

        let Some(current) = snapshot.iter().find(|f| f.id == id) else {
            warning!("Id {} is not in the favorites list.", id);
            continue;
        };
        info!(
            "Changing {} | {} | nickname: '{}' | note: '{}'",
            current.id, current.name, current.nickname, current.note
        );

        let nickname = prompt.text("New nickname (leave blank to keep):")?;
        let note = prompt.text("New note (leave blank to keep):")?;

        match registry
            .update(snapshot, id, Some(&nickname), Some(&note))
            .await
        {
            Ok(updated) => success!("Favorite {} updated.", updated.id),
            Err(e) => warning!("Cannot update favorite. Err: {}", e),
        }
        return Ok(());
    }
}

async fn delete_interactive<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    registry: &FavoritesRegistry,
    snapshot: Vec<Favorite>,
) -> io::Result<()> {
    if snapshot.is_empty() {
        info!("There are no favorites to delete.");
        return Ok(());
    }

    loop {
        let id = prompt.integer("Id of the favorite to delete (0 to cancel):")?;
        if id == 0 {
            info!("Delete cancelled.");
            return Ok(());
        }

        match registry.delete(snapshot.clone(), id).await {
            Ok(removed) => {
                success!("Favorite {} ({}) deleted.", removed.id, removed.name);
                return Ok(());
            }
            Err(RegistryError::NotFound(id)) => {
                warning!("Id {} is not in the favorites list.", id);
            }
            Err(e) => {
                warning!("Cannot delete favorite. Err: {}", e);
                return Ok(());
            }
        }
    }
}

pub async fn list_favorites(registry: &FavoritesRegistry, search: Option<String>) {
    show_favorites(registry, search.as_deref()).await;
}

pub async fn update_favorite(
    registry: &FavoritesRegistry,
    id: u32,
    nickname: Option<String>,
    note: Option<String>,
) {
    let snapshot = registry.list(None).await;
    match registry
        .update(snapshot, id, nickname.as_deref(), note.as_deref())
        .await
    {
        Ok(updated) => success!(
            "Favorite {} updated: nickname '{}', note '{}'.",
            updated.id,
            updated.nickname,
            updated.note
        ),
        Err(RegistryError::Empty) => info!("There are no favorites to update."),
        Err(e) => warning!("Cannot update favorite. Err: {}", e),
    }
}

pub async fn delete_favorite(registry: &FavoritesRegistry, id: u32) {
    let snapshot = registry.list(None).await;
    match registry.delete(snapshot, id).await {
        Ok(removed) => success!("Favorite {} ({}) deleted.", removed.id, removed.name),
        Err(RegistryError::Empty) => info!("There are no favorites to delete."),
        Err(e) => warning!("Cannot delete favorite. Err: {}", e),
    }
}
