use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{Favorite, Player};

/// `max(existing ids) + 1`, or 1 for an empty collection.
///
/// `None` once `u32::MAX` is taken.
pub fn next_id(favorites: &[Favorite]) -> Option<u32> {
    favorites.iter().map(|f| f.id).max().unwrap_or(0).checked_add(1)
}

/// Case-insensitive substring match on name, nickname or note.
pub fn favorite_matches(favorite: &Favorite, term: &str) -> bool {
    let term = term.to_lowercase();
    [&favorite.name, &favorite.nickname, &favorite.note]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// "Firstname Lastname" when the service has both, the short name otherwise.
pub fn player_full_name(player: &Player) -> String {
    match (player.firstname.as_deref(), player.lastname.as_deref()) {
        (Some(first), Some(last)) if !first.trim().is_empty() || !last.trim().is_empty() => {
            format!("{} {}", first.trim(), last.trim()).trim().to_string()
        }
        _ => player.name.clone(),
    }
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
