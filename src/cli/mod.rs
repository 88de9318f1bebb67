//! # CLI Module
//!
//! The console layer of bolacli: interactive menus, input validation and the
//! one-shot commands wired up in `main.rs`.
//!
//! ## Command Categories
//!
//! ### Interactive
//!
//! - [`session`] - Main menu: statistics lookup and favorites management
//! - [`floods`] - Flood report registry menu
//!
//! ### Favorites
//!
//! - [`list_favorites`] - Prints favorites, optionally filtered by a search term
//! - [`update_favorite`] - Changes nickname and/or note of one favorite
//! - [`delete_favorite`] - Removes one favorite
//!
//! ### Lookups
//!
//! - [`list_teams`] - Teams of the configured league in a season
//! - [`list_players`] - Players of a team in a season
//!
//! ## Input Handling
//!
//! All prompting goes through [`Prompter`], which re-asks until the answer
//! is valid (menu choice in the allowed set, whole-number id, non-empty
//! required field). Closing stdin ends the session without an error exit.
//! The menu functions are generic over the reader and writer so they can be
//! driven from tests.

mod favorites;
mod floods;
mod lookup;
mod prompt;
mod session;

pub use favorites::delete_favorite;
pub use favorites::favorites_menu;
pub use favorites::list_favorites;
pub use favorites::show_favorites;
pub use favorites::update_favorite;
pub use floods::floods;
pub use floods::floods_menu;
pub use lookup::list_players;
pub use lookup::list_teams;
pub use lookup::lookup;
pub use prompt::Prompter;
pub use session::run_session;
pub use session::session;
