use std::io::{Cursor, ErrorKind};

use bolacli::cli::{Prompter, favorites_menu, floods_menu, run_session};
use bolacli::config::Config;
use bolacli::management::{FavoritesRegistry, FloodRegistry};
use bolacli::types::{FavoriteStats, NewFavorite};
use tempfile::TempDir;

// Helper function to build a prompter over scripted input
fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(prompt: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(prompt.into_output()).unwrap()
}

fn create_new_favorite(name: &str) -> NewFavorite {
    NewFavorite {
        name: name.to_string(),
        club: "Palmeiras".to_string(),
        season_year: "2023".to_string(),
        nickname: "old nick".to_string(),
        note: "old note".to_string(),
        statistics: FavoriteStats {
            position: "Goalkeeper".to_string(),
            appearances: 30,
            goals: 0,
            assists: 1,
        },
    }
}

async fn registry_with(dir: &TempDir, names: &[&str]) -> FavoritesRegistry {
    let mut registry = FavoritesRegistry::open(dir.path().join("favorites.json"));
    for name in names {
        registry.add(create_new_favorite(name)).await.unwrap();
    }
    registry
}

#[test]
fn test_choose_reprompts_until_allowed() {
    let mut prompt = scripted("9\n\nb\n2\n");

    let choice = prompt
        .choose("Pick:", &["1", "2", "3"], "Invalid option.")
        .unwrap();

    assert_eq!(choice, "2");
    assert_eq!(output_of(prompt).matches("Invalid option.").count(), 3);
}

#[test]
fn test_integer_rejects_non_numbers() {
    let mut prompt = scripted("abc\n-3\n4.5\n 7 \n");

    assert_eq!(prompt.integer("Id:").unwrap(), 7);
    assert_eq!(
        output_of(prompt)
            .matches("Please enter a whole number.")
            .count(),
        3
    );
}

#[test]
fn test_required_rejects_blank_input() {
    let mut prompt = scripted("\n   \nVila Madalena\n");

    assert_eq!(prompt.required("Neighborhood:").unwrap(), "Vila Madalena");
}

#[test]
fn test_number_in_range() {
    let mut prompt = scripted("0\n6\nhigh\n5\n");

    let level: u8 = prompt.number_in("Level:", 1..=5, "Out of range.").unwrap();

    assert_eq!(level, 5);
    assert_eq!(output_of(prompt).matches("Out of range.").count(), 3);
}

#[test]
fn test_confirm() {
    assert!(scripted("maybe\ny\n").confirm("Add?").unwrap());
    assert!(!scripted("n\n").confirm("Add?").unwrap());
}

#[test]
fn test_end_of_input_is_an_error() {
    let mut prompt = scripted("");
    let err = prompt.text("Anything:").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);

    let mut prompt = scripted("x\n");
    let err = prompt.choose("Pick:", &["1"], "no").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[tokio::test]
async fn test_favorites_menu_updates_nickname() {
    let dir = TempDir::new().unwrap();
    let registry = registry_with(&dir, &["Lelê", "Bia"]).await;
    // update -> id 2 -> new nickname, keep note -> back
    let mut prompt = scripted("3\n2\nZaneratto\n\n5\n");

    favorites_menu(&mut prompt, &registry).await.unwrap();

    let favorites = registry.list(None).await;
    assert_eq!(favorites[1].nickname, "Zaneratto");
    assert_eq!(favorites[1].note, "old note");
    assert_eq!(favorites[0].nickname, "old nick");
}

#[tokio::test]
async fn test_favorites_menu_delete_retries_unknown_id() {
    let dir = TempDir::new().unwrap();
    let registry = registry_with(&dir, &["Lelê", "Bia"]).await;
    // delete -> not a number -> unknown id -> id 1 -> back
    let mut prompt = scripted("4\nabc\n9\n1\n5\n");

    favorites_menu(&mut prompt, &registry).await.unwrap();

    let favorites = registry.list(None).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].name, "Bia");
}

#[tokio::test]
async fn test_favorites_menu_cancel_and_empty_list() {
    let dir = TempDir::new().unwrap();
    let registry = registry_with(&dir, &[]).await;
    // update and delete on an empty list do not ask for an id
    let mut prompt = scripted("3\n4\n1\n2\nmarta\n5\n");

    favorites_menu(&mut prompt, &registry).await.unwrap();
    assert!(registry.list(None).await.is_empty());

    let registry = registry_with(&dir, &["Lelê"]).await;
    let mut prompt = scripted("4\n0\n5\n");
    favorites_menu(&mut prompt, &registry).await.unwrap();
    assert_eq!(registry.list(None).await.len(), 1);
}

#[tokio::test]
async fn test_session_without_api_key_still_manages_favorites() {
    let dir = TempDir::new().unwrap();
    let favorites_path = dir.path().join("favorites.json");
    let floods_path = dir.path().join("floods.json");
    let config = Config::from_lookup(|var| match var {
        "BOLACLI_FAVORITES_FILE" => Some(favorites_path.display().to_string()),
        "BOLACLI_FLOODS_FILE" => Some(floods_path.display().to_string()),
        _ => None,
    })
    .unwrap();
    let mut registry = registry_with(&dir, &["Lelê"]).await;
    // lookup is refused -> favorites -> delete id 1 -> back -> exit
    let mut prompt = scripted("1\n2\n4\n1\n5\n3\n");

    run_session(&mut prompt, &config, None, &mut registry)
        .await
        .unwrap();

    assert!(registry.list(None).await.is_empty());
    let output = output_of(prompt);
    assert_eq!(output.matches("--- Main Menu ---").count(), 3);
    assert_eq!(output.matches("--- Favorites ---").count(), 2);
}

#[tokio::test]
async fn test_session_ends_on_closed_input() {
    let dir = TempDir::new().unwrap();
    let config = Config::from_lookup(|_| None).unwrap();
    let mut registry = registry_with(&dir, &[]).await;
    let mut prompt = scripted("2\n");

    let err = run_session(&mut prompt, &config, None, &mut registry)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[tokio::test]
async fn test_floods_menu_insert_search_and_delete() {
    let dir = TempDir::new().unwrap();
    let registry = FloodRegistry::open(dir.path().join("floods.json"));
    let input = concat!(
        "i\nCentro\n7\n3\nRua Augusta\nyes\nno\n\n",  // insert, level 7 rejected
        "I\nCentro\n",                                  // duplicate, nothing asked
        "x\n",                                          // invalid option
        "p\nCentro\n",
        "l\n",
        "I\nMooca\n2\nRua da Mooca\nno\nno\nfallen tree\n",
        "e\nCentro\n",
        "s\n",
    );
    let mut prompt = scripted(input);

    floods_menu(&mut prompt, &registry).await.unwrap();

    let output = output_of(prompt);
    assert!(output.contains("Neighborhood: Centro"));
    assert!(output.contains("Water level: 3"));
    assert!(output.contains("Blocked roads: Rua Augusta"));

    let reports = registry.list().await;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, "Mooca");
    assert_eq!(reports[0].1.water_level, 2);
    assert_eq!(reports[0].1.notes, "fallen tree");
}
