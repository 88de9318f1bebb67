use bolacli::management::{JsonFileStore, StoreError};
use bolacli::types::{Favorite, FavoriteStats, FloodReport, FloodReports};
use tempfile::TempDir;

fn create_test_favorite(id: u32, name: &str) -> Favorite {
    Favorite {
        id,
        name: name.to_string(),
        club: "Corinthians".to_string(),
        season_year: "2022".to_string(),
        nickname: format!("{}-nick", name),
        note: "ação e emoção".to_string(),
        statistics: FavoriteStats {
            position: "Midfielder".to_string(),
            appearances: 20,
            goals: 4,
            assists: 9,
        },
    }
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("favorites.json"));
    let favorites = vec![create_test_favorite(1, "Tamires"), create_test_favorite(5, "Gabi")];

    store.save(&favorites).await.unwrap();
    let loaded: Vec<Favorite> = store.try_load().await.unwrap();

    assert_eq!(loaded, favorites);
}

#[tokio::test]
async fn test_save_then_load_empty_collection() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("favorites.json"));

    store.save(&Vec::<Favorite>::new()).await.unwrap();
    let loaded: Vec<Favorite> = store.load().await;

    assert!(loaded.is_empty());
    assert!(store.path().exists());
}

#[tokio::test]
async fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("does-not-exist.json"));

    let loaded: Vec<Favorite> = store.try_load().await.unwrap();
    assert!(loaded.is_empty());

    let loaded: Vec<Favorite> = store.load().await;
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_corrupt_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    std::fs::write(&path, "[{\"id\": 1, \"name\": ").unwrap();
    let store = JsonFileStore::new(&path);

    let result: Result<Vec<Favorite>, StoreError> = store.try_load().await;
    assert!(matches!(result, Err(StoreError::SerdeError(_))));

    let loaded: Vec<Favorite> = store.load().await;
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_empty_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    std::fs::write(&path, "").unwrap();

    let loaded: Vec<Favorite> = JsonFileStore::new(&path).load().await;
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_unreadable_path_loads_empty() {
    let dir = TempDir::new().unwrap();
    // reading a directory is an I/O error, not a missing file
    let store = JsonFileStore::new(dir.path());

    let result: Result<Vec<Favorite>, StoreError> = store.try_load().await;
    assert!(matches!(result, Err(StoreError::IoError(_))));

    let loaded: Vec<Favorite> = store.load().await;
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("favorites.json");
    let store = JsonFileStore::new(&path);

    store.save(&vec![create_test_favorite(1, "Marta")]).await.unwrap();

    assert!(path.is_file());
}

#[tokio::test]
async fn test_save_overwrites_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("favorites.json"));

    store
        .save(&vec![create_test_favorite(1, "A"), create_test_favorite(2, "B")])
        .await
        .unwrap();
    store.save(&vec![create_test_favorite(3, "C")]).await.unwrap();

    let loaded: Vec<Favorite> = store.try_load().await.unwrap();
    assert_eq!(loaded, vec![create_test_favorite(3, "C")]);

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(files.len(), 1);
}

#[tokio::test]
async fn test_keeps_non_ascii_text() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("favorites.json"));

    store.save(&vec![create_test_favorite(1, "Bárbara")]).await.unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("Bárbara"));
    assert!(content.contains("ação e emoção"));
}

#[tokio::test]
async fn test_keyed_collection_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("floods.json"));
    let mut reports = FloodReports::new();
    reports.insert(
        "Centro".to_string(),
        FloodReport {
            water_level: 4,
            blocked_roads: "Av. Paulista".to_string(),
            power_outage: "yes".to_string(),
            water_outage: "no".to_string(),
            notes: String::new(),
        },
    );

    store.save(&reports).await.unwrap();
    let loaded: FloodReports = store.try_load().await.unwrap();

    assert_eq!(loaded, reports);
}
