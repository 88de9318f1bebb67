use bolacli::management::{FloodError, FloodRegistry};
use bolacli::types::FloodReport;
use tempfile::TempDir;

fn create_test_report(water_level: u8) -> FloodReport {
    FloodReport {
        water_level,
        blocked_roads: "Rua da Consolação".to_string(),
        power_outage: "yes".to_string(),
        water_outage: "no".to_string(),
        notes: String::new(),
    }
}

fn open_registry(dir: &TempDir) -> FloodRegistry {
    FloodRegistry::open(dir.path().join("floods.json"))
}

#[tokio::test]
async fn test_report_and_find() {
    let dir = TempDir::new().unwrap();
    let registry = open_registry(&dir);

    registry.report("Liberdade", create_test_report(3)).await.unwrap();

    assert!(registry.is_reported("Liberdade").await);
    assert_eq!(registry.find("Liberdade").await, Some(create_test_report(3)));
    // neighborhoods are matched exactly
    assert!(registry.find("liberdade").await.is_none());
}

#[tokio::test]
async fn test_second_report_for_a_neighborhood_is_rejected() {
    let dir = TempDir::new().unwrap();
    let registry = open_registry(&dir);

    registry.report("Liberdade", create_test_report(3)).await.unwrap();
    let again = registry.report("Liberdade", create_test_report(5)).await;

    assert!(matches!(again, Err(FloodError::AlreadyReported(ref n)) if n == "Liberdade"));
    assert_eq!(registry.find("Liberdade").await.unwrap().water_level, 3);
}

#[tokio::test]
async fn test_invalid_reports() {
    let dir = TempDir::new().unwrap();
    let registry = open_registry(&dir);

    let blank = registry.report("  ", create_test_report(2)).await;
    let too_low = registry.report("Sé", create_test_report(0)).await;
    let too_high = registry.report("Sé", create_test_report(6)).await;

    assert!(matches!(blank, Err(FloodError::Invalid(_))));
    assert!(matches!(too_low, Err(FloodError::Invalid(_))));
    assert!(matches!(too_high, Err(FloodError::Invalid(_))));
    assert!(registry.list().await.is_empty());
    assert!(!dir.path().join("floods.json").exists());
}

#[tokio::test]
async fn test_list_is_ordered_by_neighborhood() {
    let dir = TempDir::new().unwrap();
    let registry = open_registry(&dir);

    for name in ["Pinheiros", "Bela Vista", "Mooca"] {
        registry.report(name, create_test_report(1)).await.unwrap();
    }

    let names: Vec<String> = registry.list().await.into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Bela Vista", "Mooca", "Pinheiros"]);
}

#[tokio::test]
async fn test_remove() {
    let dir = TempDir::new().unwrap();
    let registry = open_registry(&dir);
    registry.report("Pinheiros", create_test_report(4)).await.unwrap();

    let removed = registry.remove("Pinheiros").await.unwrap();
    assert_eq!(removed.water_level, 4);
    assert!(!registry.is_reported("Pinheiros").await);

    let missing = registry.remove("Pinheiros").await;
    assert!(matches!(missing, Err(FloodError::NotFound(_))));
}

#[tokio::test]
async fn test_reports_survive_reopening() {
    let dir = TempDir::new().unwrap();
    open_registry(&dir)
        .report("Butantã", create_test_report(2))
        .await
        .unwrap();

    let reopened = open_registry(&dir);
    assert!(reopened.is_reported("Butantã").await);
}
