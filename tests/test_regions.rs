//! Integration tests for the region keyword store.

use keyword_locator::regions::{
    JsonFileStore, KeywordListStore, RegionCatalog, CITY_LEVEL, DEFAULT_LEVEL, DISTRICT_LEVEL,
    PROVINCE_LEVEL,
};
use keyword_locator::Error;
use tempfile::tempdir;

#[test]
fn test_missing_file_is_seeded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("china_regions.json");
    let store = JsonFileStore::new(&path);

    let catalog = store.load().unwrap();
    assert_eq!(catalog, RegionCatalog::default_china());
    assert!(path.exists());

    let levels: Vec<&str> = catalog.levels().collect();
    assert_eq!(levels, vec![PROVINCE_LEVEL, CITY_LEVEL, DISTRICT_LEVEL]);
}

#[test]
fn test_seeded_file_is_readable_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regions.json");
    JsonFileStore::new(&path).load().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    // Names are written as UTF-8, not \u escapes
    assert!(content.contains("北京"));
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value[PROVINCE_LEVEL].is_array());
}

#[test]
fn test_keywords_exclude_level_labels() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("regions.json"));
    let keywords = store.keywords().unwrap();

    assert!(keywords.contains(&"北京".to_string()));
    assert!(!keywords.iter().any(|k| k == PROVINCE_LEVEL || k == CITY_LEVEL));
    assert_eq!(keywords.len(), RegionCatalog::default_china().len());
}

#[test]
fn test_edits_are_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regions.json");

    let store = JsonFileStore::new(&path);
    assert_eq!(store.add(CITY_LEVEL, "  珠海 ").unwrap(), "珠海");
    store.remove(PROVINCE_LEVEL, "北京").unwrap();
    store.rename(DISTRICT_LEVEL, "江岸", "江岸区").unwrap();

    let reopened = JsonFileStore::new(&path).load().unwrap();
    assert!(reopened.contains(CITY_LEVEL, "珠海"));
    assert_eq!(reopened.level(CITY_LEVEL).unwrap().last().unwrap(), "珠海");
    assert!(!reopened.contains(PROVINCE_LEVEL, "北京"));
    assert!(reopened.contains(DISTRICT_LEVEL, "江岸区"));
    assert!(!reopened.contains(DISTRICT_LEVEL, "江岸"));
}

#[test]
fn test_invalid_edits_are_rejected() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("regions.json"));

    assert!(matches!(
        store.add(PROVINCE_LEVEL, "上海"),
        Err(Error::DuplicateName { .. })
    ));
    assert!(matches!(store.add(PROVINCE_LEVEL, "   "), Err(Error::EmptyName)));
    assert!(matches!(store.add("县级", "昆山"), Err(Error::UnknownLevel(_))));
    assert!(matches!(
        store.remove(CITY_LEVEL, "不存在"),
        Err(Error::NameNotFound { .. })
    ));
}

#[test]
fn test_bare_array_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(&path, r#"["北京", "上海"]"#).unwrap();

    let catalog = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(catalog.level(DEFAULT_LEVEL).unwrap(), ["北京", "上海"]);
}

#[test]
fn test_nested_levels_are_flattened() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(&path, r#"{"华中": {"湖北": ["武汉", "宜昌"]}, "单独": "深圳"}"#).unwrap();

    let keywords = JsonFileStore::new(&path).keywords().unwrap();
    assert_eq!(keywords, vec!["湖北", "武汉", "宜昌", "深圳"]);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = JsonFileStore::new(&path).load();
    assert!(matches!(result, Err(Error::Json(_))));
    // The broken file is left for the user to fix
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_wrong_shape_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(&path, r#"{"省级": 42}"#).unwrap();

    let result = JsonFileStore::new(&path).load();
    assert!(matches!(result, Err(Error::InvalidCatalog(_))));
}
