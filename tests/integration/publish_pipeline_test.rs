//! Integration tests for the pull/pivot/push flow.
//!
//! Content is pulled from one store, keyed by unified locale, and pushed to the
//! other store according to a publish-target config file.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use storelocale::config::{load_config, save_config, ConfigError};
use storelocale::locale::{self, Store};

const CONFIG: &str = r#"
default_locale = "en-US"
targets = ["en-US", "ja-JP", "zh_hans", "es-419", "af", "he"]
"#;

fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("locales.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_publish_plans_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&write_config(&dir, CONFIG)).unwrap();

    let app_store = config.publish_plan(Store::AppStore);
    assert_eq!(
        app_store.store_codes(),
        vec!["en-US", "ja", "zh-Hans", "es-MX", "he"]
    );
    let skipped: Vec<&str> = app_store.skipped.iter().map(|l| l.code()).collect();
    assert_eq!(skipped, vec!["af"]);

    let google_play = config.publish_plan(Store::GooglePlay);
    assert_eq!(
        google_play.store_codes(),
        vec!["en-US", "ja-JP", "zh-CN", "es-419", "af", "iw-IL"]
    );
    assert!(google_play.skipped.is_empty());
}

#[test]
fn test_pull_from_google_play_push_to_app_store() {
    // Listing data as a Google Play pull would return it, keyed by store code.
    let pulled = json!({
        "en-US": { "title": "Ride" },
        "zh-CN": { "title": "骑行" },
        "iw-IL": { "title": "רכיבה" },
        "af": { "title": "Ry" },
    });
    let Value::Object(pulled) = pulled else {
        unreachable!()
    };

    // Store under unified keys.
    let stored = locale::convert_object_from_google_play(pulled).unwrap();
    assert!(stored.is_lossless());
    let unified_keys: Vec<&str> = stored.entries.keys().map(String::as_str).collect();
    assert_eq!(unified_keys, vec!["af", "en-US", "he", "zh-Hans"]);
    for key in stored.entries.keys() {
        assert!(locale::is_supported_locale(key));
    }

    // Push to the App Store; Afrikaans is skipped, not an error.
    let pushed = locale::convert_object_to_app_store(stored.entries).unwrap();
    let app_store_keys: Vec<&str> = pushed.entries.keys().map(String::as_str).collect();
    assert_eq!(app_store_keys, vec!["en-US", "he", "zh-Hans"]);
    assert_eq!(pushed.dropped, vec!["af".to_string()]);
    assert_eq!(pushed.entries["zh-Hans"]["title"], "骑行");
}

#[test]
fn test_pivot_agrees_with_two_step_conversion() {
    let mut native: BTreeMap<String, u32> = BTreeMap::new();
    native.insert("zh-TW".to_string(), 1);
    native.insert("es-419".to_string(), 2);
    native.insert("ar".to_string(), 3);

    let unified = locale::convert_object_from_google_play(native.clone()).unwrap();
    let two_step = locale::convert_object_to_app_store(unified.entries).unwrap();

    for (code, value) in &native {
        let pivoted = locale::google_play_to_app_store(code).unwrap().unwrap();
        assert_eq!(two_step.entries[pivoted], *value);
    }
}

#[test]
fn test_config_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let config = storelocale::LocaleConfig::from_toml_str(CONFIG).unwrap();

    let path = dir.path().join("nested").join("locales.toml");
    save_config(&config, &path).unwrap();
    let reloaded = load_config(&path).unwrap();

    assert_eq!(reloaded, config);
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"zh-Hans\""));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}
