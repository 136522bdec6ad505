//! Unit tests for keyed and batch conversion.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use storelocale::locale::{self, LocaleError, Store};

fn listing(title: &str) -> Value {
    json!({ "title": title, "subtitle": format!("{title} subtitle") })
}

#[test]
fn test_convert_object_to_google_play() {
    let mut content = BTreeMap::new();
    content.insert("en-US".to_string(), listing("Hello"));
    content.insert("zh-Hans".to_string(), listing("你好"));
    content.insert("he".to_string(), listing("שלום"));

    let result = locale::convert_object_to_google_play(content).unwrap();
    assert!(result.is_lossless());
    let keys: Vec<&str> = result.entries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["en-US", "iw-IL", "zh-CN"]);
    assert_eq!(result.entries["zh-CN"]["title"], "你好");
}

#[test]
fn test_convert_object_to_app_store_drops_observably() {
    let content = json!({
        "en-US": listing("Hello"),
        "af": listing("Hallo"),
        "es-419": listing("Hola"),
        "zu": listing("Sawubona"),
    });
    let Value::Object(map) = content else {
        unreachable!()
    };

    let result = locale::convert_object_to_app_store(map).unwrap();
    let keys: Vec<&str> = result.entries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["en-US", "es-MX"]);
    let mut dropped = result.dropped.clone();
    dropped.sort();
    assert_eq!(dropped, vec!["af".to_string(), "zu".to_string()]);
    assert_eq!(result.entries["es-MX"]["title"], "Hola");
}

#[test]
fn test_convert_object_from_stores() {
    let from_app_store =
        locale::convert_object_from_app_store([("ar-SA", 1), ("zh-Hant", 2), ("ko", 3)]).unwrap();
    let keys: Vec<&str> = from_app_store.entries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["ar", "ko-KR", "zh-Hant"]);

    let from_google_play =
        locale::convert_object_from_google_play([("iw-IL", "a"), ("es-419", "b")]).unwrap();
    assert_eq!(from_google_play.entries["he"], "a");
    assert_eq!(from_google_play.entries["es-419"], "b");
}

#[test]
fn test_convert_object_from_store_rejects_unknown_key() {
    let err = locale::convert_object_from_google_play([("en-US", 1), ("en-XX", 2)]).unwrap_err();
    assert_eq!(
        err,
        LocaleError::UnknownPlatformLocale {
            store: Store::GooglePlay,
            code: "en-XX".to_string(),
        }
    );
}

#[test]
fn test_convert_object_to_store_rejects_unknown_key() {
    let err = locale::convert_object_to_app_store([("en-US", 1), ("english", 2)]).unwrap_err();
    assert_eq!(err, LocaleError::UnknownUnifiedLocale("english".to_string()));
}

#[test]
fn test_alias_collision_is_an_error() {
    let err =
        locale::convert_object_from_google_play([("iw-IL", "old"), ("he-IL", "new")]).unwrap_err();
    assert!(matches!(err, LocaleError::KeyCollision { ref unified, .. } if unified == "he"));
}

#[test]
fn test_values_are_untouched() {
    let result =
        locale::convert_keys_to_store(Store::GooglePlay, [("ja-JP", vec![1, 2, 3])]).unwrap();
    assert_eq!(result.into_entries()["ja-JP"], vec![1, 2, 3]);
}

#[test]
fn test_batch_to_google_play_preserves_order() {
    let converted =
        locale::unified_list_to_google_play(&["zh-Hant", "af", "he", "en-US"]).unwrap();
    assert_eq!(converted, vec!["zh-TW", "af", "iw-IL", "en-US"]);
}

#[test]
fn test_batch_from_stores_preserves_order() {
    let unified = locale::app_store_list_to_unified(&["ko", "nb", "ar-SA"]).unwrap();
    let codes: Vec<&str> = unified.iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec!["ko-KR", "no-NO", "ar"]);

    let owned = vec!["zh-CN".to_string(), "tl".to_string()];
    let unified = locale::google_play_list_to_unified(owned.as_slice()).unwrap();
    let codes: Vec<&str> = unified.iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec!["zh-Hans", "fil"]);
}

#[test]
fn test_empty_inputs() {
    let empty: [&str; 0] = [];
    assert!(locale::unified_list_to_app_store(&empty).unwrap().is_empty());
    let result = locale::convert_object_to_app_store(Vec::<(String, u8)>::new()).unwrap();
    assert!(result.entries.is_empty());
    assert!(result.is_lossless());
}

#[test]
fn test_repeated_key_is_not_reported_as_alias_clash() {
    let pairs = vec![("en-US".to_string(), 1), ("en-US".to_string(), 2)];
    let err = locale::convert_object_to_google_play(pairs).unwrap_err();
    assert_eq!(err, LocaleError::DuplicateKey("en-US".to_string()));
    assert!(err.to_string().contains("more than once"));
}
