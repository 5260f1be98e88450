use qssedit_settings::{
    SettingValue, SettingsStore, SyncMode, SETTING_OPEN_LAST_FILE, SETTING_PREVIEW_DELAY,
    SETTING_TRANSLATION,
};
use tempfile::tempdir;

#[test]
fn unset_keys_fall_back_to_zero_values() {
    let temp = tempdir().expect("tempdir");
    let store = SettingsStore::load(temp.path().join("settings.json")).expect("load");

    assert!(!store.get::<bool>("unset-key"));
    assert_eq!(store.get::<i64>("unset-key"), 0);
    assert_eq!(store.get::<String>("unset-key"), "");
}

#[test]
fn registered_defaults_answer_before_any_set() {
    let temp = tempdir().expect("tempdir");
    let mut store = SettingsStore::load(temp.path().join("settings.json")).expect("load");

    store.register_defaults([
        (SETTING_PREVIEW_DELAY, SettingValue::Int(5)),
        (SETTING_OPEN_LAST_FILE, SettingValue::Bool(true)),
    ]);

    assert_eq!(store.get::<i64>(SETTING_PREVIEW_DELAY), 5);
    assert!(store.get::<bool>(SETTING_OPEN_LAST_FILE));

    // A later registration overwrites a single key without clearing others.
    store.register_defaults([(SETTING_PREVIEW_DELAY, SettingValue::Int(9))]);
    assert_eq!(store.get::<i64>(SETTING_PREVIEW_DELAY), 9);
    assert!(store.get::<bool>(SETTING_OPEN_LAST_FILE));
}

#[test]
fn deferred_write_is_visible_without_sync() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("settings.json");
    let mut store = SettingsStore::load(&path).expect("load");

    store.register_defaults([(SETTING_PREVIEW_DELAY, SettingValue::Int(5))]);
    store
        .set(SETTING_PREVIEW_DELAY, 9_i64, SyncMode::Deferred)
        .expect("set");

    // Read-your-write in memory; the file has not been touched yet.
    assert_eq!(store.get::<i64>(SETTING_PREVIEW_DELAY), 9);
    assert!(!path.exists());
}

#[test]
fn immediate_write_survives_reload() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("settings.json");

    {
        let mut store = SettingsStore::load(&path).expect("load");
        store
            .set(SETTING_TRANSLATION, "ru".to_string(), SyncMode::Immediate)
            .expect("set translation");
        store
            .set(SETTING_OPEN_LAST_FILE, true, SyncMode::Immediate)
            .expect("set flag");
    }

    let reloaded = SettingsStore::load(&path).expect("reload");
    assert_eq!(reloaded.get::<String>(SETTING_TRANSLATION), "ru");
    assert!(reloaded.get::<bool>(SETTING_OPEN_LAST_FILE));
}

#[test]
fn explicit_default_bypasses_registered_table() {
    let temp = tempdir().expect("tempdir");
    let mut store = SettingsStore::load(temp.path().join("settings.json")).expect("load");

    store.register_defaults([(SETTING_PREVIEW_DELAY, SettingValue::Int(5))]);
    assert_eq!(store.get_or::<i64>(SETTING_PREVIEW_DELAY, 42), 42);

    store
        .set(SETTING_PREVIEW_DELAY, 7_i64, SyncMode::Deferred)
        .expect("set");
    assert_eq!(store.get_or::<i64>(SETTING_PREVIEW_DELAY, 42), 7);
}

#[test]
fn slash_marker_selects_the_global_namespace() {
    let temp = tempdir().expect("tempdir");
    let mut store = SettingsStore::load(temp.path().join("settings.json")).expect("load");

    store
        .set("list", true, SyncMode::Deferred)
        .expect("set scoped");
    assert!(store.contains("list"));
    assert!(!store.contains("/list"));

    store
        .set_global("list", true, SyncMode::Deferred)
        .expect("set global");
    assert!(store.contains("/list"));
}

#[test]
fn remove_deletes_from_settings_namespace() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("settings.json");
    let mut store = SettingsStore::load(&path).expect("load");

    store
        .set(SETTING_TRANSLATION, "en".to_string(), SyncMode::Immediate)
        .expect("set");
    assert!(store.contains(SETTING_TRANSLATION));

    store
        .remove(SETTING_TRANSLATION, SyncMode::Immediate)
        .expect("remove");
    assert!(!store.contains(SETTING_TRANSLATION));

    // Removing an absent key is a no-op, not an error.
    store
        .remove("never-stored", SyncMode::Immediate)
        .expect("remove absent");

    let reloaded = SettingsStore::load(&path).expect("reload");
    assert!(!reloaded.contains(SETTING_TRANSLATION));
}

#[test]
fn type_mismatch_falls_through_to_defaults() {
    let temp = tempdir().expect("tempdir");
    let mut store = SettingsStore::load(temp.path().join("settings.json")).expect("load");

    store.register_defaults([(SETTING_PREVIEW_DELAY, SettingValue::Int(5))]);
    store
        .set(
            SETTING_PREVIEW_DELAY,
            "not-a-number".to_string(),
            SyncMode::Deferred,
        )
        .expect("set wrong type");

    assert_eq!(store.get::<i64>(SETTING_PREVIEW_DELAY), 5);
    assert!(!store.get::<bool>("unset-key"));
}

#[test]
fn sync_flushes_deferred_writes() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("settings.json");
    let mut store = SettingsStore::load(&path).expect("load");

    store
        .set(SETTING_PREVIEW_DELAY, 250_i64, SyncMode::Deferred)
        .expect("set");
    assert!(!path.exists());

    store.sync().expect("sync");
    assert!(path.exists());

    let reloaded = SettingsStore::load(&path).expect("reload");
    assert_eq!(reloaded.get::<i64>(SETTING_PREVIEW_DELAY), 250);
}
