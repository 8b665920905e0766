use super::user_options;

use crate::grid::{GridPreferences, SortConfig, SortDirection, ViewMode, storage_key};

use googletest::assert_that;
use googletest::prelude::{eq, none};
use serde_json::json;

#[test]
fn given_config_key_when_storage_key_then_prefixed() {
    assert_that!(storage_key(Some("users"), "Usuários"), eq("dataGridConfig_users"));
    assert_that!(storage_key(None, "Usuários"), eq("dataGridConfig_Usuários"));
    assert_that!(storage_key(Some("  "), "Itens"), eq("dataGridConfig_Itens"));
}

#[test]
fn given_nothing_stored_when_restore_then_defaults() {
    let options = user_options();

    let restored = GridPreferences::restore(None, &options);

    assert_that!(restored, eq(&options.default_preferences()));
}

#[test]
fn given_non_object_blob_when_restore_then_defaults() {
    let options = user_options();

    let restored = GridPreferences::restore(Some(&json!("corrupted")), &options);

    assert_that!(restored, eq(&options.default_preferences()));
}

#[test]
fn given_valid_blob_when_restore_then_fields_applied() {
    // Given
    let options = user_options();
    let stored = json!({
        "sortConfig": { "field": "name", "direction": "desc" },
        "rowsPerPage": 25,
        "groupingField": "name",
        "visibleColumnIds": ["name", "ghost"],
        "viewMode": "grid"
    });

    // When
    let restored = GridPreferences::restore(Some(&stored), &options);

    // Then
    assert_that!(
        restored.sort_config,
        eq(&SortConfig::new("name", SortDirection::Desc))
    );
    assert_that!(restored.rows_per_page, eq(25));
    assert_that!(restored.grouping(), eq(Some("name")));
    assert_that!(
        restored.visible_column_ids,
        eq(&vec![String::from("name"), String::from("actions")])
    );
}

#[test]
fn given_stale_values_when_restore_then_each_falls_back() {
    let options = user_options();
    let stored = json!({
        "sortConfig": { "field": "city", "direction": "asc" },
        "rowsPerPage": 7,
        "groupingField": "cpf",
        "visibleColumnIds": ["ghost"],
        "viewMode": "mosaic"
    });

    let restored = GridPreferences::restore(Some(&stored), &options);

    assert_that!(restored, eq(&options.default_preferences()));
}

#[test]
fn given_card_view_with_grouping_when_restore_then_grouping_cleared() {
    let options = user_options();
    let stored = json!({ "groupingField": "name", "viewMode": "card" });

    let restored = GridPreferences::restore(Some(&stored), &options);

    assert_that!(restored.view_mode, eq(ViewMode::Card));
    assert_that!(restored.grouping(), none());
}

#[test]
fn given_preferences_when_to_value_then_camel_case_blob() {
    let options = user_options();

    let value = options.default_preferences().to_value();

    assert_that!(value["rowsPerPage"], eq(&json!(10)));
    assert_that!(value["sortConfig"]["field"], eq(&json!("id")));
    assert_that!(value["groupingField"], eq(&json!("")));
    assert_that!(value["viewMode"], eq(&json!("grid")));
}
