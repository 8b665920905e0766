use super::user_options;

use crate::grid::{
    Effects, FetchOutcome, GridError, GridOptions, GridState, SearchResult, SortConfig, ViewMode,
};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::{Value, json};

fn loaded_state(options: &GridOptions) -> GridState {
    let mut state = GridState::new(options);
    state.load_config(options.default_preferences());
    state
}

fn page_of(count: usize, total_count: u64) -> SearchResult {
    SearchResult {
        rows: (0..count).map(|i| json!({ "id": i + 1 })).collect::<Vec<Value>>(),
        total_count,
    }
}

#[test]
fn given_uninitialized_grid_when_actions_then_no_effects() {
    let options = user_options();
    let mut state = GridState::new(&options);

    assert_that!(state.set_page(2), eq(Effects::NONE));
    assert_that!(state.set_rows_per_page(25, &options), eq(Effects::NONE));
    assert_that!(state.begin_fetch(&options).is_none(), eq(true));
}

#[test]
fn given_loaded_grid_when_load_config_again_then_ignored() {
    let options = user_options();
    let mut state = GridState::new(&options);

    assert_that!(
        state.load_config(options.default_preferences()),
        eq(Effects::FETCH)
    );
    assert_that!(
        state.load_config(options.default_preferences()),
        eq(Effects::NONE)
    );
}

#[test]
fn given_later_page_when_rows_per_page_changed_then_first_page_and_persist() {
    let options = user_options();
    let mut state = loaded_state(&options);
    state.set_page(3);

    let effects = state.set_rows_per_page(25, &options);

    assert_that!(effects, eq(Effects::FETCH_AND_PERSIST));
    assert_that!(state.page(), eq(0));
    assert_that!(state.rows_per_page(), eq(25));
}

#[test]
fn given_unsupported_size_when_rows_per_page_changed_then_ignored() {
    let options = user_options();
    let mut state = loaded_state(&options);

    assert_that!(state.set_rows_per_page(7, &options), eq(Effects::NONE));
    assert_that!(state.rows_per_page(), eq(10));
}

#[test]
fn given_grouped_table_when_sorting_then_blocked() {
    // Given
    let options = user_options();
    let mut state = loaded_state(&options);
    assert_that!(
        state.set_grouping(Some("name"), &options),
        eq(Effects::FETCH_AND_PERSIST)
    );

    // When
    let effects = state.set_sort(SortConfig::asc("cpf"), &options);

    // Then
    assert_that!(effects, eq(Effects::NONE));
    assert_that!(state.sorting_disabled(), eq(true));
    assert_that!(state.sort(), eq(&SortConfig::asc("id")));
}

#[test]
fn given_unsortable_column_when_toggle_sort_then_ignored() {
    let options = user_options();
    let mut state = loaded_state(&options);

    assert_that!(state.toggle_sort("city", &options), eq(Effects::NONE));
}

#[test]
fn given_active_field_when_toggle_sort_then_direction_flips() {
    let options = user_options();
    let mut state = loaded_state(&options);

    state.toggle_sort("name", &options);
    let effects = state.toggle_sort("name", &options);

    assert_that!(effects, eq(Effects::FETCH_AND_PERSIST));
    assert_that!(state.sort().direction.as_str(), eq("desc"));
}

#[test]
fn given_ungroupable_column_when_grouping_then_ignored() {
    let options = user_options();
    let mut state = loaded_state(&options);

    assert_that!(state.set_grouping(Some("cpf"), &options), eq(Effects::NONE));
    assert_that!(state.grouping_field(), none());
}

#[test]
fn given_grouped_table_when_switching_to_cards_then_grouping_cleared_and_refetched() {
    let options = user_options();
    let mut state = loaded_state(&options);
    state.set_grouping(Some("name"), &options);

    let effects = state.set_view_mode(ViewMode::Card);

    assert_that!(effects, eq(Effects::FETCH_AND_PERSIST));
    assert_that!(state.grouping_field(), none());
    assert_that!(state.set_grouping(Some("name"), &options), eq(Effects::NONE));
}

#[test]
fn given_ungrouped_table_when_switching_to_cards_then_persist_only() {
    let options = user_options();
    let mut state = loaded_state(&options);

    assert_that!(state.set_view_mode(ViewMode::Card), eq(Effects::PERSIST));
}

#[test]
fn given_mobile_width_when_resized_then_card_view_forced() {
    let options = user_options();
    let mut state = loaded_state(&options);

    let effects = state.set_viewport_width(400);

    assert_that!(effects, eq(Effects::PERSIST));
    assert_that!(state.view_mode(), eq(ViewMode::Card));
    assert_that!(state.set_view_mode(ViewMode::Grid), eq(Effects::NONE));
    assert_that!(state.view_mode(), eq(ViewMode::Card));
}

#[test]
fn given_search_input_when_committed_then_trimmed_and_first_page() {
    let options = user_options();
    let mut state = loaded_state(&options);
    state.set_page(2);

    assert_that!(state.set_search_input("  ana  "), eq(Effects::NONE));
    assert_that!(state.commit_search(), eq(Effects::FETCH));
    assert_that!(state.active_search(), some(eq("ana")));
    assert_that!(state.page(), eq(0));
    assert_that!(state.commit_search(), eq(Effects::NONE));
}

#[test]
fn given_columns_when_toggled_then_always_visible_kept() {
    let options = user_options();
    let mut state = loaded_state(&options);

    assert_that!(state.toggle_column("actions", &options), eq(Effects::NONE));
    assert_that!(state.toggle_column("cpf", &options), eq(Effects::PERSIST));
    assert_that!(
        state.visible_column_ids().contains(&String::from("cpf")),
        eq(false)
    );

    state.toggle_column("cpf", &options);

    assert_that!(
        state.visible_column_ids().to_vec(),
        eq(&options.all_column_ids())
    );
}

#[test]
fn given_grouped_table_when_search_params_then_group_sent() {
    let options = user_options();
    let mut state = loaded_state(&options);
    state.set_grouping(Some("name"), &options);
    state.set_page(1);

    let params = state.search_params(&options);

    assert_that!(params.start_index, eq(10));
    assert_that!(params.end_index, eq(20));
    assert_that!(params.group, some(eq("name")));
}

#[test]
fn given_two_requests_when_older_finishes_then_discarded() {
    // Given
    let options = user_options();
    let mut state = loaded_state(&options);
    let (first, _) = state.begin_fetch(&options).expect("first fetch");
    let (second, _) = state.begin_fetch(&options).expect("second fetch");

    // When
    let stale = state.finish_fetch(first, Ok(page_of(3, 3)));
    let applied = state.finish_fetch(second, Ok(page_of(2, 2)));

    // Then
    assert_that!(stale, eq(FetchOutcome::Stale));
    assert_that!(applied, eq(FetchOutcome::Applied));
    assert_that!(state.rows().len(), eq(2));
    assert_that!(state.total_count(), eq(2));
    assert_that!(state.is_loading(), eq(false));
}

#[test]
fn given_stale_generation_when_end_fetch_then_loading_kept() {
    let options = user_options();
    let mut state = loaded_state(&options);
    let (first, _) = state.begin_fetch(&options).expect("first fetch");
    let (second, _) = state.begin_fetch(&options).expect("second fetch");

    state.end_fetch(first);
    assert_that!(state.is_loading(), eq(true));

    state.end_fetch(second);
    assert_that!(state.is_loading(), eq(false));
}

#[test]
fn given_page_past_total_when_fetch_finishes_then_page_reset() {
    let options = user_options();
    let mut state = loaded_state(&options);
    state.set_page(3);
    let (generation, _) = state.begin_fetch(&options).expect("fetch");

    let outcome = state.finish_fetch(generation, Ok(page_of(0, 12)));

    assert_that!(outcome, eq(FetchOutcome::PageReset));
    assert_that!(state.page(), eq(0));
}

#[test]
fn given_failed_fetch_when_finished_then_rows_cleared_and_error_shown() {
    // Given
    let options = user_options();
    let mut state = loaded_state(&options);
    let (generation, _) = state.begin_fetch(&options).expect("fetch");
    state.finish_fetch(generation, Ok(page_of(5, 5)));
    let (generation, _) = state.begin_fetch(&options).expect("fetch");

    // When
    let outcome = state.finish_fetch(
        generation,
        Err(GridError::fetch("Erro ao buscar Usuários: Internal Server Error")),
    );

    // Then
    assert_that!(outcome, eq(FetchOutcome::Failed));
    assert_that!(state.rows().len(), eq(0));
    assert_that!(state.total_count(), eq(0));
    assert_that!(
        state.error(),
        some(eq("Erro ao buscar Usuários: Internal Server Error"))
    );
    assert_that!(state.is_loading(), eq(false));
    assert_that!(state.empty_message("Usuários"), none());

    state.dismiss_error();
    assert_that!(state.error(), none());
}

#[test]
fn given_no_rows_when_empty_message_then_mentions_search_term() {
    let options = user_options();
    let mut state = loaded_state(&options);
    state.set_search_input("zzz");
    state.commit_search();
    let (generation, _) = state.begin_fetch(&options).expect("fetch");
    state.finish_fetch(generation, Ok(page_of(0, 0)));

    assert_that!(
        state.empty_message("Usuários"),
        some(eq("Nenhum(a) usuários encontrado(a) para \"zzz\"."))
    );
}

#[test]
fn given_total_when_page_count_then_rounded_up() {
    let options = user_options();
    let mut state = loaded_state(&options);
    let (generation, _) = state.begin_fetch(&options).expect("fetch");
    state.finish_fetch(generation, Ok(page_of(10, 35)));

    assert_that!(state.page_count(), eq(4));
}

#[test]
fn given_huge_page_when_fetching_then_indices_stay_in_server_range() {
    // Given
    let options = user_options();
    let mut state = loaded_state(&options);

    // When
    state.set_page(usize::MAX / 2);
    let (_, params) = state.begin_fetch(&options).expect("fetch");

    // Then
    assert_that!(state.page(), eq(state.last_addressable_page()));
    assert_that!(params.end_index > params.start_index, eq(true));
    assert_that!(i64::try_from(params.end_index).is_ok(), eq(true));
}

#[test]
fn given_huge_page_when_empty_result_arrives_then_page_reset() {
    let options = user_options();
    let mut state = loaded_state(&options);
    state.set_page(usize::MAX);
    let (generation, _) = state.begin_fetch(&options).expect("fetch");

    let outcome = state.finish_fetch(generation, Ok(page_of(0, 35)));

    assert_that!(outcome, eq(FetchOutcome::PageReset));
    assert_that!(state.page(), eq(0));
}
