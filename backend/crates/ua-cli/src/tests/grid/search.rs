use crate::grid::search_response::invalid_format_message;
use crate::grid::{SearchParams, SortDirection, parse_search_response};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serde_json::json;

#[test]
fn given_page_when_for_page_then_exclusive_range() {
    let params = SearchParams::for_page(2, 10);

    assert_that!(params.start_index, eq(20));
    assert_that!(params.end_index, eq(30));
}

#[test]
fn given_huge_page_when_for_page_then_indices_saturate() {
    let params = SearchParams::for_page(usize::MAX / 2, 10);

    assert_that!(params.start_index, eq(usize::MAX));
    assert_that!(params.end_index, eq(usize::MAX));
}

#[test]
fn given_all_parts_when_to_query_pairs_then_ordered_pairs() {
    let mut params = SearchParams::for_page(0, 5);
    params.sort = String::from("name");
    params.order = SortDirection::Desc;
    params.group = Some(String::from("nickname"));
    params.search = Some(String::from("ana"));
    params.extra = vec![(String::from("main_address"), String::from("true"))];

    let pairs: Vec<String> = params
        .to_query_pairs()
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();

    assert_that!(
        pairs,
        eq(&vec![
            String::from("startIndex=0"),
            String::from("endIndex=5"),
            String::from("sort=name"),
            String::from("order=desc"),
            String::from("group=nickname"),
            String::from("search=ana"),
            String::from("main_address=true"),
        ])
    );
}

#[test]
fn given_meta_total_count_when_parsed_then_rows_and_total() {
    let body = json!({ "ok": true, "data": [{ "id": 1 }], "meta": { "totalCount": 35 } });

    let result = parse_search_response("Usuários", &body).expect("valid body");

    assert_that!(result.rows.len(), eq(1));
    assert_that!(result.total_count, eq(35));
}

#[test]
fn given_alternate_count_locations_when_parsed_then_found() {
    let top_level = json!({ "ok": true, "data": [], "totalCount": 7 });
    let pagination = json!({ "ok": true, "data": [], "meta": { "pagination": { "total": 12 } } });
    let missing = json!({ "ok": true, "data": [] });

    assert_that!(
        parse_search_response("Usuários", &top_level).map(|r| r.total_count),
        ok(eq(&7))
    );
    assert_that!(
        parse_search_response("Usuários", &pagination).map(|r| r.total_count),
        ok(eq(&12))
    );
    assert_that!(
        parse_search_response("Usuários", &missing).map(|r| r.total_count),
        ok(eq(&0))
    );
}

#[test]
fn given_not_ok_when_parsed_then_body_message_used() {
    let body = json!({ "ok": false, "message": "Parâmetros inválidos" });

    let error = parse_search_response("Usuários", &body).expect_err("not ok");

    assert_that!(error.user_message(), eq("Parâmetros inválidos"));
}

#[test]
fn given_missing_data_when_parsed_then_invalid_format() {
    let body = json!({ "ok": true, "rows": [] });

    let error = parse_search_response("Usuários", &body).expect_err("no data");

    assert_that!(
        error.user_message(),
        eq(invalid_format_message("Usuários").as_str())
    );
}

#[test]
fn given_negative_count_when_parsed_then_error() {
    let body = json!({ "ok": true, "data": [], "meta": { "totalCount": -1 } });

    assert_that!(parse_search_response("Usuários", &body), err(anything()));
}
