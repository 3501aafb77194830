use super::*;

// =============================================================
// Path resolution
// =============================================================

#[test]
fn root_resolves_to_home() {
    assert_eq!(AppRoute::resolve("/"), Some(AppRoute::Home));
    assert_eq!(AppRoute::resolve(""), Some(AppRoute::Home));
}

#[test]
fn detail_resolves_with_or_without_query() {
    assert_eq!(AppRoute::resolve("/detail"), Some(AppRoute::Detail));
    assert_eq!(AppRoute::resolve("/detail/"), Some(AppRoute::Detail));
    assert_eq!(AppRoute::resolve("/detail?id=q-1"), Some(AppRoute::Detail));
    assert_eq!(AppRoute::resolve("/detail#answers"), Some(AppRoute::Detail));
}

#[test]
fn other_paths_do_not_resolve() {
    for path in ["/details", "/detail/q-1", "/login", "/home", "/detail//"] {
        assert_eq!(AppRoute::resolve(path), None, "{path} should not match");
    }
}

#[test]
fn segments_match_router_paths() {
    assert_eq!(AppRoute::Home.segment(), "");
    assert_eq!(AppRoute::Detail.segment(), "detail");
    assert_eq!(AppRoute::resolve(AppRoute::Detail.path()), Some(AppRoute::Detail));
}

#[test]
fn every_route_segment_round_trips_to_its_route() {
    for route in [AppRoute::Home, AppRoute::Detail] {
        let from_segment = format!("/{}", route.segment());
        assert_eq!(from_segment, route.path());
        assert_eq!(AppRoute::resolve(&from_segment), Some(route));
    }
}

// =============================================================
// Detail links
// =============================================================

#[test]
fn detail_href_carries_question_id() {
    assert_eq!(detail_href("q-1"), "/detail?id=q-1");
}

#[test]
fn detail_href_encodes_reserved_characters() {
    assert_eq!(detail_href("a b&c"), "/detail?id=a%20b%26c");
}

#[test]
fn query_id_blank_means_none() {
    assert_eq!(question_id_from_query(None), None);
    assert_eq!(question_id_from_query(Some("   ".into())), None);
    assert_eq!(question_id_from_query(Some(" q-7 ".into())), Some("q-7".into()));
}
