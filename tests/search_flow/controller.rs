//! DropdownController driven step by step, without a runtime.

use crate::test_utils::PortalFake;
use lookahead::{
    DropdownController, Key, KeyOutcome, Phase, PointerTarget, Query, ResultFetcher,
    ScrollMetrics, SearchItem,
};
use std::sync::Arc;

fn controller(source: Arc<PortalFake>) -> DropdownController<Arc<PortalFake>> {
    DropdownController::new(Arc::new(ResultFetcher::new(source, 4)), 10)
}

#[test]
fn test_stan_renders_one_row_with_thumbnail() {
    let source = Arc::new(PortalFake::new(&["Stanford University", "MIT"]));
    let mut c = controller(Arc::clone(&source));

    let query = c.on_input("stan");
    assert_eq!(c.phase(), Phase::Debouncing);
    let ticket = c.on_settled(query).unwrap();
    assert!(c.is_loading());

    let outcome = c.fetcher().fetch(&ticket);
    assert!(c.on_fetch_complete(outcome));

    assert_eq!(c.results().len(), 1);
    let row = &c.results()[0];
    assert_eq!(row.display_name(), "Stanford University");
    assert_eq!(row.id(), "C001");
    assert_eq!(row.thumbnail_url(), Some("https://img.example/1.jpg"));
    assert_eq!(source.calls(), vec!["stan".to_string()]);
}

#[test]
fn test_pages_accumulate_without_duplicates() {
    let source = Arc::new(PortalFake::numbered("IIT", 10));
    let mut c = controller(source);

    let ticket = c.on_settled(Query::new("iit")).unwrap();
    let outcome = c.fetcher().fetch(&ticket);
    c.on_fetch_complete(outcome);
    assert_eq!(c.results().len(), 4);

    let bottom = ScrollMetrics::at_bottom(200.0, 400.0);
    for expected in [8, 10] {
        let ticket = c.on_scroll(bottom).unwrap();
        assert!(c.on_scroll(bottom).is_none());
        let outcome = c.fetcher().fetch(&ticket);
        c.on_fetch_complete(outcome);
        assert_eq!(c.results().len(), expected);
    }

    // 10 < 3 * 4: nothing more to ask for.
    assert!(c.on_scroll(bottom).is_none());
    let names: Vec<_> = c.results().iter().map(|r| r.display_name().to_string()).collect();
    let mut deduped = names.clone();
    deduped.dedup();
    assert_eq!(names, deduped);
}

#[test]
fn test_superseded_ticket_is_discarded() {
    let source = Arc::new(PortalFake::new(&["Amity University", "Abhilashi University"]));
    let mut c = controller(source);

    let first = c.on_settled(Query::new("a")).unwrap();
    let second = c.on_settled(Query::new("ab")).unwrap();

    let late = c.fetcher().fetch(&first);
    let fresh = c.fetcher().fetch(&second);
    assert!(c.on_fetch_complete(fresh));
    assert!(!c.on_fetch_complete(late));

    let names: Vec<_> = c.results().iter().map(|r| r.display_name()).collect();
    assert_eq!(names, vec!["Abhilashi University"]);
}

#[test]
fn test_dismissal_discards_in_flight_response() {
    let source = Arc::new(PortalFake::new(&["MIT"]));
    let mut c = controller(source);

    let ticket = c.on_settled(Query::new("mit")).unwrap();
    assert!(!c.on_pointer_down(PointerTarget::Dropdown));
    assert!(c.on_pointer_down(PointerTarget::Outside));

    let outcome = c.fetcher().fetch(&ticket);
    assert!(!c.on_fetch_complete(outcome));
    assert!(!c.is_visible());
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn test_enter_submits_trimmed_input() {
    let mut c = controller(Arc::new(PortalFake::new(&[])));
    c.on_input("  nit  ");
    assert_eq!(c.on_key(Key::Enter), KeyOutcome::Submit(Query::new("nit")));
    c.on_input("   ");
    assert_eq!(c.on_key(Key::Enter), KeyOutcome::Ignored);
}
