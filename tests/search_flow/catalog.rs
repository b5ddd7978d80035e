//! Catalog listing over a fake feed.

use crate::test_utils::FeedFake;
use lookahead::{
    Catalog, CatalogSource, CollegeFilter, CollegeItem, Origin, Phase, SearchBox,
    SearchCallbacks, SearchConfig, StaticIdentity,
};
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn test_listing_filters_and_pages() {
    let feed = FeedFake::colleges(25);
    let mut catalog = Catalog::load(&feed, None, 9).unwrap();
    assert_eq!(catalog.origin(), Origin::Network);
    assert_eq!(catalog.paginator().total_pages(), 3);

    catalog.set_page(2);
    assert_eq!(catalog.page().len(), 7);

    // Odd ids are Tier 1: 13 of 25.
    catalog.apply_filter(CollegeFilter::new().tier("Tier 1").location("tamil"));
    assert_eq!(catalog.paginator().current(), 0);
    assert_eq!(catalog.filtered_len(), 13);
    assert_eq!(catalog.paginator().total_pages(), 2);
    assert!(!catalog.set_page(2));
    assert!(catalog.set_page(1));
    assert_eq!(catalog.page().len(), 4);

    catalog.apply_filter(CollegeFilter::new().kind("Government"));
    assert!(catalog.page().is_empty());
    assert_eq!(catalog.paginator().total_pages(), 0);
}

#[test]
fn test_all_values_are_ignored() {
    let feed = FeedFake::colleges(5);
    let mut catalog = Catalog::load(&feed, None, 9).unwrap();
    catalog.apply_filter(
        CollegeFilter::new()
            .tier("all")
            .kind("all")
            .recommended("")
            .location(" "),
    );
    assert!(catalog.filter().is_empty());
    assert_eq!(catalog.filtered_len(), 5);
}

#[test]
fn test_name_filter_matches_part_of_name() {
    let feed = FeedFake::colleges(25);
    let mut catalog = Catalog::load(&feed, None, 9).unwrap();
    catalog.apply_filter(CollegeFilter::new().name("LEGE 2"));
    let names: Vec<_> = catalog.filtered().map(|c| c.name.as_str()).collect();
    assert_eq!(names[0], "College 2");
    assert_eq!(catalog.filtered_len(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_search_box_over_loaded_catalog() {
    let catalog = Catalog::load(&FeedFake::colleges(25), None, 9).unwrap();
    let chosen = Arc::new(Mutex::new(None::<String>));
    let callbacks = {
        let chosen = Arc::clone(&chosen);
        SearchCallbacks::new().on_select(move |item: CollegeItem| {
            *chosen.lock() = Some(item.record.name.clone());
        })
    };
    let search = SearchBox::spawn(
        &SearchConfig::default(),
        CatalogSource::from_catalog(&catalog),
        &StaticIdentity::new("offline"),
        callbacks,
    );

    search.input("ege 1").unwrap();
    let view = search
        .wait_for(|v| v.phase == Phase::Settled { has_results: true })
        .await
        .unwrap();
    assert_eq!(
        view.rows(),
        vec!["College 1", "College 10", "College 11", "College 12"]
    );

    search.select(2).unwrap();
    search.wait_for(|v| !v.visible).await.unwrap();
    assert_eq!(chosen.lock().as_deref(), Some("College 11"));

    search.input("university").unwrap();
    let view = search
        .wait_for(|v| v.phase == Phase::Settled { has_results: false })
        .await
        .unwrap();
    assert!(view.is_empty_state());
}
