//! SearchBox end to end over the college adapter.

use crate::test_utils::PortalFake;
use lookahead::{
    CollegeItem, Key, Phase, ScrollMetrics, SearchBox, SearchCallbacks, SearchConfig,
    StaticIdentity, EMPTY_STATE_TEXT,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn spawn(source: Arc<PortalFake>, callbacks: SearchCallbacks<CollegeItem>) -> SearchBox<CollegeItem> {
    SearchBox::spawn(
        &SearchConfig::default(),
        source,
        &StaticIdentity::new("flow-visitor"),
        callbacks,
    )
}

#[tokio::test(start_paused = true)]
async fn test_type_scroll_select() {
    let source = Arc::new(PortalFake::numbered("NIT", 6));
    let chosen = Arc::new(Mutex::new(None::<String>));
    let callbacks = {
        let chosen = Arc::clone(&chosen);
        SearchCallbacks::new().on_select(move |item: CollegeItem| {
            *chosen.lock() = Some(item.record.key());
        })
    };
    let search = spawn(Arc::clone(&source), callbacks);

    search.input("n").unwrap();
    sleep(Duration::from_millis(150)).await;
    search.input("ni").unwrap();
    sleep(Duration::from_millis(150)).await;
    search.input("nit").unwrap();

    let view = search
        .wait_for(|v| v.visible && !v.loading && v.query.as_str() == "nit")
        .await
        .unwrap();
    assert_eq!(view.items.len(), 4);
    assert_eq!(source.calls(), vec!["nit".to_string()]);

    search.scroll(ScrollMetrics::new(95.0, 100.0, 200.0)).unwrap();
    let view = search
        .wait_for(|v| !v.loading && v.items.len() == 6)
        .await
        .unwrap();
    assert_eq!(view.phase, Phase::Settled { has_results: true });

    search.select(5).unwrap();
    search.wait_for(|v| !v.visible).await.unwrap();
    assert_eq!(chosen.lock().as_deref(), Some("C006"));
}

#[tokio::test(start_paused = true)]
async fn test_no_match_shows_empty_state() {
    let source = Arc::new(PortalFake::new(&["Stanford University"]));
    let search = spawn(Arc::clone(&source), SearchCallbacks::default());

    search.input("zzz").unwrap();
    let view = search.wait_for(|v| v.visible && !v.loading).await.unwrap();

    assert!(view.is_empty_state());
    assert!(view.error.is_none());
    assert_eq!(
        view.render_with(|item| item.record.name.clone()),
        vec![EMPTY_STATE_TEXT]
    );
}

#[tokio::test(start_paused = true)]
async fn test_escape_then_retype_starts_fresh() {
    let source = Arc::new(PortalFake::new(&["MIT", "Manipal University"]));
    let search = spawn(Arc::clone(&source), SearchCallbacks::default());

    search.input("m").unwrap();
    search.wait_for(|v| v.visible && !v.loading).await.unwrap();
    search.key(Key::Escape).unwrap();
    search.wait_for(|v| !v.visible).await.unwrap();

    search.input("ma").unwrap();
    let view = search
        .wait_for(|v| v.visible && !v.loading && v.query.as_str() == "ma")
        .await
        .unwrap();
    assert_eq!(view.rows(), vec!["Manipal University"]);
    assert_eq!(source.calls(), vec!["m".to_string(), "ma".to_string()]);
}
