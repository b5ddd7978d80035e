//! One-shot subcommands.

use crate::render;
use anyhow::{bail, Context, Result};
use lookahead_catalog::{Catalog, CatalogClient, CatalogSource, CollegeFilter, TimedCache};
use lookahead_core::{Config, FileIdentity, StaticIdentity};
use lookahead_fetch::{College, CollegeItem, HttpSource};
use lookahead_session::{DropdownView, ScrollMetrics, SearchBox, SearchCallbacks};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Viewport used to fake a scroll to the bottom of the dropdown.
const FAKE_VIEWPORT_PX: f64 = 240.0;

pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

/// Start a search box against the configured search endpoint.
pub fn open_search_box(
    config: &Config,
    callbacks: SearchCallbacks<CollegeItem>,
) -> Result<SearchBox<CollegeItem>> {
    let identity = FileIdentity::load_or_create(&config.identity_path).with_context(|| {
        format!(
            "Failed to load visitor id from {}",
            config.identity_path.display()
        )
    })?;
    tracing::debug!(target: "lookahead::cli", path = %identity.path().display(), "Identity ready");
    let source = HttpSource::colleges(&config.search);
    Ok(SearchBox::spawn(&config.search, source, &identity, callbacks))
}

/// Start a search box that matches names in the loaded catalog.
pub fn open_catalog_search_box(
    config: &Config,
    callbacks: SearchCallbacks<CollegeItem>,
) -> Result<SearchBox<CollegeItem>> {
    let catalog = load_catalog(config, false)?;
    let identity = StaticIdentity::new("offline");
    let source = CatalogSource::from_catalog(&catalog);
    Ok(SearchBox::spawn(&config.search, source, &identity, callbacks))
}

/// Context attached to a failed catalog load.
pub fn catalog_load_hint(config: &Config) -> String {
    format!(
        "Failed to load colleges from {} (check --base-url or the [catalog] config; \
         a listing cached at {} is used while fresh)",
        config.catalog.base_url,
        config.catalog.cache_path.display()
    )
}

/// Load the catalog through the file cache. `refresh` drops the cached copy.
pub fn load_catalog(config: &Config, refresh: bool) -> Result<Catalog> {
    let client = CatalogClient::new(&config.catalog);
    let cache: TimedCache<Vec<College>> =
        TimedCache::new(config.catalog.cache_path.clone(), config.catalog.cache_ttl());
    if refresh {
        cache.clear()?;
    }
    Catalog::load(&client, Some(&cache), config.catalog.page_size)
        .with_context(|| catalog_load_hint(config))
}

/// Longest reasonable wait for one event to settle.
pub fn settle_limit(config: &Config) -> Duration {
    config.search.debounce() + config.search.request_timeout() + Duration::from_secs(1)
}

/// Send one event and wait until the box is idle again or `limit` passes.
pub async fn step<F>(
    search: &SearchBox<CollegeItem>,
    limit: Duration,
    send: F,
) -> Result<DropdownView<CollegeItem>>
where
    F: FnOnce(&SearchBox<CollegeItem>) -> lookahead_session::Result<()>,
{
    let mut rx = search.subscribe();
    rx.borrow_and_update();
    send(search)?;
    let wait = async {
        rx.changed().await?;
        let view = rx.wait_for(|v| !render::is_busy(v)).await?.clone();
        Ok::<_, tokio::sync::watch::error::RecvError>(view)
    };
    match tokio::time::timeout(limit, wait).await {
        Ok(Ok(view)) => Ok(view),
        Ok(Err(_)) => bail!("search box stopped"),
        Err(_) => {
            tracing::warn!(target: "lookahead::cli", "Timed out waiting for results");
            Ok(search.view())
        }
    }
}

/// Scroll event for a dropdown scrolled all the way down.
pub fn scrolled_to_bottom(view: &DropdownView<CollegeItem>) -> ScrollMetrics {
    let content = (view.items.len() as f64 * 48.0).max(FAKE_VIEWPORT_PX);
    ScrollMetrics::at_bottom(FAKE_VIEWPORT_PX, content)
}

pub fn search(config: &Config, query: &str, pages: u32, offline: bool, json: bool) -> Result<()> {
    let rt = runtime()?;
    let limit = settle_limit(config);
    let view = rt.block_on(async {
        let search = if offline {
            open_catalog_search_box(config, SearchCallbacks::default())?
        } else {
            open_search_box(config, SearchCallbacks::default())?
        };
        let mut view = step(&search, limit, |s| s.input(query)).await?;
        for _ in 1..pages {
            let before = view.items.len();
            let metrics = scrolled_to_bottom(&view);
            view = step(&search, limit, |s| s.scroll(metrics)).await?;
            if view.items.len() == before {
                break;
            }
        }
        search.close().await;
        Ok::<_, anyhow::Error>(view)
    })?;

    if json {
        let records: Vec<_> = view.items.iter().map(|item| &item.record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", render::dropdown(&view));
        if let Some(error) = &view.error {
            eprintln!("request failed: {}", error);
        }
    }
    Ok(())
}

pub struct CollegesArgs {
    pub tier: Option<String>,
    pub kind: Option<String>,
    pub recommended: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    /// One-based.
    pub page: usize,
    pub refresh: bool,
    pub json: bool,
}

pub fn colleges(config: &Config, args: &CollegesArgs) -> Result<()> {
    let mut catalog = load_catalog(config, args.refresh)?;

    catalog.apply_filter(CollegeFilter {
        tier: args.tier.clone(),
        kind: args.kind.clone(),
        recommended: args.recommended.clone(),
        location: args.location.clone(),
        name: args.name.clone(),
    });
    let page = args.page.saturating_sub(1);
    if page != 0 && !catalog.set_page(page) {
        eprintln!(
            "page {} is out of range, showing page 1 of {}",
            args.page,
            catalog.paginator().total_pages()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog.page())?);
    } else {
        println!("{}", render::catalog_page(&catalog));
    }
    Ok(())
}
