//! Fakes shared by the flow tests.

use lookahead::{College, CollegeAdapter, CollegeFeed, CollegeItem, Query, RecordAdapter, Result, SearchSource};
use parking_lot::Mutex;
use serde_json::{json, Value};

/// Raw JSON record as served by the search endpoint.
pub fn college_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "collegeCode": format!("C{:03}", id),
        "location": "Chennai, Tamil Nadu",
        "tier": if id % 2 == 0 { "Tier 2" } else { "Tier 1" },
        "type": "Private",
        "urls": [{"id": 1, "imageUrls": format!("https://img.example/{}.jpg", id)}],
    })
}

/// Search source that filters a fixed table by case-insensitive prefix
/// and decodes through the college adapter.
pub struct PortalFake {
    rows: Vec<Value>,
    calls: Mutex<Vec<String>>,
}

impl PortalFake {
    pub fn new(names: &[&str]) -> Self {
        let rows = names
            .iter()
            .enumerate()
            .map(|(i, name)| college_json(i as u64 + 1, name))
            .collect();
        Self {
            rows,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn numbered(prefix: &str, count: usize) -> Self {
        let names: Vec<String> = (0..count).map(|i| format!("{} {:02}", prefix, i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        Self::new(&refs)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl SearchSource for PortalFake {
    type Item = CollegeItem;

    fn search(&self, query: &Query) -> Result<Vec<CollegeItem>> {
        self.calls.lock().push(query.to_string());
        let needle = query.as_str().to_lowercase();
        Ok(self
            .rows
            .iter()
            .filter(|row| {
                row["name"]
                    .as_str()
                    .map_or(false, |n| n.to_lowercase().starts_with(&needle))
            })
            .filter_map(|row| CollegeAdapter.adapt(row.clone()))
            .collect())
    }
}

/// Catalog feed over decoded colleges.
pub struct FeedFake(pub Vec<College>);

impl FeedFake {
    pub fn colleges(count: u64) -> Self {
        Self(
            (1..=count)
                .map(|i| serde_json::from_value(college_json(i, &format!("College {}", i))).unwrap())
                .collect(),
        )
    }
}

impl CollegeFeed for FeedFake {
    fn fetch_all(&self) -> Result<Vec<College>> {
        Ok(self.0.clone())
    }
}
