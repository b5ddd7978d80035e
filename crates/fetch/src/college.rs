//! College records as served by the portal API.

use crate::source::RecordAdapter;
use lookahead_core::SearchItem;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a string or a bare number; the API is inconsistent about both.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Record identifier; the API mixes numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric id.
    Number(i64),
    /// String id.
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Image entry attached to a college.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrl {
    /// Image row id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Image URL; empty when the server sent none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_urls: String,
}

/// A college as returned by the search and filter endpoints.
///
/// Only `id` and `name` are guaranteed; everything else is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    /// Record id.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Code used by the details endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_code: Option<String>,
    /// Legacy code field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Government / private / deemed.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// City and state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// "Tier 1".."Tier 3".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Recommendation flag as served ("Yes" / "No").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<String>,
    /// Accrediting body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accreditation: Option<String>,
    /// Parent university.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university_affiliation: Option<String>,
    /// Founding year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_of_establishment: Option<i32>,
    /// Website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_website: Option<String>,
    /// Primary image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Legacy image list.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,
    /// Image rows.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub urls: Vec<ImageUrl>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Average rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Published ranking, e.g. "NIRF 12".
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub ranking: Option<String>,
    /// Annual tuition as displayed.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub tuition_fee: Option<String>,
}

impl College {
    /// Key used for the details view: `collegeCode`, then `code`, then `id`.
    pub fn key(&self) -> String {
        self.college_code
            .clone()
            .or_else(|| self.code.clone())
            .unwrap_or_else(|| self.id.to_string())
    }

    /// First available image.
    pub fn thumbnail(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
            .or_else(|| {
                self.urls
                    .iter()
                    .map(|u| u.image_urls.as_str())
                    .find(|url| !url.is_empty())
            })
    }
}

/// A college adapted into the search capability.
#[derive(Debug, Clone, PartialEq)]
pub struct CollegeItem {
    key: String,
    thumbnail: Option<String>,
    /// The full record, for callers that render more than the name.
    pub record: College,
}

impl From<College> for CollegeItem {
    fn from(record: College) -> Self {
        CollegeItem {
            key: record.key(),
            thumbnail: record.thumbnail().map(str::to_string),
            record,
        }
    }
}

impl SearchItem for CollegeItem {
    fn id(&self) -> &str {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.record.name
    }

    fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

/// Adapter from raw JSON to [`CollegeItem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CollegeAdapter;

impl RecordAdapter for CollegeAdapter {
    type Item = CollegeItem;

    fn adapt(&self, record: Value) -> Option<CollegeItem> {
        serde_json::from_value::<College>(record)
            .ok()
            .map(CollegeItem::from)
    }
}
