//! Client-side catalog filters.

use lookahead_fetch::College;
use serde::{Deserialize, Serialize};

/// Filter criteria for the listing. Unset, empty and `"all"` values match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeFilter {
    /// Exact tier, e.g. "Tier 1".
    pub tier: Option<String>,
    /// Exact institution type, e.g. "Private".
    pub kind: Option<String>,
    /// Exact recommendation flag.
    pub recommended: Option<String>,
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
    /// Case-insensitive substring of the name.
    #[serde(default)]
    pub name: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    match value.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(v) if v.eq_ignore_ascii_case("all") => None,
        Some(v) => Some(v),
    }
}

/// Case-insensitive substring match. A missing field never matches.
pub(crate) fn contains(needle: &str, haystack: Option<&str>) -> bool {
    haystack.map_or(false, |h| h.to_lowercase().contains(&needle.to_lowercase()))
}

fn exact(wanted: Option<&str>, actual: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual.as_deref() == Some(w),
    }
}

impl CollegeFilter {
    /// Filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a tier.
    pub fn tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    /// Require an institution type.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Require a recommendation flag.
    pub fn recommended(mut self, recommended: impl Into<String>) -> Self {
        self.recommended = Some(recommended.into());
        self
    }

    /// Require a location substring.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Require a name substring.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True if no criterion is active.
    pub fn is_empty(&self) -> bool {
        active(&self.tier).is_none()
            && active(&self.kind).is_none()
            && active(&self.recommended).is_none()
            && active(&self.location).is_none()
            && active(&self.name).is_none()
    }

    /// Whether `college` passes every active criterion.
    pub fn matches(&self, college: &College) -> bool {
        if !exact(active(&self.tier), &college.tier)
            || !exact(active(&self.kind), &college.kind)
            || !exact(active(&self.recommended), &college.recommended)
        {
            return false;
        }
        if let Some(needle) = active(&self.name) {
            if !contains(needle, Some(&college.name)) {
                return false;
            }
        }
        match active(&self.location) {
            None => true,
            Some(needle) => contains(needle, college.location.as_deref()),
        }
    }
}
