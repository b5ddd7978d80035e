//! Read-only dropdown snapshots.

use crate::controller::Phase;
use lookahead_core::{Query, SearchItem};

/// Text shown when an open dropdown has nothing to list.
pub const EMPTY_STATE_TEXT: &str = "No results found";

/// Text shown while the first page is loading.
pub const LOADING_TEXT: &str = "Loading...";

/// Everything a renderer needs to draw one search box.
#[derive(Debug, Clone)]
pub struct DropdownView<T> {
    /// Raw value of the text input.
    pub input: String,
    /// Query of the live session (empty when idle).
    pub query: Query,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Whether the dropdown region is shown.
    pub visible: bool,
    /// Whether the latest request is unresolved.
    pub loading: bool,
    /// Accumulated results.
    pub items: Vec<T>,
    /// Message from the last failed request, if it failed.
    pub error: Option<String>,
}

impl<T> Default for DropdownView<T> {
    fn default() -> Self {
        Self {
            input: String::new(),
            query: Query::empty(),
            phase: Phase::Idle,
            visible: false,
            loading: false,
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T: SearchItem> DropdownView<T> {
    /// Open, settled and empty: show the "no results" message.
    pub fn is_empty_state(&self) -> bool {
        self.visible && !self.loading && self.items.is_empty()
    }

    /// Row labels using the display name.
    pub fn rows(&self) -> Vec<String> {
        self.rows_with(|item| item.display_name().to_string())
    }

    /// Row labels using a caller-supplied formatter.
    pub fn rows_with<F>(&self, format: F) -> Vec<String>
    where
        F: Fn(&T) -> String,
    {
        self.items.iter().map(format).collect()
    }

    /// Lines to draw: nothing when hidden, otherwise the rows followed by
    /// a loading or empty-state indicator as appropriate.
    pub fn render_with<F>(&self, format: F) -> Vec<String>
    where
        F: Fn(&T) -> String,
    {
        if !self.visible {
            return Vec::new();
        }
        if self.is_empty_state() {
            return vec![EMPTY_STATE_TEXT.to_string()];
        }
        let mut lines = self.rows_with(format);
        if self.loading {
            lines.push(LOADING_TEXT.to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookahead_core::Hit;

    fn open(items: Vec<Hit>, loading: bool) -> DropdownView<Hit> {
        DropdownView {
            visible: true,
            loading,
            items,
            ..DropdownView::default()
        }
    }

    #[test]
    fn test_hidden_renders_nothing() {
        let view = DropdownView::<Hit>::default();
        assert!(view.render_with(|h| h.name.clone()).is_empty());
        assert!(!view.is_empty_state());
    }

    #[test]
    fn test_empty_state() {
        let view = open(vec![], false);
        assert!(view.is_empty_state());
        assert_eq!(view.render_with(|h| h.name.clone()), vec![EMPTY_STATE_TEXT]);
    }

    #[test]
    fn test_loading_indicator_follows_rows() {
        let view = open(vec![Hit::new("1", "Stanford University")], true);
        assert_eq!(
            view.render_with(|h| h.name.clone()),
            vec!["Stanford University", LOADING_TEXT]
        );
        assert_eq!(open(vec![], true).render_with(|h| h.name.clone()), vec![LOADING_TEXT]);
    }

    #[test]
    fn test_custom_formatter() {
        let view = open(vec![Hit::new("SU", "Stanford University")], false);
        let rows = view.rows_with(|h| format!("{} ({})", h.display_name(), h.id()));
        assert_eq!(rows, vec!["Stanford University (SU)"]);
        assert_eq!(view.rows(), vec!["Stanford University"]);
    }
}
