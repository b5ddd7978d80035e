//! User interaction inputs.

/// Where a pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the text input.
    Input,
    /// Inside the dropdown region.
    Dropdown,
    /// Anywhere else on the page.
    Outside,
}

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Dismiss the dropdown.
    Escape,
    /// Submit the current input.
    Enter,
    /// Any other key.
    Other,
}

/// Scroll position of the results container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Offset of the visible area from the top of the content.
    pub scroll_top: f64,
    /// Height of the visible area.
    pub client_height: f64,
    /// Height of the whole content.
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Create metrics.
    pub fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Metrics for a container scrolled all the way down.
    pub fn at_bottom(client_height: f64, scroll_height: f64) -> Self {
        Self::new((scroll_height - client_height).max(0.0), client_height, scroll_height)
    }

    /// Remaining distance to the bottom of the content, never negative.
    pub fn distance_from_bottom(&self) -> f64 {
        (self.scroll_height - (self.scroll_top + self.client_height)).max(0.0)
    }
}

/// Event fed to a [`SearchBox`](crate::SearchBox).
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// New raw value of the text input.
    Input(String),
    /// Results container scrolled.
    Scroll(ScrollMetrics),
    /// Pointer pressed somewhere on the page.
    PointerDown(PointerTarget),
    /// Key pressed in the input.
    Key(Key),
    /// Row at the given index chosen.
    Select(usize),
}
