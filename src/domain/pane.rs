//! Pane state model.
//!
//! A [`PaneState`] is the canonical record for one side pane. Everything a
//! renderer needs beyond it (expanded flag, rendered width, central width) is
//! derived on read and never stored.

use crate::domain::constants::{
    COMPACT_SIDE_PANE_WIDTH, DEFAULT_SIDE_PANE_WIDTH, MAX_SIDE_PANE_WIDTH, MIN_SIDE_PANE_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which edge of the viewport a pane is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Pane anchored to the left edge.
    Left,
    /// Pane anchored to the right edge.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Returns the opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name, used as the persistence key and in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a pane is open, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenState {
    /// Rest state. Rendered according to the pane's [`ClosedStyle`].
    Closed,

    /// Revealed by hover. Ephemeral: never persisted, closes when the pointer
    /// leaves, demoted on viewport recomputation.
    Temporary,

    /// Opened by the user. Persisted and unaffected by pointer movement.
    Pinned,
}

/// How a closed pane is rendered.
///
/// Configured per pane at initialization and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosedStyle {
    /// Removed from the layout entirely.
    Hidden,
    /// Kept as a bar of [`COMPACT_SIDE_PANE_WIDTH`] pixels.
    Compact,
}

/// Clamps a requested width to `[MIN_SIDE_PANE_WIDTH, MAX_SIDE_PANE_WIDTH]`.
///
/// Accepts a signed value so drag arithmetic can pass intermediate results
/// straight through.
///
/// ```
/// use sidepanes::domain::{clamp_side_pane_width, MAX_SIDE_PANE_WIDTH, MIN_SIDE_PANE_WIDTH};
///
/// assert_eq!(clamp_side_pane_width(-40), MIN_SIDE_PANE_WIDTH);
/// assert_eq!(clamp_side_pane_width(250), 250);
/// assert_eq!(clamp_side_pane_width(10_000), MAX_SIDE_PANE_WIDTH);
/// ```
#[must_use]
pub fn clamp_side_pane_width(px: i64) -> u32 {
    let clamped = px.clamp(i64::from(MIN_SIDE_PANE_WIDTH), i64::from(MAX_SIDE_PANE_WIDTH));
    u32::try_from(clamped).unwrap_or(MIN_SIDE_PANE_WIDTH)
}

/// Canonical state of one side pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneState {
    /// Current open state.
    pub open_state: OpenState,

    /// Expanded width in pixels, always within the side pane bounds.
    pub width: u32,

    /// Rendering of the closed state.
    pub closed_style: ClosedStyle,
}

impl PaneState {
    /// Built-in defaults: left is pinned and compact, right is closed and hidden.
    #[must_use]
    pub const fn default_for(side: Side) -> Self {
        match side {
            Side::Left => Self {
                open_state: OpenState::Pinned,
                width: DEFAULT_SIDE_PANE_WIDTH,
                closed_style: ClosedStyle::Compact,
            },
            Side::Right => Self {
                open_state: OpenState::Closed,
                width: DEFAULT_SIDE_PANE_WIDTH,
                closed_style: ClosedStyle::Hidden,
            },
        }
    }

    /// `true` while the pane shows its content (temporary or pinned).
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        matches!(self.open_state, OpenState::Temporary | OpenState::Pinned)
    }

    /// `true` while the pane is hover-revealed.
    #[must_use]
    pub const fn is_temporary(&self) -> bool {
        matches!(self.open_state, OpenState::Temporary)
    }

    /// Horizontal pixels the pane occupies in the layout.
    ///
    /// Expanded panes occupy their width; closed panes occupy the compact bar
    /// width or nothing, depending on their closed style.
    #[must_use]
    pub const fn footprint(&self) -> u32 {
        if self.is_expanded() {
            self.width
        } else {
            self.closed_footprint()
        }
    }

    /// Footprint the pane would have if it were closed.
    #[must_use]
    pub const fn closed_footprint(&self) -> u32 {
        match self.closed_style {
            ClosedStyle::Compact => COMPACT_SIDE_PANE_WIDTH,
            ClosedStyle::Hidden => 0,
        }
    }
}

/// Per-pane initialization overrides.
///
/// Every field is optional; unset fields fall back to persisted values and then
/// to [`PaneState::default_for`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    /// Initial open state. `Temporary` is accepted but starts the pane closed.
    pub open_state: Option<OpenState>,

    /// Initial width, clamped to the side pane bounds.
    pub width: Option<u32>,

    /// Closed rendering style.
    pub closed_style: Option<ClosedStyle>,
}

impl PaneConfig {
    /// Overrides only the closed style.
    #[must_use]
    pub const fn with_closed_style(closed_style: ClosedStyle) -> Self {
        Self {
            open_state: None,
            width: None,
            closed_style: Some(closed_style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_anchor() {
        assert_eq!(
            PaneState::default_for(Side::Left),
            PaneState {
                open_state: OpenState::Pinned,
                width: 320,
                closed_style: ClosedStyle::Compact,
            }
        );
        assert_eq!(
            PaneState::default_for(Side::Right),
            PaneState {
                open_state: OpenState::Closed,
                width: 320,
                closed_style: ClosedStyle::Hidden,
            }
        );
    }

    #[test]
    fn footprint_follows_closed_style() {
        let mut pane = PaneState::default_for(Side::Left);
        assert_eq!(pane.footprint(), 320);

        pane.open_state = OpenState::Closed;
        assert_eq!(pane.footprint(), COMPACT_SIDE_PANE_WIDTH);

        pane.closed_style = ClosedStyle::Hidden;
        assert_eq!(pane.footprint(), 0);

        pane.open_state = OpenState::Temporary;
        assert_eq!(pane.footprint(), 320);
        assert!(pane.is_temporary());
        assert!(pane.is_expanded());
    }

    #[test]
    fn side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"right\"");
        assert_eq!(Side::Left.other(), Side::Right);
    }
}
