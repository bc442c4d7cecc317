//! Pointer geometry supplied by the host.
//!
//! The host owns layout and hit-testing of real elements; it reports bounding
//! boxes for each edge's sensor, pane and toggle control, and pointer positions
//! in the same coordinate space.

use crate::domain::Side;
use serde::{Deserialize, Serialize};

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the point lies inside (edges inclusive on the top-left).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Portion of an edge sensor that does not count toward hover-open.
///
/// `inner` is measured from the sensor side facing the central pane, `outer`
/// from the side facing the viewport edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadZone {
    /// Ignored pixels on the content-facing side.
    pub inner: f64,
    /// Ignored pixels on the viewport-facing side.
    pub outer: f64,
}

impl DeadZone {
    /// No dead zone: the whole sensor triggers.
    pub const NONE: Self = Self {
        inner: 0.0,
        outer: 0.0,
    };
}

/// Dead-zone configuration for both edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorGeometry {
    /// Left edge dead zone.
    pub left: DeadZone,
    /// Right edge dead zone.
    pub right: DeadZone,
}

impl Default for SensorGeometry {
    /// The left edge has no dead zone; the right edge ignores its 16
    /// content-facing pixels so only the strip next to the viewport edge
    /// triggers.
    fn default() -> Self {
        Self {
            left: DeadZone::NONE,
            right: DeadZone {
                inner: 16.0,
                outer: 0.0,
            },
        }
    }
}

impl SensorGeometry {
    /// Dead zone of one edge.
    #[must_use]
    pub const fn dead_zone(&self, side: Side) -> DeadZone {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Bounding boxes of one edge's interactive regions.
///
/// Regions that are not currently rendered are `None` (a hidden closed pane
/// has no pane box).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeGeometry {
    /// Edge hover sensor.
    pub sensor: Option<Rect>,
    /// The pane itself.
    pub pane: Option<Rect>,
    /// The pane's toggle control.
    pub toggle: Option<Rect>,
}

/// Where the pointer is relative to an edge sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerZone {
    /// Not over the sensor.
    #[default]
    Outside,
    /// Over the sensor's ignored strip.
    DeadZone,
    /// Over the part of the sensor that arms hover-open.
    TriggerZone,
}

/// Classifies a pointer position against one edge's sensor.
///
/// ```
/// use sidepanes::domain::Side;
/// use sidepanes::interaction::{classify_pointer, DeadZone, Point, PointerZone, Rect};
///
/// let sensor = Rect::new(1560.0, 0.0, 40.0, 800.0);
/// let dead = DeadZone { inner: 16.0, outer: 0.0 };
///
/// assert_eq!(classify_pointer(Side::Right, &sensor, dead, Point::new(1590.0, 400.0)), PointerZone::TriggerZone);
/// assert_eq!(classify_pointer(Side::Right, &sensor, dead, Point::new(1565.0, 400.0)), PointerZone::DeadZone);
/// assert_eq!(classify_pointer(Side::Right, &sensor, dead, Point::new(800.0, 400.0)), PointerZone::Outside);
/// ```
#[must_use]
pub fn classify_pointer(side: Side, sensor: &Rect, dead_zone: DeadZone, point: Point) -> PointerZone {
    if !sensor.contains(point) {
        return PointerZone::Outside;
    }

    let (from_outer, from_inner) = match side {
        Side::Left => (point.x - sensor.x, sensor.right() - point.x),
        Side::Right => (sensor.right() - point.x, point.x - sensor.x),
    };

    if from_outer < dead_zone.outer || from_inner < dead_zone.inner {
        PointerZone::DeadZone
    } else {
        PointerZone::TriggerZone
    }
}
