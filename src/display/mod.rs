//! Display geometry and taskbar edge detection
//!
//! A display carries two rectangles: the full monitor `bounds` and the
//! `work_area` left over once the OS has reserved space for its taskbar.
//! The side on which the two differ tells us where the taskbar lives.

use serde::{Deserialize, Serialize};

use crate::geometry::Rectangle;

/// Screen edge holding the taskbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskbarEdge {
    Top,
    Left,
    Bottom,
    Right,
}

impl TaskbarEdge {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskbarEdge::Top => "top",
            TaskbarEdge::Left => "left",
            TaskbarEdge::Bottom => "bottom",
            TaskbarEdge::Right => "right",
        }
    }
}

impl std::fmt::Display for TaskbarEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monitor as reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Full monitor extent
    pub bounds: Rectangle,
    /// Usable area, always inside `bounds`
    pub work_area: Rectangle,
}

impl Display {
    pub fn new(bounds: Rectangle, work_area: Rectangle) -> Self {
        Self { bounds, work_area }
    }

    /// Which edge the taskbar sits on
    pub fn taskbar_edge(&self) -> TaskbarEdge {
        detect_edge(self)
    }
}

/// Infer the taskbar edge by comparing work area against monitor bounds.
///
/// Rules are checked in order and the first match wins. Top and left compare
/// displacement from the monitor's own origin, so secondary monitors with
/// negative or non-zero origins classify correctly.
pub fn detect_edge(display: &Display) -> TaskbarEdge {
    let Display { bounds, work_area } = display;

    let edge = if work_area.y > bounds.y {
        TaskbarEdge::Top
    } else if work_area.x > bounds.x {
        TaskbarEdge::Left
    } else if work_area.width == bounds.width {
        TaskbarEdge::Bottom
    } else {
        TaskbarEdge::Right
    };

    tracing::trace!(?bounds, ?work_area, %edge, "detected taskbar edge");
    edge
}
