//! Axis alignment of a popup window against a tray anchor
//!
//! Each aligner computes a candidate coordinate on one axis from the
//! requested alignment, then pulls the window back onto the monitor when
//! the candidate would spill past its bounds. The clamp only ever moves the
//! window toward a side the caller did not explicitly pin.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{centered, far_aligned, Rectangle};

/// Horizontal alignment, used when the taskbar is at the top or bottom
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AlignX {
    /// Window extends to the left of the tray icon
    Left,
    #[default]
    Center,
    /// Window extends to the right of the tray icon
    Right,
}

/// Vertical alignment, used when the taskbar is at the left or right
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AlignY {
    /// Window extends above the tray icon
    Up,
    Center,
    /// Window extends below the tray icon
    #[default]
    Down,
}

impl AlignX {
    /// Parse a name, falling back to `Center` for anything unrecognized
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => AlignX::Left,
            "center" => AlignX::Center,
            "right" => AlignX::Right,
            other => {
                tracing::debug!(value = other, "unknown x alignment, using center");
                AlignX::default()
            }
        }
    }
}

impl AlignY {
    /// Parse a name, falling back to `Down` for anything unrecognized
    pub fn from_name(name: &str) -> Self {
        match name {
            "up" => AlignY::Up,
            "center" => AlignY::Center,
            "down" => AlignY::Down,
            other => {
                tracing::debug!(value = other, "unknown y alignment, using down");
                AlignY::default()
            }
        }
    }
}

impl FromStr for AlignX {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl FromStr for AlignY {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for AlignX {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl From<String> for AlignY {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

/// Preferred placement of the window relative to the tray icon.
/// Either axis may be left unset; each defaults on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AlignX>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AlignY>,
}

impl Alignment {
    pub fn new(x: AlignX, y: AlignY) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn x(x: AlignX) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    pub fn y(y: AlignY) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    /// Fill unset axes from `fallback`
    pub fn or(self, fallback: Alignment) -> Self {
        Self {
            x: self.x.or(fallback.x),
            y: self.y.or(fallback.y),
        }
    }
}

/// Compute the window's x coordinate next to the tray icon.
///
/// `bounds` is the monitor's full extent, not its work area: the popup may
/// overlap the taskbar strip but must not leave the monitor.
pub fn align_x(
    window: &Rectangle,
    tray: &Rectangle,
    bounds: &Rectangle,
    align: Option<AlignX>,
) -> i32 {
    let align_left = || far_aligned(tray.x, tray.width, window.width);
    let align_right = || tray.x;

    let mut x = match align.unwrap_or_default() {
        AlignX::Right => align_right(),
        AlignX::Left => align_left(),
        AlignX::Center => centered(tray.x, tray.width, window.width),
    };
    tracing::trace!(x, ?align, "x candidate");

    if x.saturating_add(window.width) > bounds.right() && align != Some(AlignX::Left) {
        tracing::debug!(x, right = bounds.right(), "window overflows right, aligning left");
        x = align_left();
    } else if x < bounds.left() && align != Some(AlignX::Right) {
        tracing::debug!(x, left = bounds.left(), "window overflows left, aligning right");
        x = align_right();
    }

    x
}

/// Compute the window's y coordinate next to the tray icon.
///
/// Mirrors [`align_x`] on the vertical axis.
pub fn align_y(
    window: &Rectangle,
    tray: &Rectangle,
    bounds: &Rectangle,
    align: Option<AlignY>,
) -> i32 {
    let align_up = || far_aligned(tray.y, tray.height, window.height);
    let align_down = || tray.y;

    let mut y = match align.unwrap_or_default() {
        AlignY::Up => align_up(),
        AlignY::Center => centered(tray.y, tray.height, window.height),
        AlignY::Down => align_down(),
    };
    tracing::trace!(y, ?align, "y candidate");

    if y.saturating_add(window.height) > bounds.bottom() && align != Some(AlignY::Up) {
        tracing::debug!(y, bottom = bounds.bottom(), "window overflows bottom, aligning up");
        y = align_up();
    } else if y < bounds.top() && align != Some(AlignY::Down) {
        tracing::debug!(y, top = bounds.top(), "window overflows top, aligning down");
        y = align_down();
    }

    y
}
