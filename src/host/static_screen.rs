//! In-memory screen snapshot
//!
//! Holds a fixed monitor layout and cursor position. Useful for hosts that
//! read the layout once per event and for driving the positioner in tests.

use crate::display::Display;
use crate::geometry::{Point, Rectangle};

use super::{PlatformFamily, Screen};

/// A [`Screen`] backed by a fixed list of displays
#[derive(Debug, Clone)]
pub struct StaticScreen {
    displays: Vec<Display>,
    cursor: Point,
    platform: PlatformFamily,
}

impl StaticScreen {
    pub fn new(displays: Vec<Display>) -> Self {
        if displays.is_empty() {
            tracing::warn!("static screen created without displays");
        }
        Self {
            displays,
            cursor: Point::default(),
            platform: PlatformFamily::current(),
        }
    }

    /// Single-display layout
    pub fn single(display: Display) -> Self {
        Self::new(vec![display])
    }

    pub fn with_cursor(mut self, cursor: Point) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_platform(mut self, platform: PlatformFamily) -> Self {
        self.platform = platform;
        self
    }

    pub fn set_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    pub fn displays(&self) -> &[Display] {
        &self.displays
    }
}

impl Screen for StaticScreen {
    fn cursor_position(&self) -> Point {
        self.cursor
    }

    fn display_nearest_point(&self, point: Point) -> Display {
        if let Some(display) = self.displays.iter().find(|d| d.bounds.contains(point)) {
            return *display;
        }

        // min_by_key keeps the first of equal candidates
        match self
            .displays
            .iter()
            .min_by_key(|d| d.bounds.distance_squared_to(point))
        {
            Some(nearest) => {
                tracing::debug!(?point, bounds = ?nearest.bounds, "point outside all displays, using nearest");
                *nearest
            }
            None => Display::new(Rectangle::default(), Rectangle::default()),
        }
    }

    fn platform_family(&self) -> PlatformFamily {
        self.platform
    }
}
