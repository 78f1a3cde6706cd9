//! Placement orchestration
//!
//! [`Positioner`] picks a strategy, resolves the relevant display through
//! the injected [`Screen`], and dispatches to the edge detector and axis
//! aligners.

mod cursor;

pub use cursor::place_by_cursor;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::align::{align_x, align_y, Alignment};
use crate::config::Config;
use crate::display::{detect_edge, TaskbarEdge};
use crate::geometry::{Point, Rectangle};
use crate::host::{HostError, PlatformFamily, Screen, TrayWindow};

/// Errors from applying a computed position
#[derive(Error, Debug)]
pub enum PositionError {
    #[error("Failed to move window: {0}")]
    Host(#[from] HostError),
}

pub type PositionResult<T> = Result<T, PositionError>;

/// How the anchor for the popup is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStrategy {
    /// Trust tray bounds and place along the taskbar edge
    TaskbarEdge,
    /// Anchor at the cursor; for platforms without tray bounds
    CursorFallback,
}

impl PlacementStrategy {
    pub fn for_platform(platform: PlatformFamily) -> Self {
        if platform.reports_tray_bounds() {
            PlacementStrategy::TaskbarEdge
        } else {
            PlacementStrategy::CursorFallback
        }
    }
}

/// Computes where a tray popup window should go
#[derive(Debug, Clone)]
pub struct Positioner<S> {
    screen: S,
    strategy: PlacementStrategy,
    default_alignment: Alignment,
}

impl<S: Screen> Positioner<S> {
    /// Create a positioner, choosing the strategy from the screen's platform
    pub fn new(screen: S) -> Self {
        let strategy = PlacementStrategy::for_platform(screen.platform_family());
        Self::with_strategy(screen, strategy)
    }

    pub fn with_strategy(screen: S, strategy: PlacementStrategy) -> Self {
        tracing::debug!(?strategy, "positioner created");
        Self {
            screen,
            strategy,
            default_alignment: Alignment::default(),
        }
    }

    /// Create a positioner from configuration
    pub fn from_config(screen: S, config: &Config) -> Self {
        let strategy = config
            .placement
            .strategy
            .resolve(screen.platform_family());
        Self::with_strategy(screen, strategy).with_default_alignment(config.alignment)
    }

    /// Alignment applied to axes a caller leaves unset
    pub fn with_default_alignment(mut self, alignment: Alignment) -> Self {
        self.default_alignment = alignment;
        self
    }

    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Which edge of the tray icon's display holds the taskbar.
    ///
    /// Without usable tray bounds the display under the cursor is used.
    pub fn detect_taskbar_edge(&self, tray: &Rectangle) -> TaskbarEdge {
        let anchor = if self.uses_cursor(tray) {
            self.screen.cursor_position()
        } else {
            tray.origin()
        };
        detect_edge(&self.screen.display_nearest_point(anchor))
    }

    fn uses_cursor(&self, tray: &Rectangle) -> bool {
        self.strategy == PlacementStrategy::CursorFallback || tray.is_empty()
    }

    /// Calculate the top-left point for `window` next to the tray icon.
    ///
    /// Empty tray bounds fall back to the cursor regardless of strategy.
    pub fn calculate(
        &self,
        window: &Rectangle,
        tray: &Rectangle,
        alignment: Option<Alignment>,
    ) -> Point {
        let alignment = alignment
            .unwrap_or_default()
            .or(self.default_alignment);

        if self.uses_cursor(tray) {
            let cursor = self.screen.cursor_position();
            let display = self.screen.display_nearest_point(cursor);
            tracing::debug!(strategy = ?self.strategy, ?tray, "using cursor placement");
            return place_by_cursor(window, &display, cursor, alignment);
        }

        let display = self.screen.display_nearest_point(tray.origin());
        let edge = detect_edge(&display);
        let work_area = display.work_area;

        let point = match edge {
            TaskbarEdge::Left => Point::new(
                work_area.left(),
                align_y(window, tray, &display.bounds, alignment.y),
            ),
            TaskbarEdge::Right => Point::new(
                work_area.right().saturating_sub(window.width),
                align_y(window, tray, &display.bounds, alignment.y),
            ),
            TaskbarEdge::Bottom => Point::new(
                align_x(window, tray, &display.bounds, alignment.x),
                work_area.bottom().saturating_sub(window.height),
            ),
            TaskbarEdge::Top => Point::new(
                align_x(window, tray, &display.bounds, alignment.x),
                work_area.top(),
            ),
        };

        tracing::debug!(%edge, ?point, "calculated tray window position");
        point
    }

    /// Calculate the position for `window` and move it there.
    ///
    /// Returns the point that was applied.
    pub fn position_window<W: TrayWindow + ?Sized>(
        &self,
        window: &mut W,
        tray: &Rectangle,
        alignment: Option<Alignment>,
    ) -> PositionResult<Point> {
        let point = self.calculate(&window.bounds(), tray, alignment);
        window.set_position(point)?;
        Ok(point)
    }
}
