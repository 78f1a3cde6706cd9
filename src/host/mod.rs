//! Host windowing system interface
//!
//! The positioner never talks to a display server directly. Hosts implement
//! these traits over whatever toolkit owns the tray icon and hand them in.

mod static_screen;

pub use static_screen::StaticScreen;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::display::Display;
use crate::geometry::{Point, Rectangle};

/// Errors reported by the host while applying a position
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Window no longer exists")]
    WindowGone,

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HostResult<T> = Result<T, HostError>;

/// Desktop platform family reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Windows,
    MacOs,
    /// Tray implementations here do not report reliable icon bounds
    Linux,
    Other,
}

impl PlatformFamily {
    /// Family of the platform this binary was compiled for
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        return PlatformFamily::MacOs;

        #[cfg(target_os = "windows")]
        return PlatformFamily::Windows;

        #[cfg(target_os = "linux")]
        return PlatformFamily::Linux;

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        return PlatformFamily::Other;
    }

    /// Whether tray icon bounds from this platform can be trusted
    pub fn reports_tray_bounds(&self) -> bool {
        !matches!(self, PlatformFamily::Linux)
    }
}

/// Live display and cursor information, queried fresh on every call
pub trait Screen {
    /// Current cursor position in global screen coordinates
    fn cursor_position(&self) -> Point;

    /// The display containing `point`, or the closest one
    fn display_nearest_point(&self, point: Point) -> Display;

    /// Platform family, used to choose a placement strategy
    fn platform_family(&self) -> PlatformFamily {
        PlatformFamily::current()
    }
}

impl<S: Screen + ?Sized> Screen for &S {
    fn cursor_position(&self) -> Point {
        (**self).cursor_position()
    }

    fn display_nearest_point(&self, point: Point) -> Display {
        (**self).display_nearest_point(point)
    }

    fn platform_family(&self) -> PlatformFamily {
        (**self).platform_family()
    }
}

/// A tray popup window owned by the host
pub trait TrayWindow {
    /// Current outer bounds; only width and height are used for placement
    fn bounds(&self) -> Rectangle;

    /// Move the window's top-left corner to `position`
    fn set_position(&mut self, position: Point) -> HostResult<()>;
}
