//! traypos - Tray popup window positioning
//!
//! Computes where a small popup window should appear next to its system
//! tray icon, given the icon's bounds, the window size, and the geometry of
//! the monitor underneath.
//!
//! The host windowing system is reached only through the [`Screen`] and
//! [`TrayWindow`] traits:
//!
//! ```
//! use traypos::{Display, Point, Positioner, Rectangle, StaticScreen};
//! use traypos::host::PlatformFamily;
//!
//! let display = Display::new(
//!     Rectangle::new(0, 0, 1440, 900),
//!     Rectangle::new(0, 23, 1440, 877),
//! );
//! let screen = StaticScreen::single(display).with_platform(PlatformFamily::MacOs);
//! let positioner = Positioner::new(screen);
//!
//! let window = Rectangle::new(0, 0, 200, 100);
//! let tray = Rectangle::new(1240, 0, 20, 20);
//! assert_eq!(positioner.calculate(&window, &tray, None), Point::new(1150, 23));
//! ```

pub mod align;
pub mod config;
pub mod display;
pub mod geometry;
pub mod host;
pub mod placement;

pub use align::{align_x, align_y, AlignX, AlignY, Alignment};
pub use config::{Config, ConfigError, ConfigResult};
pub use display::{detect_edge, Display, TaskbarEdge};
pub use geometry::{Point, Rectangle};
pub use host::{HostError, HostResult, Screen, StaticScreen, TrayWindow};
pub use placement::{
    place_by_cursor, PlacementStrategy, PositionError, PositionResult, Positioner,
};
