//! Cursor-anchored placement
//!
//! Used when tray icon bounds cannot be trusted. The cursor stands in for a
//! zero-size tray icon and the same axis aligners apply, against the full
//! display bounds and without consulting the taskbar.

use crate::align::{align_x, align_y, Alignment};
use crate::display::Display;
use crate::geometry::{Point, Rectangle};

/// Place the window around `cursor` on `display`.
///
/// Per axis the window is anchored at the cursor, shifted by its full
/// extent, or centered on it. A window that would run off the right or
/// bottom of the display is flipped to the other side of the cursor.
pub fn place_by_cursor(
    window: &Rectangle,
    display: &Display,
    cursor: Point,
    alignment: Alignment,
) -> Point {
    let anchor = Rectangle::at_point(cursor);
    let x = align_x(window, &anchor, &display.bounds, alignment.x);
    let y = align_y(window, &anchor, &display.bounds, alignment.y);

    tracing::debug!(?cursor, x, y, "placed by cursor");
    Point::new(x, y)
}
