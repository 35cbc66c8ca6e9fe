//! Host input subsystem
//!
//! The service and the sampler only need two primitives from the operating
//! system: warp the cursor to a point, and read where the cursor is now.
//! Both sit behind small traits so the session logic can be exercised
//! without a display.

use anyhow::{anyhow, Result};
use enigo::{Coordinate, Enigo, Mouse, Settings};
use std::fmt;

/// A screen position in the host's global coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whole-pixel coordinates, as the OS input APIs expect them
    pub fn to_pixels(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_pixels();
        write!(f, "({}, {})", x, y)
    }
}

/// Posts synthetic "mouse moved" events
///
/// Best-effort: implementations report nothing back to the caller.
pub trait CursorWarp {
    fn post_mouse_moved(&mut self, point: Point);
}

/// Reads the current cursor location
pub trait CursorLocator {
    /// `None` when the OS gave no usable reading
    fn query_cursor_position(&mut self) -> Option<Point>;
}

/// Real backend on top of `enigo`
pub struct EnigoBackend {
    enigo: Enigo,
}

impl EnigoBackend {
    /// Connect to the host input subsystem
    pub fn connect() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow!("Failed to connect to the input subsystem: {}", e))?;
        Ok(Self { enigo })
    }
}

impl CursorWarp for EnigoBackend {
    fn post_mouse_moved(&mut self, point: Point) {
        let (x, y) = point.to_pixels();
        if let Err(e) = self.enigo.move_mouse(x, y, Coordinate::Abs) {
            log::warn!("Cursor move to {} was not delivered: {}", point, e);
        }
    }
}

impl CursorLocator for EnigoBackend {
    fn query_cursor_position(&mut self) -> Option<Point> {
        match self.enigo.location() {
            Ok((x, y)) => Some(Point::new(f64::from(x), f64::from(y))),
            Err(e) => {
                log::debug!("Cursor location unavailable: {}", e);
                None
            }
        }
    }
}
