//! Per-tick input snapshot consumed by the state machine.

use crate::geometry::Point;

/// Everything the player did since the previous tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Pointer position on the canvas, if it is over the canvas.
    pub pointer: Option<Point>,
    /// A primary click happened this tick at `pointer`.
    pub clicked: bool,
    /// The player asked to leave.
    pub quit: bool,
}

impl InputFrame {
    /// No pointer, no click.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Pointer resting at `point` without clicking.
    pub fn hover(point: Point) -> Self {
        Self {
            pointer: Some(point),
            ..Self::default()
        }
    }

    /// A click at `point`.
    pub fn click(point: Point) -> Self {
        Self {
            pointer: Some(point),
            clicked: true,
            quit: false,
        }
    }

    /// Position of this tick's click, if any.
    pub fn click_position(&self) -> Option<Point> {
        if self.clicked {
            self.pointer
        } else {
            None
        }
    }
}
