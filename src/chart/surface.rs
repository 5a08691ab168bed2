//! Drawing surface abstraction
//!
//! The renderer paints through this trait rather than against any concrete
//! output, so the chart pipeline stays pure and testable. The vocabulary is
//! the usual 2D canvas one: build a path out of moves and arcs, then fill it.
//!
//! Coordinates are in surface units with the origin at the top-left and the
//! y axis pointing down; angles increase clockwise on screen.

use crate::chart::color::Color;

/// Sweep direction for arcs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    /// Increasing angle (clockwise on screen)
    Clockwise,
    /// Decreasing angle
    CounterClockwise,
}

/// A 2D vector drawing target
///
/// A surface is exclusively borrowed for the duration of one render call;
/// there is no internal synchronization and none is needed.
pub trait DrawSurface {
    /// Surface width in drawing units
    fn width(&self) -> f64;

    /// Surface height in drawing units
    fn height(&self) -> f64;

    /// Reset the surface to blank
    fn clear(&mut self);

    /// Begin a new path, discarding any unfilled path state
    fn begin_path(&mut self);

    /// Move the current point without drawing
    fn move_to(&mut self, x: f64, y: f64);

    /// Append a circular arc around `(cx, cy)` from `start_angle` to
    /// `end_angle`, sweeping in `direction`
    ///
    /// If a current point exists, it is connected to the arc's start point
    /// with a straight segment, matching canvas semantics. A zero radius
    /// degenerates to the center point.
    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    );

    /// Close the current subpath back to its starting point
    fn close_path(&mut self);

    /// Fill the current path with `color` and end it
    fn fill(&mut self, color: Color);

    /// Geometric center of the surface
    fn center(&self) -> (f64, f64) {
        (self.width() / 2.0, self.height() / 2.0)
    }
}
