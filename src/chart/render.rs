//! Donut chart renderer
//!
//! Paints laid-out slices onto a drawing surface as filled annular wedges
//! and produces the textual legend. Stateless: every invocation clears the
//! surface and repaints from scratch; data changes trigger a full recompute
//! upstream, never an incremental patch.

use crate::chart::color::Color;
use crate::chart::layout::Slice;
use crate::chart::surface::{ArcDirection, DrawSurface};
use crate::models::Money;

/// Textual summary paired with one slice
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Category label
    pub category: String,
    /// Swatch color, identical to the slice fill
    pub color: Color,
    /// Accumulated amount
    pub amount: Money,
    /// Share of the window total, rounded to one decimal place
    pub percentage: f64,
}

/// The legend for one rendered chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Legend {
    /// One entry per slice, in slice order
    pub entries: Vec<LegendEntry>,
    /// Grand total across all slices, for a center label
    pub total: Money,
}

impl Legend {
    /// True when nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Paint `slices` as a donut chart and return the legend
///
/// Each slice becomes a filled annular wedge between `inner_radius` and
/// `outer_radius`, centered on the surface. `inner_radius == 0` degenerates
/// to a pie chart: the inner arc collapses to the center point through the
/// same path-building code.
///
/// An empty slice sequence is the defined empty state: the surface is
/// cleared and an empty legend returned.
pub fn render<S: DrawSurface>(
    surface: &mut S,
    slices: &[Slice],
    outer_radius: f64,
    inner_radius: f64,
) -> Legend {
    surface.clear();

    if slices.is_empty() {
        return Legend::default();
    }

    let (cx, cy) = surface.center();
    let total: Money = slices.iter().map(|s| s.amount).sum();

    let mut entries = Vec::with_capacity(slices.len());

    for slice in slices {
        // Outer arc sweeps forward, inner arc sweeps back; the connecting
        // radial edges come from the implicit segments between arcs.
        surface.begin_path();
        let (sx, sy) = (
            cx + outer_radius * slice.start_angle.cos(),
            cy + outer_radius * slice.start_angle.sin(),
        );
        surface.move_to(sx, sy);
        surface.arc(
            cx,
            cy,
            outer_radius,
            slice.start_angle,
            slice.end_angle,
            ArcDirection::Clockwise,
        );
        surface.arc(
            cx,
            cy,
            inner_radius,
            slice.end_angle,
            slice.start_angle,
            ArcDirection::CounterClockwise,
        );
        surface.close_path();
        surface.fill(slice.color);

        entries.push(LegendEntry {
            category: slice.category.clone(),
            color: slice.color,
            amount: slice.amount,
            percentage: slice.amount.percent_of(total),
        });
    }

    Legend { entries, total }
}
