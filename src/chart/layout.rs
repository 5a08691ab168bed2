//! Arc layout for the category donut chart
//!
//! Converts per-category totals into an ordered sequence of angular slices
//! covering a full turn. Angles follow the screen convention (y axis down):
//! 0 points right, angles increase clockwise, and the chart starts at the
//! 12 o'clock position.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::chart::color::{Color, Palette};
use crate::chart::CategoryTotals;
use crate::models::Money;

/// Angle of the 12 o'clock position, where the first slice begins
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// One angular wedge of the donut chart
///
/// Ephemeral: slices exist for the duration of one render pass and are never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Category label this slice represents
    pub category: String,
    /// Accumulated amount for the category
    pub amount: Money,
    /// Angle where the slice begins
    pub start_angle: f64,
    /// Angle where the slice ends
    pub end_angle: f64,
    /// Fill color, assigned from the palette
    pub color: Color,
}

impl Slice {
    /// Angular span of this slice in radians
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Lay out category totals as contiguous slices of a full circle
///
/// Slices are ordered by descending amount (ties by label ascending) and
/// colored by palette position, cycling when there are more categories than
/// colors. The running angle accumulates across slices rather than being
/// re-derived per slice, which keeps the final boundary within float
/// precision of a closed circle.
///
/// A zero (or empty) total produces no slices; callers treat that as
/// "nothing to draw", not as an error.
pub fn layout(totals: &CategoryTotals, palette: &Palette) -> Vec<Slice> {
    let total = totals.total();
    if !total.is_positive() {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(totals.len());
    let mut angle = START_ANGLE;

    for (index, (category, amount)) in totals.sorted().into_iter().enumerate() {
        let span = amount.fraction_of(total) * TAU;
        let start_angle = angle;
        angle += span;

        slices.push(Slice {
            category: category.to_string(),
            amount,
            start_angle,
            end_angle: angle,
            color: palette.color_for(index),
        });
    }

    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-9;

    fn totals(entries: &[(&str, i64)]) -> CategoryTotals {
        let mut t = CategoryTotals::new();
        for (category, cents) in entries {
            t.add(*category, Money::from_cents(*cents));
        }
        t
    }

    #[test]
    fn test_empty_totals_yield_no_slices() {
        let slices = layout(&CategoryTotals::new(), &Palette::default());
        assert!(slices.is_empty());
    }

    #[test]
    fn test_zero_total_yields_no_slices() {
        let slices = layout(&totals(&[("Food", 0)]), &Palette::default());
        assert!(slices.is_empty());
    }

    #[test]
    fn test_spans_sum_to_full_turn() {
        let t = totals(&[
            ("Food", 12345),
            ("Travel", 6789),
            ("Bills", 1011),
            ("Entertainment", 1213),
            ("Groceries", 907),
        ]);
        let slices = layout(&t, &Palette::default());

        let sum: f64 = slices.iter().map(Slice::span).sum();
        assert!((sum - TAU).abs() < TOLERANCE, "span sum was {}", sum);
    }

    #[test]
    fn test_slices_are_contiguous_from_twelve_oclock() {
        let t = totals(&[("Food", 300), ("Travel", 200), ("Bills", 100)]);
        let slices = layout(&t, &Palette::default());

        assert!((slices[0].start_angle - START_ANGLE).abs() < TOLERANCE);
        for pair in slices.windows(2) {
            assert!(
                (pair[1].start_angle - pair[0].end_angle).abs() < TOLERANCE,
                "gap between {} and {}",
                pair[0].category,
                pair[1].category
            );
        }
    }

    #[test]
    fn test_equal_split_gives_half_turns() {
        // Food 150 + Travel 150: two slices of exactly pi radians
        let t = totals(&[("Food", 15000), ("Travel", 15000)]);
        let slices = layout(&t, &Palette::default());

        assert_eq!(slices.len(), 2);
        assert!((slices[0].span() - PI).abs() < TOLERANCE);
        assert!((slices[1].span() - PI).abs() < TOLERANCE);
        // Ties broken by label: Food before Travel
        assert_eq!(slices[0].category, "Food");
        assert_eq!(slices[1].category, "Travel");
    }

    #[test]
    fn test_order_is_descending_amount() {
        let t = totals(&[("Small", 100), ("Large", 900), ("Medium", 500)]);
        let slices = layout(&t, &Palette::default());

        let order: Vec<&str> = slices.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["Large", "Medium", "Small"]);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let t = totals(&[("A", 250), ("B", 250), ("C", 500)]);
        let palette = Palette::default();
        assert_eq!(layout(&t, &palette), layout(&t, &palette));
    }

    #[test]
    fn test_palette_cycles_over_many_categories() {
        let palette = Palette::new(vec![
            Color::rgb(1, 1, 1),
            Color::rgb(2, 2, 2),
            Color::rgb(3, 3, 3),
            Color::rgb(4, 4, 4),
        ])
        .unwrap();

        // Ten categories with descending amounts so sort order is by index
        let entries: Vec<(String, i64)> = (0..10)
            .map(|i| (format!("cat{:02}", i), 1000 - i as i64))
            .collect();
        let mut t = CategoryTotals::new();
        for (category, cents) in &entries {
            t.add(category.clone(), Money::from_cents(*cents));
        }

        let slices = layout(&t, &palette);
        assert_eq!(slices.len(), 10);
        for (i, slice) in slices.iter().enumerate() {
            assert_eq!(slice.color, palette.color_for(i % 4));
        }
    }

    #[test]
    fn test_running_angle_bounds_drift() {
        // Many tiny uneven slices; the final end angle must still land on a
        // closed circle within tolerance.
        let entries: Vec<(String, i64)> = (0..200)
            .map(|i| (format!("c{:03}", i), 1 + (i as i64 * 7) % 13))
            .collect();
        let mut t = CategoryTotals::new();
        for (category, cents) in &entries {
            t.add(category.clone(), Money::from_cents(*cents));
        }

        let slices = layout(&t, &Palette::default());
        let final_end = slices.last().unwrap().end_angle;
        assert!((final_end - (START_ANGLE + TAU)).abs() < TOLERANCE);
    }
}
