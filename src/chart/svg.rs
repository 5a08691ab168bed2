//! SVG drawing surface
//!
//! Records path commands as an SVG document so charts can be written to a
//! file and opened in any browser. Arcs are emitted as elliptical-arc path
//! segments; sweeps longer than a quarter turn are split into multiple
//! segments so the large-arc flag never comes into play.

use std::io::Write;

use crate::chart::color::Color;
use crate::chart::surface::{ArcDirection, DrawSurface};

/// Maximum angular span of a single emitted arc segment
const MAX_SEGMENT: f64 = std::f64::consts::FRAC_PI_2;

/// A [`DrawSurface`] that accumulates an SVG document
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    shapes: Vec<String>,
    path: String,
    current: Option<(f64, f64)>,
}

impl SvgSurface {
    /// Create a blank surface of the given pixel dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
            path: String::new(),
            current: None,
        }
    }

    /// Number of filled shapes recorded so far
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Render the accumulated document as an SVG string
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" \
             viewBox=\"0 0 {w:.0} {h:.0}\">\n",
            w = self.width,
            h = self.height,
        ));
        for shape in &self.shapes {
            out.push_str("  ");
            out.push_str(shape);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write the document to any writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.to_svg_string().as_bytes())
    }

    fn point_at(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
        // SVG y axis points down, same as the chart's angle convention
        (cx + radius * angle.cos(), cy + radius * angle.sin())
    }

    fn push_command(&mut self, command: &str) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push_str(command);
    }

    fn line_or_move_to(&mut self, x: f64, y: f64) {
        match self.current {
            Some((cx, cy)) if (cx - x).abs() < 1e-9 && (cy - y).abs() < 1e-9 => {}
            Some(_) => self.push_command(&format!("L {:.2} {:.2}", x, y)),
            None => self.push_command(&format!("M {:.2} {:.2}", x, y)),
        }
        self.current = Some((x, y));
    }
}

impl DrawSurface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.shapes.clear();
        self.path.clear();
        self.current = None;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.current = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_command(&format!("M {:.2} {:.2}", x, y));
        self.current = Some((x, y));
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    ) {
        if radius <= 0.0 {
            // Degenerate arc: the whole sweep collapses to the center point
            self.line_or_move_to(cx, cy);
            return;
        }

        // Canvas-style normalization: the sweep sign must match the
        // requested direction, wrapping by a full turn when it does not.
        let mut sweep = end_angle - start_angle;
        match direction {
            ArcDirection::Clockwise if sweep < 0.0 => sweep += std::f64::consts::TAU,
            ArcDirection::CounterClockwise if sweep > 0.0 => sweep -= std::f64::consts::TAU,
            _ => {}
        }
        let sweep_flag = if sweep >= 0.0 { 1 } else { 0 };

        let (sx, sy) = Self::point_at(cx, cy, radius, start_angle);
        self.line_or_move_to(sx, sy);

        let segments = (sweep.abs() / MAX_SEGMENT).ceil().max(1.0) as usize;
        let step = sweep / segments as f64;

        let mut angle = start_angle;
        for _ in 0..segments {
            angle += step;
            let (x, y) = Self::point_at(cx, cy, radius, angle);
            self.push_command(&format!(
                "A {r:.2} {r:.2} 0 0 {flag} {x:.2} {y:.2}",
                r = radius,
                flag = sweep_flag,
                x = x,
                y = y,
            ));
            self.current = Some((x, y));
        }
    }

    fn close_path(&mut self) {
        self.push_command("Z");
    }

    fn fill(&mut self, color: Color) {
        if !self.path.is_empty() {
            self.shapes
                .push(format!("<path d=\"{}\" fill=\"{}\"/>", self.path, color));
        }
        self.path.clear();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_blank_document() {
        let surface = SvgSurface::new(400.0, 300.0);
        let svg = surface.to_svg_string();
        assert!(svg.starts_with("<svg xmlns="));
        assert!(svg.contains("width=\"400\""));
        assert!(svg.contains("height=\"300\""));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_center() {
        let surface = SvgSurface::new(400.0, 300.0);
        assert_eq!(surface.center(), (200.0, 150.0));
    }

    #[test]
    fn test_filled_arc_produces_path() {
        let mut surface = SvgSurface::new(200.0, 200.0);
        surface.begin_path();
        surface.arc(100.0, 100.0, 80.0, -FRAC_PI_2, FRAC_PI_2, ArcDirection::Clockwise);
        surface.close_path();
        surface.fill(Color::rgb(0x66, 0x7e, 0xea));

        assert_eq!(surface.shape_count(), 1);
        let svg = surface.to_svg_string();
        assert!(svg.contains("fill=\"#667eea\""));
        assert!(svg.contains("A 80.00 80.00"));
        assert!(svg.contains('Z'));
    }

    #[test]
    fn test_half_turn_is_split_into_segments() {
        let mut surface = SvgSurface::new(200.0, 200.0);
        surface.begin_path();
        surface.arc(100.0, 100.0, 50.0, 0.0, PI, ArcDirection::Clockwise);
        surface.fill(Color::rgb(0, 0, 0));

        // pi sweep, quarter-turn segments: two arc commands
        let svg = surface.to_svg_string();
        assert_eq!(svg.matches("A 50.00").count(), 2);
    }

    #[test]
    fn test_zero_radius_degenerates_to_center_line() {
        let mut surface = SvgSurface::new(200.0, 200.0);
        surface.begin_path();
        surface.move_to(150.0, 100.0);
        surface.arc(100.0, 100.0, 0.0, 0.0, PI, ArcDirection::CounterClockwise);
        surface.fill(Color::rgb(0, 0, 0));

        let svg = surface.to_svg_string();
        assert!(svg.contains("L 100.00 100.00"));
        assert!(!svg.contains("A 0.00"));
    }

    #[test]
    fn test_clear_discards_shapes() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.begin_path();
        surface.arc(50.0, 50.0, 40.0, 0.0, PI, ArcDirection::Clockwise);
        surface.fill(Color::rgb(1, 2, 3));
        assert_eq!(surface.shape_count(), 1);

        surface.clear();
        assert_eq!(surface.shape_count(), 0);
        assert!(!surface.to_svg_string().contains("<path"));
    }

    #[test]
    fn test_unfilled_path_is_not_emitted() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.begin_path();
        surface.fill(Color::rgb(1, 2, 3));
        assert_eq!(surface.shape_count(), 0);
    }

    #[test]
    fn test_write_to() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.begin_path();
        surface.arc(50.0, 50.0, 30.0, 0.0, FRAC_PI_2, ArcDirection::Clockwise);
        surface.fill(Color::rgb(9, 9, 9));

        let mut buf = Vec::new();
        surface.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("</svg>"));
    }
}
