//! Backend-independent vector paths (move / line / cubic / close).
//!
//! A `Path` is what the edge builder appends to and what a `Surface` strokes.
//! `Display` renders SVG path data (`M`, `L`, `C`, `Z`) with two decimals.

use std::fmt;

use nalgebra::{Point2, Vector2};

/// One path command, in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathEl {
    MoveTo(Point2<f64>),
    LineTo(Point2<f64>),
    /// Cubic Bézier: two control points then the end point.
    CurveTo(Point2<f64>, Point2<f64>, Point2<f64>),
    ClosePath,
}

/// Ordered list of path commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn move_to(&mut self, p: Point2<f64>) {
        self.els.push(PathEl::MoveTo(p));
    }

    #[inline]
    pub fn line_to(&mut self, p: Point2<f64>) {
        self.els.push(PathEl::LineTo(p));
    }

    #[inline]
    pub fn curve_to(&mut self, c1: Point2<f64>, c2: Point2<f64>, end: Point2<f64>) {
        self.els.push(PathEl::CurveTo(c1, c2, end));
    }

    #[inline]
    pub fn close(&mut self) {
        self.els.push(PathEl::ClosePath);
    }

    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// Pen position after the last command (the subpath start after a close).
    pub fn current_point(&self) -> Option<Point2<f64>> {
        let mut start = None;
        let mut current = None;
        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) => {
                    start = Some(p);
                    current = Some(p);
                }
                PathEl::LineTo(p) | PathEl::CurveTo(_, _, p) => current = Some(p),
                PathEl::ClosePath => current = start,
            }
        }
        current
    }

    /// Whether the last command closes the subpath.
    pub fn is_closed(&self) -> bool {
        matches!(self.els.last(), Some(PathEl::ClosePath))
    }

    /// Every end point and control point, in command order.
    pub fn points(&self) -> Vec<Point2<f64>> {
        let mut out = Vec::with_capacity(self.els.len() * 3);
        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => out.push(p),
                PathEl::CurveTo(c1, c2, p) => out.extend([c1, c2, p]),
                PathEl::ClosePath => {}
            }
        }
        out
    }

    /// True if no coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.points()
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Points on the drawn outline; each cubic is flattened into `steps` samples.
    pub fn sample(&self, steps: usize) -> Vec<Point2<f64>> {
        let steps = steps.max(1);
        let mut out = Vec::new();
        let mut current = Point2::origin();
        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => {
                    out.push(p);
                    current = p;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    for step in 1..=steps {
                        let t = step as f64 / steps as f64;
                        out.push(cubic_point(current, c1, c2, p, t));
                    }
                    current = p;
                }
                PathEl::ClosePath => {}
            }
        }
        out
    }

    /// Axis-aligned `(min, max)` of the sampled outline; `None` for an empty path.
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let pts = self.sample(32);
        let first = *pts.first()?;
        Some(pts.iter().fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// Copy of the path shifted by `offset`.
    pub fn translate(&self, offset: Vector2<f64>) -> Self {
        let els = self
            .els
            .iter()
            .map(|el| match *el {
                PathEl::MoveTo(p) => PathEl::MoveTo(p + offset),
                PathEl::LineTo(p) => PathEl::LineTo(p + offset),
                PathEl::CurveTo(c1, c2, p) => PathEl::CurveTo(c1 + offset, c2 + offset, p + offset),
                PathEl::ClosePath => PathEl::ClosePath,
            })
            .collect();
        Self { els }
    }
}

/// Bernstein form of a cubic Bézier at `t ∈ [0, 1]`.
pub fn cubic_point(
    p0: Point2<f64>,
    p1: Point2<f64>,
    p2: Point2<f64>,
    p3: Point2<f64>,
    t: f64,
) -> Point2<f64> {
    let u = 1.0 - t;
    let (uu, tt) = (u * u, t * t);
    let v = p0.coords * (uu * u)
        + p1.coords * (3.0 * uu * t)
        + p2.coords * (3.0 * u * tt)
        + p3.coords * (tt * t);
    Point2::from(v)
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, el) in self.els.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(f, "M{:.2},{:.2}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(f, "L{:.2},{:.2}", p.x, p.y)?,
                PathEl::CurveTo(c1, c2, p) => write!(
                    f,
                    "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                    c1.x, c1.y, c2.x, c2.y, p.x, p.y
                )?,
                PathEl::ClosePath => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{point, vector};

    fn square() -> Path {
        let mut p = Path::new();
        p.move_to(point![0.0, 0.0]);
        p.line_to(point![10.0, 0.0]);
        p.line_to(point![10.0, 10.0]);
        p.line_to(point![0.0, 10.0]);
        p.close();
        p
    }

    #[test]
    fn current_point_returns_to_start_after_close() {
        let mut p = square();
        assert_eq!(p.current_point(), Some(point![0.0, 0.0]));
        p.line_to(point![3.0, 4.0]);
        assert_eq!(p.current_point(), Some(point![3.0, 4.0]));
        assert!(!p.is_closed());
        assert_eq!(Path::new().current_point(), None);
    }

    #[test]
    fn cubic_endpoints_and_midpoint() {
        let (a, b, c, d) = (
            point![0.0, 0.0],
            point![0.0, 10.0],
            point![10.0, 10.0],
            point![10.0, 0.0],
        );
        assert_eq!(cubic_point(a, b, c, d, 0.0), a);
        assert_eq!(cubic_point(a, b, c, d, 1.0), d);
        let mid = cubic_point(a, b, c, d, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-12);
        assert!((mid.y - 7.5).abs() < 1e-12);
    }

    #[test]
    fn bounds_include_curve_bulge() {
        let mut p = Path::new();
        p.move_to(point![0.0, 0.0]);
        p.curve_to(point![0.0, -10.0], point![10.0, -10.0], point![10.0, 0.0]);
        let (lo, hi) = p.bounds().unwrap();
        assert!((lo.y + 7.5).abs() < 1e-9);
        assert_eq!(hi, point![10.0, 0.0]);
        assert!(Path::new().bounds().is_none());
    }

    #[test]
    fn translate_moves_every_point() {
        let p = square().translate(vector![5.0, -1.0]);
        assert_eq!(p.points()[0], point![5.0, -1.0]);
        assert_eq!(p.points()[2], point![15.0, 9.0]);
        assert!(p.is_closed());
    }

    #[test]
    fn svg_path_data() {
        let mut p = Path::new();
        p.move_to(point![1.0, 2.0]);
        p.curve_to(point![1.0, 0.0], point![3.0, 0.0], point![3.0, 2.5]);
        p.close();
        assert_eq!(p.to_string(), "M1.00,2.00 C1.00,0.00 3.00,0.00 3.00,2.50 Z");
    }
}
