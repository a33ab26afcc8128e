//! Edge path builder: one piece edge, straight or with a nub.
//!
//! A nub is drawn relative to the edge's own axis, so the same code serves the
//! horizontal and vertical edges of a piece in either walking direction:
//!
//! ```text
//!                 top_left ──── top_right
//!                 (                     )
//!  start ──── base_left          base_right ──── end
//! ```
//!
//! The nub normal is the edge axis turned a quarter clockwise for
//! `Outward` and counter-clockwise for `Inward`; that single rule is what makes
//! the two states mirror each other across a shared edge.

use nalgebra::Point2;

use crate::geometry::{direction, distance, rotate, rotate90, unit_axis};
use crate::path::Path;
use crate::piece::NubDirection;

/// Nub proportions, all relative to the edge length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NubProfile {
    /// Where the neck starts, as a fraction of the edge.
    pub base_offset: f64,
    pub height: f64,
    pub width: f64,
    /// Length of the neck control arm, as a fraction of the nub height.
    pub arm: f64,
    /// Tilt of the neck control arm off the nub normal, in degrees.
    pub arm_tilt_deg: f64,
    /// Pull of the shoulder control point along the edge.
    pub shoulder: f64,
}

impl Default for NubProfile {
    fn default() -> Self {
        Self {
            base_offset: 0.4125,
            height: 0.20,
            width: 0.175,
            arm: 0.4,
            arm_tilt_deg: 15.0,
            shoulder: 0.15,
        }
    }
}

/// Append the edge `start → end` to `path` using the default nub proportions.
///
/// `None` is a border edge and becomes a single straight segment. The pen is
/// assumed to already sit at `start`.
pub fn add_edge(path: &mut Path, start: Point2<f64>, end: Point2<f64>, nub: Option<NubDirection>) {
    add_edge_with(&NubProfile::default(), path, start, end, nub);
}

/// [`add_edge`] with explicit nub proportions.
pub fn add_edge_with(
    profile: &NubProfile,
    path: &mut Path,
    start: Point2<f64>,
    end: Point2<f64>,
    nub: Option<NubDirection>,
) {
    let Some(dir) = nub else {
        path.line_to(end);
        return;
    };
    let cw = dir.is_clockwise();

    let line = direction(start, end);
    let axis = unit_axis(line);
    let len = distance(start, end);

    let nub_axis = rotate90(axis, cw);
    let nub_height = len * profile.height;
    let nub_width = len * profile.width;
    let arm = nub_axis * (nub_height * profile.arm);

    let base_left = start + line * profile.base_offset;
    path.line_to(base_left);

    let top_left = base_left + nub_axis * nub_height;
    let top_left_c1 = base_left + rotate(arm, cw, profile.arm_tilt_deg);
    let top_left_c2 = top_left + (-line * profile.shoulder);
    path.curve_to(top_left_c1, top_left_c2, top_left);

    let top_right = top_left + axis * nub_width;
    path.line_to(top_right);

    let base_right = top_right - nub_axis * nub_height;
    let base_right_c1 = top_right + line * profile.shoulder;
    let base_right_c2 = base_right + rotate(arm, cw, -profile.arm_tilt_deg);
    path.curve_to(base_right_c1, base_right_c2, base_right);

    path.line_to(end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathEl;
    use nalgebra::point;

    fn edge(start: Point2<f64>, end: Point2<f64>, nub: Option<NubDirection>) -> Path {
        let mut path = Path::new();
        path.move_to(start);
        add_edge(&mut path, start, end, nub);
        path
    }

    #[test]
    fn border_edge_is_one_line() {
        let p = edge(point![0.0, 0.0], point![65.0, 0.0], None);
        assert_eq!(
            p.elements(),
            &[
                PathEl::MoveTo(point![0.0, 0.0]),
                PathEl::LineTo(point![65.0, 0.0])
            ]
        );
    }

    #[test]
    fn nub_key_points_on_horizontal_edge() {
        let p = edge(point![0.0, 0.0], point![100.0, 0.0], Some(NubDirection::Outward));
        let els = p.elements();
        assert_eq!(els.len(), 6);
        let close = |a: Point2<f64>, b: Point2<f64>| (a - b).norm() < 1e-9;
        match (els[1], els[2], els[3], els[4], els[5]) {
            (
                PathEl::LineTo(base_left),
                PathEl::CurveTo(_, c2, top_left),
                PathEl::LineTo(top_right),
                PathEl::CurveTo(c1, _, base_right),
                PathEl::LineTo(end),
            ) => {
                assert!(close(base_left, point![41.25, 0.0]));
                assert!(close(top_left, point![41.25, -20.0]));
                assert!(close(c2, point![26.25, -20.0]));
                assert!(close(top_right, point![58.75, -20.0]));
                assert!(close(c1, point![73.75, -20.0]));
                assert!(close(base_right, point![58.75, 0.0]));
                assert!(close(end, point![100.0, 0.0]));
            }
            other => panic!("unexpected layout {other:?}"),
        }
    }

    #[test]
    fn outward_nub_rises_twenty_percent_above_the_edge() {
        let p = edge(point![0.0, 0.0], point![100.0, 0.0], Some(NubDirection::Outward));
        let (lo, hi) = p.bounds().unwrap();
        // the nub normal is rotate90(+x, clockwise), i.e. screen-up (negative y)
        let height = -lo.y;
        assert!((19.0..=21.0).contains(&height), "height {height}");
        assert!(hi.y.abs() < 1e-9);
    }

    #[test]
    fn inward_nub_mirrors_outward() {
        let out = edge(point![0.0, 0.0], point![100.0, 0.0], Some(NubDirection::Outward));
        let inw = edge(point![0.0, 0.0], point![100.0, 0.0], Some(NubDirection::Inward));
        for (a, b) in out.points().iter().zip(inw.points()) {
            assert!((a.x - b.x).abs() < 1e-9);
            assert!((a.y + b.y).abs() < 1e-9);
        }
        let (_, hi) = inw.bounds().unwrap();
        assert!((19.0..=21.0).contains(&hi.y));
    }

    #[test]
    fn vertical_edge_nub_turns_with_the_axis() {
        // walking down: clockwise quarter turn of +y is +x (away to the right)
        let p = edge(point![65.0, 0.0], point![65.0, 65.0], Some(NubDirection::Outward));
        let (lo, hi) = p.bounds().unwrap();
        assert!((lo.x - 65.0).abs() < 1e-9);
        assert!((hi.x - 65.0 - 13.0).abs() < 1e-6);
    }

    #[test]
    fn zero_length_edge_has_no_nan() {
        for dir in [NubDirection::Outward, NubDirection::Inward] {
            let p = edge(point![5.0, 5.0], point![5.0, 5.0], Some(dir));
            assert!(p.is_finite());
            assert!(p.points().iter().all(|q| *q == point![5.0, 5.0]));
        }
    }

    #[test]
    fn custom_profile_scales_height() {
        let profile = NubProfile {
            height: 0.3,
            ..NubProfile::default()
        };
        let mut p = Path::new();
        p.move_to(point![0.0, 0.0]);
        add_edge_with(&profile, &mut p, point![0.0, 0.0], point![50.0, 0.0], Some(NubDirection::Outward));
        let (lo, _) = p.bounds().unwrap();
        assert!((lo.y + 15.0).abs() < 1e-6);
    }
}
