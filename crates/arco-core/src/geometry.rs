//! Geometric utilities for joint-angle computations.

use nalgebra::Vector2;

use crate::types::PixelPoint;

/// Guards the cosine denominator when a joint pair coincides.
const NORM_EPSILON: f64 = 1e-6;

/// Interior angle in degrees at `vertex`, formed by the vectors
/// `vertex -> a` and `vertex -> c`.
///
/// Returns a value in [0, 180]. Symmetric in swapping `a` and `c`.
/// Degenerate input (a joint coinciding with the vertex) degrades to a
/// defined angle instead of failing: the zero-length vector contributes
/// a zero dot product and the epsilon keeps the division finite.
pub fn interior_angle(a: PixelPoint, vertex: PixelPoint, c: PixelPoint) -> f64 {
    let va = Vector2::new((a.x - vertex.x) as f64, (a.y - vertex.y) as f64);
    let vc = Vector2::new((c.x - vertex.x) as f64, (c.y - vertex.y) as f64);

    let cos = (va.dot(&vc) / (va.norm() * vc.norm() + NORM_EPSILON)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> PixelPoint {
        PixelPoint::new(x, y)
    }

    #[test]
    fn test_collinear_points_are_straight() {
        let angle = interior_angle(p(0, 0), p(1, 0), p(2, 0));
        assert!((angle - 180.0).abs() < 0.1);
    }

    #[test]
    fn test_perpendicular_arms() {
        let angle = interior_angle(p(0, 1), p(0, 0), p(1, 0));
        assert!((angle - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_vertex_symmetric() {
        let cases = [
            (p(10, 20), p(45, 80), p(90, 15)),
            (p(-5, 3), p(0, 0), p(7, -2)),
            (p(100, 100), p(200, 150), p(300, 100)),
        ];
        for (a, b, c) in cases {
            let forward = interior_angle(a, b, c);
            let backward = interior_angle(c, b, a);
            assert!((forward - backward).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_input_is_defined() {
        // Shoulder coincides with the elbow: no angle exists physically,
        // but the computation must stay finite and in range.
        let angle = interior_angle(p(5, 5), p(5, 5), p(10, 10));
        assert!(angle.is_finite());
        assert!((0.0..=180.0).contains(&angle));

        // All three coincident
        let angle = interior_angle(p(5, 5), p(5, 5), p(5, 5));
        assert!((angle - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_range_bounds() {
        let angle = interior_angle(p(0, 0), p(1, 0), p(0, 0));
        assert!((0.0..=180.0).contains(&angle));
    }
}
