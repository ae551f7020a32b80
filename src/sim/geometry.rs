//! Planar geometry shared by the vehicle body and the radar rays
//!
//! Everything the sensing pipeline needs reduces to two primitives: the
//! slope/intercept line through two points (with the vertical case kept
//! explicit rather than letting a zero run blow up the slope), and finite
//! segment-segment intersection.

use glam::Vec2;

/// Below this cross-product magnitude two segments are treated as parallel
const PARALLEL_EPSILON: f32 = 1e-6;

/// A line in slope/intercept form, or vertical where that form has no slope
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    /// `y = m * x + c`
    Sloped { m: f32, c: f32 },
    /// `x = constant` (zero run between the defining points)
    Vertical { x: f32 },
}

impl LineEquation {
    /// Derive the line through two points
    pub fn through(a: Vec2, b: Vec2) -> Self {
        let run = b.x - a.x;
        if run == 0.0 {
            Self::Vertical { x: a.x }
        } else {
            let m = (b.y - a.y) / run;
            Self::Sloped { m, c: a.y - m * a.x }
        }
    }
}

/// Intersect two finite segments `a1->a2` and `b1->b2`
///
/// Returns the crossing point only if it lies within both segments' extents.
/// Parallel, collinear-disjoint and out-of-range configurations are all
/// "no intersection".
pub fn segment_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let r = a2 - a1;
    let s = b2 - b1;

    let denom = r.perp_dot(s);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let d = b1 - a1;
    let t = d.perp_dot(s) / denom;
    let u = d.perp_dot(r) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + r * t)
    } else {
        None
    }
}
