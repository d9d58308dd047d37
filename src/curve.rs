pub mod airfoil_surface;
pub mod mean_camber_line;
pub mod reference;

use crate::error::{AirfoilError, Result};

/// Planar point `[x, y]`, `x` along the chord.
pub type Point = [f32; 2];

/// Sample `num_points` values of `f` at parameters spaced uniformly over `[from, to]`.
///
/// Both `from` and `to` are sampled exactly.
pub fn sample_curve<P>(
    num_points: usize,
    from: f32,
    to: f32,
    f: impl Fn(f32) -> P,
) -> Result<Vec<P>> {
    if num_points < 2 {
        return Err(AirfoilError::insufficient_points(2, num_points));
    }

    let last = (num_points - 1) as f32;
    Ok((0..num_points)
        .map(|i| {
            let n = i as f32 / last;
            // from + n * (to - from), exact at both ends
            f((1.0 - n) * from + n * to)
        })
        .collect())
}

pub trait Curve {
    /// Point at the curve parameter `t`.
    fn point(&self, t: f32) -> Point;

    /// Sample the curve over `[from, to]`, see [`sample_curve`].
    fn sample(&self, num_points: usize, from: f32, to: f32) -> Result<Vec<Point>> {
        sample_curve(num_points, from, to, |t| self.point(t))
    }
}
