use super::{Curve, Point};
use crate::profile::thickness_offset;

/// Surface side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Upper,
    Lower,
}

impl Side {
    pub fn sign(self) -> f32 {
        match self {
            Side::Upper => 1.0,
            Side::Lower => -1.0,
        }
    }
}

/// One half of the uncambered thickness distribution, swept over `t ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceCurve {
    thickness: f32,
    side: Side,
}

impl ReferenceCurve {
    /// Create a new `ReferenceCurve`.
    pub fn new(thickness: f32, side: Side) -> Self {
        Self { thickness, side }
    }
}

impl Curve for ReferenceCurve {
    fn point(&self, t: f32) -> Point {
        [
            t * t,
            self.side.sign() * thickness_offset(t.abs(), self.thickness),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_mirror() {
        let upper = ReferenceCurve::new(0.12, Side::Upper);
        let lower = ReferenceCurve::new(0.12, Side::Lower);
        for t in [0.0, 0.2, 0.5, 0.8, 1.0] {
            assert_eq!(upper.point(t)[0], lower.point(t)[0]);
            assert_eq!(upper.point(t)[1], -lower.point(t)[1]);
        }
    }

    #[test]
    fn test_upper_half_not_below_chord() {
        let upper = ReferenceCurve::new(0.12, Side::Upper);
        for t in [0.1, 0.4, 0.9] {
            assert!(upper.point(t)[1] > 0.0);
            assert_eq!(upper.point(-t), upper.point(t));
        }
    }
}
