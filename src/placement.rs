use crate::curve::Point;
use crate::linear_algebra::{VectorOps, VectorRotate};

/// Placement of a unit-chord profile in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Position of the leading edge.
    pub position: Point,
    /// Chord length.
    pub chord: f32,
    /// [Angle of attack](https://en.wikipedia.org/wiki/Angle_of_attack) (radians), nose up.
    pub angle_of_attack: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            chord: 1.0,
            angle_of_attack: 0.0,
        }
    }
}

impl Placement {
    /// Create a new `Placement`.
    pub fn new(position: Point, chord: f32, angle_of_attack: f32) -> Self {
        Self {
            position,
            chord,
            angle_of_attack,
        }
    }

    /// Map a point from chord coordinates to the plane.
    pub fn apply(&self, point: &Point) -> Point {
        point
            .rotate(-self.angle_of_attack)
            .scale(self.chord)
            .translate(&self.position)
    }
}
