use super::{Curve, Point};
use crate::parameters::AirfoilParameters;
use crate::profile::{camber_offset, CamberBranch};

/// The [mean camber line](https://en.wikipedia.org/wiki/Camber_(aerodynamics)), swept
/// over `t ∈ [0, 1]`, switching branch at the camber peak.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeanCamberLine {
    max_camber: f32,
    camber_position: f32,
}

impl MeanCamberLine {
    /// Create a new `MeanCamberLine`.
    pub fn new(params: &AirfoilParameters) -> Self {
        Self {
            max_camber: params.max_camber,
            camber_position: params.camber_position,
        }
    }
}

impl Curve for MeanCamberLine {
    fn point(&self, t: f32) -> Point {
        let x = t * t;
        let branch = CamberBranch::at(x, self.camber_position);
        [
            x,
            camber_offset(t, self.max_camber, self.camber_position, branch),
        ]
    }
}
