use super::{Curve, Point};
use crate::parameters::AirfoilParameters;
use crate::profile::{camber_offset, thickness_offset, CamberBranch};

/// Airfoil surface built from one camber branch: thickness plus camber.
///
/// Positive `t` traces the upper surface, negative `t` the lower one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirfoilSurface {
    params: AirfoilParameters,
    branch: CamberBranch,
}

impl AirfoilSurface {
    /// Create a new `AirfoilSurface`.
    pub fn new(params: AirfoilParameters, branch: CamberBranch) -> Self {
        Self { params, branch }
    }
}

impl Curve for AirfoilSurface {
    fn point(&self, t: f32) -> Point {
        let AirfoilParameters {
            thickness,
            max_camber,
            camber_position,
        } = self.params;
        [
            t * t,
            thickness_offset(t, thickness)
                + camber_offset(t, max_camber, camber_position, self.branch),
        ]
    }
}
