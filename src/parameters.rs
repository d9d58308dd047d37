use crate::curve::airfoil_surface::AirfoilSurface;
use crate::error::{AirfoilError, Result};
use crate::profile::{camber_offset, CamberBranch};

use std::fmt;
use std::str::FromStr;

/// Number of points sampled per outline sub-curve when none is given.
pub const DEFAULT_NUM_POINTS: usize = 50;

/// Shape parameters of a [4-digit NACA airfoil](https://en.wikipedia.org/wiki/NACA_airfoil),
/// each a fraction of chord.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirfoilParameters {
    /// Maximum thickness.
    pub thickness: f32,
    /// Maximum camber.
    pub max_camber: f32,
    /// Location of maximum camber.
    pub camber_position: f32,
}

impl Default for AirfoilParameters {
    fn default() -> Self {
        Self {
            thickness: 0.1,
            max_camber: 0.05,
            camber_position: 0.4,
        }
    }
}

/// A parameter outside `[0, 1]`. Geometry is still generated but is not a
/// physical profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeWarning {
    pub name: &'static str,
    pub value: f32,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is outside [0, 1], the profile is not physical",
            self.name, self.value
        )
    }
}

impl AirfoilParameters {
    /// Create new `AirfoilParameters` without validation.
    pub fn new(thickness: f32, max_camber: f32, camber_position: f32) -> Self {
        Self {
            thickness,
            max_camber,
            camber_position,
        }
    }

    /// Create new `AirfoilParameters`, rejecting values that cannot produce geometry.
    pub fn try_new(thickness: f32, max_camber: f32, camber_position: f32) -> Result<Self> {
        let params = Self::new(thickness, max_camber, camber_position);
        params.validate()?;
        Ok(params)
    }

    /// Parse a designation such as `2412` or `NACA 0012`.
    ///
    /// Symmetric sections take a camber position of 0.5, which has no effect on
    /// the geometry when there is no camber.
    pub fn from_designation(designation: &str) -> Result<Self> {
        let code: String = designation
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let code = match code.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("naca") => &code[4..],
            _ => code.as_str(),
        };

        let digits = code
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<_>>>()
            .filter(|digits| digits.len() == 4)
            .ok_or_else(|| AirfoilError::invalid_designation(designation))?;

        let max_camber = digits[0] as f32 / 100.0;
        let camber_position = match (digits[0], digits[1]) {
            (0, 0) => 0.5,
            (_, p) => p as f32 / 10.0,
        };
        let thickness = (digits[2] * 10 + digits[3]) as f32 / 100.0;

        Self::try_new(thickness, max_camber, camber_position)
    }

    /// Reject parameters that make the generated geometry meaningless.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("thickness", self.thickness), ("max_camber", self.max_camber)] {
            if !value.is_finite() {
                return Err(AirfoilError::NonFiniteParameter { name, value });
            }
        }
        let p = self.camber_position;
        if !p.is_finite() || p <= 0.0 || p == 1.0 {
            return Err(AirfoilError::InvalidCamberPosition(p));
        }
        Ok(())
    }

    /// Parameters outside `[0, 1]`.
    pub fn range_warnings(&self) -> Vec<RangeWarning> {
        [
            ("thickness", self.thickness),
            ("max_camber", self.max_camber),
            ("camber_position", self.camber_position),
        ]
        .into_iter()
        .filter(|(_, value)| !(0.0..=1.0).contains(value))
        .map(|(name, value)| RangeWarning { name, value })
        .collect()
    }

    /// Parameter `t` of the camber peak, `√P`.
    pub fn peak_parameter(&self) -> f32 {
        self.camber_position.sqrt()
    }

    /// Camber offset at the parameter `t`, see [`camber_offset`].
    pub fn camber_offset(&self, t: f32, branch: CamberBranch) -> Result<f32> {
        self.validate()?;
        Ok(camber_offset(
            t,
            self.max_camber,
            self.camber_position,
            branch,
        ))
    }

    /// Surface curve for one camber branch.
    pub fn surface(&self, branch: CamberBranch) -> AirfoilSurface {
        AirfoilSurface::new(*self, branch)
    }
}

impl FromStr for AirfoilParameters {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_designation(s)
    }
}
