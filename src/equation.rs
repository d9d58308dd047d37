//! [SolidWorks](https://help.solidworks.com/2022/english/SolidWorks/sldworks/c_equation_driven_curve.htm)
//! equation-driven curve expressions in the curve parameter `t`.
use crate::error::Result;
use crate::parameters::AirfoilParameters;
use crate::profile::thickness::K;
use crate::profile::CamberBranch;

/// Where the expression operands come from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operands<'a> {
    /// Literal parameter values.
    Values(&'a AirfoilParameters),
    /// Sketch dimensions `T@S`, `M@S`, `P@S` with the camber position divided by
    /// the chord dimension `C@S`.
    Dimensions,
}

impl Operands<'_> {
    /// Thickness, maximum camber and camber position operands.
    fn terms(&self) -> Result<[String; 3]> {
        match self {
            Operands::Values(params) => {
                params.validate()?;
                Ok([
                    params.thickness,
                    params.max_camber,
                    params.camber_position,
                ]
                .map(|value| {
                    if value.is_sign_negative() {
                        format!("({value})")
                    } else {
                        value.to_string()
                    }
                }))
            }
            Operands::Dimensions => Ok([
                "\"T@S\"".to_string(),
                "\"M@S\"".to_string(),
                "(\"P@S\" / \"C@S\")".to_string(),
            ]),
        }
    }
}

/// Front and back surface expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolidworksEquations {
    pub front: String,
    pub back: String,
}

/// Expressions for both surface branches.
pub fn solidworks_equations(operands: Operands) -> Result<SolidworksEquations> {
    Ok(SolidworksEquations {
        front: surface_equation(operands, CamberBranch::Front)?,
        back: surface_equation(operands, CamberBranch::Back)?,
    })
}

/// Thickness plus camber expression for one branch.
///
/// Parameter values are validated like [`AirfoilParameters::validate`].
pub fn surface_equation(operands: Operands, branch: CamberBranch) -> Result<String> {
    let [thickness, max_camber, camber_position] = operands.terms()?;
    Ok(format!(
        "{} + {}",
        thickness_equation(&thickness),
        camber_equation(&max_camber, &camber_position, branch)
    ))
}

fn thickness_equation(thickness: &str) -> String {
    let [k1, k2, k3, k4, k5] = K;
    format!(
        "{thickness} * t * ({k1} + sqrt(t*t) * ({k2} + t*t * ({k3} + t*t * ({k4} + {k5} * t*t))))"
    )
}

fn camber_equation(m: &str, p: &str, branch: CamberBranch) -> String {
    match branch {
        CamberBranch::Front => format!("{m} / ({p} * {p}) * (2 * {p} * t*t - t*t*t*t)"),
        CamberBranch::Back => {
            format!("{m} / ((1 - {p}) * (1 - {p})) * (1 - 2 * {p} + 2 * {p} * t*t - t*t*t*t)")
        }
    }
}
