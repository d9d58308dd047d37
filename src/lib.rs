//! Geometry of [4-digit NACA airfoils](https://en.wikipedia.org/wiki/NACA_airfoil).
//!
//! The outline is sampled by the parameter `t` with the chordwise position at
//! `x = t²`, which concentrates points near the leading edge.
//!
//! ```
//! use wasm_naca::{generate_outline, AirfoilParameters};
//!
//! let params: AirfoilParameters = "NACA 2412".parse()?;
//! let outline = generate_outline(&params, 50)?;
//! assert_eq!(outline.upper_back.last().map(|point| point[0]), Some(1.0));
//! # Ok::<(), wasm_naca::AirfoilError>(())
//! ```
pub mod curve;
pub mod equation;
pub mod error;
pub mod linear_algebra;
pub mod outline;
pub mod parameters;
pub mod placement;
pub mod profile;

pub use curve::{sample_curve, Curve, Point};
pub use error::{AirfoilError, Result};
pub use outline::{
    camber_peak_marker, generate_outline, mean_camber_line, reference_outline, AirfoilOutline,
};
pub use parameters::{AirfoilParameters, DEFAULT_NUM_POINTS};
pub use placement::Placement;
pub use profile::{camber_offset, thickness_offset, CamberBranch};

use equation::{solidworks_equations, Operands, SolidworksEquations};
use parameters::RangeWarning;

use wasm_bindgen::prelude::*;

/// Outline together with the range warnings to report, none if generation fails.
fn outline_with_warnings(
    params: &AirfoilParameters,
    num_points: usize,
) -> Result<(AirfoilOutline, Vec<RangeWarning>)> {
    let outline = generate_outline(params, num_points)?;
    Ok((outline, params.range_warnings()))
}

/// Echo range warnings to the browser console.
fn report_range_warnings(warnings: &[RangeWarning]) {
    if cfg!(target_arch = "wasm32") {
        for warning in warnings {
            web_sys::console::warn_1(&JsValue::from_str(&warning.to_string()));
        }
    }
}

/// Interleaved `x, y` coordinates, one typed array per curve.
fn curves_to_js<'a>(curves: impl IntoIterator<Item = &'a [Point]>) -> js_sys::Array {
    curves
        .into_iter()
        .map(|curve| {
            let values = curve.iter().flatten().copied().collect::<Vec<f32>>();
            js_sys::Float32Array::from(values.as_slice())
        })
        .collect()
}

fn equations_to_js(equations: SolidworksEquations) -> js_sys::Array {
    [equations.front, equations.back]
        .iter()
        .map(|equation| JsValue::from_str(equation))
        .collect()
}

/// Outline sub-curves (front, upper back, lower back).
#[wasm_bindgen(js_name = generateOutline)]
pub fn generate_outline_js(
    thickness: f32,
    max_camber: f32,
    camber_position: f32,
    num_points: Option<usize>,
) -> std::result::Result<js_sys::Array, JsValue> {
    let params = AirfoilParameters::new(thickness, max_camber, camber_position);
    let (outline, warnings) =
        outline_with_warnings(&params, num_points.unwrap_or(DEFAULT_NUM_POINTS))?;
    report_range_warnings(&warnings);
    Ok(curves_to_js(outline.curves()))
}

/// Outline sub-curves for a designation such as `2412`.
#[wasm_bindgen(js_name = generateOutlineFromDesignation)]
pub fn generate_outline_from_designation_js(
    designation: &str,
    num_points: Option<usize>,
) -> std::result::Result<js_sys::Array, JsValue> {
    let params = AirfoilParameters::from_designation(designation)?;
    let outline = generate_outline(&params, num_points.unwrap_or(DEFAULT_NUM_POINTS))?;
    Ok(curves_to_js(outline.curves()))
}

/// Upper and lower uncambered thickness halves.
#[wasm_bindgen(js_name = referenceOutline)]
pub fn reference_outline_js(
    thickness: f32,
    num_points: usize,
) -> std::result::Result<js_sys::Array, JsValue> {
    let halves = reference_outline(thickness, num_points)?;
    Ok(curves_to_js(halves.iter().map(Vec::as_slice)))
}

/// Mean camber line as interleaved `x, y` coordinates.
#[wasm_bindgen(js_name = meanCamberLine)]
pub fn mean_camber_line_js(
    max_camber: f32,
    camber_position: f32,
    num_points: Option<usize>,
) -> std::result::Result<js_sys::Float32Array, JsValue> {
    let params = AirfoilParameters::new(0.0, max_camber, camber_position);
    let line = mean_camber_line(&params, num_points.unwrap_or(DEFAULT_NUM_POINTS))?;
    let values = line.iter().flatten().copied().collect::<Vec<f32>>();
    Ok(js_sys::Float32Array::from(values.as_slice()))
}

/// Camber peak marker as `[x0, y0, x1, y1]`.
#[wasm_bindgen(js_name = camberPeakMarker)]
pub fn camber_peak_marker_js(thickness: f32, max_camber: f32, camber_position: f32) -> Vec<f32> {
    let params = AirfoilParameters::new(thickness, max_camber, camber_position);
    camber_peak_marker(&params).concat()
}

#[wasm_bindgen(js_name = thicknessOffset)]
pub fn thickness_offset_js(t: f32, thickness: f32) -> f32 {
    thickness_offset(t, thickness)
}

#[wasm_bindgen(js_name = camberOffset)]
pub fn camber_offset_js(
    t: f32,
    max_camber: f32,
    camber_position: f32,
    front: bool,
) -> std::result::Result<f32, JsValue> {
    let branch = if front {
        CamberBranch::Front
    } else {
        CamberBranch::Back
    };
    let params = AirfoilParameters::new(0.0, max_camber, camber_position);
    Ok(params.camber_offset(t, branch)?)
}

/// SolidWorks front and back expressions with the parameter values substituted.
#[wasm_bindgen(js_name = solidworksEquations)]
pub fn solidworks_equations_js(
    thickness: f32,
    max_camber: f32,
    camber_position: f32,
) -> std::result::Result<js_sys::Array, JsValue> {
    let params = AirfoilParameters::new(thickness, max_camber, camber_position);
    let equations = solidworks_equations(Operands::Values(&params))?;
    Ok(equations_to_js(equations))
}

/// SolidWorks front and back expressions referencing sketch dimensions.
#[wasm_bindgen(js_name = solidworksDimensionEquations)]
pub fn solidworks_dimension_equations_js() -> std::result::Result<js_sys::Array, JsValue> {
    Ok(equations_to_js(solidworks_equations(Operands::Dimensions)?))
}
