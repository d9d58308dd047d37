use crate::curve::mean_camber_line::MeanCamberLine;
use crate::curve::reference::{ReferenceCurve, Side};
use crate::curve::{Curve, Point};
use crate::error::Result;
use crate::linear_algebra::VectorOps;
use crate::parameters::AirfoilParameters;
use crate::placement::Placement;
use crate::profile::CamberBranch;

use itertools::Itertools;
use tracing::{debug, warn};

/// Sub-curves of an airfoil outline.
#[derive(Clone, Debug, PartialEq)]
pub struct AirfoilOutline {
    /// Forward of the camber peak, from the lower surface around the leading
    /// edge to the upper surface.
    pub front: Vec<Point>,
    /// Upper surface from the camber peak to the trailing edge.
    pub upper_back: Vec<Point>,
    /// Lower surface from the camber peak to the trailing edge.
    pub lower_back: Vec<Point>,
}

/// Generate the outline of an airfoil with `num_points` points per sub-curve.
pub fn generate_outline(params: &AirfoilParameters, num_points: usize) -> Result<AirfoilOutline> {
    params.validate()?;
    for warning in params.range_warnings() {
        warn!(
            parameter = warning.name,
            value = warning.value,
            "Parameter out of range"
        );
    }

    let peak = params.peak_parameter();
    let front = params.surface(CamberBranch::Front);
    let back = params.surface(CamberBranch::Back);

    let outline = AirfoilOutline {
        front: front.sample(num_points, -peak, peak)?,
        upper_back: back.sample(num_points, peak, 1.0)?,
        lower_back: back.sample(num_points, -peak, -1.0)?,
    };

    debug!(
        thickness = params.thickness,
        max_camber = params.max_camber,
        camber_position = params.camber_position,
        num_points,
        "Generated airfoil outline"
    );

    Ok(outline)
}

/// Upper and lower halves of the uncambered thickness distribution.
pub fn reference_outline(thickness: f32, num_points: usize) -> Result<[Vec<Point>; 2]> {
    Ok([
        ReferenceCurve::new(thickness, Side::Upper).sample(num_points, 0.0, 1.0)?,
        ReferenceCurve::new(thickness, Side::Lower).sample(num_points, 0.0, 1.0)?,
    ])
}

/// Mean camber line from the leading edge to the trailing edge.
pub fn mean_camber_line(params: &AirfoilParameters, num_points: usize) -> Result<Vec<Point>> {
    params.validate()?;
    MeanCamberLine::new(params).sample(num_points, 0.0, 1.0)
}

/// Vertical segment through the camber peak spanning the maximum thickness.
pub fn camber_peak_marker(params: &AirfoilParameters) -> [Point; 2] {
    let half = 0.5 * params.thickness;
    [
        [params.camber_position, params.max_camber + half],
        [params.camber_position, params.max_camber - half],
    ]
}

impl AirfoilOutline {
    /// Sub-curves in the order front, upper back, lower back.
    pub fn curves(&self) -> [&[Point]; 3] {
        [&self.front, &self.upper_back, &self.lower_back]
    }

    /// Single polyline from the trailing edge along the upper surface, around the
    /// leading edge and back along the lower surface.
    pub fn closed_loop(&self) -> Vec<Point> {
        self.upper_back
            .iter()
            .rev()
            .chain(self.front.iter().rev().skip(1))
            .chain(self.lower_back.iter().skip(1))
            .copied()
            .collect()
    }

    /// Length of [`closed_loop`](Self::closed_loop).
    pub fn perimeter(&self) -> f32 {
        self.closed_loop()
            .iter()
            .tuple_windows()
            .map(|(first, second)| first.distance(second))
            .sum()
    }

    /// Largest gap between consecutive chordwise positions over all sub-curves.
    pub fn max_chordwise_gap(&self) -> f32 {
        self.curves()
            .into_iter()
            .flatten()
            .map(|point| point[0])
            .sorted_by(f32::total_cmp)
            .tuple_windows()
            .map(|(first, second)| second - first)
            .fold(0.0, f32::max)
    }

    /// The outline mapped through `placement`.
    pub fn placed(&self, placement: &Placement) -> Self {
        let place = |curve: &[Point]| -> Vec<Point> {
            curve.iter().map(|point| placement.apply(point)).collect()
        };
        Self {
            front: place(&self.front),
            upper_back: place(&self.upper_back),
            lower_back: place(&self.lower_back),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AirfoilError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sub_curve_endpoints() {
        let params = AirfoilParameters::new(0.12, 0.02, 0.4);
        let outline = generate_outline(&params, 20).unwrap();
        for curve in outline.curves() {
            assert_eq!(curve.len(), 20);
        }

        // sub-curves meet at the camber peak
        for (front, back) in [
            (outline.front.last(), outline.upper_back.first()),
            (outline.front.first(), outline.lower_back.first()),
        ] {
            let (front, back) = (front.unwrap(), back.unwrap());
            assert_eq!(front[0], back[0]);
            assert_abs_diff_eq!(front[1], back[1], epsilon = 1e-5);
        }

        // trailing edge
        let upper_te = outline.upper_back.last().unwrap();
        let lower_te = outline.lower_back.last().unwrap();
        assert_eq!(upper_te[0], 1.0);
        assert_eq!(lower_te[0], 1.0);
        assert_abs_diff_eq!(upper_te[1], lower_te[1], epsilon = 1e-5);
    }

    #[test]
    fn test_chordwise_coverage() {
        let params = AirfoilParameters::new(0.12, 0.04, 0.5);
        let num_points = 41;
        let outline = generate_outline(&params, num_points).unwrap();

        let xs = outline
            .curves()
            .into_iter()
            .flatten()
            .map(|point| point[0])
            .collect::<Vec<_>>();
        assert_eq!(xs.iter().copied().fold(f32::MAX, f32::min), 0.0);
        assert_eq!(xs.iter().copied().fold(f32::MIN, f32::max), 1.0);

        // x = t², so a step in t maps to at most twice its size in x
        let t_step = 2.0 * params.peak_parameter() / (num_points - 1) as f32;
        assert!(outline.max_chordwise_gap() <= 2.0 * t_step + 1e-6);
    }

    #[test]
    fn test_pure_thickness_is_symmetric() {
        let params = AirfoilParameters::new(0.1, 0.0, 0.5);
        let outline = generate_outline(&params, 3).unwrap();

        let front = &outline.front;
        assert_eq!(front[1], [0.0, 0.0]);
        assert_eq!(front[0][0], front[2][0]);
        assert_eq!(front[0][1], -front[2][1]);

        for (upper, lower) in outline.upper_back.iter().zip(&outline.lower_back) {
            assert_eq!(upper[0], lower[0]);
            assert_eq!(upper[1], -lower[1]);
        }
    }

    #[test]
    fn test_rejects_degenerate_requests() {
        for p in [0.0, 1.0] {
            let params = AirfoilParameters::new(0.12, 0.02, p);
            assert_eq!(
                generate_outline(&params, 10),
                Err(AirfoilError::InvalidCamberPosition(p))
            );
        }

        let err = generate_outline(&AirfoilParameters::default(), 1).unwrap_err();
        assert_eq!(err, AirfoilError::insufficient_points(2, 1));
    }

    #[test]
    fn test_out_of_range_proceeds() {
        let params = AirfoilParameters::new(1.5, 0.02, 0.4);
        let outline = generate_outline(&params, 10).unwrap();
        assert!(outline.curves().into_iter().flatten().all(|p| p[1].is_finite()));
    }

    #[test]
    fn test_closed_loop() {
        let outline = generate_outline(&AirfoilParameters::default(), 11).unwrap();
        let points = outline.closed_loop();
        assert_eq!(points.len(), 3 * 11 - 2);
        assert_eq!(points.first(), outline.upper_back.last());
        assert_eq!(points.last(), outline.lower_back.last());

        // leading edge in the middle
        assert!(points.iter().any(|p| p[0] == 0.0));
        assert!(points.iter().tuple_windows().all(|(a, b)| a != b));
    }

    #[test]
    fn test_perimeter_of_thin_section() {
        // a vanishing thickness and camber collapses onto the chord, twice
        let params = AirfoilParameters::new(0.0, 0.0, 0.5);
        let outline = generate_outline(&params, 25).unwrap();
        assert_abs_diff_eq!(outline.perimeter(), 2.0, epsilon = 1e-5);

        let outline = generate_outline(&AirfoilParameters::new(0.12, 0.0, 0.5), 25).unwrap();
        assert!(outline.perimeter() > 2.0);
    }

    #[test]
    fn test_reference_outline() {
        let [upper, lower] = reference_outline(0.12, 11).unwrap();
        assert_eq!(upper.len(), 11);
        for (upper, lower) in upper.iter().zip(&lower) {
            assert_eq!(upper[0], lower[0]);
            assert_eq!(upper[1], -lower[1]);
        }
        assert!(reference_outline(0.12, 0).is_err());
    }

    #[test]
    fn test_mean_camber_line_between_surfaces() {
        let params = AirfoilParameters::new(0.12, 0.04, 0.4);
        let camber = mean_camber_line(&params, 9).unwrap();
        let outline = generate_outline(&params, 9).unwrap();
        assert_eq!(camber.first(), Some(&[0.0, 0.0]));
        let upper_te = outline.upper_back.last().unwrap();
        assert_abs_diff_eq!(camber[8][1], upper_te[1], epsilon = 1e-5);
        assert!(mean_camber_line(&AirfoilParameters::new(0.12, 0.04, 0.0), 9).is_err());
    }

    #[test]
    fn test_camber_peak_marker() {
        let params = AirfoilParameters::new(0.12, 0.02, 0.4);
        let [top, bottom] = camber_peak_marker(&params);
        assert_eq!(top[0], 0.4);
        assert_eq!(bottom[0], 0.4);
        assert_abs_diff_eq!(top[1], 0.08, epsilon = 1e-6);
        assert_abs_diff_eq!(bottom[1], -0.04, epsilon = 1e-6);
    }

    #[test]
    fn test_placed() {
        let outline = generate_outline(&AirfoilParameters::default(), 10).unwrap();
        let placement = Placement::new([10.0, 5.0], 4.0, 0.0);
        let placed = outline.placed(&placement);
        assert_eq!(placed.upper_back.len(), 10);
        assert_eq!(placed.upper_back.last().unwrap()[0], 14.0);
        assert_abs_diff_eq!(placed.perimeter(), 4.0 * outline.perimeter(), epsilon = 1e-3);
    }
}
