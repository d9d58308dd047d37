/// Thickness coefficients of the NACA 4-digit law, each multiplied by 5 so that the
/// thickness argument is the maximum-thickness-to-chord ratio.
pub const K: [f32; 5] = [1.4845, -0.63, -1.7685, 1.4215, -0.5075];

/// Signed half-thickness at the parameter `t` for maximum thickness `thickness`.
///
/// With `x = t²` this is the canonical thickness distribution
/// `5T(0.2969√x − 0.126x − 0.3537x² + 0.2843x³ − 0.1015x⁴)`, signed like `t`.
pub fn thickness_offset(t: f32, thickness: f32) -> f32 {
    let [k1, k2, k3, k4, k5] = K;
    let at = (t * t).sqrt();
    let tt = t * t;
    thickness * t * (k1 + at * (k2 + tt * (k3 + tt * (k4 + k5 * tt))))
}
