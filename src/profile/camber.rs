/// Polynomial branch of the camber line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CamberBranch {
    /// Forward of the camber peak (`x < P`).
    Front,
    /// Aft of the camber peak (`x >= P`).
    Back,
}

impl CamberBranch {
    /// Branch that covers chordwise position `x` for camber position `camber_position`.
    pub fn at(x: f32, camber_position: f32) -> Self {
        if x < camber_position {
            Self::Front
        } else {
            Self::Back
        }
    }
}

/// Camber offset at the parameter `t` (`x = t²`) for maximum camber `max_camber`
/// located at `camber_position`.
///
/// The branch is not inferred from `t`. `camber_position` must not be 0 for
/// [`CamberBranch::Front`] nor 1 for [`CamberBranch::Back`].
pub fn camber_offset(t: f32, max_camber: f32, camber_position: f32, branch: CamberBranch) -> f32 {
    let (m, p) = (max_camber, camber_position);
    let tt = t * t;
    let tttt = tt * tt;
    match branch {
        CamberBranch::Front => m / (p * p) * (2.0 * p * tt - tttt),
        CamberBranch::Back => {
            let omp = 1.0 - p;
            m / (omp * omp) * (1.0 - 2.0 * p + 2.0 * p * tt - tttt)
        }
    }
}
