//! Offsets of the [NACA 4-digit](https://en.wikipedia.org/wiki/NACA_airfoil) profile.
//!
//! Both offsets take the parameter `t` where the chordwise position is `x = t²`;
//! negative `t` addresses the lower surface.
pub mod camber;
pub mod thickness;

pub use camber::{camber_offset, CamberBranch};
pub use thickness::thickness_offset;
