// Copyright (c) 2024 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use crate::phase_space::SolarParameters;
use crate::ElementsError;

extern crate nalgebra as na;
use na::Vector3;

/// A static gravitational potential. Positions are galactocentric, in kpc.
pub trait PotentialTrait {
    /// Potential per unit mass, (km/s)^2.
    fn potential(&self, position: &Vector3<f64>) -> f64;

    /// Acceleration (the negative gradient of the potential), in
    /// (km/s)^2 per kpc.
    fn acceleration(&self, position: &Vector3<f64>) -> Vector3<f64>;
}

/// Logarithmic halo:
///   phi = v0^2 / 2 * ln(R^2 + (z/q)^2 + core^2)
/// which has a flat rotation curve of speed v0 in the mid-plane (outside the
/// core).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmicHaloPotential {
    // km/s.
    v0: f64,
    // Flattening; 1 is spherical.
    q: f64,
    // kpc.
    core: f64,
}

impl LogarithmicHaloPotential {
    pub fn new(v0: f64, q: f64, core: f64) -> Result<Self, ElementsError> {
        if !(v0.is_finite() && v0 > 0.0) {
            return Err(ElementsError::InvalidArgument(format!(
                "v0 must be positive; got {}", v0)));
        }
        if !(q.is_finite() && q > 0.0) {
            return Err(ElementsError::InvalidArgument(format!(
                "q must be positive; got {}", q)));
        }
        if !(core.is_finite() && core >= 0.0) {
            return Err(ElementsError::InvalidArgument(format!(
                "core must be non-negative; got {}", core)));
        }
        Ok(LogarithmicHaloPotential { v0, q, core })
    }

    /// Spherical halo whose circular velocity at the Sun's radius equals
    /// `solar.v_circ`, with a negligible core.
    pub fn normalized(solar: &SolarParameters) -> Self {
        LogarithmicHaloPotential {
            v0: solar.v_circ,
            q: 1.0,
            core: 1e-8 * solar.r0,
        }
    }

    /// Circular velocity (km/s) in the mid-plane at cylindrical radius `r`.
    pub fn circular_velocity(&self, r: f64) -> f64 {
        self.v0 * r / (r * r + self.core * self.core).sqrt()
    }

    fn denominator(&self, position: &Vector3<f64>) -> f64 {
        let z_scaled = position[2] / self.q;
        position[0] * position[0]
            + position[1] * position[1]
            + z_scaled * z_scaled
            + self.core * self.core
    }
}

impl PotentialTrait for LogarithmicHaloPotential {
    fn potential(&self, position: &Vector3<f64>) -> f64 {
        0.5 * self.v0 * self.v0 * self.denominator(position).ln()
    }

    fn acceleration(&self, position: &Vector3<f64>) -> Vector3<f64> {
        let scale = -self.v0 * self.v0 / self.denominator(position);
        Vector3::new(
            scale * position[0],
            scale * position[1],
            scale * position[2] / (self.q * self.q),
        )
    }
}
