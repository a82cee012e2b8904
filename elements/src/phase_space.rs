// Copyright (c) 2024 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

//! Conversions between heliocentric ICRS phase space (ra, dec, distance,
//! proper motions, radial velocity) and a right-handed galactocentric
//! Cartesian frame.
//!
//! Galactocentric frame: origin at the Galactic centre, x from the Sun's
//! projection towards the centre (so the Sun sits near x = -R0), y in the
//! direction of Galactic rotation, z towards the north Galactic pole.
//! Positions are in kpc and velocities in km/s.

use crate::astro_util::{from_unit_vector, to_unit_vector, KM_S_PER_MAS_YR_KPC};
use crate::ElementsError;

extern crate nalgebra as na;
use na::{Matrix3, Vector3};

// Rotation from ICRS to Galactic Cartesian axes (Hipparcos definition).
const ICRS_TO_GALACTIC: [f64; 9] = [
    -0.0548755604162154,
    -0.8734370902348850,
    -0.4838350155487132,
    0.4941094278755837,
    -0.4448296299600112,
    0.7469822444972189,
    -0.8676661490190047,
    -0.1980763734312015,
    0.4559837761750669,
];

pub fn icrs_to_galactic_matrix() -> Matrix3<f64> {
    Matrix3::from_row_slice(&ICRS_TO_GALACTIC)
}

/// Position and motion of the Sun relative to the Galactic centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarParameters {
    // Cylindrical distance of the Sun from the Galactic centre, kpc.
    pub r0: f64,

    // Height of the Sun above the Galactic mid-plane, kpc.
    pub z_sun: f64,

    // Circular velocity at r0, km/s.
    pub v_circ: f64,

    // Peculiar motion (U, V, W) of the Sun relative to the local standard of
    // rest, km/s. U is positive towards the Galactic centre.
    pub solar_motion: [f64; 3],
}

impl Default for SolarParameters {
    /// R0 = 8 kpc, z = 20.8 pc, 220 km/s circular velocity and the
    /// Schoenrich et al. (2010) solar motion.
    fn default() -> Self {
        Self {
            r0: 8.0,
            z_sun: 0.0208,
            v_circ: 220.0,
            solar_motion: [11.1, 12.24, 7.25],
        }
    }
}

impl SolarParameters {
    /// Straight-line Sun to Galactic centre distance, kpc.
    pub fn galcen_distance(&self) -> f64 {
        (self.r0 * self.r0 + self.z_sun * self.z_sun).sqrt()
    }

    /// Rotation about the y axis that lifts the Sun to height `z_sun`.
    fn tilt(&self) -> Matrix3<f64> {
        let theta = (self.z_sun / self.galcen_distance()).asin();
        let (s, c) = theta.sin_cos();
        Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Galactocentric velocity of the Sun, km/s.
    pub fn sun_velocity(&self) -> Vector3<f64> {
        Vector3::new(
            self.solar_motion[0],
            self.v_circ + self.solar_motion[1],
            self.solar_motion[2],
        )
    }

    /// Galactocentric position of the Sun, kpc.
    pub fn sun_position(&self) -> Vector3<f64> {
        self.tilt() * Vector3::new(-self.galcen_distance(), 0.0, 0.0)
    }
}

/// Heliocentric observables of one object in the ICRS frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPhaseSpace {
    // Right ascension and declination, degrees.
    pub ra: f64,
    pub dec: f64,

    // Heliocentric distance, kpc.
    pub distance: f64,

    // Proper motion in right ascension (including the cos(dec) factor) and
    // declination, mas/yr.
    pub pmra: f64,
    pub pmdec: f64,

    // Line of sight velocity, km/s.
    pub radial_velocity: f64,
}

/// Galactocentric Cartesian state of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalactocentricState {
    // kpc.
    pub position: Vector3<f64>,
    // km/s.
    pub velocity: Vector3<f64>,
}

// Local (radial, east, north) basis at the given sky position (radians).
fn sky_basis(ra: f64, dec: f64) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let (sin_ra, cos_ra) = ra.sin_cos();
    let (sin_dec, cos_dec) = dec.sin_cos();
    let radial = Vector3::from(to_unit_vector(ra, dec));
    let east = Vector3::new(-sin_ra, cos_ra, 0.0);
    let north = Vector3::new(-sin_dec * cos_ra, -sin_dec * sin_ra, cos_dec);
    (radial, east, north)
}

impl EquatorialPhaseSpace {
    /// Heliocentric ICRS Cartesian position (kpc) and velocity (km/s).
    pub fn icrs_cartesian(&self) -> (Vector3<f64>, Vector3<f64>) {
        let (radial, east, north) =
            sky_basis(self.ra.to_radians(), self.dec.to_radians());
        let tangential_scale = KM_S_PER_MAS_YR_KPC * self.distance;
        let position = radial * self.distance;
        let velocity = radial * self.radial_velocity
            + east * (self.pmra * tangential_scale)
            + north * (self.pmdec * tangential_scale);
        (position, velocity)
    }

    /// Inverse of `icrs_cartesian()`. `position` must be non-zero.
    pub fn from_icrs_cartesian(
        position: &Vector3<f64>,
        velocity: &Vector3<f64>,
    ) -> Self {
        let distance = position.norm();
        let unit = position / distance;
        let (ra, dec) = from_unit_vector(&[unit[0], unit[1], unit[2]]);
        let (radial, east, north) = sky_basis(ra, dec);
        let tangential_scale = KM_S_PER_MAS_YR_KPC * distance;
        EquatorialPhaseSpace {
            ra: ra.to_degrees(),
            dec: dec.to_degrees(),
            distance,
            pmra: velocity.dot(&east) / tangential_scale,
            pmdec: velocity.dot(&north) / tangential_scale,
            radial_velocity: velocity.dot(&radial),
        }
    }

    /// Converts to the galactocentric frame defined by `solar`. Fails if the
    /// distance is not a positive finite number or any field is non-finite.
    pub fn to_galactocentric(
        &self,
        solar: &SolarParameters,
    ) -> Result<GalactocentricState, ElementsError> {
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(ElementsError::InvalidArgument(format!(
                "distance must be positive and finite; got {}",
                self.distance
            )));
        }
        let fields = [self.ra, self.dec, self.pmra, self.pmdec,
                      self.radial_velocity];
        if fields.iter().any(|f| !f.is_finite()) {
            return Err(ElementsError::InvalidArgument(format!(
                "non-finite phase space coordinate in {:?}",
                self
            )));
        }
        let (position, velocity) = self.icrs_cartesian();
        let to_galactic = icrs_to_galactic_matrix();
        let galactic_position = to_galactic * position;
        let galactic_velocity = to_galactic * velocity;

        let tilt = solar.tilt();
        let offset = Vector3::new(solar.galcen_distance(), 0.0, 0.0);
        Ok(GalactocentricState {
            position: tilt * (galactic_position - offset),
            velocity: tilt * galactic_velocity + solar.sun_velocity(),
        })
    }
}

impl GalactocentricState {
    /// Converts back to heliocentric ICRS observables.
    pub fn to_equatorial(&self, solar: &SolarParameters) -> EquatorialPhaseSpace {
        let untilt = solar.tilt().transpose();
        let offset = Vector3::new(solar.galcen_distance(), 0.0, 0.0);
        let galactic_position = untilt * self.position + offset;
        let galactic_velocity = untilt * (self.velocity - solar.sun_velocity());

        let to_icrs = icrs_to_galactic_matrix().transpose();
        EquatorialPhaseSpace::from_icrs_cartesian(
            &(to_icrs * galactic_position),
            &(to_icrs * galactic_velocity),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_galactic_pole() {
        // The north Galactic pole in ICRS.
        let ngp = to_unit_vector(192.85948_f64.to_radians(),
                                 27.12825_f64.to_radians());
        let galactic = icrs_to_galactic_matrix() * Vector3::from(ngp);
        assert_abs_diff_eq!(galactic[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(galactic[1], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(galactic[2], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sun_position() {
        let solar = SolarParameters::default();
        let sun = solar.sun_position();
        assert_abs_diff_eq!(sun[0], -8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sun[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sun[2], 0.0208, epsilon = 1e-9);
    }

    #[test]
    fn test_star_towards_galactic_pole() {
        let solar = SolarParameters::default();
        let star = EquatorialPhaseSpace {
            ra: 192.85948,
            dec: 27.12825,
            distance: 1.0,
            pmra: 0.0,
            pmdec: 0.0,
            radial_velocity: 0.0,
        };
        let state = star.to_galactocentric(&solar).unwrap();
        // One kpc straight up from the Sun, slightly tilted.
        assert_abs_diff_eq!(state.position[0], -7.9974, epsilon = 1e-3);
        assert_abs_diff_eq!(state.position[1], 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(state.position[2], 1.0208, epsilon = 1e-3);
        // At rest relative to the Sun, so it shares the Sun's velocity.
        let v_sun = solar.sun_velocity();
        assert_abs_diff_eq!(state.velocity[0], v_sun[0], epsilon = 1e-9);
        assert_abs_diff_eq!(state.velocity[1], v_sun[1], epsilon = 1e-9);
        assert_abs_diff_eq!(state.velocity[2], v_sun[2], epsilon = 1e-9);
    }

    #[test]
    fn test_galactocentric_round_trip() {
        let solar = SolarParameters::default();
        let star = EquatorialPhaseSpace {
            ra: 10.0,
            dec: 20.0,
            distance: 0.35,
            pmra: 12.5,
            pmdec: -33.0,
            radial_velocity: -18.2,
        };
        let back = star.to_galactocentric(&solar).unwrap().to_equatorial(&solar);
        assert_abs_diff_eq!(back.ra, star.ra, epsilon = 1e-9);
        assert_abs_diff_eq!(back.dec, star.dec, epsilon = 1e-9);
        assert_abs_diff_eq!(back.distance, star.distance, epsilon = 1e-9);
        assert_abs_diff_eq!(back.pmra, star.pmra, epsilon = 1e-7);
        assert_abs_diff_eq!(back.pmdec, star.pmdec, epsilon = 1e-7);
        assert_abs_diff_eq!(back.radial_velocity, star.radial_velocity,
                            epsilon = 1e-7);
    }

    #[test]
    fn test_rejects_infinite_distance() {
        let star = EquatorialPhaseSpace {
            ra: 10.0,
            dec: 20.0,
            distance: f64::INFINITY,
            pmra: 0.0,
            pmdec: 0.0,
            radial_velocity: 0.0,
        };
        assert!(matches!(
            star.to_galactocentric(&SolarParameters::default()),
            Err(ElementsError::InvalidArgument(_))
        ));
    }
} // mod tests.
