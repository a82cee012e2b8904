// Copyright (c) 2024 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::f64::consts::PI;

/// Transverse velocity (km/s) of an object at 1 kpc moving 1 mas/yr across
/// the sky. Equivalently, one AU per year expressed in km/s.
pub const KM_S_PER_MAS_YR_KPC: f64 = 4.740470463533348;

/// One km/s expressed in kpc/Myr.
pub const KPC_PER_MYR_PER_KM_S: f64 = 1.0227121650537077e-3;

/// Convert ra/dec (radians) to x/y/z on unit sphere.
pub fn to_unit_vector(ra: f64, dec: f64) -> [f64; 3] {
    [
        (ra.cos() * dec.cos()), // x
        (ra.sin() * dec.cos()), // y
        dec.sin(),
    ] // z
}

/// Convert x/y/z on unitsphere to ra/dec (radians).
pub fn from_unit_vector(v: &[f64; 3]) -> (f64, f64) {
    let x = v[0];
    let y = v[1];
    let z = v[2];
    let dec = z.clamp(-1.0, 1.0).asin();
    let mut ra = y.atan2(x);
    if ra < 0.0 {
        ra += 2.0 * PI;
    }
    (ra, dec)
}

/// Returns the separation, in radians, between the given celestial coordinates
/// (in radians).
pub fn angular_separation(
    p0_ra: f64,
    p0_dec: f64,
    p1_ra: f64,
    p1_dec: f64,
) -> f64 {
    // Haversine form; well conditioned for the small separations of a
    // catalog cone.
    let sin_ddec = (0.5 * (p1_dec - p0_dec)).sin();
    let sin_dra = (0.5 * (p1_ra - p0_ra)).sin();
    let h = sin_ddec * sin_ddec + p0_dec.cos() * p1_dec.cos() * sin_dra * sin_dra;
    2.0 * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Distance in kpc for a parallax given in milliarcseconds. A parallax of
/// zero maps to an infinite distance.
pub fn distance_from_parallax(parallax_mas: f64) -> f64 {
    1.0 / parallax_mas
}

/// Wraps an angle in degrees into [0, 360).
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Returns `ra` (degrees) shifted by a multiple of 360 so that it lies
/// within 180 degrees of `center_ra`. Keeps patches straddling RA=0
/// contiguous when plotted.
pub fn unwrap_ra_near(ra: f64, center_ra: f64) -> f64 {
    center_ra + (ra - center_ra + 180.0).rem_euclid(360.0) - 180.0
}

// mod tests.
