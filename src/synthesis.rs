// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The synthesis module evaluates the spherical harmonic expansion of a
//! geomagnetic model at a position and time.
//!
//! The unnormalised associated Legendre functions and their derivatives are
//! calculated by recursion, see the
//! [WMM Technical Report](https://www.ncei.noaa.gov/products/world-magnetic-model)
//! section 1.2. At the geographic poles the longitudinal component is
//! calculated by a separate recursion to avoid dividing by the sine of the
//! colatitude.

#![allow(clippy::suboptimal_flops)]

use crate::coefficients::{GaussCoefficients, TABLE_SIZE, VALIDITY_YEARS};
use crate::ellipsoid::Ellipsoid;
use crate::error::Error;
use crate::field::FieldVector;
use angle_sc::Angle;
use log::{debug, warn};

/// Calculate the sines and cosines of multiples of the longitude by
/// angle addition.
/// * `lon` - the longitude.
///
/// returns the sines and cosines of `m * lon`, for `m` in `0..TABLE_SIZE`.
#[must_use]
pub fn calculate_longitude_harmonics(lon: Angle) -> ([f64; TABLE_SIZE], [f64; TABLE_SIZE]) {
    let mut sin_mlon = [0.0; TABLE_SIZE];
    let mut cos_mlon = [0.0; TABLE_SIZE];
    cos_mlon[0] = 1.0;
    sin_mlon[1] = lon.sin().0;
    cos_mlon[1] = lon.cos().0;
    for m in 2..TABLE_SIZE {
        sin_mlon[m] = sin_mlon[1] * cos_mlon[m - 1] + cos_mlon[1] * sin_mlon[m - 1];
        cos_mlon[m] = cos_mlon[1] * cos_mlon[m - 1] - sin_mlon[1] * sin_mlon[m - 1];
    }
    (sin_mlon, cos_mlon)
}

/// Calculate the magnetic field vector of a model.
/// * `coefficients` - the unnormalised model coefficients.
/// * `ellipsoid` - the reference `Ellipsoid`.
/// * `lat` - the geodetic latitude.
/// * `lon` - the longitude.
/// * `height` - the height above the ellipsoid in kilometres.
/// * `decimal_year` - the time as a decimal year.
///
/// returns the field vector in the geodetic frame.
///
/// # Errors
///
/// Returns `Error::EpochValidity` if `decimal_year` is outside the validity
/// period of the model.
///
/// # Examples
/// ```
/// use wmm_geomag::{Angle, Degrees};
/// use wmm_geomag::coefficients::{wmm2015, GaussCoefficients};
/// use wmm_geomag::ellipsoid::WMM_ELLIPSOID;
/// use wmm_geomag::synthesis::synthesize;
///
/// let coefficients = GaussCoefficients::new(&wmm2015::WMM2015);
/// let lat = Angle::from(Degrees(80.0));
/// let lon = Angle::from(Degrees(0.0));
/// let vector = synthesize(&coefficients, &WMM_ELLIPSOID, lat, lon, 0.0, 2015.0).unwrap();
/// assert!((vector.north() - 6_627.1).abs() < 0.1);
///
/// assert!(synthesize(&coefficients, &WMM_ELLIPSOID, lat, lon, 0.0, 2020.5).is_err());
/// ```
pub fn synthesize(
    coefficients: &GaussCoefficients,
    ellipsoid: &Ellipsoid,
    lat: Angle,
    lon: Angle,
    height: f64,
    decimal_year: f64,
) -> Result<FieldVector, Error> {
    let epoch = coefficients.epoch();
    let valid_until = coefficients.valid_until();
    let dt = decimal_year - epoch;
    if !(0.0..=VALIDITY_YEARS).contains(&dt) {
        warn!("decimal year {decimal_year} outside model validity {epoch} to {valid_until}");
        return Err(Error::EpochValidity {
            decimal_year,
            epoch,
            valid_until,
        });
    }

    let position = ellipsoid.to_spherical(lat, height);
    let ct = position.cos_theta();
    let st = position.sin_theta();
    let at_pole = st == 0.0;

    let (sin_mlon, cos_mlon) = calculate_longitude_harmonics(lon);

    // Legendre functions and their colatitude derivatives, indexed by [m][n]
    let mut legendre = [[0.0; TABLE_SIZE]; TABLE_SIZE];
    let mut d_legendre = [[0.0; TABLE_SIZE]; TABLE_SIZE];
    legendre[0][0] = 1.0;

    // Legendre functions of order 1, divided by the sine of the colatitude
    let mut pole_legendre = [0.0; TABLE_SIZE];
    pole_legendre[0] = 1.0;

    let ratio = ellipsoid.re() / position.radius();
    let mut ratio_pow = ratio * ratio;
    let mut b_radial = 0.0;
    let mut b_theta = 0.0;
    let mut b_phi = 0.0;
    let mut b_phi_pole = 0.0;

    for n in 1..TABLE_SIZE {
        ratio_pow *= ratio;

        for m in 0..=n {
            if n == m {
                legendre[m][n] = st * legendre[m - 1][n - 1];
                d_legendre[m][n] = st * d_legendre[m - 1][n - 1] + ct * legendre[m - 1][n - 1];
            } else if n == 1 && m == 0 {
                legendre[m][n] = ct * legendre[m][n - 1];
                d_legendre[m][n] = ct * d_legendre[m][n - 1] - st * legendre[m][n - 1];
            } else if n > 1 {
                if m > n - 2 {
                    legendre[m][n - 2] = 0.0;
                    d_legendre[m][n - 2] = 0.0;
                }
                let k = coefficients.k(m, n);
                legendre[m][n] = ct * legendre[m][n - 1] - k * legendre[m][n - 2];
                d_legendre[m][n] =
                    ct * d_legendre[m][n - 1] - st * legendre[m][n - 1] - k * d_legendre[m][n - 2];
            }

            let (gnm, hnm) = coefficients.time_adjusted(m, n, dt);

            let par = ratio_pow * legendre[m][n];
            let (cos_term, sin_term) = if m == 0 {
                (gnm * cos_mlon[m], gnm * sin_mlon[m])
            } else {
                (
                    gnm * cos_mlon[m] + hnm * sin_mlon[m],
                    gnm * sin_mlon[m] - hnm * cos_mlon[m],
                )
            };

            b_theta -= ratio_pow * cos_term * d_legendre[m][n];
            b_phi += coefficients.order_factor(m) * sin_term * par;
            b_radial += coefficients.degree_factor(n) * cos_term * par;

            if at_pole && m == 1 {
                pole_legendre[n] = if n == 1 {
                    pole_legendre[n - 1]
                } else {
                    ct * pole_legendre[n - 1] - coefficients.k(m, n) * pole_legendre[n - 2]
                };
                let parp = ratio_pow * pole_legendre[n];
                b_phi_pole += coefficients.order_factor(m) * sin_term * parp;
            }
        }
    }

    b_phi = if at_pole { b_phi_pole } else { b_phi / st };

    // rotate from geocentric spherical to geodetic coordinates
    let ca = position.cos_rotation();
    let sa = position.sin_rotation();
    let north = -b_theta * ca - b_radial * sa;
    let east = b_phi;
    let down = b_theta * sa - b_radial * ca;
    debug!("synthesized field at {decimal_year}: north {north} east {east} down {down}");
    let vector = FieldVector::new(north, east, down);
    Ok(vector)
}
