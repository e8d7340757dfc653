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

//! The ellipsoid module contains types and functions for converting
//! geodetic coordinates on an ellipsoid to the geocentric spherical
//! coordinates used by spherical harmonic models.

#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

use crate::Metres;
use angle_sc::Angle;
use once_cell::sync::Lazy;

/// Convert `Metres` to kilometres.
#[must_use]
pub fn to_kilometres(length: Metres) -> f64 {
    length.0 / 1000.0
}

/// A position in geocentric spherical coordinates, together with the
/// rotation from the geocentric to the geodetic frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphericalPosition {
    /// The geocentric radius in kilometres.
    radius: f64,
    /// The cosine of the geocentric colatitude.
    cos_theta: f64,
    /// The sine of the geocentric colatitude.
    sin_theta: f64,
    /// The cosine of the angle between the geodetic and geocentric verticals.
    cos_rotation: f64,
    /// The sine of the angle between the geodetic and geocentric verticals.
    sin_rotation: f64,
}

impl SphericalPosition {
    /// The geocentric radius in kilometres.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// The cosine of the geocentric colatitude.
    #[must_use]
    pub const fn cos_theta(&self) -> f64 {
        self.cos_theta
    }

    /// The sine of the geocentric colatitude.
    /// It is zero at the geographic poles.
    #[must_use]
    pub const fn sin_theta(&self) -> f64 {
        self.sin_theta
    }

    /// The cosine of the rotation from the geocentric to the geodetic frame.
    #[must_use]
    pub const fn cos_rotation(&self) -> f64 {
        self.cos_rotation
    }

    /// The sine of the rotation from the geocentric to the geodetic frame.
    #[must_use]
    pub const fn sin_rotation(&self) -> f64 {
        self.sin_rotation
    }
}

/// The parameters of an `Ellipsoid` in kilometres.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: f64,
    /// The Semiminor axis of the ellipsoid.
    b: f64,
    /// The reference radius of the spherical harmonic expansion.
    re: f64,

    /// The square of the Semimajor axis.
    a2: f64,
    /// The square of the Semiminor axis.
    b2: f64,
    /// The square of the linear eccentricity: `a2 - b2`.
    c2: f64,
    /// The fourth power of the Semimajor axis.
    a4: f64,
    /// `a4 - b4`.
    c4: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `b` - the Semiminor axis of the `Ellipsoid`.
    /// * `re` - the reference radius of the spherical harmonic expansion.
    #[must_use]
    pub fn new(a: Metres, b: Metres, re: Metres) -> Self {
        let a = to_kilometres(a);
        let b = to_kilometres(b);
        let a2 = a * a;
        let b2 = b * b;
        let a4 = a2 * a2;
        let b4 = b2 * b2;
        Self {
            a,
            b,
            re: to_kilometres(re),
            a2,
            b2,
            c2: a2 - b2,
            a4,
            c4: a4 - b4,
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters used by the WMM.
    #[must_use]
    pub fn wmm() -> Self {
        Self::new(wgs84::A, wgs84::B, wgs84::RE)
    }

    /// The Semimajor axis of the ellipsoid in kilometres.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The Semiminor axis of the ellipsoid in kilometres.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// The reference radius of the spherical harmonic expansion in kilometres.
    #[must_use]
    pub const fn re(&self) -> f64 {
        self.re
    }

    /// Convert a geodetic latitude and height to geocentric spherical
    /// coordinates.
    /// * `lat` - the geodetic latitude.
    /// * `height` - the height above the ellipsoid in kilometres.
    ///
    /// returns the `SphericalPosition`.
    ///
    /// # Examples
    /// ```
    /// use wmm_geomag::{Angle, Degrees};
    /// use wmm_geomag::ellipsoid::Ellipsoid;
    ///
    /// let ellipsoid = Ellipsoid::wmm();
    ///
    /// // On the Equator the geocentric radius is the Semimajor axis
    /// let position = ellipsoid.to_spherical(Angle::from(Degrees(0.0)), 0.0);
    /// assert_eq!(6378.137, position.radius());
    /// assert_eq!(0.0, position.cos_theta());
    /// assert_eq!(1.0, position.sin_theta());
    /// ```
    #[must_use]
    pub fn to_spherical(&self, lat: Angle, height: f64) -> SphericalPosition {
        let sin_lat = lat.sin().0;
        let cos_lat = lat.cos().0;
        let sin_lat2 = sin_lat * sin_lat;
        let cos_lat2 = cos_lat * cos_lat;

        let q = libm::sqrt(self.a2 - self.c2 * sin_lat2);
        let q1 = height * q;
        let q2 = ((q1 + self.a2) / (q1 + self.b2)) * ((q1 + self.a2) / (q1 + self.b2));
        let cos_theta = sin_lat / libm::sqrt(q2 * cos_lat2 + sin_lat2);
        let sin_theta = libm::sqrt(1.0 - cos_theta * cos_theta);

        let r2 = height * height + 2.0 * q1 + (self.a4 - self.c4 * sin_lat2) / (q * q);
        let radius = libm::sqrt(r2);

        // the radius of curvature term
        let d = libm::sqrt(self.a2 * cos_lat2 + self.b2 * sin_lat2);

        SphericalPosition {
            radius,
            cos_theta,
            sin_theta,
            cos_rotation: (height + d) / radius,
            sin_rotation: self.c2 * cos_lat * sin_lat / (radius * d),
        }
    }
}

/// A static instance of the WMM `Ellipsoid`.
pub static WMM_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wmm);
