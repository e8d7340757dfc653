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

//! The field module contains the magnetic field vector and the field
//! elements derived from it: horizontal and total intensity, declination,
//! inclination and grid variation (grivation).

#![allow(clippy::suboptimal_flops)]

use angle_sc::Degrees;

/// The value of grivation where it is undefined.
pub const GRIVATION_UNDEFINED: f64 = -999.0;

/// The minimum absolute latitude in degrees where grivation is defined.
pub const GRIVATION_MIN_LATITUDE: f64 = 55.0;

/// The magnetic field vector in the geodetic frame, in nanotesla.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldVector {
    /// X, positive northwards.
    north: f64,
    /// Y, positive eastwards.
    east: f64,
    /// Z, positive downwards.
    down: f64,
}

impl FieldVector {
    /// Constructor.
    /// * `north`, `east`, `down` - the components in nanotesla.
    #[must_use]
    pub const fn new(north: f64, east: f64, down: f64) -> Self {
        Self { north, east, down }
    }

    /// The northward component.
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// The eastward component.
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// The downward component.
    #[must_use]
    pub const fn down(&self) -> f64 {
        self.down
    }
}

/// Calculate the grid variation: the angle between grid north and magnetic
/// north in polar regions.
/// * `declination` - the magnetic declination in degrees.
/// * `lat` - the geodetic latitude.
/// * `lon` - the longitude.
///
/// returns the grivation in degrees in the range (-180, 180], or
/// `GRIVATION_UNDEFINED` where |`lat`| < 55°.
///
/// # Examples
/// ```
/// use wmm_geomag::Degrees;
/// use wmm_geomag::field::{calculate_grivation, GRIVATION_UNDEFINED};
///
/// assert_eq!(-12.0, calculate_grivation(-2.0, Degrees(80.0), Degrees(10.0)));
/// assert_eq!(GRIVATION_UNDEFINED, calculate_grivation(-2.0, Degrees(40.0), Degrees(10.0)));
/// ```
#[must_use]
pub fn calculate_grivation(declination: f64, lat: Degrees, lon: Degrees) -> f64 {
    if libm::fabs(lat.0) < GRIVATION_MIN_LATITUDE {
        return GRIVATION_UNDEFINED;
    }

    let mut grivation = if 0.0 < lat.0 {
        if 0.0 <= lon.0 {
            declination - lon.0
        } else {
            declination + libm::fabs(lon.0)
        }
    } else if 0.0 <= lon.0 {
        declination + lon.0
    } else {
        declination - libm::fabs(lon.0)
    };

    if grivation > 180.0 {
        grivation -= 360.0;
    }
    if grivation <= -180.0 {
        grivation += 360.0;
    }
    grivation
}

/// The magnetic field elements at a position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldElements {
    /// The field vector, nanotesla.
    vector: FieldVector,
    /// H, nanotesla.
    horizontal_intensity: f64,
    /// F, nanotesla.
    total_intensity: f64,
    /// D, degrees, positive east.
    declination: f64,
    /// I, degrees, positive down.
    inclination: f64,
    /// Degrees, or `GRIVATION_UNDEFINED`.
    grivation: f64,
}

impl FieldElements {
    /// Calculate the field elements from a field vector.
    /// * `vector` - the field vector at the position.
    /// * `lat` - the geodetic latitude of the position.
    /// * `lon` - the longitude of the position.
    ///
    /// # Examples
    /// ```
    /// use wmm_geomag::Degrees;
    /// use wmm_geomag::field::{FieldElements, FieldVector, GRIVATION_UNDEFINED};
    ///
    /// let vector = FieldVector::new(3.0, 3.0, 0.0);
    /// let elements = FieldElements::new(vector, Degrees(0.0), Degrees(0.0));
    /// assert_eq!(45.0, elements.declination());
    /// assert_eq!(0.0, elements.inclination());
    /// assert_eq!(GRIVATION_UNDEFINED, elements.grivation());
    /// ```
    #[must_use]
    pub fn new(vector: FieldVector, lat: Degrees, lon: Degrees) -> Self {
        let (north, east, down) = (vector.north(), vector.east(), vector.down());
        let horizontal_intensity = libm::sqrt(north * north + east * east);
        let total_intensity = libm::hypot(horizontal_intensity, down);
        let declination = libm::atan2(east, north).to_degrees();
        let inclination = libm::atan2(down, horizontal_intensity).to_degrees();
        Self {
            vector,
            horizontal_intensity,
            total_intensity,
            declination,
            inclination,
            grivation: calculate_grivation(declination, lat, lon),
        }
    }

    /// The field vector.
    #[must_use]
    pub const fn vector(&self) -> FieldVector {
        self.vector
    }

    /// The horizontal intensity, H.
    #[must_use]
    pub const fn horizontal_intensity(&self) -> f64 {
        self.horizontal_intensity
    }

    /// The total intensity, F.
    #[must_use]
    pub const fn total_intensity(&self) -> f64 {
        self.total_intensity
    }

    /// The declination, D.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// The inclination, I.
    #[must_use]
    pub const fn inclination(&self) -> f64 {
        self.inclination
    }

    /// The grivation.
    #[must_use]
    pub const fn grivation(&self) -> f64 {
        self.grivation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    fn grivation(declination: f64, lat: f64, lon: f64) -> f64 {
        calculate_grivation(declination, Degrees(lat), Degrees(lon))
    }

    #[test]
    fn test_calculate_grivation_quadrants() {
        assert_eq!(-12.0, grivation(-2.0, 60.0, 10.0));
        assert_eq!(8.0, grivation(-2.0, 60.0, -10.0));
        assert_eq!(8.0, grivation(-2.0, -60.0, 10.0));
        assert_eq!(-12.0, grivation(-2.0, -60.0, -10.0));
    }

    #[test]
    fn test_calculate_grivation_wrap() {
        assert_eq!(-178.0, grivation(3.0, 60.0, -179.0));
        assert_eq!(-134.0, grivation(47.0, -60.0, 179.0));
        assert_eq!(2.0, grivation(-8.0, 75.0, 350.0));
        assert_eq!(180.0, grivation(0.0, 75.0, 180.0));
    }

    #[test]
    fn test_calculate_grivation_boundary() {
        assert_eq!(-1.0, grivation(-1.0, 55.0, 0.0));
        assert_eq!(-1.0, grivation(-1.0, -55.0, 0.0));
        assert_eq!(GRIVATION_UNDEFINED, grivation(-1.0, 54.999, 0.0));
        assert_eq!(GRIVATION_UNDEFINED, grivation(-1.0, -54.999, 0.0));
    }

    #[test]
    fn test_field_elements() {
        let vector = FieldVector::new(6_599.4, -317.1, 54_459.2);
        let elements = FieldElements::new(vector, Degrees(80.0), Degrees(0.0));
        assert_eq!(vector, elements.vector());

        let h = elements.horizontal_intensity();
        assert!(is_within_tolerance(
            h * h,
            vector.north() * vector.north() + vector.east() * vector.east(),
            1e-9 * h * h
        ));
        let f = elements.total_intensity();
        assert!(is_within_tolerance(
            f * f,
            h * h + vector.down() * vector.down(),
            1e-9 * f * f
        ));

        assert!(is_within_tolerance(-2.75, elements.declination(), 0.01));
        assert!(is_within_tolerance(83.08, elements.inclination(), 0.01));
        assert_eq!(elements.declination(), elements.grivation());
    }

    #[test]
    fn test_field_elements_upward_field() {
        let vector = FieldVector::new(0.0, -1.0, -1.0);
        let elements = FieldElements::new(vector, Degrees(-10.0), Degrees(100.0));
        assert_eq!(-90.0, elements.declination());
        assert_eq!(-45.0, elements.inclination());
        assert_eq!(GRIVATION_UNDEFINED, elements.grivation());
    }
}
