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

//! Spherical harmonic coefficients of a geomagnetic model.
//!
//! The types hold the coefficient tables and the functions convert them from
//! Schmidt semi-normalised form to the unnormalised form used by the field
//! synthesis recursion.

#![allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]

pub mod wmm2015;

/// The maximum degree (and order) of the spherical harmonic expansion.
pub const MAX_DEGREE: usize = 12;

/// The size of the coefficient tables, indexed by order and degree.
pub const TABLE_SIZE: usize = MAX_DEGREE + 1;

/// The number of years that a model is valid for after its epoch.
pub const VALIDITY_YEARS: f64 = 5.0;

/// A square table indexed by `[m][n]`, i.e. order then degree.
pub type Table = [[f64; TABLE_SIZE]; TABLE_SIZE];

/// A row of a published coefficient file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoefficientRow {
    /// The degree.
    pub n: usize,
    /// The order.
    pub m: usize,
    /// The main field coefficient `g`, nanotesla.
    pub g: f64,
    /// The main field coefficient `h`, nanotesla.
    pub h: f64,
    /// The secular variation of `g`, nanotesla per year.
    pub g_dot: f64,
    /// The secular variation of `h`, nanotesla per year.
    pub h_dot: f64,
}

impl CoefficientRow {
    /// Constructor.
    /// * `n` - the degree.
    /// * `m` - the order.
    /// * `g`, `h` - the main field coefficients.
    /// * `g_dot`, `h_dot` - the secular variation coefficients.
    #[must_use]
    pub const fn new(n: usize, m: usize, g: f64, h: f64, g_dot: f64, h_dot: f64) -> Self {
        Self {
            n,
            m,
            g,
            h,
            g_dot,
            h_dot,
        }
    }

    /// Whether the row fits in the coefficient tables.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        0 < self.n && self.n <= MAX_DEGREE && self.m <= self.n
    }
}

/// A published coefficient table for one model epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoefficientTable {
    name: &'static str,
    epoch: f64,
    rows: &'static [CoefficientRow],
}

impl CoefficientTable {
    /// Constructor.
    /// * `name` - the model name, e.g. "WMM-2015".
    /// * `epoch` - the model epoch, a decimal year.
    /// * `rows` - the coefficient rows.
    #[must_use]
    pub const fn new(name: &'static str, epoch: f64, rows: &'static [CoefficientRow]) -> Self {
        Self { name, epoch, rows }
    }

    /// The model name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The model epoch, a decimal year.
    #[must_use]
    pub const fn epoch(&self) -> f64 {
        self.epoch
    }

    /// The last decimal year that the model is valid for.
    #[must_use]
    pub const fn valid_until(&self) -> f64 {
        self.epoch + VALIDITY_YEARS
    }

    /// The coefficient rows.
    #[must_use]
    pub const fn rows(&self) -> &'static [CoefficientRow] {
        self.rows
    }
}

/// Calculate the factors that convert Schmidt semi-normalised coefficients
/// to unnormalised coefficients, indexed by `[m][n]`.
///
/// # Examples
/// ```
/// use wmm_geomag::coefficients::calculate_schmidt_factors;
///
/// let snorm = calculate_schmidt_factors();
/// assert_eq!(1.0, snorm[0][0]);
/// assert_eq!(1.5, snorm[0][2]);
/// assert_eq!(2.5, snorm[0][3]);
/// ```
#[must_use]
pub fn calculate_schmidt_factors() -> Table {
    let mut snorm = [[0.0; TABLE_SIZE]; TABLE_SIZE];
    snorm[0][0] = 1.0;
    for n in 1..TABLE_SIZE {
        snorm[0][n] = snorm[0][n - 1] * (2 * n - 1) as f64 / n as f64;

        // j is 2 for the first order only
        let mut j = 2;
        for m in 1..=n {
            let flnmj = ((n - m + 1) * j) as f64 / (n + m) as f64;
            snorm[m][n] = snorm[m - 1][n] * libm::sqrt(flnmj);
            j = 1;
        }
    }
    snorm
}

/// Calculate the Legendre recursion coefficients, indexed by `[m][n]`:
/// `k = ((n-1)^2 - m^2) / ((2n-1)(2n-3))`.
#[must_use]
pub fn calculate_recursion_coefficients() -> Table {
    let mut k = [[0.0; TABLE_SIZE]; TABLE_SIZE];
    for n in 1..TABLE_SIZE {
        let nf = n as f64;
        for m in 0..=n {
            let mf = m as f64;
            k[m][n] = ((nf - 1.0) * (nf - 1.0) - mf * mf) / ((2.0 * nf - 1.0) * (2.0 * nf - 3.0));
        }
    }
    k[1][1] = 0.0;
    k
}

/// The unnormalised Gauss coefficients of a model, ready for synthesis.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussCoefficients {
    /// The model epoch.
    epoch: f64,
    g: Table,
    h: Table,
    g_dot: Table,
    h_dot: Table,
    /// Legendre recursion coefficients.
    k: Table,
    /// `n + 1` by degree.
    degree_factors: [f64; TABLE_SIZE],
    /// `m` by order.
    order_factors: [f64; TABLE_SIZE],
}

impl GaussCoefficients {
    /// Construct from a published table, converting the Schmidt
    /// semi-normalised coefficients to unnormalised coefficients.
    /// Rows outside the tables are ignored.
    /// * `table` - the published coefficient table.
    #[must_use]
    pub fn new(table: &CoefficientTable) -> Self {
        let snorm = calculate_schmidt_factors();

        let mut g = [[0.0; TABLE_SIZE]; TABLE_SIZE];
        let mut h = [[0.0; TABLE_SIZE]; TABLE_SIZE];
        let mut g_dot = [[0.0; TABLE_SIZE]; TABLE_SIZE];
        let mut h_dot = [[0.0; TABLE_SIZE]; TABLE_SIZE];
        for row in table.rows().iter().filter(|row| row.is_valid()) {
            let factor = snorm[row.m][row.n];
            g[row.m][row.n] = factor * row.g;
            g_dot[row.m][row.n] = factor * row.g_dot;
            if row.m != 0 {
                h[row.m][row.n] = factor * row.h;
                h_dot[row.m][row.n] = factor * row.h_dot;
            }
        }

        let mut degree_factors = [0.0; TABLE_SIZE];
        let mut order_factors = [0.0; TABLE_SIZE];
        for n in 1..TABLE_SIZE {
            degree_factors[n] = (n + 1) as f64;
            order_factors[n] = n as f64;
        }
        // fm[0] is not initialised by the published derivation
        order_factors[0] = 0.0;

        Self {
            epoch: table.epoch(),
            g,
            h,
            g_dot,
            h_dot,
            k: calculate_recursion_coefficients(),
            degree_factors,
            order_factors,
        }
    }

    /// The model epoch, a decimal year.
    #[must_use]
    pub const fn epoch(&self) -> f64 {
        self.epoch
    }

    /// The last decimal year that the model is valid for.
    #[must_use]
    pub const fn valid_until(&self) -> f64 {
        self.epoch + VALIDITY_YEARS
    }

    /// The Legendre recursion coefficient for order `m` and degree `n`.
    #[must_use]
    pub const fn k(&self, m: usize, n: usize) -> f64 {
        self.k[m][n]
    }

    /// The radial weighting factor for degree `n`: `n + 1`.
    #[must_use]
    pub const fn degree_factor(&self, n: usize) -> f64 {
        self.degree_factors[n]
    }

    /// The longitudinal weighting factor for order `m`: `m`.
    #[must_use]
    pub const fn order_factor(&self, m: usize) -> f64 {
        self.order_factors[m]
    }

    /// The unnormalised `g` and `h` coefficients for order `m` and degree `n`
    /// linearly adjusted by their secular variation.
    /// * `m` - the order.
    /// * `n` - the degree.
    /// * `dt` - the time since the model epoch in years.
    #[must_use]
    pub fn time_adjusted(&self, m: usize, n: usize, dt: f64) -> (f64, f64) {
        (
            self.g[m][n] + dt * self.g_dot[m][n],
            self.h[m][n] + dt * self.h_dot[m][n],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_coefficient_table() {
        let table = wmm2015::WMM2015;
        assert_eq!("WMM-2015", table.name());
        assert_eq!(2015.0, table.epoch());
        assert_eq!(2020.0, table.valid_until());
        assert_eq!(90, table.rows().len());
        assert!(table.rows().iter().all(CoefficientRow::is_valid));
    }

    #[test]
    fn test_coefficient_row_is_valid() {
        assert!(CoefficientRow::new(12, 12, 0.0, 0.7, 0.0, 0.0).is_valid());
        assert!(!CoefficientRow::new(0, 0, 1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!CoefficientRow::new(2, 3, 1.0, 1.0, 0.0, 0.0).is_valid());
        assert!(!CoefficientRow::new(13, 0, 1.0, 0.0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn test_calculate_schmidt_factors() {
        let snorm = calculate_schmidt_factors();

        let expected = [
            1.0,
            1.0,
            1.5,
            2.5,
            4.375,
            7.875,
            14.4375,
            26.8125,
            50.273_437_5,
            94.960_937_5,
            180.425_781_25,
            344.449_218_75,
            660.194_335_937_5,
        ];
        assert_eq!(expected, snorm[0]);

        assert_eq!(1.0, snorm[1][1]);
        let sqrt_3 = 3.0_f64.sqrt();
        assert!(is_within_tolerance(sqrt_3, snorm[1][2], 4.0 * f64::EPSILON));
        assert!(is_within_tolerance(
            sqrt_3 / 2.0,
            snorm[2][2],
            4.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            0.790_569_415_042_094_8,
            snorm[3][3],
            8.0 * f64::EPSILON
        ));

        // orders greater than the degree are unused
        assert_eq!(0.0, snorm[2][1]);
    }

    #[test]
    fn test_calculate_recursion_coefficients() {
        let k = calculate_recursion_coefficients();
        assert_eq!(0.0, k[0][1]);
        assert_eq!(0.0, k[1][1]);
        assert_eq!(1.0 / 3.0, k[0][2]);
        assert_eq!(0.0, k[1][2]);
        assert_eq!(-1.0, k[2][2]);
        assert_eq!(4.0 / 15.0, k[0][3]);
    }

    #[test]
    fn test_gauss_coefficients() {
        let coefficients = GaussCoefficients::new(&wmm2015::WMM2015);
        assert_eq!(2015.0, coefficients.epoch());
        assert_eq!(2020.0, coefficients.valid_until());

        assert_eq!(0.0, coefficients.order_factor(0));
        assert_eq!(12.0, coefficients.order_factor(12));
        assert_eq!(0.0, coefficients.degree_factor(0));
        assert_eq!(2.0, coefficients.degree_factor(1));
        assert_eq!(13.0, coefficients.degree_factor(12));
        assert_eq!(0.0, coefficients.k(1, 1));

        // degree 1 coefficients are unchanged by normalisation
        assert_eq!((-29_438.5, 0.0), coefficients.time_adjusted(0, 1, 0.0));
        assert_eq!((-1_501.1, 4_796.2), coefficients.time_adjusted(1, 1, 0.0));

        let (g, h) = coefficients.time_adjusted(1, 1, 2.5);
        assert!(is_within_tolerance(-1_501.1 + 2.5 * 17.9, g, 1e-9));
        assert!(is_within_tolerance(4_796.2 - 2.5 * 26.8, h, 1e-9));

        let (g, h) = coefficients.time_adjusted(1, 2, 0.0);
        assert!(is_within_tolerance(3_012.5 * 3.0_f64.sqrt(), g, 1e-9));
        assert!(is_within_tolerance(-2_845.6 * 3.0_f64.sqrt(), h, 1e-9));
    }

    #[test]
    fn test_gauss_coefficients_ignore_invalid_rows() {
        static ROWS: [CoefficientRow; 3] = [
            CoefficientRow::new(1, 0, 100.0, 50.0, 1.0, 1.0),
            CoefficientRow::new(1, 2, 7.0, 7.0, 7.0, 7.0),
            CoefficientRow::new(13, 0, 7.0, 7.0, 7.0, 7.0),
        ];
        let table = CoefficientTable::new("test", 2000.0, &ROWS);
        let coefficients = GaussCoefficients::new(&table);

        // h is not defined for order zero
        assert_eq!((101.0, 0.0), coefficients.time_adjusted(0, 1, 1.0));
        assert_eq!((0.0, 0.0), coefficients.time_adjusted(2, 1, 1.0));
    }
}
