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

//! The wmm2015 module contains the spherical harmonic coefficients of the
//! [World Magnetic Model 2015](https://www.ncei.noaa.gov/products/world-magnetic-model),
//! as published by NOAA NCEI in `WMM.COF`.
//!
//! The model is valid from 2015.0 to 2020.0.

use crate::coefficients::{CoefficientRow, CoefficientTable};

/// The epoch of the WMM2015 model, as a decimal year.
pub const EPOCH: f64 = 2015.0;

/// The WMM2015 Schmidt semi-normalised Gauss coefficients, in nanotesla,
/// and their secular variation, in nanotesla per year.
#[rustfmt::skip]
pub const ROWS: [CoefficientRow; 90] = [
    CoefficientRow::new(1, 0, -29_438.5, 0.0, 10.7, 0.0),
    CoefficientRow::new(1, 1, -1_501.1, 4_796.2, 17.9, -26.8),
    CoefficientRow::new(2, 0, -2_445.3, 0.0, -8.6, 0.0),
    CoefficientRow::new(2, 1, 3_012.5, -2_845.6, -3.3, -27.1),
    CoefficientRow::new(2, 2, 1_676.6, -642.0, 2.4, -13.3),
    CoefficientRow::new(3, 0, 1_351.1, 0.0, 3.1, 0.0),
    CoefficientRow::new(3, 1, -2_352.3, -115.3, -6.2, 8.4),
    CoefficientRow::new(3, 2, 1_225.6, 245.0, -0.4, -0.4),
    CoefficientRow::new(3, 3, 581.9, -538.3, -10.4, 2.3),
    CoefficientRow::new(4, 0, 907.2, 0.0, -0.4, 0.0),
    CoefficientRow::new(4, 1, 813.7, 283.4, 0.8, -0.6),
    CoefficientRow::new(4, 2, 120.3, -188.6, -9.2, 5.3),
    CoefficientRow::new(4, 3, -335.0, 180.9, 4.0, 3.0),
    CoefficientRow::new(4, 4, 70.3, -329.5, -4.2, -5.3),
    CoefficientRow::new(5, 0, -232.6, 0.0, -0.2, 0.0),
    CoefficientRow::new(5, 1, 360.1, 47.4, 0.1, 0.4),
    CoefficientRow::new(5, 2, 192.4, 196.9, -1.4, 1.6),
    CoefficientRow::new(5, 3, -141.0, -119.4, 0.0, -1.1),
    CoefficientRow::new(5, 4, -157.4, 16.1, 1.3, 3.3),
    CoefficientRow::new(5, 5, 4.3, 100.1, 3.8, 0.1),
    CoefficientRow::new(6, 0, 69.5, 0.0, -0.5, 0.0),
    CoefficientRow::new(6, 1, 67.4, -20.7, -0.2, 0.0),
    CoefficientRow::new(6, 2, 72.8, 33.2, -0.6, -2.2),
    CoefficientRow::new(6, 3, -129.8, 58.8, 2.4, -0.7),
    CoefficientRow::new(6, 4, -29.0, -66.5, -1.1, 0.1),
    CoefficientRow::new(6, 5, 13.2, 7.3, 0.3, 1.0),
    CoefficientRow::new(6, 6, -70.9, 62.5, 1.5, 1.3),
    CoefficientRow::new(7, 0, 81.6, 0.0, 0.2, 0.0),
    CoefficientRow::new(7, 1, -76.1, -54.1, -0.2, 0.7),
    CoefficientRow::new(7, 2, -6.8, -19.4, -0.4, 0.5),
    CoefficientRow::new(7, 3, 51.9, 5.6, 1.3, -0.2),
    CoefficientRow::new(7, 4, 15.0, 24.4, 0.2, -0.1),
    CoefficientRow::new(7, 5, 9.3, 3.3, -0.4, -0.7),
    CoefficientRow::new(7, 6, -2.8, -27.5, -0.9, 0.1),
    CoefficientRow::new(7, 7, 6.7, -2.3, 0.3, 0.1),
    CoefficientRow::new(8, 0, 24.0, 0.0, 0.0, 0.0),
    CoefficientRow::new(8, 1, 8.6, 10.2, 0.1, -0.3),
    CoefficientRow::new(8, 2, -16.9, -18.1, -0.5, 0.3),
    CoefficientRow::new(8, 3, -3.2, 13.2, 0.5, 0.3),
    CoefficientRow::new(8, 4, -20.6, -14.6, -0.2, 0.6),
    CoefficientRow::new(8, 5, 13.3, 16.2, 0.4, -0.1),
    CoefficientRow::new(8, 6, 11.7, 5.7, 0.2, -0.2),
    CoefficientRow::new(8, 7, -16.0, -9.1, -0.4, 0.3),
    CoefficientRow::new(8, 8, -2.0, 2.2, 0.3, 0.0),
    CoefficientRow::new(9, 0, 5.4, 0.0, 0.0, 0.0),
    CoefficientRow::new(9, 1, 8.8, -21.6, -0.1, -0.2),
    CoefficientRow::new(9, 2, 3.1, 10.8, -0.1, -0.1),
    CoefficientRow::new(9, 3, -3.1, 11.7, 0.4, -0.2),
    CoefficientRow::new(9, 4, 0.6, -6.8, -0.5, 0.1),
    CoefficientRow::new(9, 5, -13.3, -6.9, -0.2, 0.1),
    CoefficientRow::new(9, 6, -0.1, 7.8, 0.1, 0.0),
    CoefficientRow::new(9, 7, 8.7, 1.0, 0.0, -0.2),
    CoefficientRow::new(9, 8, -9.1, -3.9, -0.2, 0.4),
    CoefficientRow::new(9, 9, -10.5, 8.5, -0.1, 0.3),
    CoefficientRow::new(10, 0, -1.9, 0.0, 0.0, 0.0),
    CoefficientRow::new(10, 1, -6.5, 3.3, 0.0, 0.1),
    CoefficientRow::new(10, 2, 0.2, -0.3, -0.1, -0.1),
    CoefficientRow::new(10, 3, 0.6, 4.6, 0.3, 0.0),
    CoefficientRow::new(10, 4, -0.6, 4.4, -0.1, 0.0),
    CoefficientRow::new(10, 5, 1.7, -7.9, -0.1, -0.2),
    CoefficientRow::new(10, 6, -0.7, -0.6, -0.1, 0.1),
    CoefficientRow::new(10, 7, 2.1, -4.1, 0.0, -0.1),
    CoefficientRow::new(10, 8, 2.3, -2.8, -0.2, -0.2),
    CoefficientRow::new(10, 9, -1.8, -1.1, -0.1, 0.1),
    CoefficientRow::new(10, 10, -3.6, -8.7, -0.2, -0.1),
    CoefficientRow::new(11, 0, 3.1, 0.0, 0.0, 0.0),
    CoefficientRow::new(11, 1, -1.5, -0.1, 0.0, 0.0),
    CoefficientRow::new(11, 2, -2.3, 2.1, -0.1, 0.1),
    CoefficientRow::new(11, 3, 2.1, -0.7, 0.1, 0.0),
    CoefficientRow::new(11, 4, -0.9, -1.1, 0.0, 0.1),
    CoefficientRow::new(11, 5, 0.6, 0.7, 0.0, 0.0),
    CoefficientRow::new(11, 6, -0.7, -0.2, 0.0, 0.0),
    CoefficientRow::new(11, 7, 0.2, -2.1, 0.0, 0.1),
    CoefficientRow::new(11, 8, 1.7, -1.5, 0.0, 0.0),
    CoefficientRow::new(11, 9, -0.2, -2.5, 0.0, -0.1),
    CoefficientRow::new(11, 10, 0.4, -2.0, -0.1, 0.0),
    CoefficientRow::new(11, 11, 3.5, -2.3, -0.1, -0.1),
    CoefficientRow::new(12, 0, -2.0, 0.0, 0.1, 0.0),
    CoefficientRow::new(12, 1, -0.3, -1.0, 0.0, 0.0),
    CoefficientRow::new(12, 2, 0.4, 0.5, 0.0, 0.0),
    CoefficientRow::new(12, 3, 1.3, 1.8, 0.1, -0.1),
    CoefficientRow::new(12, 4, -0.9, -2.2, -0.1, 0.0),
    CoefficientRow::new(12, 5, 0.9, 0.3, 0.0, 0.0),
    CoefficientRow::new(12, 6, 0.1, 0.7, 0.1, 0.0),
    CoefficientRow::new(12, 7, 0.5, -0.1, 0.0, 0.0),
    CoefficientRow::new(12, 8, -0.4, 0.3, 0.0, 0.0),
    CoefficientRow::new(12, 9, -0.4, 0.2, 0.0, 0.0),
    CoefficientRow::new(12, 10, 0.2, -0.9, 0.0, 0.0),
    CoefficientRow::new(12, 11, -0.9, -0.2, 0.0, 0.0),
    CoefficientRow::new(12, 12, 0.0, 0.7, 0.0, 0.0),
];

/// The WMM2015 coefficient table.
pub const WMM2015: CoefficientTable = CoefficientTable::new("WMM-2015", EPOCH, &ROWS);
