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

//! The error module contains the errors reported by the geomagnetic model.

use thiserror::Error;

/// Geomagnetic model errors.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// The altitude is below the minimum of -10 km.
    #[error("altitude out of range: {0} km, the minimum altitude is -10 km")]
    AltitudeOutOfRange(f64),
    /// The latitude is not strictly between -90 and 90 degrees.
    #[error("latitude out of range: {0}, the valid range is -90 < latitude < 90")]
    LatitudeOutOfRange(f64),
    /// The longitude is not between -180 and 360 degrees.
    #[error("longitude out of range: {0}, the valid range is -180 to 360")]
    LongitudeOutOfRange(f64),
    /// The decimal year is not a finite number.
    #[error("invalid decimal year: {0}")]
    InvalidDecimalYear(f64),
    /// The decimal year is outside the validity period of the model.
    #[error("year {decimal_year} outside validity {epoch} to {valid_until}")]
    EpochValidity {
        /// The requested decimal year.
        decimal_year: f64,
        /// The model epoch.
        epoch: f64,
        /// The end of the model validity period.
        valid_until: f64,
    },
}

impl Error {
    /// Whether the error was raised by a setter, i.e. an input was out of range.
    #[must_use]
    pub const fn is_input_range(&self) -> bool {
        !matches!(self, Self::EpochValidity { .. })
    }
}
