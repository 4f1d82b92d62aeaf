// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precision-based quantization of tap locations.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`

use crate::location::TapLocation;

/// Error returned when a precision is outside `[0, 1]` (or NaN), or is a
/// nonzero value too small to divide a star by.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PrecisionError {
    /// The rejected value.
    pub value: f64,
}

impl fmt::Display for PrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0.0..=1.0).contains(&self.value) {
            write!(f, "precision {} is too small to quantize with", self.value)
        } else {
            write!(f, "precision {} is outside [0, 1]", self.value)
        }
    }
}

impl core::error::Error for PrecisionError {}

/// Quantization grain for ratings, in `[0, 1]`.
///
/// `0` leaves ratings continuous; `0.5` allows half stars; `1` allows whole
/// stars only.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Precision(f64);

impl Precision {
    /// Unquantized ratings.
    pub const CONTINUOUS: Self = Self(0.0);
    /// Half-star steps.
    pub const HALF: Self = Self(0.5);
    /// Whole-star steps.
    pub const WHOLE: Self = Self(1.0);

    /// Creates a precision, rejecting values outside `[0, 1]` and NaN.
    ///
    /// Nonzero values whose reciprocal overflows (subnormals) are rejected
    /// too; use `0` for continuous ratings.
    pub fn new(value: f64) -> Result<Self, PrecisionError> {
        let in_range = (0.0..=1.0).contains(&value);
        if in_range && (value == 0.0 || (1.0 / value).is_finite()) {
            Ok(Self(value))
        } else {
            Err(PrecisionError { value })
        }
    }

    /// The grain as a number.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` for [`Precision::CONTINUOUS`].
    #[must_use]
    pub fn is_continuous(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::WHOLE
    }
}

impl TryFrom<f64> for Precision {
    type Error = PrecisionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Turns a tap location into a rating value at `precision`.
///
/// - A spacer after star `i` is worth `i + 1`.
/// - With continuous precision, `Star { index, remainder }` is worth
///   `index + remainder`.
/// - Otherwise the remainder rounds *up* to the next precision boundary it
///   touches or crosses, capped at the end of the star: with `p = 0.25`, a
///   remainder of `0.3` is worth `0.5`, and a remainder of exactly `0.5` is
///   worth `0.75`.
#[must_use]
pub fn quantize(location: TapLocation, precision: Precision) -> f64 {
    match location {
        TapLocation::Spacer { index } => index as f64 + 1.0,
        TapLocation::Star { index, remainder } => {
            let p = precision.get();
            if p == 0.0 {
                return index as f64 + remainder;
            }
            let steps = (1.0 / p).floor() - 1.0;
            let step = (remainder / p).floor().min(steps);
            index as f64 + (step + 1.0) * p
        }
    }
}
