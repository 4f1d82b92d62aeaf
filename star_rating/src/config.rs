// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated widget configuration.

use core::fmt;

use star_rating_interaction::{Precision, PrecisionError};
use star_rating_style::{RatingStyle, StyleStack};

use crate::rating::Rating;

/// Why a [`RatingBuilder`] refused to build.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The explicit spacing was below zero.
    NegativeSpacing(f64),
    /// The explicit spacing was NaN or infinite.
    NonFiniteSpacing(f64),
    /// The initial value was NaN or infinite.
    NonFiniteValue(f64),
    /// The precision was rejected by [`Precision::new`].
    Precision(PrecisionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSpacing(spacing) => {
                write!(f, "spacing {spacing} is negative")
            }
            Self::NonFiniteSpacing(spacing) => {
                write!(f, "spacing {spacing} is not a finite number")
            }
            Self::NonFiniteValue(value) => {
                write!(f, "initial value {value} is not a finite number")
            }
            Self::Precision(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Precision(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PrecisionError> for ConfigError {
    fn from(err: PrecisionError) -> Self {
        Self::Precision(err)
    }
}

/// The immutable part of a widget's configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RatingConfig {
    count: usize,
    spacing: Option<f64>,
    precision: Precision,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            count: 5,
            spacing: None,
            precision: Precision::WHOLE,
        }
    }
}

impl RatingConfig {
    /// Number of stars.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Explicit gap between stars, or `None` to fill the measured row.
    #[must_use]
    pub fn spacing(&self) -> Option<f64> {
        self.spacing
    }

    /// Quantization grain.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }
}

/// Builder for [`Rating`].
///
/// Defaults: 5 stars, spacing derived from the measured row width, whole-star
/// precision, value `0`, and the default [`StyleStack`].
///
/// ```rust
/// use star_rating::{ConfigError, Rating};
///
/// let rating = Rating::builder()
///     .count(10)
///     .spacing(4.0)
///     .precision(0.5)
///     .value(6.5)
///     .build()
///     .unwrap();
/// assert_eq!(rating.config().count(), 10);
/// assert_eq!(rating.value(), 6.5);
///
/// let err = Rating::builder().spacing(-1.0).build().unwrap_err();
/// assert_eq!(err, ConfigError::NegativeSpacing(-1.0));
/// ```
#[derive(Clone, Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct RatingBuilder {
    count: usize,
    spacing: Option<f64>,
    precision: f64,
    value: f64,
    styles: StyleStack,
}

impl Default for RatingBuilder {
    fn default() -> Self {
        let config = RatingConfig::default();
        Self {
            count: config.count,
            spacing: config.spacing,
            precision: config.precision.get(),
            value: 0.0,
            styles: StyleStack::new(),
        }
    }
}

impl RatingBuilder {
    /// Number of stars.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Fixed gap between stars.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Derive the gap from the measured row width instead.
    pub fn auto_spacing(mut self) -> Self {
        self.spacing = None;
        self
    }

    /// Quantization grain in `[0, 1]`; `0` keeps ratings continuous.
    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Initial rating.
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Appends a style on top of the stack.
    pub fn style(mut self, style: impl RatingStyle + 'static) -> Self {
        self.styles.push(style);
        self
    }

    /// Replaces the whole style stack.
    pub fn styles(mut self, styles: StyleStack) -> Self {
        self.styles = styles;
        self
    }

    /// Validates the configuration and builds the widget.
    pub fn build(self) -> Result<Rating, ConfigError> {
        if let Some(spacing) = self.spacing {
            if !spacing.is_finite() {
                return Err(ConfigError::NonFiniteSpacing(spacing));
            }
            if spacing < 0.0 {
                return Err(ConfigError::NegativeSpacing(spacing));
            }
        }
        if !self.value.is_finite() {
            return Err(ConfigError::NonFiniteValue(self.value));
        }
        let config = RatingConfig {
            count: self.count,
            spacing: self.spacing,
            precision: Precision::new(self.precision)?,
        };
        Ok(Rating::from_parts(config, self.value, self.styles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn defaults() {
        let rating = RatingBuilder::default().build().unwrap();
        let config = rating.config();
        assert_eq!(config.count(), 5);
        assert_eq!(config.spacing(), None);
        assert_eq!(config.precision(), Precision::WHOLE);
        assert_eq!(rating.value(), 0.0);
        assert_eq!(rating.styles().len(), 1);
    }

    #[test]
    fn auto_spacing_clears_explicit_spacing() {
        let rating = RatingBuilder::default()
            .spacing(8.0)
            .auto_spacing()
            .build()
            .unwrap();
        assert_eq!(rating.config().spacing(), None);
    }

    #[test]
    fn rejects_bad_spacing() {
        assert_eq!(
            RatingBuilder::default().spacing(-0.5).build().unwrap_err(),
            ConfigError::NegativeSpacing(-0.5)
        );
        assert!(matches!(
            RatingBuilder::default().spacing(f64::NAN).build(),
            Err(ConfigError::NonFiniteSpacing(s)) if s.is_nan()
        ));
        assert_eq!(
            RatingBuilder::default()
                .spacing(f64::INFINITY)
                .build()
                .unwrap_err(),
            ConfigError::NonFiniteSpacing(f64::INFINITY)
        );
        // Zero is fine.
        assert!(RatingBuilder::default().spacing(0.0).build().is_ok());
    }

    #[test]
    fn rejects_bad_precision() {
        let err = RatingBuilder::default().precision(1.5).build().unwrap_err();
        assert_eq!(err, ConfigError::Precision(PrecisionError { value: 1.5 }));
        assert_eq!(err.to_string(), "precision 1.5 is outside [0, 1]");
        assert!(core::error::Error::source(&err).is_some());

        assert!(matches!(
            RatingBuilder::default().precision(f64::NAN).build(),
            Err(ConfigError::Precision(_))
        ));
        assert!(RatingBuilder::default().precision(-0.1).build().is_err());
        assert!(RatingBuilder::default().precision(1e-320).build().is_err());
    }

    #[test]
    fn rejects_non_finite_value() {
        assert_eq!(
            RatingBuilder::default()
                .value(f64::NEG_INFINITY)
                .build()
                .unwrap_err(),
            ConfigError::NonFiniteValue(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::NegativeSpacing(-2.0).to_string(),
            "spacing -2 is negative"
        );
        assert_eq!(
            ConfigError::NonFiniteSpacing(f64::INFINITY).to_string(),
            "spacing inf is not a finite number"
        );
    }

    #[test]
    fn zero_count_is_allowed() {
        let rating = RatingBuilder::default().count(0).build().unwrap();
        assert_eq!(rating.config().count(), 0);
    }
}
