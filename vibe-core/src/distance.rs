//! Distances between the visitor and a candidate, measured in miles.
//!
//! Candidate records carry distances as display strings such as `"0.2mi"`.
//! [`Distance::parse_or_default`] reads the leading number of such a string,
//! ignoring whatever follows it, and falls back to [`DEFAULT_DISTANCE_MILES`]
//! when there is no usable number. Records use zero for "not known", so a
//! zero distance also falls back. Scoring therefore never fails on bad input.
//! [`str::parse`] is the strict counterpart for callers that want to reject
//! anything but `<number>[mi]`.
//!
//! # Examples
//! ```
//! use vibe_core::Distance;
//!
//! assert_eq!(Distance::parse_or_default("0.2mi").miles(), 0.2);
//! assert_eq!(Distance::parse_or_default("1.2mi away").miles(), 1.2);
//! assert_eq!(Distance::parse_or_default("0mi").miles(), 1.0);
//! assert_eq!(Distance::parse_or_default("unknown").miles(), 1.0);
//! assert!("unknown".parse::<Distance>().is_err());
//! ```

use std::{fmt, num::FpCategory, str::FromStr};

use thiserror::Error;

/// Distance assumed when a candidate's distance is missing or unparseable.
pub const DEFAULT_DISTANCE_MILES: f64 = 1.0;

const MILES_SUFFIX: &str = "mi";

/// A non-negative, finite distance in miles.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "DistanceRepr", into = "String")
)]
pub struct Distance {
    miles: f64,
}

/// Errors returned when parsing a [`Distance`] strictly.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistanceParseError {
    /// The text did not contain a number of miles.
    #[error("distance '{raw}' is not a number of miles")]
    NotANumber {
        /// Input as received.
        raw: String,
    },
    /// The value parsed but was infinite or NaN.
    #[error("distance must be finite")]
    NonFinite,
    /// The value parsed but was below zero.
    #[error("distance {miles} must not be negative")]
    Negative {
        /// Parsed value.
        miles: f64,
    },
    /// A candidate record gave a distance of zero, meaning "not known".
    #[error("distance is zero")]
    Zero,
}

impl Distance {
    /// Validate and construct a distance from a number of miles.
    ///
    /// # Errors
    /// Returns [`DistanceParseError::NonFinite`] for NaN or infinite values
    /// and [`DistanceParseError::Negative`] for values below zero.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::Distance;
    ///
    /// assert!(Distance::from_miles(0.5).is_ok());
    /// assert!(Distance::from_miles(-0.5).is_err());
    /// ```
    pub fn from_miles(miles: f64) -> Result<Self, DistanceParseError> {
        if !miles.is_finite() {
            return Err(DistanceParseError::NonFinite);
        }
        if miles < 0.0 {
            return Err(DistanceParseError::Negative { miles });
        }
        Ok(Self { miles })
    }

    /// Read a candidate record's distance string, falling back to
    /// [`DEFAULT_DISTANCE_MILES`] when the text is unusable.
    ///
    /// The first `"mi"` is dropped and the longest leading decimal number is
    /// taken, so `"0.5 miles"` reads as half a mile. Zero, negative and
    /// missing numbers fall back.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        let parsed = leading_number(&raw.replacen(MILES_SUFFIX, "", 1))
            .ok_or_else(|| DistanceParseError::NotANumber {
                raw: raw.to_owned(),
            })
            .and_then(Self::from_record_miles);
        Self::or_default(parsed)
    }

    /// Validate a number of miles taken from a candidate record, where zero
    /// stands for an unknown distance.
    fn from_record_miles(miles: f64) -> Result<Self, DistanceParseError> {
        if miles.classify() == FpCategory::Zero {
            return Err(DistanceParseError::Zero);
        }
        Self::from_miles(miles)
    }

    fn or_default(parsed: Result<Self, DistanceParseError>) -> Self {
        parsed.unwrap_or_else(|err| {
            log::warn!("{err}; assuming {DEFAULT_DISTANCE_MILES}mi");
            Self::default()
        })
    }

    /// Distance in miles.
    #[must_use]
    pub const fn miles(self) -> f64 {
        self.miles
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self {
            miles: DEFAULT_DISTANCE_MILES,
        }
    }
}

impl FromStr for Distance {
    type Err = DistanceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let number = lowered
            .strip_suffix(MILES_SUFFIX)
            .unwrap_or(lowered.as_str())
            .trim();
        let miles = number
            .parse::<f64>()
            .map_err(|_| DistanceParseError::NotANumber { raw: s.to_owned() })?;
        Self::from_miles(miles)
    }
}

/// Longest leading decimal number in `text`, after leading whitespace.
fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !matches!(c, '0'..='9' | '.' | '+' | '-' | 'e' | 'E'))
        .unwrap_or(trimmed.len());
    let numeric = trimmed.get(..end)?;
    (1..=numeric.len())
        .rev()
        .find_map(|cut| numeric.get(..cut)?.parse::<f64>().ok())
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{MILES_SUFFIX}", self.miles)
    }
}

impl From<Distance> for String {
    fn from(distance: Distance) -> Self {
        distance.to_string()
    }
}

/// Wire forms accepted when deserialising a [`Distance`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DistanceRepr {
    Miles(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl From<DistanceRepr> for Distance {
    fn from(repr: DistanceRepr) -> Self {
        match repr {
            DistanceRepr::Miles(miles) => Self::or_default(Self::from_record_miles(miles)),
            DistanceRepr::Text(text) => Self::parse_or_default(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.2mi", 0.2)]
    #[case("1.2mi", 1.2)]
    #[case(" 0.5 MI ", 0.5)]
    #[case("3", 3.0)]
    #[case("0mi", 0.0)]
    fn strict_parse_accepts_mile_strings(#[case] raw: &str, #[case] expected: f64) {
        let distance: Distance = raw.parse().expect("valid distance");
        assert_eq!(distance.miles(), expected);
    }

    #[rstest]
    #[case("0.2mi", 0.2)]
    #[case("0.5 miles", 0.5)]
    #[case("1.2mi away", 1.2)]
    #[case("  2mi", 2.0)]
    #[case("1.5.3mi", 1.5)]
    #[case("3e-1mi", 0.3)]
    #[case("4e", 4.0)]
    fn record_distances_read_the_leading_number(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(Distance::parse_or_default(raw).miles(), expected);
    }

    #[rstest]
    #[case("0mi")]
    #[case("0.0mi")]
    #[case("-0mi")]
    #[case("unknown")]
    #[case("about 2mi")]
    #[case("")]
    #[case("mi")]
    #[case("-0.4mi")]
    #[case("NaNmi")]
    #[case("infmi")]
    fn malformed_distances_fall_back_to_one_mile(#[case] raw: &str) {
        assert_eq!(Distance::parse_or_default(raw).miles(), DEFAULT_DISTANCE_MILES);
    }

    #[rstest]
    fn strict_parse_reports_negative_values() {
        let err = "-2mi".parse::<Distance>().expect_err("negative distance");
        assert!(matches!(err, DistanceParseError::Negative { .. }));
    }

    #[rstest]
    fn display_appends_suffix() {
        let distance = Distance::from_miles(0.2).expect("valid distance");
        assert_eq!(distance.to_string(), "0.2mi");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#""0.9mi""#, 0.9)]
    #[case("0.4", 0.4)]
    #[case(r#""far away""#, 1.0)]
    #[case("-3.0", 1.0)]
    #[case("0", 1.0)]
    #[case(r#""0mi""#, 1.0)]
    #[case(r#""0.5 miles""#, 0.5)]
    fn deserialises_leniently(#[case] json: &str, #[case] expected: f64) {
        let distance: Distance = serde_json::from_str(json).expect("decode distance");
        assert_eq!(distance.miles(), expected);
    }
}
