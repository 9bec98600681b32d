//! Construction parameters for the Möbius strip.

use serde::{Deserialize, Serialize};

/// Shape constants of a strip: center-line radius `R`, strip width `w` and the
/// number of samples `n` taken per parameter axis.
///
/// Only the resolution is checked ([`super::MobiusStrip::new`] rejects `n < 2`);
/// radius and width pass through unchanged, including zero or negative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripParams {
    /// Radius of the center line (`R`).
    #[serde(alias = "R", alias = "radius")]
    pub major_radius: f64,
    /// Full width of the strip (`w`); `v` spans `[-w/2, w/2]`.
    #[serde(alias = "w")]
    pub width: f64,
    /// Grid samples per axis (`n`).
    #[serde(alias = "n")]
    pub resolution: usize,
}

impl StripParams {
    pub const DEFAULT_MAJOR_RADIUS: f64 = 5.0;
    pub const DEFAULT_WIDTH: f64 = 2.0;
    pub const DEFAULT_RESOLUTION: usize = 100;
    /// Resolution of the documented example run.
    pub const REFERENCE_RESOLUTION: usize = 300;

    #[must_use]
    pub const fn new(major_radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            major_radius,
            width,
            resolution,
        }
    }

    /// `R = 5, w = 2, n = 300`.
    #[must_use]
    pub const fn reference() -> Self {
        Self::new(
            Self::DEFAULT_MAJOR_RADIUS,
            Self::DEFAULT_WIDTH,
            Self::REFERENCE_RESOLUTION,
        )
    }

    #[must_use]
    pub const fn with_resolution(self, resolution: usize) -> Self {
        Self { resolution, ..self }
    }
}

impl Default for StripParams {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAJOR_RADIUS,
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_RESOLUTION,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::StripParams;
    use serde::Deserialize;
    use serde::de::value::{Error, MapDeserializer};

    #[test]
    fn defaults_match_documented_values() {
        let params = StripParams::default();
        assert_eq!(params.major_radius, 5.0);
        assert_eq!(params.width, 2.0);
        assert_eq!(params.resolution, 100);
        assert_eq!(StripParams::reference().resolution, 300);
    }

    #[test]
    fn with_resolution_keeps_shape() {
        let params = StripParams::new(3.0, 0.5, 10).with_resolution(40);
        assert_eq!(params, StripParams::new(3.0, 0.5, 40));
    }

    #[test]
    fn deserializes_short_keys_and_fills_defaults() {
        let pairs = [("R", 3_u64), ("n", 40_u64)];
        let deserializer = MapDeserializer::<_, Error>::new(pairs.into_iter());
        let params = StripParams::deserialize(deserializer).unwrap();
        assert_eq!(params, StripParams::new(3.0, 2.0, 40));
    }
}
