//! Canonical node identity for coordinates.
//!
//! Two coordinates name the same graph node iff their canonical values are
//! bit-identical. The precision rule is carried by the compiled graph, so a
//! query is always keyed the same way as the routes it was compiled from.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Highest number of decimal digits that still survives an `f64` round trip
pub const MAX_DECIMALS: u8 = 15;

/// How coordinates are rounded before they become node keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Key on the full floating-point value
    #[default]
    Full,
    /// Round each component to this many decimal digits (clamped to [`MAX_DECIMALS`])
    Decimals(u8),
}

impl Precision {
    fn apply(self, value: f64) -> f64 {
        let rounded = match self {
            Precision::Full => value,
            Precision::Decimals(digits) => {
                let scale = 10f64.powi(i32::from(digits.min(MAX_DECIMALS)));
                (value * scale).round() / scale
            }
        };
        // -0.0 and 0.0 must share a key
        if rounded == 0.0 { 0.0 } else { rounded }
    }
}

/// Stable identity of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    lng_bits: u64,
    lat_bits: u64,
}

impl NodeKey {
    pub fn lng(&self) -> f64 {
        f64::from_bits(self.lng_bits)
    }

    pub fn lat(&self) -> f64 {
        f64::from_bits(self.lat_bits)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng(), self.lat())
    }
}

impl Serialize for NodeKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Maps coordinates to node keys under one [`Precision`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Canonicalizer {
    precision: Precision,
}

impl Canonicalizer {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn key(&self, coordinate: Coordinate) -> NodeKey {
        NodeKey {
            lng_bits: self.precision.apply(coordinate.lng()).to_bits(),
            lat_bits: self.precision.apply(coordinate.lat()).to_bits(),
        }
    }
}
