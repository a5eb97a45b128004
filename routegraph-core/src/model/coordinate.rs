use std::{fmt, str::FromStr};

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::{Error, Weight};

/// A finite (longitude, latitude) pair.
///
/// Serialized as a `[lng, lat]` position, the same shape GeoJSON uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    lng: f64,
    lat: f64,
}

impl Coordinate {
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinateFormat`] if either component is NaN or infinite.
    pub fn new(lng: f64, lat: f64) -> Result<Self, Error> {
        if !lng.is_finite() || !lat.is_finite() {
            return Err(Error::InvalidCoordinateFormat(format!(
                "components must be finite, got ({lng}, {lat})"
            )));
        }
        Ok(Self { lng, lat })
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Straight-line distance in raw degree space. Not a geodesic distance.
    pub fn planar_distance(&self, other: &Coordinate) -> Weight {
        (other.lng - self.lng).hypot(other.lat - self.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lng, self.lat)
    }
}

/// Parses the `"lng, lat"` text form held by the coordinate inputs.
impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(Error::InvalidCoordinateFormat(format!(
                "expected \"lng, lat\", got {s:?}"
            )));
        }

        let parse = |part: &str| {
            part.parse::<f64>().map_err(|e| {
                Error::InvalidCoordinateFormat(format!("{part:?} is not a number: {e}"))
            })
        };

        Coordinate::new(parse(parts[0])?, parse(parts[1])?)
    }
}

impl TryFrom<&[f64]> for Coordinate {
    type Error = Error;

    fn try_from(position: &[f64]) -> Result<Self, Self::Error> {
        match position {
            [lng, lat] => Coordinate::new(*lng, *lat),
            _ => Err(Error::InvalidCoordinateFormat(format!(
                "expected exactly 2 components, got {}",
                position.len()
            ))),
        }
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = Error;

    fn try_from([lng, lat]: [f64; 2]) -> Result<Self, Self::Error> {
        Coordinate::new(lng, lat)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.lng, coordinate.lat]
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Coord {
            x: coordinate.lng,
            y: coordinate.lat,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.lng, coordinate.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_with_spaces() {
        let coordinate: Coordinate = "-74.0090, 40.7128".parse().unwrap();
        assert_eq!(coordinate.lng(), -74.009);
        assert_eq!(coordinate.lat(), 40.7128);
    }

    #[test]
    fn rejects_wrong_component_count() {
        for text in ["1.0", "1.0, 2.0, 3.0", ""] {
            let err = text.parse::<Coordinate>().unwrap_err();
            assert!(matches!(err, Error::InvalidCoordinateFormat(_)), "{text:?}");
        }
    }

    #[test]
    fn rejects_non_numeric_and_non_finite() {
        assert!(matches!(
            "abc, 1".parse::<Coordinate>(),
            Err(Error::InvalidCoordinateFormat(_))
        ));
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(Error::InvalidCoordinateFormat(_))
        ));
        assert!(matches!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(Error::InvalidCoordinateFormat(_))
        ));
    }

    #[test]
    fn converts_from_position_slice() {
        let position = vec![1.5, -2.5];
        let coordinate = Coordinate::try_from(position.as_slice()).unwrap();
        assert_eq!(<[f64; 2]>::from(coordinate), [1.5, -2.5]);

        let short = vec![1.0];
        assert!(Coordinate::try_from(short.as_slice()).is_err());
    }

    #[test]
    fn deserializes_as_position() {
        let coordinate: Coordinate = serde_json::from_str("[3.0, 4.0]").unwrap();
        assert_eq!(coordinate, Coordinate::new(3.0, 4.0).unwrap());
        assert_eq!(serde_json::to_string(&coordinate).unwrap(), "[3.0,4.0]");
        assert!(serde_json::from_str::<Coordinate>("[1.0]").is_err());
    }

    #[test]
    fn planar_distance_is_euclidean_in_degrees() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(3.0, 4.0).unwrap();
        assert_eq!(a.planar_distance(&b), 5.0);
        assert_eq!(b.planar_distance(&a), 5.0);
        assert_eq!(a.planar_distance(&a), 0.0);
    }

    #[test]
    fn planar_distance_does_not_overflow_on_large_components() {
        let north = Coordinate::new(0.0, 1e200).unwrap();
        let south = Coordinate::new(0.0, -1e200).unwrap();
        assert_eq!(north.planar_distance(&south), 2e200);
    }
}
