//! Two-click capture of a path query's source and destination

use log::debug;
use serde::Serialize;

use crate::Coordinate;

/// Capture state for picking query endpoints on the map.
///
/// `enable` arms the capture, the next click sets the source and the one after
/// sets the destination. Coordinates are kept raw; they are keyed only when the
/// query runs against a compiled graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Idle,
    AwaitingSource,
    AwaitingDestination {
        source: Coordinate,
    },
    Ready {
        source: Coordinate,
        destination: Coordinate,
    },
}

impl Selection {
    /// Arms the capture. A finished selection starts over.
    pub fn enable(&mut self) {
        if matches!(self, Selection::Idle | Selection::Ready { .. }) {
            *self = Selection::AwaitingSource;
            debug!("Selection armed, awaiting source");
        }
    }

    /// Feeds a map click; returns whether it was captured
    pub fn click(&mut self, coordinate: Coordinate) -> bool {
        match *self {
            Selection::AwaitingSource => {
                *self = Selection::AwaitingDestination { source: coordinate };
                debug!("Selected source {coordinate}");
                true
            }
            Selection::AwaitingDestination { source } => {
                *self = Selection::Ready {
                    source,
                    destination: coordinate,
                };
                debug!("Selected destination {coordinate}");
                true
            }
            Selection::Idle | Selection::Ready { .. } => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Selection::Idle;
    }

    /// `(source, destination)` once both are captured
    pub fn endpoints(&self) -> Option<(Coordinate, Coordinate)> {
        match *self {
            Selection::Ready {
                source,
                destination,
            } => Some((source, destination)),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Selection::Ready { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lng: f64, lat: f64) -> Coordinate {
        Coordinate::new(lng, lat).unwrap()
    }

    #[test]
    fn clicks_are_ignored_until_enabled() {
        let mut selection = Selection::default();
        assert!(!selection.click(coord(1.0, 1.0)));
        assert_eq!(selection, Selection::Idle);
    }

    #[test]
    fn captures_source_then_destination() {
        let mut selection = Selection::default();
        selection.enable();
        assert!(selection.click(coord(0.0, 0.0)));
        assert!(!selection.is_ready());
        assert!(selection.click(coord(1.0, 1.0)));

        assert_eq!(selection.endpoints(), Some((coord(0.0, 0.0), coord(1.0, 1.0))));
        // further clicks do not overwrite a finished selection
        assert!(!selection.click(coord(2.0, 2.0)));
        assert_eq!(selection.endpoints(), Some((coord(0.0, 0.0), coord(1.0, 1.0))));
    }

    #[test]
    fn enable_mid_capture_keeps_progress() {
        let mut selection = Selection::default();
        selection.enable();
        selection.click(coord(0.0, 0.0));
        selection.enable();
        assert_eq!(
            selection,
            Selection::AwaitingDestination {
                source: coord(0.0, 0.0)
            }
        );
    }

    #[test]
    fn enable_after_ready_starts_over() {
        let mut selection = Selection::Ready {
            source: coord(0.0, 0.0),
            destination: coord(1.0, 1.0),
        };
        selection.enable();
        assert_eq!(selection, Selection::AwaitingSource);

        selection.reset();
        assert_eq!(selection, Selection::Idle);
        assert_eq!(selection.endpoints(), None);
    }

    #[test]
    fn serializes_with_state_tag() {
        let selection = Selection::AwaitingDestination {
            source: coord(1.0, 2.0),
        };
        let value = serde_json::to_value(selection).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "state": "awaiting_destination", "source": [1.0, 2.0] })
        );
    }
}
