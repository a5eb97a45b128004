//! Data handed to the map renderer. Nothing here draws.

mod to_geojson;

use serde::{Deserialize, Serialize};

pub use to_geojson::routes_to_geojson;

/// Line styling attached to rendered features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub color: String,
    pub width: f64,
}

impl RenderStyle {
    /// Committed route polylines
    pub fn route() -> Self {
        Self {
            color: "#FF0000".to_string(),
            width: 4.0,
        }
    }

    /// A found shortest path
    pub fn path() -> Self {
        Self {
            color: "#0074D9".to_string(),
            width: 6.0,
        }
    }
}
