use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::{Value as JsonValue, json};

use super::RenderStyle;
use crate::{Coordinate, Error, routing::ShortestPath, store::Route};

fn line_feature(coordinates: &[Coordinate], properties: JsonValue) -> Result<Feature, Error> {
    let line: LineString<f64> = coordinates.iter().map(|&c| Coord::from(c)).collect();

    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new((&line).into()),
        "properties": properties,
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

impl Route {
    /// Converts the route to a `GeoJSON` LineString `Feature`
    pub fn to_feature(&self, style: &RenderStyle) -> Result<Feature, Error> {
        line_feature(
            self.coordinates(),
            json!({
                "kind": "route",
                "route_id": self.id(),
                "color": style.color,
                "width": style.width,
            }),
        )
    }
}

impl ShortestPath {
    /// Converts the path to a `GeoJSON` LineString `Feature`
    pub fn to_feature(&self, style: &RenderStyle) -> Result<Feature, Error> {
        line_feature(
            &self.coordinates(),
            json!({
                "kind": "path",
                "total_weight": self.total_weight(),
                "color": style.color,
                "width": style.width,
            }),
        )
    }

    pub fn to_geojson_string(&self, style: &RenderStyle) -> Result<String, Error> {
        serde_json::to_string(&self.to_feature(style)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

/// Converts committed routes to a `GeoJSON` `FeatureCollection`, one feature per route
pub fn routes_to_geojson(
    routes: &[Route],
    style: &RenderStyle,
) -> Result<FeatureCollection, Error> {
    let features = routes
        .iter()
        .map(|route| route.to_feature(style))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}
