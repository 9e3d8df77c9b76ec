//! Marker styling for observations on the map.

use ecowatch_observation_models::Observation;
use ecowatch_spatial_models::MapMarker;

use crate::geolocated;

pub use ecowatch_observation_models::{
    DEFAULT_CATEGORY_COLOR, DEFAULT_MARKER_RADIUS, category_color, radius_for_severity,
};

/// Builds one marker per geolocated observation, in input order.
///
/// Radius comes from severity and color from category; missing or
/// unrecognized values get the documented defaults.
#[must_use]
pub fn markers(observations: &[Observation]) -> Vec<MapMarker> {
    geolocated(observations)
        .map(|(obs, position)| MapMarker {
            id: obs.id.clone(),
            position,
            radius: radius_for_severity(obs.severity),
            color: category_color(obs.category).to_string(),
        })
        .collect()
}
