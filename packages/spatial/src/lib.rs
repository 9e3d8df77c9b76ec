#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Map geometry for geolocated observations.
//!
//! Fits the map viewport to a set of observations ([`viewport`]), styles
//! their markers ([`markers`]) and answers "what is inside this box"
//! queries through an in-memory R-tree ([`index`]). Observations without
//! both coordinates never reach any of these.

pub mod index;
pub mod markers;
pub mod viewport;

pub use markers::{category_color, radius_for_severity};

use ecowatch_observation_models::Observation;
use ecowatch_spatial_models::LatLng;

/// Positions of every observation with both coordinates present and
/// finite, paired with the observation.
pub fn geolocated(observations: &[Observation]) -> impl Iterator<Item = (&Observation, LatLng)> {
    observations
        .iter()
        .filter_map(|obs| obs.coordinates().map(|(lat, lng)| (obs, LatLng::new(lat, lng))))
}
