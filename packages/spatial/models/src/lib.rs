#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map viewport and marker types.
//!
//! Coordinates are WGS84 degrees. [`LatLng`] serializes as a
//! `[lat, lng]` pair, the order web map libraries expect.

use serde::{Deserialize, Serialize};

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a position from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(pos: LatLng) -> Self {
        [pos.lat, pos.lng]
    }
}

/// A geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// South-west corner.
    #[must_use]
    pub const fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    /// North-east corner.
    #[must_use]
    pub const fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    /// Whether the box crosses the antimeridian, i.e. `west > east`.
    #[must_use]
    pub const fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Longitude spans covered by the box. A box crossing the antimeridian
    /// covers `west..=180` and `-180..=east`.
    #[must_use]
    pub fn longitude_spans(&self) -> Vec<(f64, f64)> {
        if self.crosses_antimeridian() {
            vec![(self.west, 180.0), (-180.0, self.east)]
        } else {
            vec![(self.west, self.east)]
        }
    }

    /// Whether `pos` lies inside or on the edge of the box.
    #[must_use]
    pub fn contains(&self, pos: LatLng) -> bool {
        (self.south..=self.north).contains(&pos.lat)
            && self
                .longitude_spans()
                .iter()
                .any(|(west, east)| (*west..=*east).contains(&pos.lng))
    }
}

/// What the map should show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Viewport {
    /// Nothing geolocated: the default world view.
    #[serde(rename_all = "camelCase")]
    World {
        /// Map center.
        center: LatLng,
        /// Zoom level.
        zoom: u8,
    },
    /// Exactly one geolocated observation: a close-up on it.
    #[serde(rename_all = "camelCase")]
    Point {
        /// Map center.
        center: LatLng,
        /// Zoom level.
        zoom: u8,
    },
    /// Several geolocated observations: fit the box, padded on every side.
    #[serde(rename_all = "camelCase")]
    Bounds {
        /// Smallest box covering every observation.
        bounds: BoundingBox,
        /// Screen padding applied on each side when fitting the box.
        padding_px: u32,
    },
}

/// Fixed map parameters used when computing a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Center of the world view.
    pub default_center: LatLng,
    /// Zoom of the world view.
    pub default_zoom: u8,
    /// Zoom used when centering on a single observation.
    pub point_zoom: u8,
    /// Padding around fitted bounds, in pixels.
    pub padding_px: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: LatLng::new(20.0, 0.0),
            default_zoom: 2,
            point_zoom: 11,
            padding_px: 40,
        }
    }
}

/// A styled map marker for one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    /// Observation id.
    pub id: String,
    /// Marker position.
    pub position: LatLng,
    /// Circle radius from the observation's severity.
    pub radius: u32,
    /// Fill color from the observation's category.
    pub color: String,
}
