//! In-memory R-tree over geolocated observations.
//!
//! Built once per observation set and queried as the map pans, so the
//! presentation layer can list only what is on screen.

use ecowatch_observation_models::Observation;
use ecowatch_spatial_models::BoundingBox;
use rstar::{AABB, RTree, RTreeObject};

use crate::geolocated;

/// An observation position stored in the R-tree.
struct IndexedObservation {
    id: String,
    /// `[lng, lat]`, x before y.
    point: [f64; 2],
}

impl RTreeObject for IndexedObservation {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

/// Spatial index of observation positions.
pub struct ObservationIndex {
    tree: RTree<IndexedObservation>,
}

impl ObservationIndex {
    /// Bulk-loads every geolocated observation. Observations without both
    /// coordinates are left out.
    #[must_use]
    pub fn build(observations: &[Observation]) -> Self {
        let entries: Vec<IndexedObservation> = geolocated(observations)
            .map(|(obs, pos)| IndexedObservation {
                id: obs.id.clone(),
                point: [pos.lng, pos.lat],
            })
            .collect();

        log::debug!(
            "Indexed {} of {} observations",
            entries.len(),
            observations.len()
        );

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Number of indexed observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Ids of observations inside `bbox` (edges included), sorted.
    ///
    /// A box with `west > east` crosses the antimeridian and is searched as
    /// two envelopes, matching [`BoundingBox::contains`].
    #[must_use]
    pub fn within(&self, bbox: &BoundingBox) -> Vec<&str> {
        let mut ids: Vec<&str> = bbox
            .longitude_spans()
            .into_iter()
            .flat_map(|(west, east)| {
                let envelope = AABB::from_corners([west, bbox.south], [east, bbox.north]);
                self.tree
                    .locate_in_envelope(&envelope)
                    .map(|entry| entry.id.as_str())
                    .collect::<Vec<_>>()
            })
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
