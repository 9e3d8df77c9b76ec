//! Viewport fitting for the observation map.

use ecowatch_observation_models::Observation;
use ecowatch_spatial_models::{BoundingBox, MapSettings, Viewport};
use geo::{BoundingRect as _, MultiPoint, Point};

use crate::geolocated;

/// Computes the viewport for `observations` with the default
/// [`MapSettings`].
#[must_use]
pub fn compute_viewport(observations: &[Observation]) -> Viewport {
    compute_viewport_with(observations, &MapSettings::default())
}

/// Computes the viewport that best fits the geolocated `observations`.
///
/// * none geolocated: the world view at `settings.default_center`
/// * exactly one: a close-up centered on it at `settings.point_zoom`
/// * several: their bounding box, padded by `settings.padding_px`
#[must_use]
pub fn compute_viewport_with(observations: &[Observation], settings: &MapSettings) -> Viewport {
    let positions: Vec<_> = geolocated(observations).map(|(_, pos)| pos).collect();

    match positions.as_slice() {
        [] => world(settings),
        [only] => Viewport::Point {
            center: *only,
            zoom: settings.point_zoom,
        },
        _ => {
            let points: MultiPoint<f64> = positions
                .iter()
                .map(|pos| Point::new(pos.lng, pos.lat))
                .collect();

            let Some(rect) = points.bounding_rect() else {
                log::warn!("No bounding rect for {} positions", positions.len());
                return world(settings);
            };

            Viewport::Bounds {
                bounds: BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y),
                padding_px: settings.padding_px,
            }
        }
    }
}

const fn world(settings: &MapSettings) -> Viewport {
    Viewport::World {
        center: settings.default_center,
        zoom: settings.default_zoom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecowatch_spatial_models::LatLng;

    fn obs(id: &str, lat: Option<f64>, lng: Option<f64>) -> Observation {
        Observation {
            id: id.to_string(),
            category: None,
            severity: None,
            status: None,
            created_at: None,
            latitude: lat,
            longitude: lng,
            title: String::new(),
            description: None,
            location_name: None,
            measurement_value: None,
            measurement_unit: None,
        }
    }

    #[test]
    fn empty_is_world_view() {
        assert_eq!(
            compute_viewport(&[]),
            Viewport::World {
                center: LatLng::new(20.0, 0.0),
                zoom: 2,
            }
        );
    }

    #[test]
    fn only_unlocated_is_world_view() {
        let observations = vec![obs("a", None, None), obs("b", Some(5.0), None)];
        assert!(matches!(
            compute_viewport(&observations),
            Viewport::World { zoom: 2, .. }
        ));
    }

    #[test]
    fn single_point_is_close_up() {
        let observations = vec![obs("a", Some(10.0), Some(20.0)), obs("b", None, Some(3.0))];
        assert_eq!(
            compute_viewport(&observations),
            Viewport::Point {
                center: LatLng::new(10.0, 20.0),
                zoom: 11,
            }
        );
    }

    #[test]
    fn several_points_fit_padded_bounds() {
        let observations = vec![
            obs("a", Some(0.0), Some(0.0)),
            obs("b", Some(10.0), Some(10.0)),
            obs("c", Some(f64::NAN), Some(50.0)),
        ];

        let Viewport::Bounds { bounds, padding_px } = compute_viewport(&observations) else {
            panic!("expected bounds viewport");
        };
        assert_eq!(bounds, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(padding_px, 40);
        assert!(bounds.contains(LatLng::new(0.0, 0.0)));
        assert!(bounds.contains(LatLng::new(10.0, 10.0)));
    }

    #[test]
    fn bounds_use_min_and_max_per_axis() {
        let observations = vec![
            obs("a", Some(45.0), Some(-93.0)),
            obs("b", Some(44.5), Some(-92.0)),
            obs("c", Some(46.0), Some(-94.5)),
        ];

        let Viewport::Bounds { bounds, .. } = compute_viewport(&observations) else {
            panic!("expected bounds viewport");
        };
        assert_eq!(bounds, BoundingBox::new(-94.5, 44.5, -92.0, 46.0));
    }

    #[test]
    fn custom_settings_apply() {
        let settings = MapSettings {
            default_center: LatLng::new(0.0, 0.0),
            default_zoom: 3,
            point_zoom: 14,
            padding_px: 16,
        };
        assert_eq!(
            compute_viewport_with(&[obs("a", Some(1.0), Some(2.0))], &settings),
            Viewport::Point {
                center: LatLng::new(1.0, 2.0),
                zoom: 14,
            }
        );
    }

    #[test]
    fn is_idempotent() {
        let observations = vec![obs("a", Some(1.0), Some(2.0)), obs("b", Some(3.0), Some(4.0))];
        assert_eq!(compute_viewport(&observations), compute_viewport(&observations));
    }
}
