//! Category breakdown of observations.
//!
//! Observations whose category is missing or outside the closed
//! [`ObservationCategory`] set are ignored entirely. There is no "other"
//! slice: the recognized categories come from domain configuration, so
//! anything else is noise rather than a category of its own.

use std::collections::BTreeMap;

use ecowatch_analytics_models::CategorySlice;
use ecowatch_observation_models::{Observation, ObservationCategory};

/// Counts observations per recognized category and computes each slice's
/// share of the counted total.
///
/// Zero-count categories are omitted, and proportions are relative to the
/// sum of the returned slices. Returns an empty vec when nothing is
/// counted. Slices follow [`ObservationCategory::all`] order.
#[must_use]
pub fn distribution(observations: &[Observation]) -> Vec<CategorySlice> {
    let mut counts: BTreeMap<ObservationCategory, u64> = BTreeMap::new();
    for category in observations.iter().filter_map(|obs| obs.category) {
        *counts.entry(category).or_insert(0) += 1;
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    ObservationCategory::all()
        .iter()
        .filter_map(|category| {
            let count = counts.get(category).copied().filter(|c| *c > 0)?;
            #[allow(clippy::cast_precision_loss)]
            let proportion = count as f64 / total as f64;
            Some(CategorySlice {
                category: *category,
                label: category.label().to_string(),
                color: category.color().to_string(),
                count,
                proportion,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(category: Option<ObservationCategory>) -> Observation {
        Observation {
            id: "o".to_string(),
            category,
            severity: None,
            status: None,
            created_at: None,
            latitude: None,
            longitude: None,
            title: String::new(),
            description: None,
            location_name: None,
            measurement_value: None,
            measurement_unit: None,
        }
    }

    #[test]
    fn empty_input_yields_no_slices() {
        assert!(distribution(&[]).is_empty());
    }

    #[test]
    fn only_unrecognized_yields_no_slices() {
        assert!(distribution(&[obs(None), obs(None)]).is_empty());
    }

    #[test]
    fn single_category_is_whole() {
        let observations = vec![obs(Some(ObservationCategory::NoiseLevel)); 4];
        let slices = distribution(&observations);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].category, ObservationCategory::NoiseLevel);
        assert_eq!(slices[0].count, 4);
        assert!((slices[0].proportion - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn proportions_ignore_unrecognized_and_zero_categories() {
        let observations = vec![
            obs(Some(ObservationCategory::AirQuality)),
            obs(Some(ObservationCategory::AirQuality)),
            obs(Some(ObservationCategory::AirQuality)),
            obs(Some(ObservationCategory::Biodiversity)),
            obs(None),
            obs(None),
        ];

        let slices = distribution(&observations);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].category, ObservationCategory::AirQuality);
        assert!((slices[0].proportion - 0.75).abs() < f64::EPSILON);
        assert_eq!(slices[1].category, ObservationCategory::Biodiversity);
        assert!((slices[1].proportion - 0.25).abs() < f64::EPSILON);

        let counted: u64 = slices.iter().map(|s| s.count).sum();
        assert_eq!(counted, 4);
        assert!(slices.iter().all(|s| s.count > 0));
    }

    #[test]
    fn slices_carry_display_metadata() {
        let slices = distribution(&[obs(Some(ObservationCategory::WaterQuality))]);
        assert_eq!(slices[0].label, "Water Quality");
        assert_eq!(slices[0].color, ObservationCategory::WaterQuality.color());
    }
}
