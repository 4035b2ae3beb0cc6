use std::path::Path;

use crate::data::filter::{filtered_indices, DateBucket, DurationBucket, FilterSelection};
use crate::data::loader;
use crate::data::model::SightingDataset;
use crate::scene::camera::SolarCamera;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which full-window view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Orrery,
    Map,
}

/// Which basemap texture the map draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Basemap {
    #[default]
    Day,
    Night,
}

impl Basemap {
    pub fn toggled(self) -> Basemap {
        match self {
            Basemap::Day => Basemap::Night,
            Basemap::Night => Basemap::Day,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub view: ActiveView,

    /// Loaded dataset (None until a file loads).
    pub dataset: Option<SightingDataset>,

    /// Active bucket per filter dimension.
    pub filters: FilterSelection,

    /// Indices of sightings passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Marker size multiplier from the slider.
    pub marker_scale: f32,

    pub basemap: Basemap,

    /// Orrery camera state.
    pub camera: SolarCamera,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ActiveView::default(),
            dataset: None,
            filters: FilterSelection::default(),
            visible_indices: Vec::new(),
            marker_scale: 0.8,
            basemap: Basemap::default(),
            camera: SolarCamera::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the filters.
    pub fn set_dataset(&mut self, dataset: SightingDataset) {
        self.filters = FilterSelection::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        }
    }

    pub fn set_date_filter(&mut self, bucket: DateBucket) {
        self.filters.date = bucket;
        self.refilter();
    }

    pub fn set_duration_filter(&mut self, bucket: DurationBucket) {
        self.filters.duration = bucket;
        self.refilter();
    }

    /// Load a CSV from disk into the state, reporting failures in the UI.
    pub fn load_sightings(&mut self, path: &Path) {
        match loader::load_csv(path) {
            Ok(dataset) => {
                log::info!("loaded {} sightings from {}", dataset.len(), path.display());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{parse_year, Sighting};

    fn dataset() -> SightingDataset {
        let rows = [("10/10/1949 20:30", 300.0), ("5/5/2010 10:00", 2000.0)];
        SightingDataset::new(
            rows.iter()
                .map(|(date, dur)| Sighting {
                    latitude: 0.0,
                    longitude: 0.0,
                    date: date.to_string(),
                    year: parse_year(date),
                    shape: "light".into(),
                    duration_secs: *dur,
                })
                .collect(),
        )
    }

    #[test]
    fn new_dataset_shows_everything() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn filter_setters_refilter() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_date_filter(DateBucket::Recent);
        assert_eq!(state.visible_indices, vec![1]);
        state.set_duration_filter(DurationBucket::Short);
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn basemap_toggle_round_trips() {
        assert_eq!(Basemap::Day.toggled(), Basemap::Night);
        assert_eq!(Basemap::Night.toggled(), Basemap::Day);
    }
}
