use std::collections::BTreeMap;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::shape_color;
use crate::data::filter::{DateBucket, DurationBucket};
use crate::scene::bodies::BODY_NAMES;
use crate::scene::camera::ViewMode;
use crate::state::{ActiveView, AppState, Basemap};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open sightings CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.view == ActiveView::Orrery, "Solar System")
            .clicked()
        {
            state.view = ActiveView::Orrery;
        }
        if ui
            .selectable_label(state.view == ActiveView::Map, "Sightings Map")
            .clicked()
        {
            state.view = ActiveView::Map;
        }

        ui.separator();

        match state.view {
            ActiveView::Orrery => {
                ui.label(state.camera.mode.title());
            }
            ActiveView::Map => {
                if let Some(ds) = &state.dataset {
                    ui.label(format!(
                        "Showing {} of {} sightings",
                        state.visible_indices.len(),
                        ds.len()
                    ));
                }
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel
// ---------------------------------------------------------------------------

/// Render the left panel: camera legend for the orrery, filter controls for
/// the map.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, t: f64) {
    match state.view {
        ActiveView::Orrery => orrery_panel(ui, state, t),
        ActiveView::Map => map_panel(ui, state),
    }
}

fn orrery_panel(ui: &mut Ui, state: &mut AppState, t: f64) {
    ui.heading("Views");
    ui.separator();

    for (i, name) in BODY_NAMES.iter().enumerate() {
        let mode = ViewMode::Body(i);
        let selected = state.camera.mode == mode;
        let label = format!("{} – {}", i + 1, name);
        if ui.selectable_label(selected, label).clicked() {
            state.camera.set_mode(mode, t);
        }
    }

    if ui
        .selectable_label(state.camera.mode == ViewMode::Ship, "V – Ship")
        .clicked()
    {
        state.camera.set_mode(ViewMode::Ship, t);
    }
    if ui
        .selectable_label(state.camera.mode == ViewMode::General, "0 – General view")
        .clicked()
    {
        state.camera.set_mode(ViewMode::General, t);
    }

    ui.separator();
    ui.label(RichText::new("Drag to orbit, scroll to zoom.").weak());
    ui.label(RichText::new("The ship view steers itself.").weak());
}

fn map_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Date range");
    for bucket in DateBucket::ALL {
        if ui
            .selectable_label(state.filters.date == bucket, bucket.label())
            .clicked()
        {
            state.set_date_filter(bucket);
        }
    }

    ui.add_space(8.0);
    ui.strong("Duration");
    for bucket in DurationBucket::ALL {
        if ui
            .selectable_label(state.filters.duration == bucket, bucket.label())
            .clicked()
        {
            state.set_duration_filter(bucket);
        }
    }

    ui.separator();

    let toggle_text = match state.basemap {
        Basemap::Day => "Switch to night map",
        Basemap::Night => "Switch to day map",
    };
    if ui.button(toggle_text).clicked() {
        state.basemap = state.basemap.toggled();
    }

    ui.add_space(8.0);
    ui.strong("Marker size");
    ui.add(egui::Slider::new(&mut state.marker_scale, 0.1..=3.0).text("×"));

    if let Some(ds) = &state.dataset {
        ui.separator();
        ui.strong("Shapes");

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for s in &ds.sightings {
            *counts.entry(s.shape.as_str()).or_default() += 1;
        }
        let mut ordered: Vec<(&str, usize)> = counts.into_iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        for (shape, count) in ordered.into_iter().take(12) {
            ui.label(
                RichText::new(format!("{shape}  ({count})")).color(shape_color(shape)),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sighting data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_sightings(&path);
        state.view = ActiveView::Map;
    }
}
