use std::collections::BTreeMap;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Line, Plot, PlotImage, PlotPoint, PlotPoints, Points, Polygon};

use crate::color::shape_color;
use crate::data::filter::map_range;
use crate::state::AppState;
use crate::ui::textures::MapTextures;

/// Plot-space size of the basemap plane.
pub const MAP_WIDTH: f64 = 360.0;
pub const MAP_HEIGHT: f64 = 180.0;

/// Project a sighting onto the basemap plane.
pub fn project(latitude: f64, longitude: f64) -> [f64; 2] {
    [
        map_range(longitude, -180.0, 180.0, -MAP_WIDTH / 2.0, MAP_WIDTH / 2.0),
        map_range(latitude, -90.0, 90.0, -MAP_HEIGHT / 2.0, MAP_HEIGHT / 2.0),
    ]
}

// ---------------------------------------------------------------------------
// Map view (central panel)
// ---------------------------------------------------------------------------

/// Render the sightings map: basemap, pulsing markers, pan/zoom.
pub fn map_view(ui: &mut Ui, state: &AppState, textures: &MapTextures, time: f64) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a sightings CSV to populate the map  (File → Open…)");
            });
            return;
        }
    };

    // Marker pulse, shared by size and opacity.
    let pulse = (time * 4.0).sin();
    let radius = (state.marker_scale * (1.0 + 0.2 * pulse as f32) * 2.5).max(0.5);
    let opacity = 0.85 + 0.15 * pulse as f32;

    // Group visible sightings per shape so each cloud keeps one colour.
    let mut clouds: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        let s = &dataset.sightings[idx];
        clouds
            .entry(s.shape.as_str())
            .or_default()
            .push(project(s.latitude, s.longitude));
    }

    Plot::new("sighting_map")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(true)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            match textures.get(state.basemap) {
                Some(tex) => {
                    plot_ui.image(PlotImage::new(
                        tex,
                        PlotPoint::new(0.0, 0.0),
                        [MAP_WIDTH as f32, MAP_HEIGHT as f32],
                    ));
                }
                None => draw_graticule_fallback(plot_ui),
            }

            for (shape, points) in clouds {
                let color = shape_color(shape).gamma_multiply(opacity);
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .color(color)
                        .radius(radius)
                        .filled(true)
                        .name(shape),
                );
            }
        });
}

/// Plain ocean rectangle with a 30° graticule, drawn when no basemap texture
/// decoded at startup.
fn draw_graticule_fallback(plot_ui: &mut egui_plot::PlotUi) {
    let (hw, hh) = (MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0);

    plot_ui.polygon(
        Polygon::new(PlotPoints::new(vec![
            [-hw, -hh],
            [hw, -hh],
            [hw, hh],
            [-hw, hh],
        ]))
        .fill_color(Color32::from_rgb(12, 28, 56))
        .stroke(Stroke::new(1.0, Color32::from_rgb(70, 100, 140))),
    );

    let grid_color = Color32::from_rgba_unmultiplied(120, 140, 170, 60);
    let mut lon = -180.0;
    while lon <= 180.0 {
        let x = map_range(lon, -180.0, 180.0, -hw, hw);
        plot_ui.line(
            Line::new(PlotPoints::new(vec![[x, -hh], [x, hh]]))
                .color(grid_color)
                .width(0.5),
        );
        lon += 30.0;
    }
    let mut lat = -90.0;
    while lat <= 90.0 {
        let y = map_range(lat, -90.0, 90.0, -hh, hh);
        plot_ui.line(
            Line::new(PlotPoints::new(vec![[-hw, y], [hw, y]]))
                .color(grid_color)
                .width(0.5),
        );
        lat += 30.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_covers_the_map_plane() {
        assert_eq!(project(-90.0, -180.0), [-180.0, -90.0]);
        assert_eq!(project(90.0, 180.0), [180.0, 90.0]);
        assert_eq!(project(0.0, 0.0), [0.0, 0.0]);
    }

    #[test]
    fn northern_latitudes_sit_above_the_equator() {
        let [_, y] = project(40.0, -75.0);
        assert!(y > 0.0);
    }
}
