use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Points, Polygon};
use nalgebra::Vector3;

use crate::scene::bodies::{
    self, COMETS, COMET_TAIL_LENGTH, COMET_TAIL_POINTS, MOONS, PLANETS, SUN_COLOR, SUN_RADIUS,
};
use crate::scene::camera::OrbitCamera;
use crate::state::AppState;

/// Half-extent of the fully zoomed-out view, world units.
const BASE_EXTENT: f64 = 90.0;
const STAR_COUNT: usize = 800;
const CIRCLE_SEGMENTS: usize = 24;
const ORBIT_SEGMENTS: usize = 128;

const ORBIT_COLOR: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 160);
const RING_COLOR: Color32 = Color32::from_rgb(0xcc, 0xaa, 0x77);
const SHIP_COLOR: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
const COMET_COLOR: Color32 = Color32::from_rgb(0xaa, 0xdd, 0xff);

// ---------------------------------------------------------------------------
// Orrery view (central panel)
// ---------------------------------------------------------------------------

/// Render the animated solar system and feed mouse input back to the camera.
pub fn solar_view(ui: &mut Ui, state: &mut AppState, t: f64) {
    state.camera.tick(t);
    let cam = state.camera.active(t);
    let margin = cam.view_margin(BASE_EXTENT);

    let response = Plot::new("orrery")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-margin, -margin],
                [margin, margin],
            ));

            draw_stars(plot_ui, &cam);
            draw_orbit_guides(plot_ui, &cam);
            draw_bodies(plot_ui, &cam, t);
            draw_comet_tails(plot_ui, &cam, t);
        });

    // OrbitControls equivalent: drag to orbit, scroll to zoom. The ship
    // camera is locked to the ship's heading and ignores the mouse.
    if state.camera.manual_control() {
        let resp = &response.response;
        if resp.dragged() {
            let delta = resp.drag_delta();
            state
                .camera
                .controlled()
                .drag(delta.x as f64, -delta.y as f64);
        }
        if resp.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                state.camera.controlled().scroll_zoom(scroll as f64);
            }
        }
    }
}

fn stars() -> &'static [nalgebra::Vector3<f64>] {
    static STARS: std::sync::OnceLock<Vec<nalgebra::Vector3<f64>>> = std::sync::OnceLock::new();
    STARS.get_or_init(|| bodies::starfield(STAR_COUNT))
}

fn draw_stars(plot_ui: &mut egui_plot::PlotUi, cam: &OrbitCamera) {
    let rotation = cam.rotation();
    let pts: Vec<[f64; 2]> = stars()
        .iter()
        .map(|star| {
            // Stars live on a distant shell centred on the scene, not the
            // target, so panning the camera barely moves them.
            let v = rotation * *star;
            [v.x + cam.target.x, v.y + cam.target.y]
        })
        .collect();

    plot_ui.points(
        Points::new(PlotPoints::new(pts))
            .color(Color32::from_rgba_unmultiplied(255, 255, 255, 200))
            .radius(1.0),
    );
}

fn draw_orbit_guides(plot_ui: &mut egui_plot::PlotUi, cam: &OrbitCamera) {
    for spec in &PLANETS {
        let pts: Vec<[f64; 2]> = (0..=ORBIT_SEGMENTS)
            .map(|i| {
                let a = i as f64 / ORBIT_SEGMENTS as f64 * std::f64::consts::TAU;
                let world = Vector3::new(a.cos() * spec.dist, 0.0, a.sin() * spec.dist);
                cam.project(&world).0
            })
            .collect();
        plot_ui.line(
            Line::new(PlotPoints::new(pts))
                .color(ORBIT_COLOR)
                .width(0.6),
        );
    }
}

/// Everything with a solid disc, depth-sorted so near bodies paint over far
/// ones.
fn draw_bodies(plot_ui: &mut egui_plot::PlotUi, cam: &OrbitCamera, t: f64) {
    enum Extra {
        None,
        Ring { center: Vector3<f64>, radius: f64 },
        ShipHull,
    }

    struct Drawable {
        depth: f64,
        center: [f64; 2],
        radius: f64,
        color: Color32,
        extra: Extra,
    }

    let mut drawables: Vec<Drawable> = Vec::new();

    let (sun_xy, sun_depth) = cam.project(&Vector3::zeros());
    drawables.push(Drawable {
        depth: sun_depth,
        center: sun_xy,
        radius: SUN_RADIUS,
        color: SUN_COLOR,
        extra: Extra::None,
    });

    for spec in &PLANETS {
        let world = bodies::planet_position(spec, t);
        let (xy, depth) = cam.project(&world);
        drawables.push(Drawable {
            depth,
            center: xy,
            radius: spec.radius,
            color: spec.color,
            extra: if spec.has_ring {
                Extra::Ring {
                    center: world,
                    radius: spec.radius * 2.0,
                }
            } else {
                Extra::None
            },
        });
    }

    for spec in &MOONS {
        let world = bodies::moon_position(spec, t);
        let (xy, depth) = cam.project(&world);
        drawables.push(Drawable {
            depth,
            center: xy,
            radius: spec.radius,
            color: Color32::from_rgb(0xaa, 0xaa, 0xaa),
            extra: Extra::None,
        });
    }

    for spec in &COMETS {
        let world = bodies::comet_position(spec, t);
        let (xy, depth) = cam.project(&world);
        drawables.push(Drawable {
            depth,
            center: xy,
            radius: 0.3,
            color: COMET_COLOR,
            extra: Extra::None,
        });
    }

    let (ship_xy, ship_depth) = cam.project(&bodies::ship_position(t));
    drawables.push(Drawable {
        depth: ship_depth,
        center: ship_xy,
        radius: 0.9,
        color: SHIP_COLOR,
        extra: Extra::ShipHull,
    });

    // Back to front.
    drawables.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    for d in drawables {
        match d.extra {
            Extra::ShipHull => draw_ship(plot_ui, cam, t),
            _ => {
                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(circle_points(d.center, d.radius)))
                        .fill_color(d.color)
                        .stroke(Stroke::NONE),
                );
                if let Extra::Ring { center, radius } = d.extra {
                    draw_ring(plot_ui, cam, &center, radius);
                }
            }
        }
    }
}

/// A flat ring in the ecliptic around a planet, projected as a line loop.
fn draw_ring(plot_ui: &mut egui_plot::PlotUi, cam: &OrbitCamera, center: &Vector3<f64>, radius: f64) {
    let pts: Vec<[f64; 2]> = (0..=48)
        .map(|i| {
            let a = i as f64 / 48.0 * std::f64::consts::TAU;
            let world = center + Vector3::new(a.cos() * radius, 0.0, a.sin() * radius);
            cam.project(&world).0
        })
        .collect();
    plot_ui.line(Line::new(PlotPoints::new(pts)).color(RING_COLOR).width(1.2));
}

/// The patrol ship: a triangle pointed along its flight direction.
fn draw_ship(plot_ui: &mut egui_plot::PlotUi, cam: &OrbitCamera, t: f64) {
    let pos = bodies::ship_position(t);
    let heading = bodies::ship_heading(t);
    let dir = Vector3::new(heading.cos(), 0.0, heading.sin());
    let side = Vector3::new(-dir.z, 0.0, dir.x);

    let hull = [
        pos + dir * 1.6,
        pos - dir * 0.9 + side * 0.8,
        pos - dir * 0.9 - side * 0.8,
    ];
    let pts: Vec<[f64; 2]> = hull.iter().map(|p| cam.project(p).0).collect();
    plot_ui.polygon(
        Polygon::new(PlotPoints::new(pts))
            .fill_color(SHIP_COLOR)
            .stroke(Stroke::new(1.0, Color32::from_rgb(0x22, 0x44, 0xff))),
    );
}

/// Fading points trailing opposite the comet's motion.
fn draw_comet_tails(plot_ui: &mut egui_plot::PlotUi, cam: &OrbitCamera, t: f64) {
    for spec in &COMETS {
        let nucleus = bodies::comet_position(spec, t);
        let dir = bodies::comet_direction(spec, t);
        for i in 1..=COMET_TAIL_POINTS {
            let f = i as f64 / COMET_TAIL_POINTS as f64;
            let world = nucleus - dir * (f * COMET_TAIL_LENGTH);
            let (xy, _) = cam.project(&world);
            let alpha = ((1.0 - f) * 180.0) as u8;
            plot_ui.points(
                Points::new(PlotPoints::new(vec![xy]))
                    .color(Color32::from_rgba_unmultiplied(0x99, 0xcc, 0xff, alpha))
                    .radius((1.0 - f as f32) * 2.5),
            );
        }
    }
}

fn circle_points(center: [f64; 2], radius: f64) -> Vec<[f64; 2]> {
    (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let a = i as f64 / CIRCLE_SEGMENTS as f64 * std::f64::consts::TAU;
            [center[0] + a.cos() * radius, center[1] + a.sin() * radius]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_points_close_the_loop() {
        let pts = circle_points([1.0, 2.0], 3.0);
        assert_eq!(pts.len(), CIRCLE_SEGMENTS + 1);
        assert!((pts[0][0] - pts[CIRCLE_SEGMENTS][0]).abs() < 1e-9);
        assert!((pts[0][1] - pts[CIRCLE_SEGMENTS][1]).abs() < 1e-9);
    }
}
