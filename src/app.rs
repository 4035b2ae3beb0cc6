use std::path::Path;

use eframe::egui;

use crate::scene::bodies::TIME_SCALE;
use crate::scene::camera::ViewMode;
use crate::state::{ActiveView, AppState};
use crate::ui::textures::{load_basemaps, MapTextures};
use crate::ui::{map_view, panels, solar_view};

/// CSV auto-loaded at startup when present.
const DEFAULT_DATASET: &str = "assets/sightings.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SkywatchApp {
    pub state: AppState,
    /// Loaded on the first frame; needs a live egui context.
    textures: Option<MapTextures>,
}

impl SkywatchApp {
    /// One-shot startup work: upload basemaps, pull in the default dataset.
    fn ensure_assets(&mut self, ctx: &egui::Context) {
        if self.textures.is_some() {
            return;
        }
        self.textures = Some(load_basemaps(ctx));

        let default = Path::new(DEFAULT_DATASET);
        if default.exists() {
            self.state.load_sightings(default);
        } else {
            log::info!("no default dataset at {DEFAULT_DATASET}, starting empty");
        }
    }

    /// Camera shortcuts, active only while the orrery is showing.
    fn handle_keys(&mut self, ctx: &egui::Context, t: f64) {
        if self.state.view != ActiveView::Orrery {
            return;
        }

        const DIGITS: [egui::Key; 8] = [
            egui::Key::Num0,
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
            egui::Key::Num5,
            egui::Key::Num6,
            egui::Key::Num7,
        ];

        for (digit, key) in DIGITS.iter().enumerate() {
            if ctx.input(|i| i.key_pressed(*key)) {
                if let Some(mode) = ViewMode::from_digit(digit as u8) {
                    self.state.camera.set_mode(mode, t);
                }
            }
        }
        if ctx.input(|i| i.key_pressed(egui::Key::V)) {
            self.state.camera.set_mode(ViewMode::Ship, t);
        }
    }
}

impl eframe::App for SkywatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_assets(ctx);

        let time = ctx.input(|i| i.time);
        let t = time * TIME_SCALE;

        self.handle_keys(ctx, t);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: views / filters ----
        egui::SidePanel::left("side_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, t);
            });

        // ---- Central panel: the active view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            ActiveView::Orrery => solar_view::solar_view(ui, &mut self.state, t),
            ActiveView::Map => {
                if let Some(textures) = &self.textures {
                    map_view::map_view(ui, &self.state, textures, time);
                }
            }
        });

        // Both views animate continuously.
        ctx.request_repaint();
    }
}
