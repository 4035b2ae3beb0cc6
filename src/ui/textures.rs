use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;

use crate::state::Basemap;

pub const DAY_MAP_PATH: &str = "assets/earth_day.jpg";
pub const NIGHT_MAP_PATH: &str = "assets/earth_night.jpg";

// ---------------------------------------------------------------------------
// Basemap textures
// ---------------------------------------------------------------------------

/// Uploaded basemap textures. Either may be absent when its file is missing
/// or undecodable; the map view then falls back to a graticule.
pub struct MapTextures {
    pub day: Option<egui::TextureHandle>,
    pub night: Option<egui::TextureHandle>,
}

impl MapTextures {
    pub fn get(&self, basemap: Basemap) -> Option<&egui::TextureHandle> {
        match basemap {
            Basemap::Day => self.day.as_ref(),
            Basemap::Night => self.night.as_ref(),
        }
    }
}

/// One-shot load of both basemaps. Failures are logged and leave the slot
/// empty; there is no retry.
pub fn load_basemaps(ctx: &egui::Context) -> MapTextures {
    let mut load = |name: &str, path: &str| match load_texture(ctx, name, Path::new(path)) {
        Ok(tex) => Some(tex),
        Err(e) => {
            log::warn!("basemap {path} unavailable: {e:#}");
            None
        }
    };

    MapTextures {
        day: load("basemap_day", DAY_MAP_PATH),
        night: load("basemap_night", NIGHT_MAP_PATH),
    }
}

fn load_texture(ctx: &egui::Context, name: &str, path: &Path) -> Result<egui::TextureHandle> {
    let img = image::open(path)
        .with_context(|| format!("decoding {}", path.display()))?
        .into_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    Ok(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR))
}
