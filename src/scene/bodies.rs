use eframe::egui::Color32;
use nalgebra::{Matrix3, Vector3};

/// Global factor from wall-clock seconds to animation time.
pub const TIME_SCALE: f64 = 0.5;

/// Names shown in the view legend, indexed by camera slot (1–7 on the keys).
pub const BODY_NAMES: [&str; 7] = [
    "Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn",
];

pub const SUN_RADIUS: f64 = 3.5;
pub const SUN_COLOR: Color32 = Color32::from_rgb(0xff, 0xaa, 0x00);

pub const SHIP_DIST: f64 = 70.0;
pub const SHIP_HEIGHT: f64 = 5.0;
pub const SHIP_SPEED: f64 = 0.3;

// ---------------------------------------------------------------------------
// Static catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct PlanetSpec {
    pub radius: f64,
    pub dist: f64,
    pub speed: f64,
    pub color: Color32,
    pub has_ring: bool,
}

/// The six planets, innermost first. Slot `i` answers key `i + 2`.
pub const PLANETS: [PlanetSpec; 6] = [
    PlanetSpec { radius: 0.4, dist: 8.0, speed: 1.8, color: Color32::from_rgb(0x8b, 0x73, 0x55), has_ring: false },
    PlanetSpec { radius: 0.7, dist: 12.0, speed: 1.5, color: Color32::from_rgb(0xff, 0xc6, 0x49), has_ring: false },
    PlanetSpec { radius: 0.8, dist: 18.0, speed: 1.2, color: Color32::from_rgb(0x4a, 0x90, 0xe2), has_ring: false },
    PlanetSpec { radius: 0.6, dist: 25.0, speed: 1.0, color: Color32::from_rgb(0xe2, 0x7b, 0x58), has_ring: false },
    PlanetSpec { radius: 1.8, dist: 38.0, speed: 0.6, color: Color32::from_rgb(0xc8, 0x8b, 0x3a), has_ring: false },
    PlanetSpec { radius: 1.5, dist: 52.0, speed: 0.4, color: Color32::from_rgb(0xfa, 0xd5, 0xa5), has_ring: true },
];

#[derive(Debug, Clone, Copy)]
pub struct MoonSpec {
    /// Index into [`PLANETS`].
    pub planet: usize,
    pub radius: f64,
    pub dist: f64,
    pub speed: f64,
    /// Tilt of the orbital plane around the z axis, radians.
    pub tilt: f64,
}

pub const MOONS: [MoonSpec; 3] = [
    MoonSpec { planet: 2, radius: 0.2, dist: 1.5, speed: 2.5, tilt: 0.0 },
    MoonSpec { planet: 3, radius: 0.15, dist: 1.2, speed: 3.0, tilt: 0.0 },
    MoonSpec { planet: 4, radius: 0.25, dist: 3.0, speed: 1.8, tilt: std::f64::consts::FRAC_PI_4 },
];

#[derive(Debug, Clone, Copy)]
pub struct CometSpec {
    pub speed: f64,
    pub phase: f64,
    pub height: f64,
}

/// Fixed phase/speed constants stand in for the original's random spawns.
pub const COMETS: [CometSpec; 3] = [
    CometSpec { speed: 0.45, phase: 0.0, height: 12.0 },
    CometSpec { speed: 0.30, phase: 2.1, height: -8.0 },
    CometSpec { speed: 0.62, phase: 4.4, height: 3.0 },
];

pub const COMET_TAIL_POINTS: usize = 12;
pub const COMET_TAIL_LENGTH: f64 = 8.0;

// ---------------------------------------------------------------------------
// Per-frame positions
// ---------------------------------------------------------------------------

/// Planet position in heliocentric space at animation time `t`.
pub fn planet_position(spec: &PlanetSpec, t: f64) -> Vector3<f64> {
    Vector3::new(
        (t * spec.speed).cos() * spec.dist,
        0.0,
        (t * spec.speed).sin() * spec.dist,
    )
}

/// Moon position: a circular orbit in the tilted plane, about its planet.
pub fn moon_position(spec: &MoonSpec, t: f64) -> Vector3<f64> {
    let local = Vector3::new(
        (t * spec.speed).cos() * spec.dist,
        0.0,
        (t * spec.speed).sin() * spec.dist,
    );
    let tilted = rot_z(spec.tilt) * local;
    planet_position(&PLANETS[spec.planet], t) + tilted
}

/// Comet nucleus position. The orbit radius breathes with time, as in the
/// original demo.
pub fn comet_position(spec: &CometSpec, t: f64) -> Vector3<f64> {
    let angle = spec.phase + t * spec.speed;
    let dist = 80.0 + (t * 0.5).sin() * 20.0;
    Vector3::new(angle.cos() * dist, spec.height, angle.sin() * dist)
}

/// Unit direction of a comet's motion, used to trail the tail behind it.
pub fn comet_direction(spec: &CometSpec, t: f64) -> Vector3<f64> {
    let angle = spec.phase + t * spec.speed;
    Vector3::new(-angle.sin(), 0.0, angle.cos())
}

/// Ship position on its patrol circle.
pub fn ship_position(t: f64) -> Vector3<f64> {
    Vector3::new(
        (t * SHIP_SPEED).cos() * SHIP_DIST,
        SHIP_HEIGHT,
        (t * SHIP_SPEED).sin() * SHIP_DIST,
    )
}

/// Yaw of the ship's velocity in the xz plane (the direction it flies).
pub fn ship_heading(t: f64) -> f64 {
    let a = t * SHIP_SPEED;
    // velocity = (-sin a, 0, cos a) · const
    a.cos().atan2(-a.sin())
}

fn rot_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

// ---------------------------------------------------------------------------
// Starfield
// ---------------------------------------------------------------------------

/// Deterministic background stars on a distant shell.
pub fn starfield(count: usize) -> Vec<Vector3<f64>> {
    let mut state: u64 = 0x5eed_cafe_f00d_0001;
    let mut next = move || {
        // xorshift64*
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        (state.wrapping_mul(0x2545F4914F6CDD1D) >> 11) as f64 / (1u64 << 53) as f64
    };

    (0..count)
        .map(|_| {
            // Uniform direction via z/φ sampling, pushed out past the scene.
            let z = next() * 2.0 - 1.0;
            let phi = next() * std::f64::consts::TAU;
            let r = 150.0 + next() * 250.0;
            let xy = (1.0 - z * z).sqrt();
            Vector3::new(xy * phi.cos() * r, z * r, xy * phi.sin() * r)
        })
        .collect()
}
