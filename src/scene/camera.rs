use nalgebra::{Matrix3, Vector3};

use super::bodies::{self, BODY_NAMES, PLANETS};

// ---------------------------------------------------------------------------
// View modes
// ---------------------------------------------------------------------------

/// Which camera is live. Matches the keyboard surface: `0` general,
/// `1`–`7` a body (0 = Sun), `V` the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    General,
    Ship,
    /// Index into the camera slots: 0 is the Sun, 1..=6 the planets.
    Body(usize),
}

impl ViewMode {
    /// Map a pressed digit (0–7) to a mode; out-of-range digits are ignored.
    pub fn from_digit(digit: u8) -> Option<ViewMode> {
        match digit {
            0 => Some(ViewMode::General),
            1..=7 => Some(ViewMode::Body(digit as usize - 1)),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        match self {
            ViewMode::General => "General view – 1-7: bodies | V: ship".to_string(),
            ViewMode::Ship => "Ship view – 0: general view".to_string(),
            ViewMode::Body(i) => {
                format!("{} view – camera travels with the body", BODY_NAMES[*i])
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Orbit camera
// ---------------------------------------------------------------------------

const PITCH_LIMIT: f64 = 1.55; // just shy of ±90°, so the view never flips

/// A target-orbiting camera: yaw/pitch around a target point, orthographic
/// projection after rotation into view space.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub yaw: f64,
    pub pitch: f64,
    /// Multiplies the visible extent; 1.0 frames the whole system.
    pub zoom: f64,
    pub target: Vector3<f64>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        OrbitCamera {
            yaw: 0.0,
            pitch: 0.7,
            zoom: 1.0,
            target: Vector3::zeros(),
        }
    }
}

impl OrbitCamera {
    /// Rotation taking world space into view space.
    pub fn rotation(&self) -> Matrix3<f64> {
        rot_x(self.pitch) * rot_y(self.yaw)
    }

    /// Project a world point: returns the screen plane coordinates and the
    /// view-space depth (positive depth is nearer the viewer).
    pub fn project(&self, p: &Vector3<f64>) -> ([f64; 2], f64) {
        let v = self.rotation() * (p - self.target);
        ([v.x, v.y], v.z)
    }

    /// Apply a mouse drag in screen units.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.yaw += dx * 0.01;
        self.pitch = (self.pitch + dy * 0.01).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply scroll-wheel zoom; positive delta zooms in.
    pub fn scroll_zoom(&mut self, delta: f64) {
        self.zoom = (self.zoom * (delta * 0.002).exp()).clamp(0.2, 60.0);
    }

    /// Half-extent of the visible region in world units.
    pub fn view_margin(&self, base_extent: f64) -> f64 {
        base_extent / self.zoom
    }
}

// ---------------------------------------------------------------------------
// Per-frame camera control
// ---------------------------------------------------------------------------

/// Camera state for the orrery view: the mode plus one orbit camera per
/// orbitable view, kept separate so switching modes restores the old framing.
#[derive(Debug, Clone)]
pub struct SolarCamera {
    pub mode: ViewMode,
    pub general: OrbitCamera,
    pub body: OrbitCamera,
}

impl Default for SolarCamera {
    fn default() -> Self {
        SolarCamera {
            mode: ViewMode::General,
            general: OrbitCamera::default(),
            body: OrbitCamera {
                zoom: 6.0,
                ..OrbitCamera::default()
            },
        }
    }
}

impl SolarCamera {
    /// Switch modes, repointing the tracking camera at its new target.
    pub fn set_mode(&mut self, mode: ViewMode, t: f64) {
        self.mode = mode;
        if let ViewMode::Body(i) = mode {
            self.body.target = body_target(i, t);
            // Frame the body: tighter for small planets, wide for the Sun.
            self.body.zoom = match i {
                0 => 4.0,
                i => (40.0 / (PLANETS[i - 1].radius * 8.0)).clamp(4.0, 30.0),
            };
        }
    }

    /// Advance the live camera to the current animation time. Tracking
    /// cameras follow their body; the ship camera locks behind the ship.
    pub fn tick(&mut self, t: f64) {
        match self.mode {
            ViewMode::General => {}
            ViewMode::Body(i) => {
                self.body.target = body_target(i, t);
            }
            ViewMode::Ship => {}
        }
    }

    /// The camera to render with this frame.
    pub fn active(&self, t: f64) -> OrbitCamera {
        match self.mode {
            ViewMode::General => self.general.clone(),
            ViewMode::Body(_) => self.body.clone(),
            ViewMode::Ship => OrbitCamera {
                // Look along the flight direction from just behind the ship.
                yaw: -bodies::ship_heading(t) + std::f64::consts::FRAC_PI_2,
                pitch: 0.25,
                zoom: 5.0,
                target: bodies::ship_position(t),
            },
        }
    }

    /// Whether mouse orbiting applies in the current mode.
    pub fn manual_control(&self) -> bool {
        !matches!(self.mode, ViewMode::Ship)
    }

    /// The orbit camera the mouse manipulates in the current mode.
    pub fn controlled(&mut self) -> &mut OrbitCamera {
        match self.mode {
            ViewMode::Body(_) => &mut self.body,
            _ => &mut self.general,
        }
    }
}

/// Camera target for slot `i`: the Sun pins the origin, planets travel.
fn body_target(i: usize, t: f64) -> Vector3<f64> {
    if i == 0 {
        Vector3::zeros()
    } else {
        bodies::planet_position(&PLANETS[i - 1], t)
    }
}

fn rot_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

fn rot_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_modes() {
        assert_eq!(ViewMode::from_digit(0), Some(ViewMode::General));
        assert_eq!(ViewMode::from_digit(1), Some(ViewMode::Body(0)));
        assert_eq!(ViewMode::from_digit(7), Some(ViewMode::Body(6)));
        assert_eq!(ViewMode::from_digit(8), None);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let cam = OrbitCamera {
            yaw: 1.3,
            pitch: -0.4,
            ..OrbitCamera::default()
        };
        let r = cam.rotation();
        let should_be_identity = r * r.transpose();
        assert!((should_be_identity - Matrix3::identity()).norm() < 1e-12);
    }

    #[test]
    fn target_projects_to_the_screen_center() {
        let cam = OrbitCamera {
            yaw: 0.9,
            pitch: 0.5,
            target: Vector3::new(10.0, -3.0, 4.0),
            ..OrbitCamera::default()
        };
        let target = cam.target;
        let ([x, y], _) = cam.project(&target);
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
    }

    #[test]
    fn drag_clamps_pitch() {
        let mut cam = OrbitCamera::default();
        cam.drag(0.0, 10_000.0);
        assert!(cam.pitch <= PITCH_LIMIT);
        cam.drag(0.0, -20_000.0);
        assert!(cam.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn zoom_stays_in_bounds() {
        let mut cam = OrbitCamera::default();
        cam.scroll_zoom(1e6);
        assert!(cam.zoom <= 60.0);
        cam.scroll_zoom(-1e7);
        assert!(cam.zoom >= 0.2);
    }

    #[test]
    fn tracking_camera_follows_its_planet() {
        let mut cam = SolarCamera::default();
        cam.set_mode(ViewMode::Body(3), 0.0);
        cam.tick(2.0);
        let expected = bodies::planet_position(&PLANETS[2], 2.0);
        assert!((cam.body.target - expected).norm() < 1e-12);
    }

    #[test]
    fn sun_view_pins_the_origin() {
        let mut cam = SolarCamera::default();
        cam.set_mode(ViewMode::Body(0), 5.0);
        cam.tick(9.0);
        assert_eq!(cam.body.target, Vector3::zeros());
    }

    #[test]
    fn ship_camera_centers_the_ship() {
        let cam = SolarCamera {
            mode: ViewMode::Ship,
            ..SolarCamera::default()
        };
        let t = 3.7;
        let active = cam.active(t);
        let ([x, y], _) = active.project(&bodies::ship_position(t));
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);
    }
}
