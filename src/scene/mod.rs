/// Orrery scene: static body catalog and camera state.
///
/// Positions are closed-form: every orbiting body sits at
/// `(cos(t·speed)·dist, y, sin(t·speed)·dist)` for the current animation
/// time, so the scene has no stepping state to integrate or rewind.

pub mod bodies;
pub mod camera;
