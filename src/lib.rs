//! Sketch Circuit - a sketched-track driving sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicle kinematics, track geometry, radar sensing)
//!
//! The drawing canvas, button wiring and file dialogs belong to the host
//! application. The host owns the track segments and the tick timer; this
//! crate is the simulation it polls once per fixed tick for a fresh vehicle
//! pose and radar readings.

pub mod sim;

pub use sim::{
    Arena, Control, RadarArray, RadarBeam, RadarDirection, Segment, Simulation, Track, Vehicle,
    tick,
};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Integration step per tick (logical units, not seconds)
    pub const SIM_DT: f32 = 0.2;
    /// Nominal host timer cadence driving the tick loop
    pub const TICK_INTERVAL_MS: u64 = 20;

    /// Default arena dimensions (drawing canvas extent)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 610.0;

    /// Vehicle footprint - length runs along the body axis, width across it
    pub const VEHICLE_LENGTH: f32 = 24.0;
    pub const VEHICLE_WIDTH: f32 = 12.0;

    /// Default spawn position (front-left corner at heading 0)
    pub const SPAWN_X: f32 = 125.0;
    pub const SPAWN_Y: f32 = 300.0;

    /// Longitudinal velocity clamp
    pub const MAX_VELOCITY: f32 = 12.0;
    /// Acceleration clamp
    pub const MAX_ACCELERATION: f32 = 5.0;
    /// Steering impulse clamp (momentary wheel angle, degrees)
    pub const MAX_STEERING: f32 = 100.0;

    /// Acceleration delta per control call (scaled by SIM_DT)
    pub const ACCELERATION_STEP: f32 = 1.0;
    /// Steering impulse per control call
    pub const STEERING_STEP: f32 = 100.0;

    /// Velocity multiplier applied when a rotated corner leaves the arena
    pub const BOUNCE_FACTOR: f32 = -20.0;
}

/// Rotate a vector by an angle in degrees (conventional rotation matrix)
#[inline]
pub fn rotate_vec(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Rotate a point about a pivot by an angle in degrees
#[inline]
pub fn rotate_about(point: Vec2, degrees: f32, pivot: Vec2) -> Vec2 {
    pivot + rotate_vec(point - pivot, degrees)
}
