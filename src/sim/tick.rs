//! Fixed timestep simulation tick
//!
//! One tick advances the vehicle by one step, then refreshes the radar so
//! the sensor picture always matches the pose the update just produced.
//! Driver controls are applied between ticks and take effect immediately.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::radar::RadarArray;
use super::track::{Arena, Track};
use super::vehicle::Vehicle;

/// Driver commands, one per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    Accelerate,
    Brake,
    SteerLeft,
    SteerRight,
    Stop,
    Reset,
}

/// The whole simulation state the host steps and draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub vehicle: Vehicle,
    pub radar: RadarArray,
}

impl Simulation {
    pub fn new(spawn: Vec2) -> Self {
        let vehicle = Vehicle::new(spawn);
        let radar = RadarArray::new(&vehicle);
        Self { vehicle, radar }
    }

    /// Apply one driver command
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Accelerate => self.vehicle.accelerate(),
            Control::Brake => self.vehicle.brake(),
            Control::SteerLeft => self.vehicle.steer_left(),
            Control::SteerRight => self.vehicle.steer_right(),
            Control::Stop => self.vehicle.stop(),
            Control::Reset => self.vehicle.reset(),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Vec2::new(SPAWN_X, SPAWN_Y))
    }
}

/// Advance the simulation by one fixed timestep
pub fn tick(sim: &mut Simulation, track: &Track, arena: Arena, dt: f32) {
    sim.vehicle.update(arena, dt);
    sim.radar.rescan(&sim.vehicle, arena, track);
}
