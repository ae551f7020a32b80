//! Vehicle state and per-tick kinematics
//!
//! The body is a rigid rectangle tracked as four unrotated corners plus a
//! cached rotated copy. Translation happens in the unrotated frame along
//! the heading-aligned velocity; the rotated copy is refreshed once at the
//! end of every update and is what rendering, sensing and the wall bounce
//! all read.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{rotate_about, rotate_vec};

use super::track::Arena;

/// The player's car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Body length along the unrotated y axis
    pub length: f32,
    /// Body width along the unrotated x axis
    pub width: f32,
    /// Unrotated corners in polygon order: front-left, front-right,
    /// rear-right, rear-left
    pub corners: [Vec2; 4],
    /// Corners rotated about the center by the heading, refreshed at the
    /// end of each update
    pub rotated: [Vec2; 4],
    /// Body center, midpoint of the front-left/rear-right diagonal
    pub center: Vec2,
    /// Body-frame velocity; forward is negative y
    pub velocity: Vec2,
    /// Longitudinal acceleration, integrated every tick
    pub acceleration: f32,
    /// Steering impulse in degrees, consumed by the next update
    pub steering: f32,
    /// Heading in degrees; the body points straight up at zero
    pub heading: f32,
    /// Top-left corner the body was spawned at
    pub spawn: Vec2,
}

impl Vehicle {
    /// Place a fresh vehicle with its front-left corner at `spawn`,
    /// pointing up, at rest
    pub fn new(spawn: Vec2) -> Self {
        let length = VEHICLE_LENGTH;
        let width = VEHICLE_WIDTH;
        let corners = [
            spawn,
            spawn + Vec2::new(width, 0.0),
            spawn + Vec2::new(width, length),
            spawn + Vec2::new(0.0, length),
        ];
        Self {
            length,
            width,
            corners,
            rotated: corners,
            center: (corners[0] + corners[2]) / 2.0,
            velocity: Vec2::ZERO,
            acceleration: 0.0,
            steering: 0.0,
            heading: 0.0,
            spawn,
        }
    }

    /// Advance the body by one fixed timestep
    ///
    /// The step order is observable and load-bearing: the wall bounce reads
    /// the rotated corners cached by the previous tick and rescales the
    /// velocity before this tick's translation, so the kick away from the
    /// wall lands in the same update that detects the excursion.
    pub fn update(&mut self, arena: Arena, dt: f32) {
        // 1. integrate throttle, clamp speed
        self.velocity.y =
            (self.velocity.y + self.acceleration * dt).clamp(-MAX_VELOCITY, MAX_VELOCITY);

        // 2. wall bounce, judged on last tick's rotated footprint
        if self.rotated.iter().any(|c| !arena.contains(*c)) {
            self.velocity *= BOUNCE_FACTOR;
        }

        // 3. translate along the heading-aligned velocity
        let delta = rotate_vec(self.velocity, self.heading) * dt;
        for corner in &mut self.corners {
            *corner += delta;
        }

        // 4. center follows the front-left/rear-right diagonal
        self.center = (self.corners[0] + self.corners[2]) / 2.0;

        // 5. heading from the turning radius the steering angle implies
        let angular_velocity = if self.steering != 0.0 {
            let turning_radius = self.length / self.steering.to_radians().sin();
            self.velocity.y / turning_radius
        } else {
            0.0
        };
        let previous = self.heading;
        self.heading += angular_velocity.to_degrees() * dt;
        if previous > 360.0 {
            self.heading -= 360.0;
        } else if previous < 0.0 {
            self.heading += 360.0;
        }

        // 6. steering is an impulse, spent once integrated
        self.steering = 0.0;

        // 7. refresh the rotated corner cache
        self.rotated = self
            .corners
            .map(|c| rotate_about(c, self.heading, self.center));
    }

    /// Push the throttle one notch toward forward
    pub fn accelerate(&mut self) {
        self.acceleration = (self.acceleration - ACCELERATION_STEP * SIM_DT)
            .clamp(-MAX_ACCELERATION, MAX_ACCELERATION);
    }

    /// Push the throttle one notch toward reverse
    pub fn brake(&mut self) {
        self.acceleration = (self.acceleration + ACCELERATION_STEP * SIM_DT)
            .clamp(-MAX_ACCELERATION, MAX_ACCELERATION);
    }

    pub fn steer_left(&mut self) {
        self.steering = (self.steering + STEERING_STEP).clamp(-MAX_STEERING, MAX_STEERING);
    }

    pub fn steer_right(&mut self) {
        self.steering = (self.steering - STEERING_STEP).clamp(-MAX_STEERING, MAX_STEERING);
    }

    /// Kill all motion on the spot; pose and pending steering are kept
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
        self.acceleration = 0.0;
    }

    /// Teleport back to the spawn pose and zero every dynamic quantity
    pub fn reset(&mut self) {
        *self = Self::new(self.spawn);
    }

    /// The rotated footprint as directed edges: front, right, back, left
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        [
            (self.rotated[0], self.rotated[1]),
            (self.rotated[1], self.rotated[2]),
            (self.rotated[2], self.rotated[3]),
            (self.rotated[3], self.rotated[0]),
        ]
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new(Vec2::new(SPAWN_X, SPAWN_Y))
    }
}
