//! Deterministic simulation module
//!
//! All driving logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock time, no RNG
//! - Stable ordering (segments and contacts keep insertion order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod radar;
pub mod tick;
pub mod track;
pub mod vehicle;

pub use geometry::{LineEquation, segment_intersection};
pub use radar::{RadarArray, RadarBeam, RadarDirection};
pub use tick::{Control, Simulation, tick};
pub use track::{Arena, Segment, Track};
pub use vehicle::Vehicle;
