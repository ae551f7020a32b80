//! Five-beam radar cast from the vehicle center
//!
//! Each beam runs from the body center through a direction-specific
//! reference point on the rotated footprint, out to an arena edge, and
//! keeps the nearest crossing with any drawn segment. The scan also
//! collects the points where segments cut the body outline itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rotate_about;

use super::geometry::{LineEquation, segment_intersection};
use super::track::{Arena, Track};
use super::vehicle::Vehicle;

/// The five fixed beams, named from the driver's seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadarDirection {
    Center,
    Left,
    Right,
    LeftDiagonal,
    RightDiagonal,
}

impl RadarDirection {
    /// Every beam in scan order
    pub const ALL: [Self; 5] = [
        Self::Center,
        Self::Left,
        Self::Right,
        Self::LeftDiagonal,
        Self::RightDiagonal,
    ];

    /// The point on the body this beam aims through
    ///
    /// Perpendicular beams use edge midpoints of the rotated footprint.
    /// Diagonal beams offset the front-left corner sideways by half the
    /// body length before rotating it into place.
    fn reference_point(self, vehicle: &Vehicle) -> Vec2 {
        let r = &vehicle.rotated;
        match self {
            Self::Center => (r[0] + r[1]) / 2.0,
            Self::Left => (r[3] + r[0]) / 2.0,
            Self::Right => (r[1] + r[2]) / 2.0,
            Self::LeftDiagonal => rotate_about(
                vehicle.corners[0] + Vec2::new(-vehicle.length / 2.0, 0.0),
                vehicle.heading,
                vehicle.center,
            ),
            Self::RightDiagonal => rotate_about(
                vehicle.corners[0] + Vec2::new(vehicle.length / 2.0, 0.0),
                vehicle.heading,
                vehicle.center,
            ),
        }
    }

    /// Whether the beam exits through the right arena edge at this heading
    ///
    /// Each beam flips to the opposite edge over a fixed half-turn band of
    /// headings; the bands are half-open, so the flip lands exactly on the
    /// band edge.
    fn far_edge_is_right(self, heading: f32) -> bool {
        match self {
            Self::Center => (0.0..180.0).contains(&heading),
            Self::Left => (90.0..270.0).contains(&heading),
            Self::Right => !(90.0..270.0).contains(&heading),
            Self::LeftDiagonal => (45.0..225.0).contains(&heading),
            Self::RightDiagonal => !(135.0..315.0).contains(&heading),
        }
    }
}

/// One cast beam and what it found
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarBeam {
    pub direction: RadarDirection,
    /// Where the beam starts, the vehicle center
    pub origin: Vec2,
    /// Where the beam ends if nothing is in the way
    pub far: Vec2,
    /// Nearest crossing with a drawn segment, if any
    pub hit: Option<Vec2>,
}

impl RadarBeam {
    /// Cast one beam for the vehicle's current pose
    pub fn cast(direction: RadarDirection, vehicle: &Vehicle, arena: Arena, track: &Track) -> Self {
        let origin = vehicle.center;
        let reference = direction.reference_point(vehicle);
        let far = match LineEquation::through(origin, reference) {
            LineEquation::Sloped { m, c } => {
                let x = if direction.far_edge_is_right(vehicle.heading) {
                    arena.width
                } else {
                    0.0
                };
                Vec2::new(x, m * x + c)
            }
            // Zero run: the slope form is useless, so aim at whichever
            // horizontal edge the reference point lies toward
            LineEquation::Vertical { x } => {
                let y = if reference.y < origin.y { 0.0 } else { arena.height };
                Vec2::new(x, y)
            }
        };
        let hit = nearest_crossing(origin, far, track);
        Self {
            direction,
            origin,
            far,
            hit,
        }
    }

    /// Distance from the beam origin to its hit, if it hit anything
    #[inline]
    pub fn hit_distance(&self) -> Option<f32> {
        self.hit.map(|hit| (hit - self.origin).length())
    }
}

/// Nearest crossing by squared distance; earlier segments win exact ties
fn nearest_crossing(origin: Vec2, far: Vec2, track: &Track) -> Option<Vec2> {
    let mut best: Option<(f32, Vec2)> = None;
    for segment in &track.segments {
        if let Some(point) = segment_intersection(origin, far, segment.a, segment.b) {
            let dist = origin.distance_squared(point);
            match best {
                Some((best_dist, _)) if dist >= best_dist => {}
                _ => best = Some((dist, point)),
            }
        }
    }
    best.map(|(_, point)| point)
}

/// The full sensor picture for one pose, all five beams plus body contacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarArray {
    pub beams: [RadarBeam; 5],
    /// Points where drawn segments cross the body outline, edge by edge
    pub body_contacts: Vec<Vec2>,
}

impl RadarArray {
    /// Sensor state for a vehicle that has not scanned yet: every beam
    /// collapsed onto the center with nothing hit
    pub fn new(vehicle: &Vehicle) -> Self {
        Self {
            beams: RadarDirection::ALL.map(|direction| RadarBeam {
                direction,
                origin: vehicle.center,
                far: vehicle.center,
                hit: None,
            }),
            body_contacts: Vec::new(),
        }
    }

    /// Recast all five beams and recollect body contacts for the current
    /// pose and track
    pub fn rescan(&mut self, vehicle: &Vehicle, arena: Arena, track: &Track) {
        self.beams =
            RadarDirection::ALL.map(|direction| RadarBeam::cast(direction, vehicle, arena, track));

        self.body_contacts.clear();
        for (start, end) in vehicle.edges() {
            for segment in &track.segments {
                if let Some(point) = segment_intersection(start, end, segment.a, segment.b) {
                    self.body_contacts.push(point);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_empty_track_scans_clean() {
        let vehicle = Vehicle::default();
        let mut radar = RadarArray::new(&vehicle);
        radar.rescan(&vehicle, Arena::default(), &Track::new());

        for (beam, direction) in radar.beams.iter().zip(RadarDirection::ALL) {
            assert_eq!(beam.direction, direction);
            assert_eq!(beam.origin, vehicle.center);
            assert!(beam.hit.is_none());
            assert!(beam.hit_distance().is_none());
        }
        assert!(radar.body_contacts.is_empty());
    }

    #[test]
    fn test_vertical_center_beam_hits_wall_above() {
        // Pointing straight up, the center beam has no usable slope
        let vehicle = Vehicle::new(Vec2::new(125.0, 500.0));
        let mut track = Track::new();
        track.push_coords(&[0.0, 400.0, 800.0, 400.0]);

        let mut radar = RadarArray::new(&vehicle);
        radar.rescan(&vehicle, Arena::default(), &track);

        let center = radar.beams[0];
        assert_eq!(center.far, Vec2::new(131.0, 0.0));
        let hit = center.hit.unwrap();
        assert!((hit - Vec2::new(131.0, 400.0)).length() < 1e-3);
        assert!((center.hit_distance().unwrap() - 112.0).abs() < 1e-3);
    }

    #[test]
    fn test_far_points_at_quarter_turn() {
        let mut vehicle = Vehicle::default();
        let arena = Arena::default();
        vehicle.heading = 90.0;
        // Refresh the rotated footprint without moving
        vehicle.update(arena, SIM_DT);

        let mut radar = RadarArray::new(&vehicle);
        radar.rescan(&vehicle, arena, &Track::new());

        let [center, left, right, left_diag, right_diag] = radar.beams;
        assert!((center.far - Vec2::new(800.0, 312.0)).length() < 1e-2);
        // Side beams are vertical at a quarter turn and aim at the
        // horizontal edge their reference point lies toward
        assert!((left.far - Vec2::new(131.0, 0.0)).length() < 1e-2);
        assert!((right.far - Vec2::new(131.0, 610.0)).length() < 1e-2);
        assert_eq!(left_diag.far.x, 800.0);
        assert_eq!(right_diag.far.x, 800.0);
    }

    #[test]
    fn test_diagonal_beams_leave_through_front_corners() {
        let vehicle = Vehicle::default();
        let mut radar = RadarArray::new(&vehicle);
        radar.rescan(&vehicle, Arena::default(), &Track::new());

        // Heading zero: the left diagonal exits left, the right diagonal
        // exits right through the front-right corner and keeps going past
        // the arena top
        let left_diag = radar.beams[3];
        let right_diag = radar.beams[4];
        assert_eq!(left_diag.far.x, 0.0);
        assert!((left_diag.far.y - 224.6667).abs() < 1e-2);
        assert_eq!(right_diag.far.x, 800.0);
        assert!((right_diag.far.y + 1026.0).abs() < 1e-2);
    }

    #[test]
    fn test_nearest_of_two_walls_wins() {
        let vehicle = Vehicle::default();
        let mut track = Track::new();
        // Farther wall drawn first
        track.push_coords(&[60.0, 200.0, 60.0, 400.0]);
        track.push_coords(&[100.0, 200.0, 100.0, 400.0]);

        let mut radar = RadarArray::new(&vehicle);
        radar.rescan(&vehicle, Arena::default(), &track);

        let left = radar.beams[1];
        let hit = left.hit.unwrap();
        assert!((hit - Vec2::new(100.0, 312.0)).length() < 1e-3);
        assert!((left.hit_distance().unwrap() - 31.0).abs() < 1e-3);
    }

    #[test]
    fn test_body_contacts_come_edge_by_edge() {
        let vehicle = Vehicle::default();
        let mut track = Track::new();
        // One wall slicing the body horizontally, one vertically
        track.push_coords(&[0.0, 312.0, 800.0, 312.0]);
        track.push_coords(&[131.0, 0.0, 131.0, 610.0]);

        let mut radar = RadarArray::new(&vehicle);
        radar.rescan(&vehicle, Arena::default(), &track);

        let expected = [
            Vec2::new(131.0, 300.0), // front edge, vertical wall
            Vec2::new(137.0, 312.0), // right edge, horizontal wall
            Vec2::new(131.0, 324.0), // back edge, vertical wall
            Vec2::new(125.0, 312.0), // left edge, horizontal wall
        ];
        assert_eq!(radar.body_contacts.len(), expected.len());
        for (got, want) in radar.body_contacts.iter().zip(expected) {
            assert!((*got - want).length() < 1e-3);
        }
    }

    #[test]
    fn test_rescan_replaces_previous_scan() {
        let vehicle = Vehicle::default();
        let arena = Arena::default();
        let mut track = Track::new();
        track.push_coords(&[0.0, 312.0, 800.0, 312.0]);

        let mut radar = RadarArray::new(&vehicle);
        radar.rescan(&vehicle, arena, &track);
        let snapshot = radar.clone();

        radar.rescan(&vehicle, arena, &track);
        assert_eq!(radar, snapshot);
    }
}
