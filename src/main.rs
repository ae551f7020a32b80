//! Sketch Circuit entry point
//!
//! Headless demo drive: sketches a small circuit, scripts a few seconds of
//! driving and logs what the radar sees each stretch of the way. Real
//! hosts embed the library crate, feed it key presses and draw the beams;
//! this binary only exercises the same loop without a canvas.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sketch Circuit (headless) starting...");

    demo_drive();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Wasm hosts embed the library crate; there is no binary entry there
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_drive() {
    use sketch_circuit::consts::*;
    use sketch_circuit::{Arena, Control, Simulation, Track, tick};

    let arena = Arena::default();

    // A hand-drawn practice circuit: outer boundary plus an inner island,
    // leaving a corridor the spawn point sits in
    let mut track = Track::new();
    for row in [
        [30.0, 30.0, 770.0, 30.0],
        [770.0, 30.0, 770.0, 580.0],
        [770.0, 580.0, 30.0, 580.0],
        [30.0, 580.0, 30.0, 30.0],
        [250.0, 200.0, 550.0, 200.0],
        [550.0, 200.0, 550.0, 420.0],
        [550.0, 420.0, 250.0, 420.0],
        [250.0, 420.0, 250.0, 200.0],
    ] {
        track.push_coords(&row);
    }
    log::info!("Sketched {} wall segments", track.len());

    let mut sim = Simulation::default();
    let ticks = 600u32;
    log::info!(
        "Driving {} ticks ({} ms at host pace)",
        ticks,
        u64::from(ticks) * TICK_INTERVAL_MS
    );

    for tick_index in 0..ticks {
        // Scripted driving: pull away up the left corridor, then turn
        // right at the top and keep working clockwise around the island
        if tick_index < 30 {
            sim.apply(Control::Accelerate);
        }
        match tick_index {
            80..144 if tick_index % 4 == 0 => sim.apply(Control::SteerRight),
            230..294 if tick_index % 4 == 0 => sim.apply(Control::SteerRight),
            380..444 if tick_index % 4 == 0 => sim.apply(Control::SteerRight),
            _ => {}
        }

        tick(&mut sim, &track, arena, SIM_DT);

        if let Some(contact) = sim.radar.body_contacts.first() {
            log::warn!(
                "tick {}: scraping a wall at ({:.1}, {:.1})",
                tick_index,
                contact.x,
                contact.y
            );
        }

        if tick_index % 50 == 0 {
            let readings: Vec<String> = sim
                .radar
                .beams
                .iter()
                .map(|beam| match beam.hit_distance() {
                    Some(d) => format!("{:?}={:.0}", beam.direction, d),
                    None => format!("{:?}=clear", beam.direction),
                })
                .collect();
            log::info!(
                "tick {:3} heading {:6.1} center ({:5.1}, {:5.1}) {}",
                tick_index,
                sim.vehicle.heading,
                sim.vehicle.center.x,
                sim.vehicle.center.y,
                readings.join(" ")
            );
        }
    }

    log::info!("Demo finished, dumping final state");
    if let Ok(json) = serde_json::to_string_pretty(&sim) {
        println!("{json}");
    }
}
