use super::*;

pub const WAVE_SIZE: usize = 4;
const DRONE_SPEED: f64 = 40.0;
/// Frames between the fire phases of neighbouring drones
const PHASE_STEP: u64 = 10;

/// Adds a row of drones along the top of the area, heading down. Returns how many made it in.
pub fn spawn_wave(registry: &mut Registry, area: Dimensions, frame: u64) -> usize {
    let spacing = area.width / (WAVE_SIZE + 1) as f64;
    let spawned = (0..WAVE_SIZE)
        .filter_map(|i| {
            let drone = Drone::new(
                Point2::new(spacing * (i + 1) as f64, DRONE_RADIUS),
                Vector2::new(0.0, DRONE_SPEED),
                i as u64 * PHASE_STEP,
            );
            registry
                .add_entity(Category::Hostiles, AnyEntity::ship(drone))
                .or_log_warn("failed to spawn drone")
        })
        .count();
    debug!("wave of {} drones spawned on frame {}", spawned, frame);
    spawned
}
