use super::*;

const COLOR: ColorRGB = ColorRGB::from_u32(0xff5030);
pub const DRONE_RADIUS: f64 = 14.0;
const FIRE_INTERVAL: u64 = 40;
const BOLT_SPEED: f64 = 180.0;
const BOLT_DAMAGE: u32 = 1;
/// Damage a drone takes before it goes down
const HULL: u32 = 2;

/// A hostile that flies straight and fires down at regular intervals
pub struct Drone {
    position: Point2<f64>,
    velocity: Vector2<f64>,
    /// Offsets when in the fire cycle this drone shoots, so a wave doesn't fire all at once
    fire_phase: u64,
    hull: u32,
    to_be_removed: bool,
}

impl Drone {
    pub fn new(position: Point2<f64>, velocity: Vector2<f64>, fire_phase: u64) -> Self {
        Self {
            position,
            velocity,
            fire_phase,
            hull: HULL,
            to_be_removed: false,
        }
    }
}

impl Entity for Drone {
    fn update(&mut self, frame: &mut Frame) {
        self.position += self.velocity * frame.dt;
        if !frame.area.contains(self.position, DRONE_RADIUS * 2.0) {
            self.to_be_removed = true;
            return;
        }
        if (frame.tick + self.fire_phase) % FIRE_INTERVAL == 0 {
            frame.spawn(
                Category::HostileArmaments,
                AnyEntity::projectile(Bolt::new(
                    self.position,
                    Vector2::new(0.0, BOLT_SPEED),
                    BOLT_DAMAGE,
                    COLOR,
                )),
            );
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.circle(self.position, DRONE_RADIUS, COLOR);
    }

    fn position(&self) -> Point2<f64> {
        self.position
    }

    fn is_to_be_removed(&self) -> bool {
        self.to_be_removed
    }

    fn mark_for_removal(&mut self) {
        self.to_be_removed = true;
    }
}

impl Ship for Drone {
    fn radius(&self) -> f64 {
        DRONE_RADIUS
    }

    fn take_damage(&mut self, damage: u32) {
        self.hull = self.hull.saturating_sub(damage);
        if self.hull == 0 {
            self.to_be_removed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tick: u64) -> Frame {
        Frame::new(tick, 0.1, Dimensions::new(200.0, 200.0))
    }

    #[test]
    fn fires_once_per_interval() {
        let mut drone = Drone::new(Point2::new(100.0, 10.0), Vector2::zero(), 3);
        let mut shots = 0;
        for tick in 0..FIRE_INTERVAL * 2 {
            let mut frame = frame(tick);
            drone.update(&mut frame);
            shots += frame.pending_spawns();
        }
        assert_eq!(shots, 2);
    }

    #[test]
    fn removed_after_leaving_area() {
        let mut drone = Drone::new(Point2::new(100.0, 190.0), Vector2::new(0.0, 500.0), 1);
        let mut frame = frame(0);
        drone.update(&mut frame);
        assert!(drone.is_to_be_removed());
        assert_eq!(frame.pending_spawns(), 0);
    }

    #[test]
    fn goes_down_once_hull_is_spent() {
        let mut drone = Drone::new(Point2::new(100.0, 100.0), Vector2::zero(), 0);
        drone.take_damage(HULL - 1);
        assert!(!drone.is_to_be_removed());
        drone.take_damage(1);
        assert!(drone.is_to_be_removed());
    }
}
