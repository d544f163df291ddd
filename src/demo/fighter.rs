use super::*;

const COLOR: ColorRGB = ColorRGB::from_u32(0x40c0ff);
pub const FIGHTER_RADIUS: f64 = 12.0;
/// Frames between shots
const FIRE_INTERVAL: u32 = 8;
const BOLT_SPEED: f64 = 360.0;
const BOLT_DAMAGE: u32 = 1;
/// How far the fighter strays from where it started, left and right
const SWAY: f64 = 120.0;
/// Radians per second
const SWAY_RATE: f64 = 1.5;

/// The player. Drifts side to side around its starting point and fires straight up.
pub struct Fighter {
    home: Point2<f64>,
    position: Point2<f64>,
    lives: u32,
    cooldown: u32,
    to_be_removed: bool,
}

impl Fighter {
    pub fn new(position: Point2<f64>) -> Self {
        Self {
            home: position,
            position,
            lives: 3,
            cooldown: 0,
            to_be_removed: false,
        }
    }
}

impl Entity for Fighter {
    fn update(&mut self, frame: &mut Frame) {
        let t = frame.tick as f64 * frame.dt;
        let x = self.home.x + SWAY * (t * SWAY_RATE).sin();
        self.position.x = x.max(0.0).min(frame.area.width);
        if self.cooldown == 0 {
            frame.spawn(
                Category::PlayerArmaments,
                AnyEntity::projectile(Bolt::new(
                    self.position,
                    Vector2::new(0.0, -BOLT_SPEED),
                    BOLT_DAMAGE,
                    COLOR,
                )),
            );
            self.cooldown = FIRE_INTERVAL;
        } else {
            self.cooldown -= 1;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.circle(self.position, FIGHTER_RADIUS, COLOR);
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

impl PlayerEntity for Fighter {
    fn lives(&self) -> u32 {
        self.lives
    }

    fn lose_lives(&mut self, lives: u32) {
        self.lives = self.lives.saturating_sub(lives);
        if self.lives == 0 {
            self.to_be_removed = true;
        }
    }
}
