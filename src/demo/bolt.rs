use super::*;

const LENGTH: f64 = 8.0;
const WIDTH: f64 = 2.0;

/// A shot flying in a straight line. Gone once it leaves the play area.
pub struct Bolt {
    position: Point2<f64>,
    velocity: Vector2<f64>,
    damage: u32,
    color: ColorRGB,
    to_be_removed: bool,
}

impl Bolt {
    pub fn new(position: Point2<f64>, velocity: Vector2<f64>, damage: u32, color: ColorRGB) -> Self {
        Self {
            position,
            velocity,
            damage,
            color,
            to_be_removed: false,
        }
    }
}

impl Entity for Bolt {
    fn update(&mut self, frame: &mut Frame) {
        self.position += self.velocity * frame.dt;
        if !frame.area.contains(self.position, LENGTH) {
            self.to_be_removed = true;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.rect(
            self.position - Vector2::new(WIDTH, LENGTH) / 2.0,
            Vector2::new(WIDTH, LENGTH),
            self.color,
        );
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

impl Projectile for Bolt {
    fn damage(&self) -> u32 {
        self.damage
    }
}
