use super::*;

const COLOR: ColorRGB = ColorRGB::from_u32(0x806040);
/// Frames a wreck lingers
const LIFETIME: u32 = 20;

/// What's left of a destroyed ship. Shrinks and then disappears.
pub struct Wreck {
    position: Point2<f64>,
    radius: f64,
    frames_left: u32,
    to_be_removed: bool,
}

impl Wreck {
    pub fn new(position: Point2<f64>, radius: f64) -> Self {
        Self {
            position,
            radius,
            frames_left: LIFETIME,
            to_be_removed: false,
        }
    }
}

impl Entity for Wreck {
    fn update(&mut self, _: &mut Frame) {
        self.frames_left = self.frames_left.saturating_sub(1);
        if self.frames_left == 0 {
            self.to_be_removed = true;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.circle(self.position, self.radius(), COLOR);
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

impl Ship for Wreck {
    fn radius(&self) -> f64 {
        self.radius * self.frames_left as f64 / LIFETIME as f64
    }

    fn take_damage(&mut self, _: u32) {}
}
