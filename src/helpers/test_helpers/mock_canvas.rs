use super::*;

/// Counts shapes. Clones share the count, so a test can keep one while the game owns another.
#[derive(Default, Clone)]
pub struct MockCanvas(Rc<Cell<u64>>);

impl MockCanvas {
    pub fn shapes_drawn(&self) -> u64 {
        self.0.get()
    }
}

impl Canvas for MockCanvas {
    fn circle(&mut self, _: Point2<f64>, _: f64, _: ColorRGB) {
        self.0.set(self.0.get() + 1);
    }

    fn rect(&mut self, _: Point2<f64>, _: Vector2<f64>, _: ColorRGB) {
        self.0.set(self.0.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_count() {
        let canvas = MockCanvas::default();
        let mut other = canvas.clone();
        other.circle(Point2::origin(), 1.0, ColorRGB::WHITE);
        other.rect(Point2::origin(), Vector2::new(1.0, 1.0), ColorRGB::WHITE);
        assert_eq!(canvas.shapes_drawn(), 2);
    }
}
