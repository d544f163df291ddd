use super::*;

/// Size of the visible play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    /// If the point is inside the play area, grown by margin on every side
    pub fn contains(&self, point: Point2<f64>, margin: f64) -> bool {
        point.x >= -margin
            && point.y >= -margin
            && point.x <= self.width + margin
            && point.y <= self.height + margin
    }
}

/// Reports the current size of the play area. Both values are positive.
pub trait DimensionProvider {
    fn dimensions(&self) -> Dimensions;
}

/// A play area that never changes size
pub struct FixedDimensions(Dimensions);

impl FixedDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        assert!(width > 0.0 && height > 0.0);
        Self(Dimensions::new(width, height))
    }
}

impl DimensionProvider for FixedDimensions {
    fn dimensions(&self) -> Dimensions {
        self.0
    }
}

/// Where entities draw themselves
pub trait Canvas {
    fn circle(&mut self, center: Point2<f64>, radius: f64, color: ColorRGB);
    fn rect(&mut self, top_left: Point2<f64>, size: Vector2<f64>, color: ColorRGB);
}

/// Canvas for running without a display. Logs every shape at trace level and counts them.
#[derive(Default)]
pub struct TraceCanvas {
    shapes: u64,
}

impl TraceCanvas {
    #[cfg(test)]
    pub fn shapes_drawn(&self) -> u64 {
        self.shapes
    }
}

impl Drop for TraceCanvas {
    fn drop(&mut self) {
        debug!("{} shapes drawn", self.shapes);
    }
}

impl Canvas for TraceCanvas {
    fn circle(&mut self, center: Point2<f64>, radius: f64, color: ColorRGB) {
        self.shapes += 1;
        trace!(
            "circle at ({:.1}, {:.1}) r={:.1} {}",
            center.x,
            center.y,
            radius,
            color
        );
    }

    fn rect(&mut self, top_left: Point2<f64>, size: Vector2<f64>, color: ColorRGB) {
        self.shapes += 1;
        trace!(
            "rect at ({:.1}, {:.1}) {:.1}x{:.1} {}",
            top_left.x,
            top_left.y,
            size.x,
            size.y,
            color
        );
    }
}
