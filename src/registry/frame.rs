use super::*;

/// Context handed to every entity's update during one sweep
pub struct Frame {
    /// Number of sweeps completed before this one
    pub tick: u64,
    /// In-game seconds this frame advances the simulation by
    pub dt: f64,
    pub area: Dimensions,
    spawns: Vec<(Category, AnyEntity)>,
}

impl Frame {
    pub fn new(tick: u64, dt: f64, area: Dimensions) -> Self {
        Self {
            tick,
            dt,
            area,
            spawns: Vec::new(),
        }
    }

    /// Queue an entity to be added once the sweep is done. It will first be updated next frame.
    pub fn spawn(&mut self, category: Category, entity: AnyEntity) {
        self.spawns.push((category, entity));
    }

    #[cfg(test)]
    pub fn pending_spawns(&self) -> usize {
        self.spawns.len()
    }

    pub(super) fn take_spawns(&mut self) -> Vec<(Category, AnyEntity)> {
        std::mem::take(&mut self.spawns)
    }
}
