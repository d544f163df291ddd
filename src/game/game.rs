use super::*;

/// Runs between sweeps with the registry and the number of the frame about to be swept. This is
/// where outside game logic (spawning waves, resolving hits) gets to touch the registry.
pub type TickHook = Box<dyn FnMut(&mut Registry, u64)>;

/// A single play session. Owns the registry, which is only built the first time it is needed.
pub struct Game {
    config: GameConfig,
    dimensions: Box<dyn DimensionProvider>,
    canvas: Box<dyn Canvas>,
    new_player: Box<PlayerFactory>,
    registry: Option<Registry>,
    hooks: Vec<TickHook>,
    metronome: Metronome,
    frames: u64,
}

fn ensure_registry<'a>(
    registry: &'a mut Option<Registry>,
    dimensions: &dyn DimensionProvider,
    new_player: &PlayerFactory,
) -> &'a mut Registry {
    registry.get_or_insert_with(|| {
        let registry = Registry::new(dimensions, new_player);
        info!("registry created");
        registry
    })
}

impl Game {
    pub fn new(
        config: &GameConfig,
        dimensions: Box<dyn DimensionProvider>,
        canvas: Box<dyn Canvas>,
        new_player: Box<PlayerFactory>,
    ) -> Self {
        Self {
            config: config.clone(),
            dimensions,
            canvas,
            new_player,
            registry: None,
            hooks: Vec::new(),
            metronome: Metronome::new(config.tick_duration(), config.min_sleep),
            frames: 0,
        }
    }

    pub fn on_tick<F: FnMut(&mut Registry, u64) + 'static>(&mut self, hook: F) {
        self.hooks.push(Box::new(hook));
    }

    /// Returns the registry, creating it (and with it the player) on first call
    pub fn registry(&mut self) -> &mut Registry {
        ensure_registry(
            &mut self.registry,
            self.dimensions.as_ref(),
            self.new_player.as_ref(),
        )
    }

    /// Like Registry::entities_by_category(), but empty if the registry hasn't been created yet
    pub fn entities_by_category(&self, filter: Option<&[Category]>) -> Vec<EntityRef<'_>> {
        self.registry
            .as_ref()
            .map(|registry| registry.entities_by_category(filter))
            .unwrap_or_default()
    }

    /// Number of live entities, 0 before the registry exists
    pub fn size(&self) -> usize {
        self.registry.as_ref().map_or(0, Registry::size)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// In-game seconds simulated so far
    pub fn game_time(&self) -> f64 {
        self.frames as f64 * self.config.tick_duration()
    }

    /// Runs a single frame without waiting for the metronome
    pub fn step(&mut self) -> SweepReport {
        let registry = ensure_registry(
            &mut self.registry,
            self.dimensions.as_ref(),
            self.new_player.as_ref(),
        );
        for hook in &mut self.hooks {
            hook(registry, self.frames);
        }
        let mut frame = Frame::new(
            self.frames,
            self.config.tick_duration(),
            self.dimensions.dimensions(),
        );
        let report = registry.update_and_draw_all_entities(&mut frame, self.canvas.as_mut());
        trace!(
            "frame {}: {} visited, {} reaped, {} spawned, {} alive",
            self.frames,
            report.visited,
            report.reaped,
            report.spawned,
            registry.size()
        );
        self.frames += 1;
        report
    }

    /// Runs a frame and then sleeps out the rest of its time budget
    /// Returns if to continue the game
    pub fn tick(&mut self) -> bool {
        self.step();
        let should_quit = self
            .config
            .max_game_time
            .map_or(false, |max| self.game_time() >= max);
        if !should_quit {
            self.metronome.sleep();
        }
        !should_quit
    }
}
