use super::*;

/// Records what mock entities do, in order. Clones share the same record.
#[derive(Default, Clone)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn push(&self, call: String) {
        self.0.borrow_mut().push(call);
    }

    pub fn count(&self, call: &str) -> usize {
        self.0.borrow().iter().filter(|c| *c == call).count()
    }

    /// Index of the first matching call
    pub fn position(&self, call: &str) -> Option<usize> {
        self.0.borrow().iter().position(|c| c == call)
    }
}

/// Implements every entity trait, so it can go in any category
pub struct MockEntity {
    name: String,
    log: CallLog,
    position: Point2<f64>,
    lives: u32,
    to_be_removed: bool,
    remove_on_update: bool,
    spawns: Option<Category>,
}

impl MockEntity {
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            position: Point2::origin(),
            lives: 3,
            to_be_removed: false,
            remove_on_update: false,
            spawns: None,
        }
    }

    pub fn at(name: &str, position: Point2<f64>) -> Self {
        Self {
            position,
            ..Self::new(name, &CallLog::default())
        }
    }

    /// Already flagged for removal when added
    pub fn marked(mut self) -> Self {
        self.to_be_removed = true;
        self
    }

    /// Flags itself for removal during its update
    pub fn removed_on_update(mut self) -> Self {
        self.remove_on_update = true;
        self
    }

    /// Spawns a "<name>-shot" entity into the given category every update
    pub fn spawning(mut self, category: Category) -> Self {
        self.spawns = Some(category);
        self
    }
}

impl Entity for MockEntity {
    fn update(&mut self, frame: &mut Frame) {
        self.log.push(format!("update {}", self.name));
        if self.remove_on_update {
            self.to_be_removed = true;
        }
        if let Some(category) = self.spawns {
            let child = MockEntity::new(&format!("{}-shot", self.name), &self.log);
            frame.spawn(category, mock_any(category, child));
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.log.push(format!("draw {}", self.name));
        canvas.circle(self.position, 1.0, ColorRGB::WHITE);
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

impl PlayerEntity for MockEntity {
    fn lives(&self) -> u32 {
        self.lives
    }

    fn lose_lives(&mut self, lives: u32) {
        self.log.push(format!("lose {} {}", self.name, lives));
        self.lives = self.lives.saturating_sub(lives);
        if self.lives == 0 {
            self.to_be_removed = true;
        }
    }
}

impl Projectile for MockEntity {
    fn damage(&self) -> u32 {
        1
    }
}

impl Ship for MockEntity {
    fn radius(&self) -> f64 {
        1.0
    }

    fn take_damage(&mut self, damage: u32) {
        self.log.push(format!("damage {} {}", self.name, damage));
    }
}

/// Wraps the mock as whatever kind the category holds
pub fn mock_any(category: Category, entity: MockEntity) -> AnyEntity {
    match category.kind() {
        EntityKind::Player => AnyEntity::player(entity),
        EntityKind::Projectile => AnyEntity::projectile(entity),
        EntityKind::Ship => AnyEntity::ship(entity),
    }
}

pub fn mock_player_factory() -> Box<PlayerFactory> {
    Box::new(|position: Point2<f64>| -> Box<dyn PlayerEntity> {
        Box::new(MockEntity::at("player", position))
    })
}

/// A registry with only the bootstrapped mock player in it
pub fn mock_registry(width: f64, height: f64) -> Registry {
    Registry::new(
        &FixedDimensions::new(width, height),
        &*mock_player_factory(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_counts_and_orders_calls() {
        let log = CallLog::default();
        log.push("a".to_string());
        log.push("b".to_string());
        log.push("a".to_string());
        assert_eq!(log.count("a"), 2);
        assert_eq!(log.count("c"), 0);
        assert_eq!(log.position("b"), Some(1));
        assert_eq!(log.position("c"), None);
    }

    #[test]
    fn spawning_mock_queues_child() {
        let log = CallLog::default();
        let mut entity = MockEntity::new("gun", &log).spawning(Category::Misc);
        let mut frame = Frame::new(0, 0.1, Dimensions::new(10.0, 10.0));
        entity.update(&mut frame);
        assert_eq!(frame.pending_spawns(), 1);
        assert_eq!(log.count("update gun"), 1);
    }

    #[test]
    fn mock_player_runs_out_of_lives() {
        let log = CallLog::default();
        let mut player = MockEntity::new("player", &log);
        player.lose_lives(2);
        assert_eq!(player.lives(), 1);
        assert!(!player.is_to_be_removed());
        player.lose_lives(5);
        assert_eq!(player.lives(), 0);
        assert!(player.is_to_be_removed());
        assert_eq!(log.count("lose player 2"), 1);
    }
}
