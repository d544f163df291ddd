use super::*;

/// Builds the player the registry bootstraps with, given the point it should start at
pub type PlayerFactory = dyn Fn(Point2<f64>) -> Box<dyn PlayerEntity>;

/// What a single sweep did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    pub visited: usize,
    pub reaped: usize,
    pub spawned: usize,
}

#[derive(Default)]
struct Categories {
    player: Collection<dyn PlayerEntity>,
    player_armaments: Collection<dyn Projectile>,
    hostiles: Collection<dyn Ship>,
    hostile_armaments: Collection<dyn Projectile>,
    misc: Collection<dyn Ship>,
}

impl Categories {
    fn projectiles(&self, category: Category) -> Option<&Collection<dyn Projectile>> {
        match category {
            Category::PlayerArmaments => Some(&self.player_armaments),
            Category::HostileArmaments => Some(&self.hostile_armaments),
            _ => None,
        }
    }

    fn ships(&self, category: Category) -> Option<&Collection<dyn Ship>> {
        match category {
            Category::Hostiles => Some(&self.hostiles),
            Category::Misc => Some(&self.misc),
            _ => None,
        }
    }

    fn ships_mut(&mut self, category: Category) -> Option<&mut Collection<dyn Ship>> {
        match category {
            Category::Hostiles => Some(&mut self.hostiles),
            Category::Misc => Some(&mut self.misc),
            _ => None,
        }
    }

    fn len(&self, category: Category) -> usize {
        match category {
            Category::Player => self.player.len(),
            Category::PlayerArmaments => self.player_armaments.len(),
            Category::Hostiles => self.hostiles.len(),
            Category::HostileArmaments => self.hostile_armaments.len(),
            Category::Misc => self.misc.len(),
        }
    }

    fn get(&self, category: Category, key: EntityKey) -> Option<&dyn Entity> {
        match category {
            Category::Player => self.player.get(key).map(AsEntity::as_entity),
            Category::PlayerArmaments => self.player_armaments.get(key).map(AsEntity::as_entity),
            Category::Hostiles => self.hostiles.get(key).map(AsEntity::as_entity),
            Category::HostileArmaments => self.hostile_armaments.get(key).map(AsEntity::as_entity),
            Category::Misc => self.misc.get(key).map(AsEntity::as_entity),
        }
    }

    fn get_mut(&mut self, category: Category, key: EntityKey) -> Option<&mut dyn Entity> {
        match category {
            Category::Player => self.player.get_mut(key).map(AsEntity::as_entity_mut),
            Category::PlayerArmaments => self
                .player_armaments
                .get_mut(key)
                .map(AsEntity::as_entity_mut),
            Category::Hostiles => self.hostiles.get_mut(key).map(AsEntity::as_entity_mut),
            Category::HostileArmaments => self
                .hostile_armaments
                .get_mut(key)
                .map(AsEntity::as_entity_mut),
            Category::Misc => self.misc.get_mut(key).map(AsEntity::as_entity_mut),
        }
    }

    /// Hands the entity back if its kind is wrong for the category
    fn insert(
        &mut self,
        category: Category,
        key: EntityKey,
        entity: AnyEntity,
    ) -> Result<(), AnyEntity> {
        match (category, entity) {
            (Category::Player, AnyEntity::Player(e)) => self.player.insert(key, e),
            (Category::PlayerArmaments, AnyEntity::Projectile(e)) => {
                self.player_armaments.insert(key, e)
            }
            (Category::Hostiles, AnyEntity::Ship(e)) => self.hostiles.insert(key, e),
            (Category::HostileArmaments, AnyEntity::Projectile(e)) => {
                self.hostile_armaments.insert(key, e)
            }
            (Category::Misc, AnyEntity::Ship(e)) => self.misc.insert(key, e),
            (_, entity) => return Err(entity),
        }
        Ok(())
    }

    fn remove(&mut self, category: Category, key: EntityKey) -> Option<AnyEntity> {
        match category {
            Category::Player => self.player.remove(key).map(AnyEntity::Player),
            Category::PlayerArmaments => self.player_armaments.remove(key).map(AnyEntity::Projectile),
            Category::Hostiles => self.hostiles.remove(key).map(AnyEntity::Ship),
            Category::HostileArmaments => {
                self.hostile_armaments.remove(key).map(AnyEntity::Projectile)
            }
            Category::Misc => self.misc.remove(key).map(AnyEntity::Ship),
        }
    }

    fn refs<'a>(&'a self, category: Category, out: &mut Vec<EntityRef<'a>>) {
        match category {
            Category::Player => out.extend(self.player.refs(category)),
            Category::PlayerArmaments => out.extend(self.player_armaments.refs(category)),
            Category::Hostiles => out.extend(self.hostiles.refs(category)),
            Category::HostileArmaments => out.extend(self.hostile_armaments.refs(category)),
            Category::Misc => out.extend(self.misc.refs(category)),
        }
    }

    fn sweep(
        &mut self,
        category: Category,
        frame: &mut Frame,
        canvas: &mut dyn Canvas,
    ) -> (usize, Vec<EntityKey>) {
        match category {
            Category::Player => self.player.sweep(category, frame, canvas),
            Category::PlayerArmaments => self.player_armaments.sweep(category, frame, canvas),
            Category::Hostiles => self.hostiles.sweep(category, frame, canvas),
            Category::HostileArmaments => self.hostile_armaments.sweep(category, frame, canvas),
            Category::Misc => self.misc.sweep(category, frame, canvas),
        }
    }
}

/// Owns every live entity of a session. Entities are grouped by category, and each one is known
/// by the key the registry gave it when it was added. There is never more than one player.
pub struct Registry {
    /// Allocates every key and records which category it was added to. Its length is the live
    /// count.
    keys: SlotMap<EntityKey, Category>,
    categories: Categories,
}

impl Registry {
    /// Creates an empty registry and bootstraps the player in the middle of the play area
    pub fn new(dimensions: &dyn DimensionProvider, new_player: &PlayerFactory) -> Self {
        let mut registry = Self {
            keys: SlotMap::with_key(),
            categories: Categories::default(),
        };
        registry.bootstrap(dimensions, new_player);
        registry
    }

    /// Panics if there is already a player
    fn bootstrap(&mut self, dimensions: &dyn DimensionProvider, new_player: &PlayerFactory) {
        if let Some((key, _)) = self.player() {
            panic!("player {} already exists, can not bootstrap another", key);
        }
        let center = dimensions.dimensions().center();
        match self.add_entity(Category::Player, AnyEntity::Player(new_player(center))) {
            Ok(key) => info!("player {} created at ({}, {})", key, center.x, center.y),
            Err(e) => panic!("failed to bootstrap player: {}", e),
        }
    }

    /// Stores the entity under a freshly allocated key, which is returned
    pub fn add_entity(&mut self, category: Category, entity: AnyEntity) -> RegistryResult<EntityKey> {
        if entity.kind() != category.kind() {
            return Err(RegistryError::CategoryMismatch {
                category,
                kind: entity.kind(),
            });
        }
        if category == Category::Player {
            if let Some((player, _)) = self.player() {
                return Err(RegistryError::PlayerAlreadyExists(player));
            }
        }
        let key = self.keys.insert(category);
        match self.categories.insert(category, key, entity) {
            Ok(()) => {
                debug!("{}{} added", category, key);
                Ok(key)
            }
            Err(entity) => {
                self.keys.remove(key);
                Err(RegistryError::CategoryMismatch {
                    category,
                    kind: entity.kind(),
                })
            }
        }
    }

    /// Takes the entity out of the registry. Nothing changes if it is not in that category.
    pub fn remove_entity_from(
        &mut self,
        category: Category,
        key: EntityKey,
    ) -> RegistryResult<AnyEntity> {
        if !self.contains(category, key) {
            return Err(RegistryError::NoSuchEntity(category, key));
        }
        let entity = self
            .categories
            .remove(category, key)
            .ok_or(RegistryError::NoSuchEntity(category, key))?;
        self.keys.remove(key);
        debug!("{}{} removed", category, key);
        Ok(entity)
    }

    /// Runs one frame: every entity is updated then drawn, and the ones flagged for removal are
    /// dropped right after their turn. Entities spawned during the sweep are added at the end and
    /// first get updated on the next one.
    pub fn update_and_draw_all_entities(
        &mut self,
        frame: &mut Frame,
        canvas: &mut dyn Canvas,
    ) -> SweepReport {
        let mut report = SweepReport::default();
        for category in Category::ALL {
            let (visited, reaped) = self.categories.sweep(category, frame, canvas);
            report.visited += visited;
            report.reaped += reaped.len();
            for key in reaped {
                self.keys.remove(key);
            }
        }
        for (category, entity) in frame.take_spawns() {
            match self.add_entity(category, entity) {
                Ok(_) => report.spawned += 1,
                Err(e) => warn!("dropped spawned entity: {}", e),
            }
        }
        debug_assert_eq!(self.size(), self.counted());
        report
    }

    /// All entities in the given categories, or in every category if None
    pub fn entities_by_category(&self, filter: Option<&[Category]>) -> Vec<EntityRef<'_>> {
        let mut found = Vec::new();
        for category in Category::ALL {
            if category.matches(filter) {
                self.categories.refs(category, &mut found);
            }
        }
        found
    }

    pub fn player(&self) -> Option<(EntityKey, &dyn PlayerEntity)> {
        self.categories
            .player
            .iter()
            .next()
            .map(|(key, player)| (key, player as &dyn PlayerEntity))
    }

    pub fn player_mut(&mut self) -> Option<(EntityKey, &mut dyn PlayerEntity)> {
        self.categories
            .player
            .iter_mut()
            .next()
            .map(|(key, player)| (key, player as &mut dyn PlayerEntity))
    }

    /// Typed view of an armament category
    pub fn projectiles(
        &self,
        category: Category,
    ) -> RegistryResult<impl Iterator<Item = (EntityKey, &dyn Projectile)>> {
        self.categories
            .projectiles(category)
            .map(|collection| {
                collection
                    .iter()
                    .map(|(key, projectile)| (key, projectile as &dyn Projectile))
            })
            .ok_or(RegistryError::CategoryMismatch {
                category,
                kind: EntityKind::Projectile,
            })
    }

    /// Typed view of a ship category
    pub fn ships(
        &self,
        category: Category,
    ) -> RegistryResult<impl Iterator<Item = (EntityKey, &dyn Ship)>> {
        self.categories
            .ships(category)
            .map(|collection| collection.iter().map(|(key, ship)| (key, ship as &dyn Ship)))
            .ok_or(RegistryError::CategoryMismatch {
                category,
                kind: EntityKind::Ship,
            })
    }

    pub fn ship_mut(&mut self, category: Category, key: EntityKey) -> RegistryResult<&mut dyn Ship> {
        let ships = self
            .categories
            .ships_mut(category)
            .ok_or(RegistryError::CategoryMismatch {
                category,
                kind: EntityKind::Ship,
            })?;
        match ships.get_mut(key) {
            Some(ship) => Ok(ship),
            None => Err(RegistryError::NoSuchEntity(category, key)),
        }
    }

    pub fn get(&self, category: Category, key: EntityKey) -> RegistryResult<&dyn Entity> {
        self.categories
            .get(category, key)
            .ok_or(RegistryError::NoSuchEntity(category, key))
    }

    pub fn get_mut(&mut self, category: Category, key: EntityKey) -> RegistryResult<&mut dyn Entity> {
        self.categories
            .get_mut(category, key)
            .ok_or(RegistryError::NoSuchEntity(category, key))
    }

    pub fn contains(&self, category: Category, key: EntityKey) -> bool {
        self.get(category, key).is_ok()
    }

    /// Number of live entities across all categories
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    pub fn category_len(&self, category: Category) -> usize {
        self.categories.len(category)
    }

    fn counted(&self) -> usize {
        Category::ALL.iter().map(|c| self.categories.len(*c)).sum()
    }
}
