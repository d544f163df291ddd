use super::*;

/// The entities of a single category. Keys are allocated by the registry, this only stores.
pub struct Collection<T: ?Sized> {
    entities: SecondaryMap<EntityKey, Box<T>>,
}

impl<T: ?Sized> Default for Collection<T> {
    fn default() -> Self {
        Self {
            entities: SecondaryMap::new(),
        }
    }
}

impl<T: ?Sized + AsEntity> Collection<T> {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn get(&self, key: EntityKey) -> Option<&T> {
        self.entities.get(key).map(|entity| &**entity)
    }

    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut T> {
        self.entities.get_mut(key).map(|entity| &mut **entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &T)> {
        self.entities.iter().map(|(key, entity)| (key, &**entity))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityKey, &mut T)> {
        self.entities
            .iter_mut()
            .map(|(key, entity)| (key, &mut **entity))
    }

    /// The key must be freshly allocated
    pub fn insert(&mut self, key: EntityKey, entity: Box<T>) {
        let previous = self.entities.insert(key, entity);
        debug_assert!(previous.is_none(), "{} inserted twice", key);
    }

    pub fn remove(&mut self, key: EntityKey) -> Option<Box<T>> {
        self.entities.remove(key)
    }

    pub fn refs(&self, category: Category) -> impl Iterator<Item = EntityRef<'_>> {
        self.entities.iter().map(move |(key, entity)| EntityRef {
            category,
            key,
            entity: (**entity).as_entity(),
        })
    }

    /// Updates then draws every entity present when called, dropping the ones that end their
    /// turn flagged for removal. Returns how many were visited and the keys that were dropped.
    pub fn sweep(
        &mut self,
        category: Category,
        frame: &mut Frame,
        canvas: &mut dyn Canvas,
    ) -> (usize, Vec<EntityKey>) {
        let snapshot: Vec<EntityKey> = self.entities.keys().collect();
        let mut visited = 0;
        let mut reaped = Vec::new();
        for key in snapshot {
            let entity = match self.entities.get_mut(key) {
                Some(entity) => (**entity).as_entity_mut(),
                None => continue,
            };
            visited += 1;
            entity.update(frame);
            entity.draw(canvas);
            if entity.is_to_be_removed() {
                self.entities.remove(key);
                reaped.push(key);
                debug!("{}{} reaped", category, key);
            }
        }
        (visited, reaped)
    }
}
