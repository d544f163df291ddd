use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Projectile,
    Ship,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Player => "player",
            Self::Projectile => "projectile",
            Self::Ship => "ship",
        };
        write!(f, "{}", name)
    }
}

/// An entity on its way into (or out of) the registry, tagged with its kind
pub enum AnyEntity {
    Player(Box<dyn PlayerEntity>),
    Projectile(Box<dyn Projectile>),
    Ship(Box<dyn Ship>),
}

impl AnyEntity {
    pub fn player<T: PlayerEntity + 'static>(player: T) -> Self {
        Self::Player(Box::new(player))
    }

    pub fn projectile<T: Projectile + 'static>(projectile: T) -> Self {
        Self::Projectile(Box::new(projectile))
    }

    pub fn ship<T: Ship + 'static>(ship: T) -> Self {
        Self::Ship(Box::new(ship))
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Player(_) => EntityKind::Player,
            Self::Projectile(_) => EntityKind::Projectile,
            Self::Ship(_) => EntityKind::Ship,
        }
    }
}

impl std::fmt::Debug for AnyEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "AnyEntity({})", self.kind())
    }
}

/// A borrowed view of a stored entity, as returned by registry queries
#[derive(Clone, Copy)]
pub struct EntityRef<'a> {
    pub category: Category,
    pub key: EntityKey,
    pub entity: &'a dyn Entity,
}

impl<'a> std::fmt::Debug for EntityRef<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.category, self.key)
    }
}
