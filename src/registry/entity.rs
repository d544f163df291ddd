use super::*;

/// What every object stored in the registry must be able to do. Identity is not part of the
/// entity: the registry assigns it and keeps it next to the entity.
pub trait Entity {
    /// Advance by one frame. May flag the entity for removal or queue spawns on the frame.
    fn update(&mut self, frame: &mut Frame);
    /// Render the current state
    fn draw(&self, canvas: &mut dyn Canvas);
    fn position(&self) -> Point2<f64>;
    /// If set, the registry drops the entity at the end of its turn in the sweep
    fn is_to_be_removed(&self) -> bool;
    fn mark_for_removal(&mut self);
}

/// Lets category trait objects be viewed as plain entities
pub trait AsEntity {
    fn as_entity(&self) -> &dyn Entity;
    fn as_entity_mut(&mut self) -> &mut dyn Entity;
}

impl<T: Entity> AsEntity for T {
    fn as_entity(&self) -> &dyn Entity {
        self
    }

    fn as_entity_mut(&mut self) -> &mut dyn Entity {
        self
    }
}

/// The one ship the player controls
pub trait PlayerEntity: Entity + AsEntity {
    fn lives(&self) -> u32;
    /// Running out of lives flags the player for removal
    fn lose_lives(&mut self, lives: u32);
}

/// Shots, missiles and anything else fired by a ship
pub trait Projectile: Entity + AsEntity {
    /// What a hit with this does to a ship's hull, or how many lives it costs the player
    fn damage(&self) -> u32;
}

/// Enemy craft and other ship-like things
pub trait Ship: Entity + AsEntity {
    /// Hit radius
    fn radius(&self) -> f64;
    /// A ship that can't take any more flags itself for removal
    fn take_damage(&mut self, damage: u32);
}
