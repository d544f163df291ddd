//! The entity registry: owns every live entity of a session, hands out identities and runs the
//! per-frame update/draw/reap sweep

use super::*;

use slotmap::{SecondaryMap, SlotMap};

mod any_entity;
mod category;
mod collection;
mod entity;
mod entity_key;
mod frame;
#[allow(clippy::module_inception)]
mod registry;
mod registry_error;

pub use any_entity::{AnyEntity, EntityKind, EntityRef};
pub use category::Category;
pub use entity::{AsEntity, Entity, PlayerEntity, Projectile, Ship};
pub use entity_key::EntityKey;
pub use frame::Frame;
pub use registry::{PlayerFactory, Registry, SweepReport};
pub use registry_error::{RegistryError, RegistryResult};

use collection::Collection;
