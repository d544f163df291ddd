use super::*;

/// The fixed storage partitions of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Player,
    PlayerArmaments,
    Hostiles,
    HostileArmaments,
    Misc,
}

impl Category {
    /// Every category, in the order a sweep visits them
    pub const ALL: [Category; 5] = [
        Category::Player,
        Category::PlayerArmaments,
        Category::Hostiles,
        Category::HostileArmaments,
        Category::Misc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::PlayerArmaments => "player_armaments",
            Self::Hostiles => "hostiles",
            Self::HostileArmaments => "hostile_armaments",
            Self::Misc => "misc",
        }
    }

    /// The kind of entity this category is allowed to hold
    pub fn kind(self) -> EntityKind {
        match self {
            Self::Player => EntityKind::Player,
            Self::PlayerArmaments | Self::HostileArmaments => EntityKind::Projectile,
            Self::Hostiles | Self::Misc => EntityKind::Ship,
        }
    }

    /// A missing filter matches everything
    pub fn matches(self, filter: Option<&[Category]>) -> bool {
        filter.map_or(true, |categories| categories.contains(&self))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
