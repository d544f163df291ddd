use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// The entity is of a kind the category does not hold
    CategoryMismatch {
        category: Category,
        kind: EntityKind,
    },
    /// The player category already holds the given player
    PlayerAlreadyExists(EntityKey),
    /// Nothing with this key is stored in the category
    NoSuchEntity(Category, EntityKey),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::CategoryMismatch { category, kind } => {
                write!(f, "a {} can not be stored in {}", kind, category)
            }
            Self::PlayerAlreadyExists(key) => write!(f, "player {} already exists", key),
            Self::NoSuchEntity(category, key) => write!(f, "{}{} does not exist", category, key),
        }
    }
}

impl Error for RegistryError {}
