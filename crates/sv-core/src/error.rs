use crate::actor::ActorId;
use crate::item::ItemId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating documents.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested actor ID does not exist in the store.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// The requested item is not embedded in the actor.
    #[error("item {item} not found on actor {actor}")]
    ItemNotFound {
        /// Owning actor.
        actor: ActorId,
        /// Missing item.
        item: ItemId,
    },

    /// An actor with the same name already exists.
    #[error("actor already exists: \"{0}\"")]
    DuplicateName(String),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
