//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Resource clients translate these
//! into their own error enums (see [`ActorClient::map_error`](crate::framework::ActorClient::map_error)).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns the original framework error untouched when it is not an entity error
    /// or when the boxed error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(e) => e
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_downcast_entity_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(Boom));
        assert_eq!(err.downcast_entity::<Boom>().unwrap(), Boom);
    }

    #[test]
    fn test_downcast_entity_keeps_other_errors() {
        let err = FrameworkError::NotFound("x".into());
        assert!(matches!(
            err.downcast_entity::<Boom>(),
            Err(FrameworkError::NotFound(id)) if id == "x"
        ));

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("io")));
        assert!(matches!(
            foreign.downcast_entity::<Boom>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
