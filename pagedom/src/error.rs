use thiserror::Error;

/// Errors raised when a surface operation cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("no element with id '{0}'")]
    NotFound(String),
    #[error("an element with id '{0}' already exists")]
    DuplicateId(String),
    #[error("element '{id}' is a <{tag}>, not a text control")]
    NotAControl { id: String, tag: &'static str },
}
