//! Error types for Placard core.

use std::fmt;

/// Errors that can occur during container tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The container ID is invalid or has been removed from the tree.
    InvalidContainerId,
    /// Attempted to set a container as its own parent/ancestor.
    CircularParentage,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContainerId => write!(f, "Invalid or removed container ID"),
            Self::CircularParentage => {
                write!(f, "Cannot set a container as its own parent or ancestor")
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// A specialized Result type for container tree operations.
pub type ContainerResult<T> = std::result::Result<T, ContainerError>;
