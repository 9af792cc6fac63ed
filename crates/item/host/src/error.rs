//! Errors raised by the host item model.

use crate::material::{Material, MetaShape};

/// Failures when attaching an attribute record to a stack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaError {
    /// The record was created for a shape the stack's material does not carry.
    #[error("{shape} record cannot be attached to {material}")]
    ShapeMismatch {
        material: Material,
        shape: MetaShape,
    },

    /// The stack's material cannot carry any record.
    #[error("{0} cannot carry an item meta record")]
    Unsupported(Material),
}

/// Failures when parsing a namespaced key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("namespaced key '{0}' is missing the ':' separator")]
    MissingSeparator(String),

    #[error("namespaced key '{0}' contains invalid characters")]
    InvalidCharacters(String),
}
