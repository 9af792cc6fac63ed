//! Error infrastructure for item descriptors.
//!
//! Two error types cover every fallible operation:
//!
//! - [`BuildError`] for assembly and hydration (`build`, `from_stack`).
//! - [`AccessError`] for point access into descriptor collections.
//!
//! Both implement [`ItemError`], which classifies a failure and exposes a
//! stable code for matching in callers and tests.

use item_host::{Enchantment, Material, MetaError};

use crate::capability::CapabilityKind;

/// Broad class of a descriptor failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// A required attribute was never set.
    Precondition,

    /// The capability payload and the host record disagree on shape.
    Capability,

    /// Point access past the end of an ordered collection.
    Index,

    /// Lookup of a key the table does not hold.
    KeyNotFound,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Precondition => "precondition",
            Self::Capability => "capability",
            Self::Index => "index",
            Self::KeyNotFound => "key_not_found",
        }
    }

    /// Whether the caller can fix the failure by changing the descriptor.
    pub const fn is_caller_fixable(&self) -> bool {
        !matches!(self, Self::Capability)
    }
}

/// Common trait for descriptor errors.
pub trait ItemError: core::fmt::Display + core::fmt::Debug {
    fn category(&self) -> ErrorCategory;

    /// Static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures while assembling a descriptor into a stack or hydrating one
/// from a stack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildError {
    /// `build` was called before a material was set.
    #[error("item descriptor has no material")]
    MissingMaterial,

    /// The material cannot carry an attribute record at all.
    #[error("{material} cannot carry item attributes")]
    MetaUnsupported { material: Material },

    /// The capability payload does not fit the record the material carries.
    #[error("{capability} capability does not apply to {material}")]
    CapabilityMismatch {
        capability: CapabilityKind,
        material: Material,
    },

    /// The stack rejected the assembled record.
    #[error(transparent)]
    Meta(#[from] MetaError),
}

impl ItemError for BuildError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingMaterial => ErrorCategory::Precondition,
            Self::MetaUnsupported { .. } | Self::CapabilityMismatch { .. } | Self::Meta(_) => {
                ErrorCategory::Capability
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingMaterial => "BUILD_MISSING_MATERIAL",
            Self::MetaUnsupported { .. } => "BUILD_META_UNSUPPORTED",
            Self::CapabilityMismatch { .. } => "BUILD_CAPABILITY_MISMATCH",
            Self::Meta(_) => "BUILD_META_REJECTED",
        }
    }
}

/// Failures of point access into descriptor collections.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessError {
    #[error("{collection} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("no stored enchantment {0}")]
    StoredEnchantMissing(Enchantment),
}

impl AccessError {
    pub(crate) fn index(collection: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            collection,
            index,
            len,
        }
    }
}

impl ItemError for AccessError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::IndexOutOfRange { .. } => ErrorCategory::Index,
            Self::StoredEnchantMissing(_) => ErrorCategory::KeyNotFound,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "ACCESS_INDEX_OUT_OF_RANGE",
            Self::StoredEnchantMissing(_) => "ACCESS_STORED_ENCHANT_MISSING",
        }
    }
}

/// Reads `items[index]`, or reports which collection was overrun.
pub(crate) fn get_indexed<'a, T>(
    collection: &'static str,
    items: &'a [T],
    index: usize,
) -> Result<&'a T, AccessError> {
    items
        .get(index)
        .ok_or_else(|| AccessError::index(collection, index, items.len()))
}

/// Replaces `items[index]`, or reports which collection was overrun.
pub(crate) fn set_indexed<T>(
    collection: &'static str,
    items: &mut [T],
    index: usize,
    value: T,
) -> Result<(), AccessError> {
    let len = items.len();
    let slot = items
        .get_mut(index)
        .ok_or_else(|| AccessError::index(collection, index, len))?;
    *slot = value;
    Ok(())
}

/// Removes `items[index]`, or reports which collection was overrun.
pub(crate) fn remove_indexed<T>(
    collection: &'static str,
    items: &mut Vec<T>,
    index: usize,
) -> Result<T, AccessError> {
    if index < items.len() {
        Ok(items.remove(index))
    } else {
        Err(AccessError::index(collection, index, items.len()))
    }
}
