//! Identity semantics for entities.
//!
//! Entities compare by the canonical key of their identity field rather than
//! by every field. The rule producing that key is a [`Normalization`] attached
//! to each entity type, and the key itself lives in a [`CanonicalId`].
//!
//! ## Design Principles
//!
//! - **Key-based equality**: two entities are equal when their canonical keys
//!   are equal, whatever their other fields hold
//! - **Hash agrees with equality**: hashing uses the same canonical key
//! - **Same variant only**: entities of different types are never equal

mod canonical_id;
mod normalization;

pub use canonical_id::CanonicalId;
pub use normalization::Normalization;

use std::any::Any;
use std::fmt::{Debug, Display};

/// Core trait for entities with a custom identity relation.
///
/// Implementors also implement `PartialEq`, `Eq` and `Hash` in terms of
/// [`canonical_key`](IdentityValue::canonical_key); [`identity_eq`] offers the
/// same relation for trait objects.
pub trait IdentityValue: Debug + Display {
    /// Short name of the concrete entity type, used in logs
    fn kind(&self) -> &'static str;

    /// The identity field as supplied
    fn identity(&self) -> &str;

    /// Rule mapping the identity field to its canonical key
    fn normalization(&self) -> Normalization;

    /// The canonical comparison key
    fn canonical_key(&self) -> String {
        self.normalization().apply(self.identity())
    }

    /// Whether bare identity text refers to this entity.
    fn matches_raw(&self, raw: &str) -> bool {
        self.normalization().apply(raw) == self.canonical_key()
    }

    fn as_any(&self) -> &dyn Any;
}

/// Identity equality between two possibly different entity types.
///
/// True iff both are the same concrete type and either refer to the same
/// object or carry equal canonical keys. A struct and its first field can share
/// an address, so the type is compared before the address.
pub fn identity_eq(left: &dyn IdentityValue, right: &dyn IdentityValue) -> bool {
    if left.as_any().type_id() != right.as_any().type_id() {
        return false;
    }
    std::ptr::addr_eq(left as *const dyn IdentityValue, right as *const dyn IdentityValue)
        || left.canonical_key() == right.canonical_key()
}
