//! Concrete entities built from validated fields.
//!
//! Identity entities ([`Member`], [`Product`], [`BankAccount`]) carry a
//! [`CanonicalId`](crate::identity::CanonicalId) and compare by its key.
//! Character entities ([`Wand`], [`Wizard`], [`Hero`]) are plain records with
//! guarded setters; a wizard holds a shared, non-owning reference to its wand.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use identity_values::entities::Member;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let a = Member::new("M001", 500)?;
//!     let b = Member::new("m001", 100)?;
//!     assert_eq!(a, b);
//!     assert_eq!(a.to_string(), "Pt500(会員ID:M001)");
//!     Ok(())
//! }
//! ```

/// Implement identity equality, hashing and [`IdentityValue`] for an entity
/// whose identity is a `CanonicalId` field.
///
/// [`IdentityValue`]: crate::identity::IdentityValue
macro_rules! impl_identity_value {
    ($type:ty, kind: $kind:expr, id: $id:ident) => {
        impl PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self, other) || self.$id == other.$id
            }
        }

        impl Eq for $type {}

        impl std::hash::Hash for $type {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.$id, state);
            }
        }

        impl $crate::identity::IdentityValue for $type {
            fn kind(&self) -> &'static str {
                $kind
            }

            fn identity(&self) -> &str {
                self.$id.as_str()
            }

            fn normalization(&self) -> $crate::identity::Normalization {
                self.$id.rule()
            }

            fn canonical_key(&self) -> String {
                self.$id.key().to_string()
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    };
}

mod bank_account;
mod hero;
mod member;
mod product;
mod wand;
mod wizard;

pub use bank_account::BankAccount;
pub use hero::Hero;
pub use member::Member;
pub use product::Product;
pub use wand::Wand;
pub use wizard::Wizard;
