//! Validated value objects with custom identity semantics.
//!
//! Entities in this crate are records whose fields validate every assignment
//! before committing it, and whose equality is defined by a canonical key
//! derived from an identity field rather than by comparing every field.
//!
//! # Core Components
//!
//! - [`Validator`] - Pure rules that accept or reject a candidate value
//! - [`ValidatedField`] - A slot that runs its validator before storing
//! - [`IdentityValue`] - Entities compared by a normalized identity key
//! - [`Limits`] - Configurable bounds shared by the entities
//!
//! # Quick Start
//!
//! ```rust
//! use identity_values::entities::{Member, Product};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let m = Member::new("M001", 500)?;
//! assert_eq!(m.to_string(), "Pt500(会員ID:M001)");
//! assert_eq!(m, Member::new("m001", 100)?);
//!
//! let p = Product::new("A001", 980)?;
//! assert_eq!(p, Product::new(" A001 ", 100)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod entities;
pub mod error;
pub mod field;
pub mod identity;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::Limits;
pub use context::ChargeCounter;
pub use error::{ValidationError, ValidationResult, ValueError, ValueResult};
pub use field::{Assignment, FieldPolicy, ValidatedField};
pub use identity::{CanonicalId, IdentityValue, Normalization, identity_eq};
pub use validation::{Validator, Verdict};
