//! Member entity: a point-card holder identified by a case-insensitive ID.

use crate::error::{ValueError, ValueResult};
use crate::field::{Assignment, ValidatedField};
use crate::identity::{CanonicalId, Normalization};
use crate::validation::NonNegative;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A loyalty-program member.
///
/// Members compare by member ID ignoring case, so `M001` and `m001` are the
/// same member whatever their point balances. Points may not go negative.
///
/// ## Examples
///
/// ```rust
/// use identity_values::entities::Member;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let member = Member::new("M001", 500)?;
///     println!("{}", member); // Pt500(会員ID:M001)
///
///     assert!(Member::new("M001", -1).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MemberRecord")]
pub struct Member {
    member_id: CanonicalId,
    points: ValidatedField<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberRecord {
    member_id: String,
    points: i64,
}

impl Member {
    /// Create a new Member with validation.
    pub fn new(member_id: impl Into<String>, points: i64) -> ValueResult<Self> {
        Ok(Self {
            member_id: CanonicalId::new("memberId", member_id, Normalization::CaseFold)?,
            points: ValidatedField::new("points", NonNegative).with_initial(points)?,
        })
    }

    /// The member ID as supplied.
    pub fn member_id(&self) -> &str {
        self.member_id.as_str()
    }

    pub fn points(&self) -> ValueResult<i64> {
        self.points.get().copied()
    }

    /// Replace the member ID. The old ID is kept if the new one is blank.
    pub fn set_member_id(&mut self, member_id: impl Into<String>) -> ValueResult<()> {
        self.member_id = CanonicalId::new("memberId", member_id, Normalization::CaseFold)?;
        Ok(())
    }

    pub fn set_points(&mut self, points: i64) -> ValueResult<Assignment> {
        self.points.try_set(points)
    }
}

impl_identity_value!(Member, kind: "member", id: member_id);

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pt{}(会員ID:{})", self.points, self.member_id)
    }
}

impl TryFrom<MemberRecord> for Member {
    type Error = ValueError;

    fn try_from(record: MemberRecord) -> ValueResult<Self> {
        Self::new(record.member_id, record.points)
    }
}
