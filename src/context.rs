//! Explicitly owned usage counters.
//!
//! A [`ChargeCounter`] tracks how many more times an ability may be used.
//! It is an ordinary value held by whoever owns it: two entities only draw
//! from the same pool when the caller hands them the same counter.

use crate::error::{ValidationError, ValueError, ValueResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// Remaining uses of a limited ability.
///
/// Every use costs at least one charge, so a counter always runs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChargeRecord")]
pub struct ChargeCounter {
    remaining: u32,
    cost: u32,
}

#[derive(Deserialize)]
struct ChargeRecord {
    remaining: u32,
    cost: u32,
}

impl ChargeCounter {
    /// Create a counter holding `remaining` charges, spending `cost` per use.
    ///
    /// A zero `cost` is rejected.
    pub fn new(remaining: u32, cost: u32) -> ValueResult<Self> {
        if cost == 0 {
            return Err(ValueError::invalid_argument(
                "cost",
                ValidationError::out_of_range(cost, 1, u32::MAX),
            ));
        }
        Ok(Self { remaining, cost })
    }

    /// Spend one use if enough charges are left.
    ///
    /// Returns `false` and leaves the counter unchanged when exhausted.
    pub fn try_consume(&mut self) -> bool {
        match self.remaining.checked_sub(self.cost) {
            Some(left) => {
                self.remaining = left;
                debug!("Consumed {} charge(s), {} left", self.cost, left);
                true
            }
            None => {
                debug!("No charges left ({} remaining, {} needed)", self.remaining, self.cost);
                false
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining < self.cost
    }
}

impl TryFrom<ChargeRecord> for ChargeCounter {
    type Error = ValueError;

    fn try_from(record: ChargeRecord) -> ValueResult<Self> {
        Self::new(record.remaining, record.cost)
    }
}

impl Default for ChargeCounter {
    fn default() -> Self {
        Self {
            remaining: 5,
            cost: 1,
        }
    }
}
