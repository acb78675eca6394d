//! BankAccount entity.

use crate::error::{ValueError, ValueResult};
use crate::field::{Assignment, ValidatedField};
use crate::identity::{CanonicalId, IdentityValue, Normalization};
use crate::validation::NonNegative;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank account identified by its account number.
///
/// Account numbers are compared with surrounding whitespace removed, and an
/// account can also be matched against a bare number typed by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BankAccountRecord")]
pub struct BankAccount {
    account_number: CanonicalId,
    balance: ValidatedField<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BankAccountRecord {
    account_number: String,
    balance: i64,
}

impl BankAccount {
    pub fn new(account_number: impl Into<String>, balance: i64) -> ValueResult<Self> {
        Ok(Self {
            account_number: CanonicalId::new(
                "accountNumber",
                account_number,
                Normalization::Trim,
            )?,
            balance: ValidatedField::new("balance", NonNegative).with_initial(balance)?,
        })
    }

    pub fn account_number(&self) -> &str {
        self.account_number.as_str()
    }

    pub fn balance(&self) -> ValueResult<i64> {
        self.balance.get().copied()
    }

    pub fn set_balance(&mut self, balance: i64) -> ValueResult<Assignment> {
        self.balance.try_set(balance)
    }

    /// Whether a bare account number refers to this account.
    pub fn is_number(&self, raw: &str) -> bool {
        self.matches_raw(raw)
    }
}

impl_identity_value!(BankAccount, kind: "bank_account", id: account_number);

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "¥{}(口座番号:{})", self.balance, self.account_number)
    }
}

impl TryFrom<BankAccountRecord> for BankAccount {
    type Error = ValueError;

    fn try_from(record: BankAccountRecord) -> ValueResult<Self> {
        Self::new(record.account_number, record.balance)
    }
}
