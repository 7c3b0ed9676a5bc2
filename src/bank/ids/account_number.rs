use std::fmt;

use serde::Serialize;

/// Number a [`Bank`](crate::Bank) assigns to an account when it is opened
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountNumber(pub u32);

impl AccountNumber {
    /// The number issued after this one, or `None` once numbers run out
    pub fn next(&self) -> Option<Self> {
        return self.0.checked_add(1).map(AccountNumber);
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
