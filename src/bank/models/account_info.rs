use super::AccountType;

use crate::ids::AccountNumber;
use crate::Money;

use std::fmt;

use serde::Serialize;

/// Read-only summary of an account
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub number: AccountNumber,
    pub holder_name: String,
    pub account_type: AccountType,
    pub balance: Money,
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Account No: {}", self.number)?;
        writeln!(f, "Holder Name: {}", self.holder_name)?;
        writeln!(f, "Account Type: {}", self.account_type)?;
        write!(f, "Balance: {}", self.balance)
    }
}
