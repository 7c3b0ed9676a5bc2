use crate::Money;

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Open,
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Open => "OPEN",
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
        };

        return f.write_str(name);
    }
}

/// One ledger entry. Fields are private so an entry can't change once recorded.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    timestamp: NaiveDateTime,
    kind: TransactionKind,
    amount: Money,
    balance: Money,
}

impl Transaction {
    pub fn new(
        timestamp: NaiveDateTime,
        kind: TransactionKind,
        amount: Money,
        balance: Money,
    ) -> Self {
        Self {
            timestamp,
            kind,
            amount,
            balance,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Account balance right after this entry was applied
    pub fn balance(&self) -> Money {
        self.balance
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(
            f,
            "{} | {} | {} | Balance: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount,
            self.balance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();

        let tx = Transaction::new(
            timestamp,
            TransactionKind::Withdraw,
            Money::units(500),
            Money(12_345),
        );

        assert_eq!(
            tx.to_string(),
            "2024-05-17 09:30:05 | WITHDRAW | 500.00 | Balance: 1.2345"
        );
        assert_eq!(tx.date(), NaiveDate::from_ymd_opt(2024, 5, 17).unwrap());
    }
}
