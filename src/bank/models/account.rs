use super::{AccountInfo, DailyLimit, Passbook, Transaction, TransactionKind};

use crate::clock::Clock;
use crate::ids::AccountNumber;
use crate::{Money, Result};

use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;

use serde::Serialize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Invalid amount {0}: must be greater than zero")]
    InvalidAmount(Money),

    #[error("Insufficient balance in account {account}: cannot withdraw {requested} from {balance}")]
    InsufficientBalance {
        account: AccountNumber,
        requested: Money,
        balance: Money,
    },

    #[error("Withdrawal limit exceeded for account {account}: {withdrawn_today} of {daily_limit} already withdrawn today, cannot withdraw {requested}")]
    DailyLimitExceeded {
        account: AccountNumber,
        requested: Money,
        withdrawn_today: Money,
        daily_limit: Money,
    },
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Savings,
    Current,
}

impl AccountType {
    /// Case-insensitive match on `"savings"` or `"current"`
    pub fn parse(string: &str) -> Option<Self> {
        let string = string.trim();

        if string.eq_ignore_ascii_case("savings") {
            return Some(Self::Savings);
        }

        if string.eq_ignore_ascii_case("current") {
            return Some(Self::Current);
        }

        None
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Savings => f.write_str("Savings"),
            Self::Current => f.write_str("Current"),
        };
    }
}

/// Kind-specific state. Withdrawal rules dispatch on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    Savings(DailyLimit),
    Current,
}

impl AccountKind {
    pub fn account_type(&self) -> AccountType {
        return match self {
            Self::Savings(_) => AccountType::Savings,
            Self::Current => AccountType::Current,
        };
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    balance: Money,
    ledger: Vec<Transaction>,
    kind: AccountKind,
    clock: Rc<dyn Clock>,
}

impl Account {
    /// Opens an account and records the initial deposit as its first entry.
    ///
    /// Callers are responsible for validating the holder name and deposit, and for
    /// handing out unique account numbers.
    pub(crate) fn open(
        number: AccountNumber,
        holder_name: String,
        initial_deposit: Money,
        kind: AccountKind,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let mut account = Self {
            number,
            holder_name,
            balance: initial_deposit,
            ledger: vec![],
            kind,
            clock,
        };

        account.record(TransactionKind::Open, initial_deposit);

        account
    }

    pub(crate) fn open_savings(
        number: AccountNumber,
        holder_name: String,
        initial_deposit: Money,
        daily_limit: Money,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let kind = AccountKind::Savings(DailyLimit::new(daily_limit, clock.today()));

        Self::open(number, holder_name, initial_deposit, kind, clock)
    }

    pub(crate) fn open_current(
        number: AccountNumber,
        holder_name: String,
        initial_deposit: Money,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self::open(number, holder_name, initial_deposit, AccountKind::Current, clock)
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    /// Savings only
    pub fn daily_limit(&self) -> Option<Money> {
        self.savings_limit().map(DailyLimit::limit)
    }

    /// Savings only. Reflects the last withdrawal attempt; a new day isn't picked up until then.
    pub fn withdrawn_today(&self) -> Option<Money> {
        self.savings_limit().map(DailyLimit::withdrawn_today)
    }

    fn savings_limit(&self) -> Option<&DailyLimit> {
        match self.kind() {
            AccountKind::Savings(limit) => Some(limit),
            AccountKind::Current => None,
        }
    }

    /// Full ledger, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger
    }

    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            number: self.number,
            holder_name: self.holder_name.clone(),
            account_type: self.account_type(),
            balance: self.balance,
        }
    }

    /// Ledger entries dated within `[from, to]`, oldest first.
    /// Can be called again with other bounds.
    pub fn passbook(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Passbook<'_> {
        Passbook::new(&self.ledger, from, to)
    }

    /// Adds `amount` to the balance, returning the new balance
    pub fn deposit(&mut self, amount: Money) -> Result<Money> {
        log::debug!("Depositing {amount} to account {}", self.number);

        self.ensure_positive(amount)?;

        let mut balance = self.balance;
        balance.add(&amount)?;

        self.balance = balance;
        self.record(TransactionKind::Deposit, amount);

        log::info!(
            "{amount} deposited to account {}. New balance: {}",
            self.number,
            self.balance
        );

        Ok(self.balance)
    }

    /// Takes `amount` out of the balance, returning the new balance.
    ///
    /// Never leaves the balance negative. Savings accounts are also held to their daily limit,
    /// which restarts on the first withdrawal attempt of each calendar day.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money> {
        log::debug!("Withdrawing {amount} from account {}", self.number);

        self.ensure_positive(amount)?;

        if let AccountKind::Savings(limit) = &mut self.kind {
            limit.roll_over(self.clock.today());
        }

        if amount > self.balance {
            log::warn!(
                "Rejected withdrawal of {amount} from account {}: balance is {}",
                self.number,
                self.balance
            );

            Err(AccountError::InsufficientBalance {
                account: self.number,
                requested: amount,
                balance: self.balance,
            })?
        }

        if let AccountKind::Savings(limit) = &self.kind {
            if limit.would_exceed(&amount)? {
                log::warn!(
                    "Rejected withdrawal of {amount} from account {}: daily limit {} reached",
                    self.number,
                    limit.limit()
                );

                Err(AccountError::DailyLimitExceeded {
                    account: self.number,
                    requested: amount,
                    withdrawn_today: limit.withdrawn_today(),
                    daily_limit: limit.limit(),
                })?
            }
        }

        let mut balance = self.balance;
        balance.sub(&amount)?;

        if let AccountKind::Savings(limit) = &mut self.kind {
            limit.record(&amount)?;
        }

        self.balance = balance;
        self.record(TransactionKind::Withdraw, amount);

        log::info!(
            "{amount} withdrawn from account {}. Remaining balance: {}",
            self.number,
            self.balance
        );

        Ok(self.balance)
    }

    fn ensure_positive(&self, amount: Money) -> Result {
        if !amount.is_positive() {
            log::warn!(
                "Rejected non-positive amount {amount} for account {}",
                self.number
            );

            Err(AccountError::InvalidAmount(amount))?
        }

        Ok(())
    }

    fn record(&mut self, kind: TransactionKind, amount: Money) {
        let tx = Transaction::new(self.clock.now(), kind, amount, self.balance);

        log::debug!("Recording transaction on account {}: {tx:?}", self.number);

        self.ledger.push(tx);
    }
}
