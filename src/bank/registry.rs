use crate::clock::{Clock, SystemClock};
use crate::ids::AccountNumber;
use crate::models::{Account, AccountType};
use crate::{Money, Result};

use std::collections::BTreeMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("Holder name must not be empty")]
    EmptyHolderName,

    #[error("Unknown account type {0:?}: expected \"savings\" or \"current\"")]
    UnknownAccountType(String),

    #[error("Invalid initial deposit {0}: must not be negative")]
    InvalidInitialDeposit(Money),

    #[error("Invalid daily limit {0}: must not be negative")]
    InvalidDailyLimit(Money),

    #[error("No account numbers left to issue")]
    AccountNumbersExhausted,
}

/// What `create_account` does with an account type it doesn't recognise
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccountTypePolicy {
    /// Reject with `BankError::UnknownAccountType`
    #[default]
    Strict,

    /// Open a current account instead
    DefaultToCurrent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub name: String,
    pub first_account_number: AccountNumber,
    /// Daily limit given to savings accounts opened through `create_account`
    pub savings_daily_limit: Money,
    pub account_type_policy: AccountTypePolicy,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            name: "Branch Bank".to_string(),
            first_account_number: AccountNumber(1001),
            savings_daily_limit: Money::units(20_000),
            account_type_policy: AccountTypePolicy::Strict,
        }
    }
}

/// Registry of every account opened at one bank. Account numbers are issued in strictly
/// increasing order and never reused.
#[derive(Debug)]
pub struct Bank {
    name: String,
    accounts: BTreeMap<AccountNumber, Account>,
    next_number: Option<AccountNumber>,
    savings_daily_limit: Money,
    account_type_policy: AccountTypePolicy,
    clock: Rc<dyn Clock>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(BankConfig {
            name: name.into(),
            ..BankConfig::default()
        })
    }

    pub fn with_config(config: BankConfig) -> Self {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    pub fn with_clock(config: BankConfig, clock: Rc<dyn Clock>) -> Self {
        return Self {
            name: config.name,
            accounts: BTreeMap::new(),
            next_number: Some(config.first_account_number),
            savings_daily_limit: config.savings_daily_limit,
            account_type_policy: config.account_type_policy,
            clock,
        };
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn savings_daily_limit(&self) -> Money {
        self.savings_daily_limit
    }

    /// Opens a `"savings"` or `"current"` account (any case). Savings accounts get the
    /// bank's configured daily limit.
    pub fn create_account(
        &mut self,
        account_type: &str,
        holder_name: &str,
        initial_deposit: Money,
    ) -> Result<&mut Account> {
        let resolved = match (AccountType::parse(account_type), self.account_type_policy) {
            (Some(resolved), _) => resolved,
            (None, AccountTypePolicy::DefaultToCurrent) => {
                log::warn!("Unknown account type {account_type:?}, opening a current account");
                AccountType::Current
            }
            (None, AccountTypePolicy::Strict) => {
                Err(BankError::UnknownAccountType(account_type.to_string()))?
            }
        };

        return match resolved {
            AccountType::Savings => {
                let daily_limit = self.savings_daily_limit;
                self.open_savings_account(holder_name, initial_deposit, daily_limit)
            }
            AccountType::Current => self.open_current_account(holder_name, initial_deposit),
        };
    }

    pub fn open_savings_account(
        &mut self,
        holder_name: &str,
        initial_deposit: Money,
        daily_limit: Money,
    ) -> Result<&mut Account> {
        if daily_limit.is_negative() {
            Err(BankError::InvalidDailyLimit(daily_limit))?
        }

        self.open_account(holder_name, initial_deposit, |number, holder_name, clock| {
            Account::open_savings(number, holder_name, initial_deposit, daily_limit, clock)
        })
    }

    pub fn open_current_account(
        &mut self,
        holder_name: &str,
        initial_deposit: Money,
    ) -> Result<&mut Account> {
        self.open_account(holder_name, initial_deposit, |number, holder_name, clock| {
            Account::open_current(number, holder_name, initial_deposit, clock)
        })
    }

    pub fn get_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn get_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Like `get_account`, but a miss is a `BankError::AccountNotFound`
    pub fn find_account(&self, number: AccountNumber) -> Result<&Account> {
        let account = self.get_account(number).ok_or_else(|| {
            log::warn!("Account not found: {number}");
            BankError::AccountNotFound(number)
        })?;

        Ok(account)
    }

    pub fn find_account_mut(&mut self, number: AccountNumber) -> Result<&mut Account> {
        let account = self.get_account_mut(number).ok_or_else(|| {
            log::warn!("Account not found: {number}");
            BankError::AccountNotFound(number)
        })?;

        Ok(account)
    }

    /// All accounts, lowest account number first
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates before issuing a number, so numbers only go to accounts that exist
    fn open_account(
        &mut self,
        holder_name: &str,
        initial_deposit: Money,
        build: impl FnOnce(AccountNumber, String, Rc<dyn Clock>) -> Account,
    ) -> Result<&mut Account> {
        let holder_name = holder_name.trim();

        if holder_name.is_empty() {
            Err(BankError::EmptyHolderName)?
        }

        if initial_deposit.is_negative() {
            Err(BankError::InvalidInitialDeposit(initial_deposit))?
        }

        let number = self.next_number.ok_or(BankError::AccountNumbersExhausted)?;
        self.next_number = number.next();

        let account = build(number, holder_name.to_string(), Rc::clone(&self.clock));

        log::info!(
            "{} account created for {holder_name}. Account number: {number}",
            account.account_type()
        );

        Ok(self.accounts.entry(number).or_insert(account))
    }
}
