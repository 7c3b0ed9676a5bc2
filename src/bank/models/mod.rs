mod account;
mod account_info;
mod daily_limit;
mod passbook;
mod transaction;

pub use account::{Account, AccountError, AccountKind, AccountType};
pub use account_info::AccountInfo;
pub use daily_limit::DailyLimit;
pub use passbook::Passbook;
pub use transaction::{Transaction, TransactionKind};
