pub mod clock;
pub mod ids;
pub mod models;
mod money;
mod registry;
mod result;

pub use money::{Money, MoneyError};
pub use registry::{AccountTypePolicy, Bank, BankConfig, BankError};
pub use result::Result;
