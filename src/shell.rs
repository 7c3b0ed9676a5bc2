use crate::writer;

use bank::ids::AccountNumber;
use bank::{Bank, Money, Result};

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("End of input")]
    EndOfInput,

    #[error("Invalid account number: {0:?}")]
    InvalidAccountNumber(String),

    #[error("Invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
}

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven operator console over a `Bank`
pub struct Shell<R, W> {
    bank: Bank,
    input: R,
    output: W,
    stop_on_error: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(bank: Bank, input: R, output: W) -> Self {
        return Self {
            bank,
            input,
            output,
            stop_on_error: false,
        };
    }

    /// End the session at the first rejected operation instead of showing the menu again
    pub fn stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = stop_on_error;
        self
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Bank, W) {
        (self.bank, self.output)
    }

    /// Runs until the operator exits or input runs out. I/O failures end it with an error.
    /// Rejected operations are reported, then either end the session with that error
    /// (`stop_on_error`) or show the menu again.
    pub fn run(&mut self) -> Result {
        loop {
            self.print_menu()?;

            let res = self
                .prompt("Choose an option: ")
                .and_then(|choice| self.dispatch(&choice));

            match res {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    if let Some(ShellError::EndOfInput) = e.downcast_ref::<ShellError>() {
                        log::debug!("Input exhausted, leaving shell");
                        break;
                    }

                    if e.downcast_ref::<io::Error>().is_some() {
                        return Err(e);
                    }

                    log::debug!("Operation failed: {e:?}");
                    writeln!(self.output, "Error: {e}")?;

                    if self.stop_on_error {
                        self.output.flush()?;
                        return Err(e);
                    }
                }
            }
        }

        self.output.flush()?;

        Ok(())
    }

    fn print_menu(&mut self) -> Result {
        writeln!(self.output)?;
        writeln!(self.output, "===== {} =====", self.bank.name())?;
        writeln!(self.output, "1. Create Account")?;
        writeln!(self.output, "2. Deposit Money")?;
        writeln!(self.output, "3. Withdraw Money")?;
        writeln!(self.output, "4. Check Balance")?;
        writeln!(self.output, "5. Display Account Information")?;
        writeln!(self.output, "6. Print Passbook")?;
        writeln!(self.output, "7. Export Passbook as CSV")?;
        writeln!(self.output, "8. Exit")?;

        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        log::debug!("Menu choice: {choice:?}");

        match choice {
            "1" => self.create_account()?,
            "2" => self.deposit()?,
            "3" => self.withdraw()?,
            "4" => self.check_balance()?,
            "5" => self.display_info()?,
            "6" => self.print_passbook()?,
            "7" => self.export_passbook()?,
            "8" => {
                writeln!(self.output, "Thank you for banking with us!")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(self.output, "Invalid option! Try again.")?,
        }

        Ok(Flow::Continue)
    }

    fn create_account(&mut self) -> Result {
        let account_type = self.prompt("Enter Account Type (savings/current): ")?;
        let holder_name = self.prompt("Enter Holder Name: ")?;
        let deposit = self.prompt_amount("Enter Initial Deposit: ")?;

        let account = self
            .bank
            .create_account(&account_type, &holder_name, deposit)?;
        let (account_type, number) = (account.account_type(), account.number());

        writeln!(
            self.output,
            "{account_type} account created. Account Number: {number}"
        )?;

        Ok(())
    }

    fn deposit(&mut self) -> Result {
        let number = self.prompt_account_number()?;
        self.bank.find_account(number)?;

        let amount = self.prompt_amount("Enter Amount to Deposit: ")?;
        let balance = self.bank.find_account_mut(number)?.deposit(amount)?;

        writeln!(self.output, "{amount} deposited. New Balance: {balance}")?;

        Ok(())
    }

    fn withdraw(&mut self) -> Result {
        let number = self.prompt_account_number()?;
        self.bank.find_account(number)?;

        let amount = self.prompt_amount("Enter Amount to Withdraw: ")?;
        let balance = self.bank.find_account_mut(number)?.withdraw(amount)?;

        writeln!(self.output, "{amount} withdrawn. Remaining Balance: {balance}")?;

        Ok(())
    }

    fn check_balance(&mut self) -> Result {
        let number = self.prompt_account_number()?;
        let balance = self.bank.find_account(number)?.balance();

        writeln!(self.output, "Balance: {balance}")?;

        Ok(())
    }

    fn display_info(&mut self) -> Result {
        let number = self.prompt_account_number()?;
        let info = self.bank.find_account(number)?.info();

        writeln!(self.output, "{info}")?;

        Ok(())
    }

    fn print_passbook(&mut self) -> Result {
        let number = self.prompt_account_number()?;
        self.bank.find_account(number)?;

        let from = self.prompt_date("From date (YYYY-MM-DD, blank for none): ")?;
        let to = self.prompt_date("To date (YYYY-MM-DD, blank for none): ")?;

        let account = self.bank.find_account(number)?;

        writeln!(self.output, "--- PASSBOOK ---")?;

        let mut empty = true;
        for tx in account.passbook(from, to) {
            writeln!(self.output, "{tx}")?;
            empty = false;
        }

        if empty {
            writeln!(self.output, "-- no transactions --")?;
        }

        writeln!(self.output, "----------------")?;

        Ok(())
    }

    fn export_passbook(&mut self) -> Result {
        let number = self.prompt_account_number()?;
        self.bank.find_account(number)?;

        let from = self.prompt_date("From date (YYYY-MM-DD, blank for none): ")?;
        let to = self.prompt_date("To date (YYYY-MM-DD, blank for none): ")?;

        let csv = writer::passbook_to_csv(self.bank.find_account(number)?.passbook(from, to))?;

        write!(self.output, "{csv}")?;

        Ok(())
    }

    /// Prints `label` and reads one trimmed line
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Err(ShellError::EndOfInput)?
        }

        Ok(line.trim().to_string())
    }

    fn prompt_account_number(&mut self) -> Result<AccountNumber> {
        let input = self.prompt("Enter Account Number: ")?;

        let number = input
            .parse()
            .map_err(|_| ShellError::InvalidAccountNumber(input.clone()))?;

        Ok(AccountNumber(number))
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Money> {
        let input = self.prompt(label)?;

        Money::parse(&input)
    }

    fn prompt_date(&mut self, label: &str) -> Result<Option<NaiveDate>> {
        let input = self.prompt(label)?;

        if input.is_empty() {
            return Ok(None);
        }

        let date = NaiveDate::parse_from_str(&input, DATE_FORMAT)
            .map_err(|_| ShellError::InvalidDate(input.clone()))?;

        Ok(Some(date))
    }
}
