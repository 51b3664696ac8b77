use crate::ledger::LedgerError;
use crate::services::{DirectoryError, NewUser};
use crate::validators::today;
use crate::{Money, Result, Session};

use std::io::{BufRead, Write};

use chrono::NaiveDate;

pub const MENU: &str = "
====== MENU ======
[1] Deposit
[2] Withdraw
[3] Statement
[4] Create User
[5] Create Account
[6] List Accounts
[7] Exit
==================
=> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    CreateUser,
    CreateAccount,
    ListAccounts,
    Exit,
}

impl MenuOption {
    pub fn parse(input: &str) -> Option<Self> {
        let option = match input.trim() {
            "1" => MenuOption::Deposit,
            "2" => MenuOption::Withdraw,
            "3" => MenuOption::Statement,
            "4" => MenuOption::CreateUser,
            "5" => MenuOption::CreateAccount,
            "6" => MenuOption::ListAccounts,
            "7" => MenuOption::Exit,
            _ => return None,
        };

        Some(option)
    }
}

/// Whether the loop keeps reading after a menu option has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads menu choices from `input` and writes every prompt and result to `output`.
///
/// Input problems and rejected operations are reported and the menu is shown again; only I/O
/// failures end the loop with an error. Running out of input ends it like choosing Exit.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            today,
        }
    }

    /// Replaces the source of the current date used for age checks
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, session: &mut Session) -> Result {
        loop {
            let Some(choice) = self.prompt(MENU)? else {
                log::debug!("Input closed, leaving the menu loop");
                return Ok(());
            };

            let flow = match MenuOption::parse(&choice) {
                Some(option) => {
                    log::debug!("Menu option selected: {option:?}");
                    self.dispatch(option, session)?
                }
                None => {
                    self.say("Invalid option!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, option: MenuOption, session: &mut Session) -> Result<Flow> {
        match option {
            MenuOption::Deposit => self.deposit(session),
            MenuOption::Withdraw => self.withdraw(session),
            MenuOption::Statement => {
                self.say(&session.statement_report())?;
                Ok(Flow::Continue)
            }
            MenuOption::CreateUser => self.create_user(session),
            MenuOption::CreateAccount => self.create_account(session),
            MenuOption::ListAccounts => {
                self.say(&session.accounts_report())?;
                Ok(Flow::Continue)
            }
            MenuOption::Exit => {
                self.say("Exiting...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn deposit(&mut self, session: &mut Session) -> Result<Flow> {
        let Some(amount) = self.prompt("Deposit amount: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(amount) = self.parse_amount(&amount)? else {
            return Ok(Flow::Continue);
        };

        match session.deposit(amount) {
            Ok(()) => self.say("Deposit successful!")?,
            Err(e) => self.report_ledger_error(e)?,
        }

        Ok(Flow::Continue)
    }

    fn withdraw(&mut self, session: &mut Session) -> Result<Flow> {
        let Some(amount) = self.prompt("Withdrawal amount: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(amount) = self.parse_amount(&amount)? else {
            return Ok(Flow::Continue);
        };

        match session.withdraw(amount) {
            Ok(()) => self.say("Withdrawal successful!")?,
            Err(e) => self.report_ledger_error(e)?,
        }

        Ok(Flow::Continue)
    }

    fn create_user(&mut self, session: &mut Session) -> Result<Flow> {
        let Some(cpf) = self.prompt("CPF (digits only or with separators): ")? else {
            return Ok(Flow::Exit);
        };

        if let Err(e) = session.check_new_cpf(&cpf) {
            self.report_directory_error(e)?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(birth_date) = self.prompt("Birth date (dd/mm/yyyy): ")? else {
            return Ok(Flow::Exit);
        };

        // Checked here too so an invalid date stops the flow before the address prompt
        let today = (self.today)();
        if session.config().birth_date_rules.check(&birth_date, today).is_none() {
            self.report_directory_error(DirectoryError::InvalidBirthDate(birth_date))?;
            return Ok(Flow::Continue);
        }

        let Some(address) = self.prompt("Address (street, number - district - city/state): ")? else {
            return Ok(Flow::Exit);
        };

        let new_user = NewUser {
            name,
            birth_date,
            cpf,
            address,
        };

        match session.create_user(new_user, today) {
            Ok(_) => self.say("User created successfully!")?,
            Err(e) => self.report_directory_error(e)?,
        }

        Ok(Flow::Continue)
    }

    fn create_account(&mut self, session: &mut Session) -> Result<Flow> {
        let Some(cpf) = self.prompt("Account holder CPF (digits only or with separators): ")? else {
            return Ok(Flow::Exit);
        };

        match session.create_account(&cpf) {
            Ok(_) => self.say("Account created successfully!")?,
            Err(e) => self.report_directory_error(e)?,
        }

        Ok(Flow::Continue)
    }

    fn parse_amount(&mut self, text: &str) -> Result<Option<Money>> {
        match Money::parse(text) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                log::info!("{e}");
                self.say("Invalid value.")?;
                Ok(None)
            }
        }
    }

    fn report_ledger_error(&mut self, error: LedgerError) -> Result {
        log::info!("Ledger operation rejected: {error}");

        let reason = match error {
            LedgerError::InsufficientBalance { .. } => "You do not have enough balance.".to_string(),
            LedgerError::ExceedsPerOperationLimit { limit, .. } => {
                format!("The withdrawal amount exceeds the limit of R$ {limit}.")
            }
            LedgerError::ExceedsDailyWithdrawals { limit } => {
                format!("Maximum number of withdrawals ({limit}) exceeded.")
            }
            LedgerError::InvalidAmount(_) => "The amount provided is invalid.".to_string(),
            LedgerError::Money(e) => e.to_string(),
        };

        self.say(&format!("Operation failed! {reason}"))
    }

    fn report_directory_error(&mut self, error: DirectoryError) -> Result {
        log::info!("Directory operation rejected: {error}");

        let message = match error {
            DirectoryError::InvalidCpf(_) => "Invalid CPF! Registration cancelled.",
            DirectoryError::DuplicateUser(_) => "A user with this CPF already exists!",
            DirectoryError::InvalidBirthDate(_) => {
                "Invalid date or under the minimum age! Registration cancelled."
            }
            DirectoryError::UserNotFound(_) => "User not found! Account creation cancelled.",
        };

        self.say(message)
    }

    /// Writes `message` without a newline and reads one trimmed line; `None` once input is exhausted
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: &str) -> Result {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
