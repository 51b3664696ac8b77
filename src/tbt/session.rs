use crate::ledger::{Ledger, LedgerError, WithdrawalPolicy};
use crate::models::{Account, User};
use crate::services::{DirectoryError, DirectoryService, NewUser};
use crate::validators::BirthDateRules;
use crate::{report, Money};

use chrono::NaiveDate;

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub branch: String,
    pub withdrawal_policy: WithdrawalPolicy,
    pub birth_date_rules: BirthDateRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch: "0001".to_string(),
            withdrawal_policy: WithdrawalPolicy::default(),
            birth_date_rules: BirthDateRules::default(),
        }
    }
}

/// All state for one run: the shared ledger plus the user and account directory
#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    directory: DirectoryService,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            ledger: Ledger::new(),
            directory: DirectoryService::new(config.birth_date_rules),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn directory(&self) -> &DirectoryService {
        &self.directory
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), LedgerError> {
        self.ledger.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), LedgerError> {
        self.ledger.withdraw(amount, &self.config.withdrawal_policy)
    }

    pub fn check_new_cpf(&self, cpf: &str) -> Result<(), DirectoryError> {
        self.directory.check_new_cpf(cpf).map(|_| ())
    }

    pub fn create_user(&mut self, new_user: NewUser, today: NaiveDate) -> Result<&User, DirectoryError> {
        self.directory.create_user(new_user, today)
    }

    pub fn create_account(&mut self, cpf: &str) -> Result<&Account, DirectoryError> {
        self.directory.create_account(&self.config.branch, cpf)
    }

    pub fn statement_report(&self) -> String {
        report::render_statement(&self.ledger)
    }

    pub fn accounts_report(&self) -> String {
        report::render_accounts(self.directory.accounts())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
