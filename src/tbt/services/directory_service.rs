use crate::ids::{AccountNumber, Cpf};
use crate::models::{Account, User};
use crate::validators::BirthDateRules;

use chrono::NaiveDate;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Invalid CPF: {0:?}")]
    InvalidCpf(String),

    #[error("A user with CPF {0} already exists")]
    DuplicateUser(Cpf),

    #[error("Invalid birth date or holder under the minimum age: {0:?}")]
    InvalidBirthDate(String),

    #[error("User not found: {0:?}")]
    UserNotFound(String),
}

/// Details typed in when registering a user, before any validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub birth_date: String,
    pub cpf: String,
    pub address: String,
}

/// In-memory users and accounts, both kept in insertion order
#[derive(Debug, Default)]
pub struct DirectoryService {
    users: Vec<User>,
    accounts: Vec<Account>,
    birth_date_rules: BirthDateRules,
}

impl DirectoryService {
    pub fn new(birth_date_rules: BirthDateRules) -> Self {
        return Self {
            users: Vec::new(),
            accounts: Vec::new(),
            birth_date_rules,
        };
    }

    /// Linear scan by CPF; separators in `cpf` are ignored
    pub fn find_user(&self, cpf: &str) -> Option<&User> {
        let cpf = Cpf::parse(cpf)?;

        return self.users.iter().find(|user| user.cpf == cpf);
    }

    /// Checks that `cpf` can be registered: it has valid check digits and nobody owns it yet
    pub fn check_new_cpf(&self, cpf: &str) -> Result<Cpf, DirectoryError> {
        let parsed = Cpf::parse(cpf).ok_or_else(|| DirectoryError::InvalidCpf(cpf.to_string()))?;

        if self.users.iter().any(|user| user.cpf == parsed) {
            Err(DirectoryError::DuplicateUser(parsed.clone()))?
        }

        return Ok(parsed);
    }

    /// Validates CPF, uniqueness, then birth date, and registers the user
    pub fn create_user(&mut self, new_user: NewUser, today: NaiveDate) -> Result<&User, DirectoryError> {
        let cpf = self.check_new_cpf(&new_user.cpf)?;

        let birth_date = self
            .birth_date_rules
            .check(&new_user.birth_date, today)
            .ok_or_else(|| DirectoryError::InvalidBirthDate(new_user.birth_date.clone()))?;

        let user = User {
            name: new_user.name,
            birth_date,
            cpf,
            address: new_user.address,
        };

        log::debug!("Registering user: {user:?}");
        self.users.push(user);

        return Ok(&self.users[self.users.len() - 1]);
    }

    /// Opens the next sequentially numbered account under `branch` for the user owning `cpf`
    pub fn create_account(&mut self, branch: &str, cpf: &str) -> Result<&Account, DirectoryError> {
        let owner = self
            .find_user(cpf)
            .cloned()
            .ok_or_else(|| DirectoryError::UserNotFound(cpf.to_string()))?;

        let account = Account {
            branch: branch.to_string(),
            number: AccountNumber(self.accounts.len() as u32 + 1),
            owner,
        };

        log::debug!("Opening account: {account:?}");
        self.accounts.push(account);

        return Ok(&self.accounts[self.accounts.len() - 1]);
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
