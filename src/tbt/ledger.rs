use crate::models::{EntryKind, Statement};
use crate::money::{Money, MoneyError};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: R$ {balance} available, R$ {amount} requested")]
    InsufficientBalance { balance: Money, amount: Money },

    #[error("R$ {amount} exceeds the per-operation limit of R$ {limit}")]
    ExceedsPerOperationLimit { amount: Money, limit: Money },

    #[error("Maximum number of withdrawals ({limit}) reached")]
    ExceedsDailyWithdrawals { limit: u32 },

    #[error("Invalid amount: R$ {0}")]
    InvalidAmount(Money),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Limits applied to every withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalPolicy {
    pub per_operation_limit: Money,
    pub daily_withdrawal_limit: u32,
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self {
            per_operation_limit: Money::from_units(500),
            daily_withdrawal_limit: 3,
        }
    }
}

/// The single balance shared by every account in a session, along with its statement and the
/// number of withdrawals made so far.
///
/// Rejected operations leave all three untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balance: Money,
    statement: Statement,
    withdrawals: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        self.balance = self.balance.checked_add(amount)?;
        self.statement.push(EntryKind::Deposit, amount);

        log::debug!("Deposited {amount}, balance is now {}", self.balance);

        return Ok(());
    }

    /// Checks, in order: balance, per-operation limit, withdrawal count, then that the amount is
    /// positive. The first failing check decides the error.
    pub fn withdraw(&mut self, amount: Money, policy: &WithdrawalPolicy) -> Result<(), LedgerError> {
        if amount > self.balance {
            Err(LedgerError::InsufficientBalance {
                balance: self.balance,
                amount,
            })?
        }

        if amount > policy.per_operation_limit {
            Err(LedgerError::ExceedsPerOperationLimit {
                amount,
                limit: policy.per_operation_limit,
            })?
        }

        if self.withdrawals >= policy.daily_withdrawal_limit {
            Err(LedgerError::ExceedsDailyWithdrawals {
                limit: policy.daily_withdrawal_limit,
            })?
        }

        if !amount.is_positive() {
            Err(LedgerError::InvalidAmount(amount))?
        }

        self.balance = self.balance.checked_sub(amount)?;
        self.statement.push(EntryKind::Withdrawal, amount);
        self.withdrawals += 1;

        log::debug!(
            "Withdrew {amount}, balance is now {} after {} withdrawal(s)",
            self.balance,
            self.withdrawals
        );

        return Ok(());
    }
}
