use tbt::ledger::WithdrawalPolicy;
use tbt::validators::{BirthDateRules, TwoDigitYears};
use tbt::{Config, Money, MoneyError, Result};

use clap::Parser;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Withdrawal limit must not be negative: {0}")]
    NegativeLimit(Money),

    #[error("Branch code must not be empty")]
    EmptyBranch,
}

/// Interactive banking terminal: register users, open accounts, deposit, withdraw and print a
/// statement for a single in-memory session
#[derive(Parser, Debug)]
#[command(name = "toy-bank-terminal", version, about, long_about = None)]
pub struct InputArgs {
    /// Branch code given to every new account
    #[arg(long, default_value = "0001")]
    pub branch: String,

    /// Largest amount a single withdrawal may take
    #[arg(long, default_value = "500", value_parser = parse_money)]
    pub withdrawal_limit: Money,

    /// Number of withdrawals allowed per session
    #[arg(long, default_value_t = 3)]
    pub daily_withdrawals: u32,

    /// Minimum age, in whole years, to register a user
    #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(u32).range(0..=150))]
    pub minimum_age: u32,

    /// Accept dd/mm/yy birth dates: years below the pivot are 20yy, the rest 19yy (69 mimics
    /// strptime). Two-digit years are rejected when omitted.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub two_digit_year_pivot: Option<u32>,
}

fn parse_money(text: &str) -> std::result::Result<Money, MoneyError> {
    Money::parse(text)
}

impl InputArgs {
    pub fn into_config(self) -> Result<Config> {
        if self.withdrawal_limit < Money::ZERO {
            Err(InputArgsError::NegativeLimit(self.withdrawal_limit))?
        }

        let branch = self.branch.trim().to_string();
        if branch.is_empty() {
            Err(InputArgsError::EmptyBranch)?
        }

        let two_digit_years = match self.two_digit_year_pivot {
            Some(pivot) => TwoDigitYears::Pivot(pivot),
            None => TwoDigitYears::Reject,
        };

        return Ok(Config {
            branch,
            withdrawal_policy: WithdrawalPolicy {
                per_operation_limit: self.withdrawal_limit,
                daily_withdrawal_limit: self.daily_withdrawals,
            },
            birth_date_rules: BirthDateRules {
                minimum_age: self.minimum_age,
                two_digit_years,
            },
        });
    }
}

/// Parses the command line into the session configuration
pub fn parse_input_args() -> Result<Config> {
    let args = InputArgs::parse();
    log::debug!("Parsed input args: {args:?}");

    args.into_config()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        let args = std::iter::once("toy-bank-terminal").chain(args.iter().copied());
        InputArgs::try_parse_from(args)?.into_config()
    }

    #[test]
    fn defaults_match_config_default() {
        assert_eq!(parse(&[]).unwrap(), Config::default());
    }

    #[test]
    fn overrides() {
        let config = parse(&[
            "--branch",
            "0042",
            "--withdrawal-limit",
            "250.50",
            "--daily-withdrawals",
            "5",
            "--minimum-age",
            "21",
            "--two-digit-year-pivot",
            "69",
        ])
        .unwrap();

        assert_eq!(config.branch, "0042");
        assert_eq!(config.withdrawal_policy.per_operation_limit, Money(2_505_000));
        assert_eq!(config.withdrawal_policy.daily_withdrawal_limit, 5);
        assert_eq!(config.birth_date_rules.minimum_age, 21);
        assert_eq!(config.birth_date_rules.two_digit_years, TwoDigitYears::Pivot(69));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["--withdrawal-limit", "abc"]).is_err());
        assert!(parse(&["--withdrawal-limit=-1"]).is_err());
        assert!(parse(&["--two-digit-year-pivot", "101"]).is_err());
        assert!(parse(&["--branch", "  "]).is_err());
        assert!(parse(&["--minimum-age", "151"]).is_err());
        assert!(parse(&["--minimum-age", "3000000000"]).is_err());
    }
}
