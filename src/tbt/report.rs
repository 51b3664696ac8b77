use crate::ledger::Ledger;
use crate::models::Account;

const STATEMENT_HEADER: &str = "================ STATEMENT ================";
const STATEMENT_FOOTER: &str = "===========================================";
const ACCOUNTS_HEADER: &str = "====== ACCOUNTS ======";
const ACCOUNTS_FOOTER: &str = "======================";

/// Renders every statement entry followed by the current balance
pub fn render_statement(ledger: &Ledger) -> String {
    let mut lines = vec![String::new(), STATEMENT_HEADER.to_string()];

    if ledger.statement().is_empty() {
        lines.push("No transactions were made.".to_string());
    } else {
        lines.extend(ledger.statement().entries().iter().map(|entry| entry.to_string()));
    }

    lines.push(String::new());
    lines.push(format!("Balance: R$ {}", ledger.balance()));
    lines.push(STATEMENT_FOOTER.to_string());

    lines.join("\n")
}

pub fn render_accounts(accounts: &[Account]) -> String {
    let mut lines = vec![String::new(), ACCOUNTS_HEADER.to_string()];

    if accounts.is_empty() {
        lines.push("No accounts registered.".to_string());
    }

    for account in accounts {
        lines.push(format!(
            "Branch: {} | Account: {} | Holder: {} | CPF: {}",
            account.branch,
            account.number,
            account.owner.name,
            account.owner.cpf.formatted()
        ));
    }

    lines.push(ACCOUNTS_FOOTER.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::{AccountNumber, Cpf};
    use crate::ledger::WithdrawalPolicy;
    use crate::models::User;
    use crate::Money;

    use chrono::NaiveDate;

    fn build_account(number: u32, name: &str, cpf: &str) -> Account {
        Account {
            branch: "0001".to_string(),
            number: AccountNumber(number),
            owner: User {
                name: name.to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 2, 1).unwrap(),
                cpf: Cpf::parse(cpf).unwrap(),
                address: "Rua A, 1".to_string(),
            },
        }
    }

    #[test]
    fn empty_statement() {
        let expected = [
            "",
            STATEMENT_HEADER,
            "No transactions were made.",
            "",
            "Balance: R$ 0.00",
            STATEMENT_FOOTER,
        ]
        .join("\n");

        assert_eq!(render_statement(&Ledger::new()), expected);
    }

    #[test]
    fn statement_with_entries() {
        let mut ledger = Ledger::new();
        ledger.deposit(Money::parse("100").unwrap()).unwrap();
        ledger
            .withdraw(Money::parse("40.5").unwrap(), &WithdrawalPolicy::default())
            .unwrap();

        let expected = [
            "",
            STATEMENT_HEADER,
            "Deposit: R$ 100.00",
            "Withdrawal: R$ 40.50",
            "",
            "Balance: R$ 59.50",
            STATEMENT_FOOTER,
        ]
        .join("\n");

        assert_eq!(render_statement(&ledger), expected);
    }

    #[test]
    fn no_accounts() {
        let expected = ["", ACCOUNTS_HEADER, "No accounts registered.", ACCOUNTS_FOOTER].join("\n");

        assert_eq!(render_accounts(&[]), expected);
    }

    #[test]
    fn accounts_in_order() {
        let accounts = vec![
            build_account(1, "Ana", "52998224725"),
            build_account(2, "Bia", "11144477735"),
        ];

        let rendered = render_accounts(&accounts);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[2],
            "Branch: 0001 | Account: 1 | Holder: Ana | CPF: 529.982.247-25"
        );
        assert_eq!(
            lines[3],
            "Branch: 0001 | Account: 2 | Holder: Bia | CPF: 111.444.777-35"
        );
        assert_eq!(rendered, render_accounts(&accounts));
    }
}
