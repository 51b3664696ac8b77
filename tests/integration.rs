use tbt::terminal::MENU;
use tbt::Config;

use std::io::Cursor;

/// Feeds `lines` to a fresh session, one per prompt, and returns everything written to the output
fn run_script(config: Config, lines: &[&str]) -> String {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut output: Vec<u8> = vec![];
    tbt::run_session(config, Cursor::new(script), &mut output).unwrap();

    String::from_utf8(output).unwrap()
}

/// Text printed after the `idx`-th menu prompt and before the next one
fn section(output: &str, idx: usize) -> &str {
    output.split(MENU).nth(idx + 1).unwrap()
}

#[test]
fn full_session() {
    let output = run_script(
        Config::default(),
        &[
            // 0: account for an unknown user
            "5", "529.982.247-25",
            // 1: register a user
            "4", "529.982.247-25", "Ana Souza", "01/02/1990", "Rua A, 1 - Centro - Cidade/UF",
            // 2: same CPF without separators
            "4", "52998224725",
            // 3, 4: two accounts for the same user
            "5", "52998224725",
            "5", "529 982 247 25",
            // 5, 6: listing twice
            "6",
            "6",
            // 7: deposit
            "1", "100",
            // 8: more than the balance
            "2", "150",
            // 9..=11: three withdrawals
            "2", "10",
            "2", "10",
            "2", "10",
            // 12: count exhausted
            "2", "10",
            // 13: statement
            "3",
            // 14
            "7",
        ],
    );

    assert!(section(&output, 0).contains("User not found! Account creation cancelled."));
    assert!(section(&output, 1).contains("User created successfully!"));
    assert!(section(&output, 2).contains("A user with this CPF already exists!"));
    assert!(section(&output, 3).contains("Account created successfully!"));
    assert!(section(&output, 4).contains("Account created successfully!"));

    let listing = section(&output, 5);
    assert!(listing.contains("Branch: 0001 | Account: 1 | Holder: Ana Souza | CPF: 529.982.247-25"));
    assert!(listing.contains("Branch: 0001 | Account: 2 | Holder: Ana Souza | CPF: 529.982.247-25"));
    assert_eq!(listing, section(&output, 6));

    assert!(section(&output, 7).contains("Deposit successful!"));
    assert!(section(&output, 8).contains("Operation failed! You do not have enough balance."));
    for idx in 9..=11 {
        assert!(section(&output, idx).contains("Withdrawal successful!"));
    }
    assert!(section(&output, 12).contains("Operation failed! Maximum number of withdrawals (3) exceeded."));

    let statement = section(&output, 13);
    assert!(statement.contains("Deposit: R$ 100.00\nWithdrawal: R$ 10.00\nWithdrawal: R$ 10.00\nWithdrawal: R$ 10.00\n"));
    assert!(statement.contains("Balance: R$ 70.00"));

    assert!(section(&output, 14).contains("Exiting..."));
}

#[test]
fn empty_session_reports() {
    let output = run_script(Config::default(), &["3", "6", "7"]);

    assert!(section(&output, 0).contains("No transactions were made."));
    assert!(section(&output, 0).contains("Balance: R$ 0.00"));
    assert!(section(&output, 1).contains("No accounts registered."));
}

#[test]
fn per_operation_limit_from_config() {
    let mut config = Config::default();
    config.withdrawal_policy.per_operation_limit = tbt::Money::from_units(10);

    let output = run_script(config, &["1", "100", "2", "50", "2", "-5", "7"]);

    assert!(section(&output, 1)
        .contains("Operation failed! The withdrawal amount exceeds the limit of R$ 10.00."));
    assert!(section(&output, 2).contains("Operation failed! The amount provided is invalid."));
}

#[test]
fn two_digit_birth_years_need_a_pivot() {
    let lines = [
        "4", "111.444.777-35", "Bia Lima", "01/02/90", "Rua B, 2 - Centro - Cidade/UF",
        "7",
    ];

    let rejected = run_script(Config::default(), &lines);
    assert!(section(&rejected, 0)
        .contains("Invalid date or under the minimum age! Registration cancelled."));

    let mut config = Config::default();
    config.birth_date_rules.two_digit_years = tbt::validators::TwoDigitYears::Pivot(69);

    let accepted = run_script(config, &lines);
    assert!(section(&accepted, 0).contains("User created successfully!"));
}

#[test]
fn invalid_input_keeps_looping() {
    let output = run_script(Config::default(), &["x", "1", "ten", "2", "", "3", "7"]);

    assert!(section(&output, 0).contains("Invalid option!"));
    assert!(section(&output, 1).contains("Invalid value."));
    assert!(section(&output, 2).contains("Invalid value."));
    assert!(section(&output, 3).contains("Balance: R$ 0.00"));
}
