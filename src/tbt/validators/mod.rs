pub mod birth_date;
pub mod cpf;

pub use birth_date::{age_on, is_adult, parse_birth_date, today, BirthDateRules, TwoDigitYears};
pub use cpf::{is_valid_cpf, strip_non_digits};
