use crate::ids::Cpf;

use chrono::NaiveDate;

/// A registered account holder, identified by their CPF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub birth_date: NaiveDate,
    pub cpf: Cpf,
    pub address: String,
}
