use crate::validators::{is_valid_cpf, strip_non_digits};

use std::fmt;

/// A checksum-valid CPF, stored as its 11 digits
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Strips separators and validates; `None` when the check digits don't match
    pub fn parse(raw: &str) -> Option<Self> {
        if !is_valid_cpf(raw) {
            return None;
        }

        Some(Self(strip_non_digits(raw)))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// `000.000.000-00`
    pub fn formatted(&self) -> String {
        let d = &self.0;
        return format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11]);
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
