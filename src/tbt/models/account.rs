use super::User;

use crate::ids::AccountNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub branch: String,
    pub number: AccountNumber,
    pub owner: User,
}
