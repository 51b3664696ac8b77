mod account;
mod statement;
mod user;

pub use account::Account;
pub use statement::{EntryKind, Statement, StatementEntry};
pub use user::User;
