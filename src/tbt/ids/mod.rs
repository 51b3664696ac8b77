mod account_number;
mod cpf;

pub use account_number::AccountNumber;
pub use cpf::Cpf;
