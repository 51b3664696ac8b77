use crate::Money;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            EntryKind::Deposit => "Deposit",
            EntryKind::Withdrawal => "Withdrawal",
        };

        return write!(f, "{label}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementEntry {
    pub kind: EntryKind,
    pub amount: Money,
}

impl fmt::Display for StatementEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}: R$ {}", self.kind, self.amount);
    }
}

/// Append-only list of accepted operations, kept for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    entries: Vec<StatementEntry>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EntryKind, amount: Money) {
        self.entries.push(StatementEntry { kind, amount });
    }

    pub fn entries(&self) -> &[StatementEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
