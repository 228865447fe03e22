//! Response definitions
//!
//! The outcome of one command, as handed back to a host.

use std::fmt;

use crate::directory::{FullName, Rank};
use crate::error::AgendaError;

/// A response to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Mutation applied
    Done,

    /// Salary lookup result
    Salary(u32),

    /// Rank query result
    Rank(Rank),

    /// Traversal result
    Employee(FullName),

    /// Operation refused; the directory is unchanged
    Failed(AgendaError),
}

impl Response {
    pub fn is_ok(&self) -> bool {
        !matches!(self, Response::Failed(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Done => write!(f, "OK"),
            Response::Salary(salary) => write!(f, "{}", salary),
            Response::Rank(rank) => write!(f, "{}", rank),
            Response::Employee(full_name) => write!(f, "{}", full_name),
            Response::Failed(e) => write!(f, "ERROR: {}", e),
        }
    }
}
