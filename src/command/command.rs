//! Command definitions
//!
//! One variant per directory operation.

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an employee
    Add {
        name: String,
        surname: String,
        email: String,
        salary: u32,
    },

    /// Delete by full name
    Delete { name: String, surname: String },

    /// Delete by email
    DeleteByEmail { email: String },

    /// Rename the employee with `email`
    ChangeFullName {
        email: String,
        new_name: String,
        new_surname: String,
    },

    /// Change the email of (name, surname)
    ChangeEmail {
        name: String,
        surname: String,
        new_email: String,
    },

    /// Set salary by full name
    SetSalary {
        name: String,
        surname: String,
        salary: u32,
    },

    /// Set salary by email
    SetSalaryByEmail { email: String, salary: u32 },

    /// Salary by full name
    Salary { name: String, surname: String },

    /// Salary by email
    SalaryByEmail { email: String },

    /// Salary rank range by full name
    Rank { name: String, surname: String },

    /// Salary rank range by email
    RankByEmail { email: String },

    /// First employee in by-name order
    First,

    /// Successor of (name, surname) in by-name order
    Next { name: String, surname: String },
}

impl Command {
    /// Whether running this command can change the directory
    pub fn is_mutation(&self) -> bool {
        match self {
            Command::Add { .. }
            | Command::Delete { .. }
            | Command::DeleteByEmail { .. }
            | Command::ChangeFullName { .. }
            | Command::ChangeEmail { .. }
            | Command::SetSalary { .. }
            | Command::SetSalaryByEmail { .. } => true,
            Command::Salary { .. }
            | Command::SalaryByEmail { .. }
            | Command::Rank { .. }
            | Command::RankByEmail { .. }
            | Command::First
            | Command::Next { .. } => false,
        }
    }

    /// Short lowercase name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Delete { .. } | Command::DeleteByEmail { .. } => "del",
            Command::ChangeFullName { .. } => "rename",
            Command::ChangeEmail { .. } => "email",
            Command::SetSalary { .. } | Command::SetSalaryByEmail { .. } => "set-salary",
            Command::Salary { .. } | Command::SalaryByEmail { .. } => "salary",
            Command::Rank { .. } | Command::RankByEmail { .. } => "rank",
            Command::First => "first",
            Command::Next { .. } => "next",
        }
    }
}
