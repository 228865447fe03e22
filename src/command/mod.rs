//! Command Module
//!
//! Directory operations as values, for hosts that route requests
//! instead of calling methods directly.
//!
//! ### Commands
//! - add / del / rename / email   - structural mutations
//! - set-salary                   - in-place mutation
//! - salary / rank / first / next - queries
//!
//! ### Responses
//! - Done:     mutation applied
//! - Salary, Rank, Employee: query result
//! - Failed:   typed error, nothing changed

mod command;
mod response;

pub use command::Command;
pub use response::Response;
