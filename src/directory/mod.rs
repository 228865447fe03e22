//! Directory Module
//!
//! The dual-key employee store.
//!
//! ## Responsibilities
//! - Own every employee record exactly once
//! - Keep a by-name and a by-email ordering over the same records
//! - Apply each mutation to both orderings or to neither
//! - Salary rank queries over all records
//!
//! ## Layout
//! ```text
//!   by_name  (surname, name)      by_email
//!   ┌───┬───┬───┐                 ┌───┬───┬───┐
//!   │ 2 │ 0 │ 1 │                 │ 0 │ 2 │ 1 │
//!   └─┬─┴─┬─┴─┬─┘                 └─┬─┴─┬─┴─┬─┘
//!     │   │   │                     │   │   │
//!     ▼   ▼   ▼                     ▼   ▼   ▼
//!   ┌─────────────────────────────────────────┐
//!   │ Arena: slot 0 │ slot 1 │ slot 2         │
//!   └─────────────────────────────────────────┘
//! ```
//! Both orderings are sorted vectors of slot ids searched by binary
//! search. Inserting or removing shifts elements, O(n).

mod arena;
mod record;
pub mod search;
mod table;

pub use record::{FullName, Rank, Record};
pub use table::Directory;
