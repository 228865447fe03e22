//! # Agenda
//!
//! An in-memory employee directory with:
//! - Lookup by full name or by email, both exact keys
//! - Ordered traversal by (surname, name)
//! - Salary rank queries with shared ranks for ties
//! - All-or-nothing mutations across both indexes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Host (agenda-cli)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Engine                              │
//! │            (Single Writer / Multi Reader)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Directory                             │
//! │     ┌─────────────┐              ┌─────────────┐            │
//! │     │   by_name   │              │  by_email   │            │
//! │     └──────┬──────┘              └──────┬──────┘            │
//! │            └──────────┐  ┌──────────────┘                   │
//! │                     ┌─▼──▼─┐                                │
//! │                     │Arena │                                │
//! │                     └──────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod directory;
pub mod command;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AgendaError, Result};
pub use config::Config;
pub use directory::{Directory, FullName, Rank, Record};
pub use command::{Command, Response};
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Agenda
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
