//! Configuration for Agenda
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a Directory instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Number of records to reserve room for up front, in the record arena
    /// and in both orderings
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Rename Policy
    // -------------------------------------------------------------------------
    /// Whether renaming a record to its own current key succeeds as a no-op.
    ///
    /// When false, `change_full_name` / `change_email` with the record's
    /// current key fail with a duplicate-key error.
    pub allow_self_rename: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            allow_self_rename: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of records to preallocate for
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Allow renames onto the record's own current key
    pub fn allow_self_rename(mut self, allow: bool) -> Self {
        self.config.allow_self_rename = allow;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
