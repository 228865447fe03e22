//! Engine Module
//!
//! Wraps a Directory for hosts that share it.
//!
//! ## Responsibilities
//! - Own the configuration and the directory
//! - Serialize writers, let readers run side by side
//! - Route commands to the directory

use parking_lot::RwLock;

use crate::command::{Command, Response};
use crate::config::Config;
use crate::directory::Directory;

/// A Directory behind a lock
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Mutations** (add/delete/rename/set-salary): take the write lock,
///   one at a time
/// - **Queries** (salary/rank/first/next): take the read lock and may
///   run concurrently
///
/// The Directory itself is single-threaded; all sharing goes through
/// this lock.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// The directory, guarded as a whole
    directory: RwLock<Directory>,
}

impl Engine {
    /// Create an engine with an empty directory
    pub fn new(config: Config) -> Self {
        tracing::info!(
            initial_capacity = config.initial_capacity,
            allow_self_rename = config.allow_self_rename,
            "directory engine ready"
        );

        let directory = Directory::with_config(&config);
        Self {
            config,
            directory: RwLock::new(directory),
        }
    }

    /// Execute a command
    ///
    /// Queries share the read lock; mutations take the write lock.
    pub fn execute(&self, command: Command) -> Response {
        let label = command.name();

        let response = if command.is_mutation() {
            self.directory.write().execute(command)
        } else {
            let directory = self.directory.read();
            match directory.query(&command) {
                Some(response) => response,
                None => unreachable!("{} is not a query", label),
            }
        };

        match &response {
            Response::Failed(e) => tracing::trace!(command = label, error = %e, "command refused"),
            ok => tracing::trace!(command = label, response = %ok, "command done"),
        }
        response
    }

    /// Run `f` with shared access to the directory
    pub fn read<R>(&self, f: impl FnOnce(&Directory) -> R) -> R {
        f(&self.directory.read())
    }

    /// Run `f` with exclusive access to the directory
    pub fn write<R>(&self, f: impl FnOnce(&mut Directory) -> R) -> R {
        f(&mut self.directory.write())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of employees
    pub fn len(&self) -> usize {
        self.directory.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.read().is_empty()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
