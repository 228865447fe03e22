//! Directory implementation
//!
//! One arena of records, two sorted slot-id orderings over it.

use std::cmp::Ordering;

use crate::command::{Command, Response};
use crate::config::Config;
use crate::error::{AgendaError, Result};

use super::arena::{Arena, SlotId};
use super::search::{locate, Slot};
use super::{FullName, Rank, Record};

/// In-memory employee directory, keyed by full name and by email
///
/// ## Invariants
/// - `by_name` is strictly increasing by (surname, name)
/// - `by_email` is strictly increasing by email
/// - both hold every arena slot exactly once
///
/// Every mutation resolves all positions and checks all preconditions
/// before writing to either ordering, so a failed call leaves the
/// directory untouched.
pub struct Directory {
    /// Owner of the record data
    arena: Arena,

    /// Slot ids in by-name order
    by_name: Vec<SlotId>,

    /// Slot ids in by-email order
    by_email: Vec<SlotId>,

    /// Renaming onto the record's own key is a no-op instead of a duplicate
    allow_self_rename: bool,
}

impl Directory {
    /// Create an empty directory with default config
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty directory sized and configured by `config`
    pub fn with_config(config: &Config) -> Self {
        Self {
            arena: Arena::with_capacity(config.initial_capacity),
            by_name: Vec::with_capacity(config.initial_capacity),
            by_email: Vec::with_capacity(config.initial_capacity),
            allow_self_rename: config.allow_self_rename,
        }
    }

    // =========================================================================
    // Insert / Delete
    // =========================================================================

    /// Add an employee.
    ///
    /// Fails if the email or the (name, surname) pair is already taken.
    pub fn add(&mut self, name: &str, surname: &str, email: &str, salary: u32) -> Result<()> {
        let email_at = match self.find_email(email) {
            Slot::Found(_) => {
                tracing::trace!(email, "add rejected: email taken");
                return Err(AgendaError::DuplicateEmail(email.to_string()));
            }
            Slot::Vacant(pos) => pos,
        };
        let name_at = match self.find_name(name, surname) {
            Slot::Found(_) => {
                tracing::trace!(name, surname, "add rejected: name taken");
                return Err(duplicate_name(name, surname));
            }
            Slot::Vacant(pos) => pos,
        };

        let id = self.arena.insert(Record::new(name, surname, email, salary));
        self.by_email.insert(email_at, id);
        self.by_name.insert(name_at, id);

        tracing::debug!(name, surname, email, salary, "employee added");
        Ok(())
    }

    /// Delete the employee called (name, surname), returning the removed record
    pub fn delete(&mut self, name: &str, surname: &str) -> Result<Record> {
        let name_at = self.name_pos(name, surname)?;
        let id = self.by_name[name_at];
        let email_at = self.email_pos_of(id);

        let record = self.detach(id, name_at, email_at);
        tracing::debug!(name, surname, email = %record.email, "employee deleted");
        Ok(record)
    }

    /// Delete the employee with `email`, returning the removed record
    pub fn delete_by_email(&mut self, email: &str) -> Result<Record> {
        let email_at = self.email_pos(email)?;
        let id = self.by_email[email_at];
        let name_at = self.name_pos_of(id);

        let record = self.detach(id, name_at, email_at);
        tracing::debug!(email, name = %record.name, surname = %record.surname, "employee deleted");
        Ok(record)
    }

    // =========================================================================
    // Key Updates
    // =========================================================================

    /// Give the employee with `email` a new (name, surname).
    ///
    /// Salary and email are kept. Fails if `email` is unknown or the new
    /// name belongs to any record, including this one unless
    /// `allow_self_rename` is set.
    pub fn change_full_name(&mut self, email: &str, new_name: &str, new_surname: &str) -> Result<()> {
        let email_at = self.email_pos(email)?;
        let id = self.by_email[email_at];
        let old_at = self.name_pos_of(id);

        let insert_at = match self.find_name(new_name, new_surname) {
            Slot::Found(pos) if pos == old_at && self.allow_self_rename => {
                tracing::trace!(email, "rename onto own name, nothing to do");
                return Ok(());
            }
            Slot::Found(_) => {
                tracing::trace!(email, new_name, new_surname, "rename rejected: name taken");
                return Err(duplicate_name(new_name, new_surname));
            }
            Slot::Vacant(pos) => pos,
        };

        relocate(&mut self.by_name, old_at, insert_at);
        let record = &mut self.arena[id];
        record.name = new_name.to_string();
        record.surname = new_surname.to_string();

        tracing::debug!(email, new_name, new_surname, "employee renamed");
        Ok(())
    }

    /// Give the employee called (name, surname) a new email.
    ///
    /// Salary and name are kept. Fails if the name is unknown or
    /// `new_email` belongs to any record, including this one unless
    /// `allow_self_rename` is set.
    pub fn change_email(&mut self, name: &str, surname: &str, new_email: &str) -> Result<()> {
        let name_at = self.name_pos(name, surname)?;
        let id = self.by_name[name_at];
        let old_at = self.email_pos_of(id);

        let insert_at = match self.find_email(new_email) {
            Slot::Found(pos) if pos == old_at && self.allow_self_rename => {
                tracing::trace!(name, surname, "email change onto own email, nothing to do");
                return Ok(());
            }
            Slot::Found(_) => {
                tracing::trace!(name, surname, new_email, "email change rejected: email taken");
                return Err(AgendaError::DuplicateEmail(new_email.to_string()));
            }
            Slot::Vacant(pos) => pos,
        };

        relocate(&mut self.by_email, old_at, insert_at);
        self.arena[id].email = new_email.to_string();

        tracing::debug!(name, surname, new_email, "employee email changed");
        Ok(())
    }

    // =========================================================================
    // Salary
    // =========================================================================

    pub fn set_salary(&mut self, name: &str, surname: &str, salary: u32) -> Result<()> {
        let id = self.by_name[self.name_pos(name, surname)?];
        self.arena[id].salary = salary;
        tracing::debug!(name, surname, salary, "salary set");
        Ok(())
    }

    pub fn set_salary_by_email(&mut self, email: &str, salary: u32) -> Result<()> {
        let id = self.by_email[self.email_pos(email)?];
        self.arena[id].salary = salary;
        tracing::debug!(email, salary, "salary set");
        Ok(())
    }

    /// Salary of (name, surname). A zero salary is `Ok(0)`.
    pub fn salary(&self, name: &str, surname: &str) -> Result<u32> {
        let id = self.by_name[self.name_pos(name, surname)?];
        Ok(self.arena[id].salary)
    }

    pub fn salary_by_email(&self, email: &str) -> Result<u32> {
        let id = self.by_email[self.email_pos(email)?];
        Ok(self.arena[id].salary)
    }

    /// Salary rank range of (name, surname), ties sharing the range. O(n).
    pub fn rank(&self, name: &str, surname: &str) -> Result<Rank> {
        let id = self.by_name[self.name_pos(name, surname)?];
        Ok(self.rank_of(self.arena[id].salary))
    }

    pub fn rank_by_email(&self, email: &str) -> Result<Rank> {
        let id = self.by_email[self.email_pos(email)?];
        Ok(self.rank_of(self.arena[id].salary))
    }

    fn rank_of(&self, salary: u32) -> Rank {
        let (below, equal) = self
            .arena
            .iter()
            .fold((0, 0), |(below, equal), record| match record.salary.cmp(&salary) {
                Ordering::Less => (below + 1, equal),
                Ordering::Equal => (below, equal + 1),
                Ordering::Greater => (below, equal),
            });

        // `equal` counts the target itself, so it is at least 1
        Rank {
            min: below,
            max: below + equal - 1,
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// First employee in by-name order
    pub fn first(&self) -> Result<FullName> {
        self.by_name
            .first()
            .map(|&id| self.arena[id].full_name())
            .ok_or(AgendaError::Empty)
    }

    /// Employee following (name, surname) in by-name order
    pub fn next(&self, name: &str, surname: &str) -> Result<FullName> {
        let pos = self.name_pos(name, surname)?;
        match self.by_name.get(pos + 1) {
            Some(&id) => Ok(self.arena[id].full_name()),
            None => Err(AgendaError::EndOfDirectory {
                name: name.to_string(),
                surname: surname.to_string(),
            }),
        }
    }

    /// Records in by-name order
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.by_name.iter().map(move |&id| &self.arena[id])
    }

    // =========================================================================
    // Point Lookups
    // =========================================================================

    /// Copy of the record called (name, surname)
    pub fn get(&self, name: &str, surname: &str) -> Result<Record> {
        let id = self.by_name[self.name_pos(name, surname)?];
        Ok(self.arena[id].clone())
    }

    /// Copy of the record with `email`
    pub fn get_by_email(&self, email: &str) -> Result<Record> {
        let id = self.by_email[self.email_pos(email)?];
        Ok(self.arena[id].clone())
    }

    pub fn contains_name(&self, name: &str, surname: &str) -> bool {
        self.find_name(name, surname).found().is_some()
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.find_email(email).found().is_some()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Verify ordering, uniqueness and sync of both orderings.
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let len = self.arena.len();
        if self.by_name.len() != len || self.by_email.len() != len {
            return Err(format!(
                "size mismatch: arena {}, by_name {}, by_email {}",
                len,
                self.by_name.len(),
                self.by_email.len()
            ));
        }

        for pair in self.by_name.windows(2) {
            let (a, b) = (&self.arena[pair[0]], &self.arena[pair[1]]);
            if a.cmp_name(&b.name, &b.surname) != Ordering::Less {
                return Err(format!(
                    "by_name out of order: {} {} before {} {}",
                    a.name, a.surname, b.name, b.surname
                ));
            }
        }
        for pair in self.by_email.windows(2) {
            let (a, b) = (&self.arena[pair[0]], &self.arena[pair[1]]);
            if a.cmp_email(&b.email) != Ordering::Less {
                return Err(format!("by_email out of order: {} before {}", a.email, b.email));
            }
        }

        // Both orderings must be permutations of the arena's slots
        for (label, ordering) in [("by_name", &self.by_name), ("by_email", &self.by_email)] {
            let mut ids = ordering.clone();
            ids.sort_unstable();
            if !ids.iter().copied().eq(0..len) {
                return Err(format!("{} does not cover every record exactly once", label));
            }
        }

        Ok(())
    }

    // =========================================================================
    // Command Routing
    // =========================================================================

    /// Run one command, folding its outcome into a `Response`
    pub fn execute(&mut self, command: Command) -> Response {
        if let Some(response) = self.query(&command) {
            return response;
        }

        let outcome = match command {
            Command::Add { name, surname, email, salary } => {
                self.add(&name, &surname, &email, salary)
            }
            Command::Delete { name, surname } => self.delete(&name, &surname).map(drop),
            Command::DeleteByEmail { email } => self.delete_by_email(&email).map(drop),
            Command::ChangeFullName { email, new_name, new_surname } => {
                self.change_full_name(&email, &new_name, &new_surname)
            }
            Command::ChangeEmail { name, surname, new_email } => {
                self.change_email(&name, &surname, &new_email)
            }
            Command::SetSalary { name, surname, salary } => {
                self.set_salary(&name, &surname, salary)
            }
            Command::SetSalaryByEmail { email, salary } => self.set_salary_by_email(&email, salary),
            read => unreachable!("read-only command {:?} not answered by query", read),
        };

        match outcome {
            Ok(()) => Response::Done,
            Err(e) => Response::Failed(e),
        }
    }

    /// Answer a read-only command. `None` for commands that mutate.
    pub fn query(&self, command: &Command) -> Option<Response> {
        let response = match command {
            Command::Salary { name, surname } => {
                respond(self.salary(name, surname), Response::Salary)
            }
            Command::SalaryByEmail { email } => respond(self.salary_by_email(email), Response::Salary),
            Command::Rank { name, surname } => respond(self.rank(name, surname), Response::Rank),
            Command::RankByEmail { email } => respond(self.rank_by_email(email), Response::Rank),
            Command::First => respond(self.first(), Response::Employee),
            Command::Next { name, surname } => respond(self.next(name, surname), Response::Employee),
            _ => return None,
        };
        Some(response)
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn find_name(&self, name: &str, surname: &str) -> Slot {
        locate(&self.by_name, |&id| self.arena[id].cmp_name(name, surname))
    }

    fn find_email(&self, email: &str) -> Slot {
        locate(&self.by_email, |&id| self.arena[id].cmp_email(email))
    }

    /// Position of (name, surname) in `by_name`, or NotFound
    fn name_pos(&self, name: &str, surname: &str) -> Result<usize> {
        self.find_name(name, surname)
            .found()
            .ok_or_else(|| AgendaError::NotFound(format!("{} {}", name, surname)))
    }

    /// Position of `email` in `by_email`, or NotFound
    fn email_pos(&self, email: &str) -> Result<usize> {
        self.find_email(email)
            .found()
            .ok_or_else(|| AgendaError::NotFound(email.to_string()))
    }

    /// Position in `by_name` of a record known to be live
    fn name_pos_of(&self, id: SlotId) -> usize {
        let record = &self.arena[id];
        match self.find_name(&record.name, &record.surname) {
            Slot::Found(pos) => pos,
            Slot::Vacant(_) => unreachable!("by_name lost slot {}", id),
        }
    }

    /// Position in `by_email` of a record known to be live
    fn email_pos_of(&self, id: SlotId) -> usize {
        match self.find_email(&self.arena[id].email) {
            Slot::Found(pos) => pos,
            Slot::Vacant(_) => unreachable!("by_email lost slot {}", id),
        }
    }

    /// Unlink slot `id` from both orderings and drop it from the arena
    fn detach(&mut self, id: SlotId, name_at: usize, email_at: usize) -> Record {
        self.by_name.remove(name_at);
        self.by_email.remove(email_at);

        // The arena fills the hole with its last record; repoint that
        // record's entries while its old slot is still valid.
        let last = self.arena.len() - 1;
        if id != last {
            let name_at = self.name_pos_of(last);
            let email_at = self.email_pos_of(last);
            self.by_name[name_at] = id;
            self.by_email[email_at] = id;
        }
        self.arena.swap_remove(id)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

/// Move the element at `from` to the insertion point `to`, where `to` was
/// computed with the element still present.
fn relocate(ordering: &mut Vec<SlotId>, from: usize, to: usize) {
    let id = ordering.remove(from);
    let to = if from < to { to - 1 } else { to };
    ordering.insert(to, id);
}

fn duplicate_name(name: &str, surname: &str) -> AgendaError {
    AgendaError::DuplicateName {
        name: name.to_string(),
        surname: surname.to_string(),
    }
}

fn respond<T>(result: Result<T>, wrap: impl FnOnce(T) -> Response) -> Response {
    match result {
        Ok(value) => wrap(value),
        Err(e) => Response::Failed(e),
    }
}
