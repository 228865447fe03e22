//! Agenda CLI
//!
//! Interactive host for a directory. Reads one command per line from
//! stdin and prints each response on stdout.
//!
//! ```text
//! add John Smith john 30000
//! set-salary 32000 john
//! rank John Smith
//! first
//! next John Smith
//! ```

use std::io::{self, BufRead, Write};

use agenda::{AgendaError, Command, Config, Engine};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Agenda CLI
#[derive(Parser, Debug)]
#[command(name = "agenda-cli")]
#[command(about = "In-memory employee directory shell")]
#[command(version)]
struct Args {
    /// Number of employees to preallocate for
    #[arg(short, long, default_value = "64")]
    capacity: usize,

    /// Treat renames onto the employee's own key as no-ops
    #[arg(long)]
    allow_self_rename: bool,
}

/// One input line
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct Line {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an employee
    Add {
        name: String,
        surname: String,
        email: String,
        salary: u32,
    },

    /// Delete by email, or by name and surname
    Del {
        #[arg(required = true, num_args = 1..=2)]
        key: Vec<String>,
    },

    /// Rename the employee with the given email
    Rename {
        email: String,
        new_name: String,
        new_surname: String,
    },

    /// Change the email of an employee
    Email {
        name: String,
        surname: String,
        new_email: String,
    },

    /// Set salary, by email or by name and surname
    SetSalary {
        salary: u32,
        #[arg(required = true, num_args = 1..=2)]
        key: Vec<String>,
    },

    /// Show salary, by email or by name and surname
    Salary {
        #[arg(required = true, num_args = 1..=2)]
        key: Vec<String>,
    },

    /// Show salary rank range, by email or by name and surname
    Rank {
        #[arg(required = true, num_args = 1..=2)]
        key: Vec<String>,
    },

    /// Show the first employee by surname, name
    First,

    /// Show the employee after the given one
    Next { name: String, surname: String },

    /// End the session
    Quit,
}

/// A lookup key given on the command line
enum Key {
    Email(String),
    FullName(String, String),
}

impl Key {
    fn parse(mut parts: Vec<String>) -> Result<Self, AgendaError> {
        match parts.len() {
            1 => Ok(Key::Email(parts.remove(0))),
            2 => {
                let surname = parts.remove(1);
                Ok(Key::FullName(parts.remove(0), surname))
            }
            n => Err(AgendaError::Parse(format!("expected 1 or 2 key parts, got {}", n))),
        }
    }
}

impl Commands {
    /// Convert to a directory command; `None` for `quit`
    fn into_command(self) -> Result<Option<Command>, AgendaError> {
        let command = match self {
            Commands::Add { name, surname, email, salary } => Command::Add { name, surname, email, salary },
            Commands::Del { key } => match Key::parse(key)? {
                Key::Email(email) => Command::DeleteByEmail { email },
                Key::FullName(name, surname) => Command::Delete { name, surname },
            },
            Commands::Rename { email, new_name, new_surname } => {
                Command::ChangeFullName { email, new_name, new_surname }
            }
            Commands::Email { name, surname, new_email } => Command::ChangeEmail { name, surname, new_email },
            Commands::SetSalary { salary, key } => match Key::parse(key)? {
                Key::Email(email) => Command::SetSalaryByEmail { email, salary },
                Key::FullName(name, surname) => Command::SetSalary { name, surname, salary },
            },
            Commands::Salary { key } => match Key::parse(key)? {
                Key::Email(email) => Command::SalaryByEmail { email },
                Key::FullName(name, surname) => Command::Salary { name, surname },
            },
            Commands::Rank { key } => match Key::parse(key)? {
                Key::Email(email) => Command::RankByEmail { email },
                Key::FullName(name, surname) => Command::Rank { name, surname },
            },
            Commands::First => Command::First,
            Commands::Next { name, surname } => Command::Next { name, surname },
            Commands::Quit => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn main() {
    // Initialize tracing/logging; stdout is reserved for responses
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,agenda=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Agenda CLI v{}", agenda::VERSION);

    let config = Config::builder()
        .initial_capacity(args.capacity)
        .allow_self_rename(args.allow_self_rename)
        .build();
    let engine = Engine::new(config);

    if let Err(e) = run(&engine) {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Session ended with {} employees", engine.len());
}

/// Read-eval-print loop over stdin
fn run(engine: &Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = match Line::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                // clap renders its own usage text
                write!(stdout, "{}", e.render())?;
                continue;
            }
        };

        match parsed.command.into_command() {
            Ok(Some(command)) => writeln!(stdout, "{}", engine.execute(command))?,
            Ok(None) => break,
            Err(e) => writeln!(stdout, "ERROR: {}", e)?,
        }
        stdout.flush()?;
    }

    Ok(())
}
