//! taskpad - menu-driven todo manager with in-memory state
//!
//! All task records live in process memory for the duration of a single
//! run; nothing is persisted. A numbered menu drives add, list, update,
//! delete, and completion-toggle operations against an ordered store.
//!
//! # Architecture
//!
//! ```text
//! main.rs  -> Shell (menu loop, validated prompts)
//!                -> TaskStore (ordered records, id assignment)
//! ```
//!
//! Control flow is one-directional: the shell validates input and
//! dispatches to the store; the store returns plain outcomes the shell
//! turns into messages.
//!
//! # Example
//!
//! ```ignore
//! use taskpad::Shell;
//! use taskpad::shell::RustylineReader;
//!
//! let reader = RustylineReader::new()?;
//! let mut shell = Shell::new(reader, std::io::stdout());
//! shell.run()?;
//! ```

pub mod cli;
pub mod config;
pub mod shell;
pub mod store;

pub use shell::{Shell, ShellExit};
pub use store::{Task, TaskStore, UpdateOutcome};
