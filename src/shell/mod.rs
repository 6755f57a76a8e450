//! Interactive menu shell over a task store
//!
//! A synchronous read-eval-print loop: render the menu, validate a numeric
//! choice, dispatch to the store, repeat. Invalid input is never an error,
//! just a message and a re-prompt. The only ways out are the exit option
//! and an interrupt at a prompt; both are graceful.

mod input;

use std::io::Write;

use colored::Colorize;
use eyre::Result;
use tracing::info;

use crate::store::{TaskStore, UpdateOutcome};

pub use input::{LineReader, ReadLine, RustylineReader, ScriptedReader};

/// Why the shell stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// User chose the exit option from the menu
    Quit,
    /// Interrupt or end of input while waiting at a prompt
    Interrupted,
}

/// Result of a validated prompt: a value, or a shutdown request raised at
/// the read boundary. `Cancelled` propagates straight up to the main loop.
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

/// The interactive shell. Owns the store for the lifetime of the session.
pub struct Shell<R, W> {
    store: TaskStore,
    reader: R,
    out: W,
}

impl<R: LineReader, W: Write> Shell<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            store: TaskStore::new(),
            reader,
            out,
        }
    }

    /// The session's store, mainly for inspection in tests
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Run the menu loop until exit or interrupt.
    pub fn run(&mut self) -> Result<ShellExit> {
        loop {
            let choice = match self.menu_choice()? {
                Prompted::Value(choice) => choice,
                Prompted::Cancelled => return self.interrupted(),
            };

            let flow = match choice {
                0 => {
                    writeln!(self.out, "Goodbye! Have a nice day.")?;
                    info!("session ended via exit option");
                    return Ok(ShellExit::Quit);
                }
                1 => self.add_flow()?,
                2 => {
                    writeln!(self.out, "{}", self.store.render())?;
                    Prompted::Value(())
                }
                3 => self.update_flow()?,
                4 => self.delete_flow()?,
                5 => self.toggle_flow()?,
                // menu_choice only returns 0..=5
                _ => unreachable!("menu choice out of range"),
            };

            if let Prompted::Cancelled = flow {
                return self.interrupted();
            }
        }
    }

    fn interrupted(&mut self) -> Result<ShellExit> {
        writeln!(self.out, "Goodbye!")?;
        info!("session ended via interrupt");
        Ok(ShellExit::Interrupted)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Welcome to my Todo App".bold())?;
        writeln!(self.out, "========")?;
        writeln!(self.out, "1. Add Task")?;
        writeln!(self.out, "2. View Tasks")?;
        writeln!(self.out, "3. Update Task")?;
        writeln!(self.out, "4. Delete Task")?;
        writeln!(self.out, "5. Mark as Complete/Incomplete")?;
        writeln!(self.out, "0. Exit")?;
        Ok(())
    }

    /// Display the menu and read a choice in [0,5]. Out-of-range values
    /// get an error naming the value, then the menu again.
    fn menu_choice(&mut self) -> Result<Prompted<i64>> {
        loop {
            self.print_menu()?;
            match self.prompt_int("Choose an option: ")? {
                Prompted::Value(n) if (0..=5).contains(&n) => return Ok(Prompted::Value(n)),
                Prompted::Value(n) => {
                    writeln!(self.out, "Option {} not valid. Please choose 0-5.", n)?;
                }
                Prompted::Cancelled => return Ok(Prompted::Cancelled),
            }
        }
    }

    /// Loop until a line parses as an integer. Unbounded retry is
    /// intentional.
    fn prompt_int(&mut self, prompt: &str) -> Result<Prompted<i64>> {
        loop {
            match self.reader.read_line(prompt)? {
                ReadLine::Line(line) => match line.trim().parse::<i64>() {
                    Ok(n) => return Ok(Prompted::Value(n)),
                    Err(_) => {
                        writeln!(self.out, "Invalid input. Please enter a valid integer.")?;
                    }
                },
                ReadLine::Interrupted | ReadLine::Eof => return Ok(Prompted::Cancelled),
            }
        }
    }

    /// Read one line, trimmed of surrounding whitespace.
    fn prompt_text(&mut self, prompt: &str) -> Result<Prompted<String>> {
        Ok(match self.reader.read_line(prompt)? {
            ReadLine::Line(line) => Prompted::Value(line.trim().to_string()),
            ReadLine::Interrupted | ReadLine::Eof => Prompted::Cancelled,
        })
    }

    /// Yes/no confirmation, looping until a valid answer.
    ///
    /// No flow requires confirmation today; kept as shared prompt
    /// infrastructure alongside the integer prompt.
    pub fn confirm(&mut self, prompt: &str) -> Result<Prompted<bool>> {
        loop {
            match self.reader.read_line(prompt)? {
                ReadLine::Line(line) => match line.trim().to_lowercase().as_str() {
                    "y" | "yes" => return Ok(Prompted::Value(true)),
                    "n" | "no" => return Ok(Prompted::Value(false)),
                    _ => writeln!(self.out, "Invalid input. Please enter 'y' or 'n'.")?,
                },
                ReadLine::Interrupted | ReadLine::Eof => return Ok(Prompted::Cancelled),
            }
        }
    }

    fn add_flow(&mut self) -> Result<Prompted<()>> {
        let title = match self.prompt_text("Title: ")? {
            Prompted::Value(s) => s,
            Prompted::Cancelled => return Ok(Prompted::Cancelled),
        };
        let description = match self.prompt_text("Description: ")? {
            Prompted::Value(s) => s,
            Prompted::Cancelled => return Ok(Prompted::Cancelled),
        };

        let id = self.store.add(title, description);
        writeln!(self.out, "Task added successfully (ID: {}).", id)?;
        Ok(Prompted::Value(()))
    }

    fn update_flow(&mut self) -> Result<Prompted<()>> {
        let raw_id = match self.prompt_int("Enter task ID to update: ")? {
            Prompted::Value(n) => n,
            Prompted::Cancelled => return Ok(Prompted::Cancelled),
        };

        // negative input can never match a stored id
        let found = u32::try_from(raw_id)
            .ok()
            .and_then(|id| self.store.find(id))
            .map(|t| (t.id, t.title.clone(), t.description.clone()));

        let Some((id, title, description)) = found else {
            writeln!(self.out, "Task with ID {} not found.", raw_id)?;
            return Ok(Prompted::Value(()));
        };

        writeln!(self.out, "Current title: {}", title)?;
        writeln!(self.out, "Current description: {}", description)?;

        let new_title = match self.prompt_text("New title (press Enter to keep): ")? {
            Prompted::Value(s) => s,
            Prompted::Cancelled => return Ok(Prompted::Cancelled),
        };
        let new_description = match self.prompt_text("New description (press Enter to keep): ")? {
            Prompted::Value(s) => s,
            Prompted::Cancelled => return Ok(Prompted::Cancelled),
        };

        match self.store.update(id, &new_title, &new_description) {
            UpdateOutcome::Changed => writeln!(self.out, "Task updated.")?,
            // found but nothing new supplied: successful no-op, no message
            UpdateOutcome::Unchanged => {}
            UpdateOutcome::NotFound => {
                writeln!(self.out, "Task with ID {} not found.", id)?;
            }
        }
        Ok(Prompted::Value(()))
    }

    fn delete_flow(&mut self) -> Result<Prompted<()>> {
        let raw_id = match self.prompt_int("Enter task ID to delete: ")? {
            Prompted::Value(n) => n,
            Prompted::Cancelled => return Ok(Prompted::Cancelled),
        };

        let deleted = u32::try_from(raw_id)
            .map(|id| self.store.delete(id))
            .unwrap_or(false);

        // deletion is silent on success
        if !deleted {
            writeln!(self.out, "Task with ID {} not found.", raw_id)?;
        }
        Ok(Prompted::Value(()))
    }

    fn toggle_flow(&mut self) -> Result<Prompted<()>> {
        let raw_id = match self.prompt_int("Enter task ID to toggle: ")? {
            Prompted::Value(n) => n,
            Prompted::Cancelled => return Ok(Prompted::Cancelled),
        };

        let toggled = u32::try_from(raw_id).ok().and_then(|id| self.store.toggle(id));

        match toggled {
            Some(true) => writeln!(self.out, "Task marked as complete.")?,
            Some(false) => writeln!(self.out, "Task marked as incomplete.")?,
            None => writeln!(self.out, "Task with ID {} not found.", raw_id)?,
        }
        Ok(Prompted::Value(()))
    }
}
