//! Input seam for the interactive shell

use std::collections::VecDeque;

use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    /// A full line, terminator stripped
    Line(String),
    /// Ctrl+C at the prompt
    Interrupted,
    /// End of input (Ctrl+D or exhausted pipe)
    Eof,
}

/// Source of user input lines.
///
/// The shell is written against this trait so tests can script an entire
/// session without a terminal. Interrupt and end-of-input are surfaced as
/// values, not errors: they are shutdown requests, handled at the read
/// boundary.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine>;
}

/// Production reader backed by rustyline (line editing, history).
pub struct RustylineReader {
    editor: DefaultEditor,
}

impl RustylineReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { editor })
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(ReadLine::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadLine::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadLine::Eof),
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Scripted reader for tests: yields canned lines, then end-of-input.
pub struct ScriptedReader {
    lines: VecDeque<String>,
    /// Prompts seen, in order, for assertions
    pub prompts: Vec<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine> {
        self.prompts.push(prompt.to_string());
        Ok(match self.lines.pop_front() {
            Some(line) => ReadLine::Line(line),
            None => ReadLine::Eof,
        })
    }
}
