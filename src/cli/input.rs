//! Terminal adapter for the what-if session
//!
//! Wraps rustyline so session prompts get line editing, and maps its
//! end-of-input signals onto the session's `read_line` contract.

use std::io;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use iaa_analytics::core::session::SessionIo;

/// Interactive console implementing the session's line I/O
pub struct ConsoleIo {
    editor: DefaultEditor,
}

impl ConsoleIo {
    /// Create a console adapter.
    ///
    /// # Errors
    /// Returns an [`io::Error`] when the terminal cannot be initialized.
    pub fn new() -> io::Result<Self> {
        let editor = DefaultEditor::new().map_err(io::Error::other)?;
        Ok(Self { editor })
    }
}

impl SessionIo for ConsoleIo {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-D and Ctrl-C both end the session, not the process
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(io::Error::other(err)),
        }
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}
