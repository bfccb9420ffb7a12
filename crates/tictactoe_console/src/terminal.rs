//! Terminal-backed console.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tictactoe::Console;
use tracing::{debug, instrument};

/// Console over a line reader and a writer, normally locked stdin/stdout.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Creates a console. With `clear_screen` false, clears are skipped and
    /// screens simply follow each other.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    #[instrument(skip(self))]
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.show(text)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
