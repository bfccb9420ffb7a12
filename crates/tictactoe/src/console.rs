//! The console the game loop talks to.

use std::collections::VecDeque;
use std::io;

/// Line-oriented console used by [`GameLoop::run`](crate::GameLoop::run).
///
/// Implementations own all terminal handling. The game loop only hands over
/// finished text and reads whole lines back.
pub trait Console {
    /// Clears the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Writes `text` as is.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` and reads one line of input.
    ///
    /// Returns `None` once input is exhausted. The line terminator is not
    /// part of the returned string.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        (**self).show(text)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        (**self).prompt(text)
    }
}

/// In-memory console fed from a fixed list of answers.
///
/// Everything shown is appended to a transcript; clears are counted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: String,
    clears: usize,
}

impl ScriptedConsole {
    /// Creates a console that will answer prompts with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// All text shown and prompted so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of times the screen was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.transcript.push_str(text);
        let answer = self.answers.pop_front();
        if let Some(line) = &answer {
            self.transcript.push_str(line);
            self.transcript.push('\n');
        }
        Ok(answer)
    }
}
