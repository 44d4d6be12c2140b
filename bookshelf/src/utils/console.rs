use std::io;
use std::io::{BufRead, IsTerminal, Write};
use crossterm::style::Stylize;
use tracing::warn;
use crate::core::controller::{UserInput, UserOutput};

// ConsoleUserInput reads one line per prompt from stdin.
pub struct ConsoleUserInput<R: BufRead> {
    reader: R,
}

impl ConsoleUserInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleUserInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
        }
    }
}

impl<R: BufRead> UserInput for ConsoleUserInput<R> {
    fn read_input(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(err) => {
                warn!(error = %err, "failed to read console input");
                None
            }
        }
    }
}

// ConsoleUserOutput prints to stdout, error lines in red when attached to a terminal.
pub struct ConsoleUserOutput<W: Write> {
    writer: W,
    color: bool,
}

impl ConsoleUserOutput<io::Stdout> {
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal();
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleUserOutput<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer,
            color,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush()) {
            warn!(error = %err, "failed to write console output");
        }
    }
}

impl<W: Write> UserOutput for ConsoleUserOutput<W> {
    fn write_output(&mut self, message: &str) {
        self.write_line(message);
    }

    fn write_error(&mut self, message: &str) {
        if self.color {
            let styled = message.red().to_string();
            self.write_line(&styled);
        } else {
            self.write_line(message);
        }
    }
}
