use crate::core::shell::{MenuChoice, Shell, ShellState, CHOICE_PROMPT, MENU_LINES, QUERY_PROMPT};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Console adapter around a [`Shell`]: prints the menu, reads answers, and
/// writes the replies.
pub struct Session<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs until the user picks exit or input runs out.
    pub fn run<S: Storage, C: ConfigProvider>(&mut self, shell: &mut Shell<S, C>) -> Result<()> {
        writeln!(self.writer, "Welcome to the {}.", shell.app_name())?;

        while shell.state() == ShellState::Running {
            for line in MENU_LINES {
                writeln!(self.writer, "{}", line)?;
            }
            self.prompt(CHOICE_PROMPT)?;

            let choice = match self.read_token()? {
                Some(token) => MenuChoice::parse(&token),
                None => {
                    tracing::debug!("End of input, leaving the menu loop");
                    MenuChoice::Exit
                }
            };

            let query = if shell.wants_query(&choice) {
                self.prompt(QUERY_PROMPT)?;
                self.read_token()?
            } else {
                None
            };

            let reply = shell.dispatch(&choice, query.as_deref());
            for line in &reply.lines {
                writeln!(self.writer, "{}", line)?;
            }
            if reply.state == ShellState::Running {
                writeln!(self.writer)?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// First whitespace-separated word of the next non-blank line, or `None`
    /// at end of input. Invalid UTF-8 is replaced, never an error.
    fn read_token(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}
