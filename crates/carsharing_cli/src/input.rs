//! Line-oriented reads from the interactive terminal.
//!
//! End of input is reported as `Ok(None)` so the session can shut down
//! instead of re-prompting forever.

use log::debug;
use std::io::{self, BufRead, Write};

const CHOICE_PROMPT: &str = "Enter your choice: ";
const NAME_PROMPT: &str = "Enter the company name: ";
const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a number.";

/// Prompting reader over a buffered console input.
pub struct InputReader<R: BufRead> {
    input: R,
}

impl<R: BufRead> InputReader<R> {
    /// Creates a reader over `input`.
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Prompts until a line parses as an integer.
    pub fn read_choice(&mut self, out: &mut impl Write) -> io::Result<Option<i64>> {
        loop {
            write!(out, "{CHOICE_PROMPT}")?;
            out.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => {
                    debug!("event=choice_parse module=input status=error error={err}");
                    writeln!(out, "{INVALID_NUMBER_MESSAGE}")?;
                }
            }
        }
    }

    /// Prompts for a company name and returns the line as typed.
    pub fn read_name(&mut self, out: &mut impl Write) -> io::Result<Option<String>> {
        write!(out, "{NAME_PROMPT}")?;
        out.flush()?;
        self.read_line()
    }

    // Strips only the line terminator. Bytes that are not UTF-8 are replaced
    // rather than failing the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        Ok(Some(line))
    }
}
