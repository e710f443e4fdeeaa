//! Line-oriented terminal I/O.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompts on one stream and reads answers from another.
///
/// Boxed so the session can run against stdin/stdout or in-memory buffers.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl<'a> Console<'a> {
    /// Creates a console over the given streams.
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Writes a line.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to terminal")
    }

    /// Shows `question` and reads one answer line, trimmed.
    ///
    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question).context("Failed to write to terminal")?;
        self.output.flush().context("Failed to flush terminal")?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            debug!("Input closed");
            writeln!(self.output).context("Failed to write to terminal")?;
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD, which no prompt accepts.
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Asks until `parse` accepts the answer, printing `retry` after each
    /// rejection. Returns `None` once input is exhausted.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => self.say(retry)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(Cursor::new("  hello \n"), &mut out);
            assert_eq!(console.ask("? ").unwrap(), Some("hello".to_string()));
            assert_eq!(console.ask("? ").unwrap(), None);
        }
        assert!(String::from_utf8(out).unwrap().starts_with("? ? "));
    }

    #[test]
    fn test_ask_survives_invalid_utf8() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new(b"\xff\xfe\n5\n".to_vec()), &mut out);
        let answer = console.ask("? ").unwrap().unwrap();
        assert!(answer.parse::<i64>().is_err());
        assert_eq!(console.ask("? ").unwrap(), Some("5".to_string()));
    }

    #[test]
    fn test_ask_until_retries() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(Cursor::new("a\n7\n"), &mut out);
            let value = console
                .ask_until("n? ", "again", |s| s.parse::<u8>().ok())
                .unwrap();
            assert_eq!(value, Some(7));
        }
        assert_eq!(String::from_utf8(out).unwrap(), "n? again\nn? ");
    }
}
