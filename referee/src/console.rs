use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{debug, trace};

/// Line-based, blocking conversation with a human player.
pub struct Console<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading answers.
    // Should always be empty before and after ask().
    buf: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Asks for an integer until `validate` accepts it.
    ///
    /// Answers that don't parse print `not_a_number`, rejected answers print the
    /// message returned by `validate`; both are followed by the same question
    /// again. Fails only on I/O errors or when the input is closed.
    pub fn ask<T>(
        &mut self,
        question: &str,
        not_a_number: &str,
        mut validate: impl FnMut(i64) -> Result<T, String>,
    ) -> anyhow::Result<T> {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            self.buf.clear();
            let num_bytes_read = self.input.read_line(&mut self.buf)?;
            if num_bytes_read == 0 {
                // Leave the prompt on its own line
                writeln!(self.output)?;
                anyhow::bail!(
                    "Input was closed while waiting for an answer to {:?}",
                    question.trim()
                );
            }
            let answer = self.buf.trim();
            trace!(name: "Received answer", question = question.trim(), answer);

            let result = match answer.parse::<i64>() {
                Ok(number) => validate(number),
                Err(_) => Err(String::from(not_a_number)),
            };
            self.buf.clear();
            match result {
                Ok(value) => return Ok(value),
                Err(msg) => {
                    debug!(reason = %msg, "Rejected answer");
                    writeln!(self.output, "{}", msg)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
