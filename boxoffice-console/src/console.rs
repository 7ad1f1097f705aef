use crate::error::{ConsoleError, ConsoleResult};
use std::io::{self, BufRead, Write};

/// Line-oriented prompt/response channel over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next line without its line ending. Other whitespace is kept so that
    /// movie names match exactly. Bytes that are not UTF-8 are replaced, so
    /// a garbled line is rejected by the caller rather than ending the run.
    pub fn read_line(&mut self) -> ConsoleResult<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn prompt(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn prompt_number(&mut self, prompt: &str) -> ConsoleResult<i32> {
        let line = self.prompt(prompt)?;
        let trimmed = line.trim();
        trimmed.parse()
            .map_err(|_| ConsoleError::InvalidNumber(trimmed.to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
