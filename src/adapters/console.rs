use crate::domain::ports::InputSource;
use crate::utils::error::{CheckInError, Result};
use std::io::{self, BufRead};

/// Line-oriented `InputSource` over any buffered reader.
///
/// The reader is owned for as long as the session needs it and released on
/// drop; use `into_inner` to take it back early.
#[derive(Debug)]
pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ConsoleInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(CheckInError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        tracing::trace!("read line: {:?}", line);
        Ok(line)
    }
}
