use crate::utils::error::{CheckInError, Result};

/// Capability for reading console-style input. Injected into every routine
/// that prompts, so tests can script the answers.
pub trait InputSource {
    /// Next line without its terminator. `InputClosed` at end of input.
    fn read_line(&mut self) -> Result<String>;

    fn read_int(&mut self) -> Result<i32> {
        let line = self.read_line()?;
        let trimmed = line.trim();
        trimmed.parse().map_err(|_| CheckInError::InvalidNumber {
            input: trimmed.to_string(),
        })
    }

    fn read_amount(&mut self) -> Result<f64> {
        let line = self.read_line()?;
        let trimmed = line.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CheckInError::InvalidNumber {
                input: trimmed.to_string(),
            }),
        }
    }
}
