pub mod prompts;
pub mod session;

pub use crate::domain::model::{CheckInRecord, PetType};
pub use crate::domain::ports::InputSource;
pub use crate::utils::error::Result;
