pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::ConsoleInput;
pub use crate::config::toml_config::FacilityConfig;
pub use crate::core::prompts::{CatSelection, PetTypeSelection, PromptOptions, TypeMatching};
pub use crate::core::session::CheckInSession;
pub use crate::domain::model::{CheckInRecord, PetType};
pub use crate::domain::ports::InputSource;
pub use crate::utils::error::{CheckInError, Result};
