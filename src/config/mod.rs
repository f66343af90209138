pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::prompts::{PromptOptions, TypeMatching};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pet-checkin")]
#[command(about = "Console check-in for a pet boarding facility")]
pub struct CliConfig {
    #[arg(short, long, help = "Path to a facility TOML config")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the final record as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,

    #[arg(long, help = "Reproduce the legacy desk program's prompt behaviour")]
    pub legacy: bool,

    #[arg(long, help = "Accept pet types regardless of case and surrounding spaces")]
    pub normalize_type: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列旗標覆蓋設定檔中的提示選項
    pub fn apply_overrides(&self, options: PromptOptions) -> PromptOptions {
        let mut options = if self.legacy {
            PromptOptions::legacy()
        } else {
            options
        };
        if self.normalize_type {
            options.type_matching = TypeMatching::Normalized;
        }
        options
    }
}
