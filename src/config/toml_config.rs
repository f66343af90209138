use crate::core::prompts::PromptOptions;
use crate::domain::model::CheckInRecord;
use crate::utils::error::{CheckInError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DOG_SPACES: i32 = 30;
pub const DEFAULT_CAT_SPACES: i32 = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityConfig {
    #[serde(default)]
    pub facility: FacilitySection,
    #[serde(default)]
    pub prompts: PromptOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilitySection {
    pub name: Option<String>,
    pub dog_spaces: i32,
    pub cat_spaces: i32,
}

impl Default for FacilitySection {
    fn default() -> Self {
        Self {
            name: None,
            dog_spaces: DEFAULT_DOG_SPACES,
            cat_spaces: DEFAULT_CAT_SPACES,
        }
    }
}

impl FacilityConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CheckInError::ConfigError {
            message: format!("Cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckInError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOG_SPACES})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckInError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_negative("facility.dog_spaces", self.facility.dog_spaces)?;
        validate_non_negative("facility.cat_spaces", self.facility.cat_spaces)?;
        if let Some(name) = &self.facility.name {
            validate_non_empty_string("facility.name", name)?;
        }
        Ok(())
    }

    pub fn facility_name(&self) -> &str {
        self.facility.name.as_deref().unwrap_or("PetCheckIn")
    }

    /// Blank record carrying this facility's capacities.
    pub fn initial_record(&self) -> CheckInRecord {
        CheckInRecord::new(
            "",
            "",
            0,
            self.facility.dog_spaces,
            self.facility.cat_spaces,
            0,
            0.0,
        )
    }
}

impl Validate for FacilityConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
