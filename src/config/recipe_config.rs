use crate::domain::ports::ConfigProvider;
use crate::domain::step::RecipeStep;
use crate::utils::error::{Result, TurtleError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    pub recipe: RecipeInfo,
    pub source: SourceConfig,
    pub load: LoadConfig,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeInfo {
    pub name: String,
    pub description: Option<String>,
    pub monitor: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
    pub has_header: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub filename: Option<String>,
}

const DEFAULT_OUTPUT_FILENAME: &str = "output.csv";

impl RecipeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TurtleError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| TurtleError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.recipe.monitor.unwrap_or(false)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("recipe.name", &self.recipe.name)?;
        validate_path("source.path", &self.source.path)?;
        validate_path("load.output_path", &self.load.output_path)?;
        if let Some(filename) = &self.load.filename {
            validate_path("load.filename", filename)?;
        }

        if self.steps.is_empty() {
            return Err(TurtleError::ConfigValidation {
                field: "steps".to_string(),
                message: "A recipe needs at least one step".to_string(),
            });
        }

        // every step must build; the expressions are discarded
        for (position, step) in self.steps.iter().enumerate() {
            step.compile().map_err(|e| TurtleError::ConfigValidation {
                field: format!("steps[{}] ({})", position, step.op_name()),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }
}

impl ConfigProvider for RecipeConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn has_header(&self) -> bool {
        self.source.has_header.unwrap_or(true)
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_filename(&self) -> &str {
        self.load.filename.as_deref().unwrap_or(DEFAULT_OUTPUT_FILENAME)
    }

    fn steps(&self) -> &[RecipeStep] {
        &self.steps
    }
}

impl Validate for RecipeConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
