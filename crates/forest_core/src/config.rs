use crate::{
    constants::{
        BASE_STEP, DEFAULT_MAX_STEPS, MAX_BEDS, MAX_CHILDREN, MAX_GRID_AXIS, MAX_MAX_STEPS,
        MIN_MAX_STEPS,
    },
    error::{CalcError, Result},
    pattern::PatternQuery,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Bounds of the children x beds grid; stride = base_step + children + beds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct GridConfig {
    #[serde(default = "default_base_step")]
    pub base_step: u64,
    #[serde(default = "default_max_children")]
    pub max_children: u64,
    #[serde(default = "default_max_beds")]
    pub max_beds: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            base_step: BASE_STEP,
            max_children: MAX_CHILDREN,
            max_beds: MAX_BEDS,
        }
    }
}

impl GridConfig {
    /// Stride of the largest cell, `None` when it does not fit in a `u64`.
    pub fn max_stride(&self) -> Option<u64> {
        self.base_step
            .checked_add(self.max_children)?
            .checked_add(self.max_beds)
    }
}

fn default_base_step() -> u64 {
    BASE_STEP
}

fn default_max_children() -> u64 {
    MAX_CHILDREN
}

fn default_max_beds() -> u64 {
    MAX_BEDS
}

/// Defaults applied when the caller does not pass search options.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
    #[serde(default = "default_pattern")]
    pub pattern: String, // "all" | "custom" | catalog id
    #[serde(default)]
    pub custom_pattern: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            pattern: default_pattern(),
            custom_pattern: None,
        }
    }
}

fn default_max_steps() -> u64 {
    DEFAULT_MAX_STEPS
}

fn default_pattern() -> String {
    "all".to_string()
}

impl Config {
    /// Reads and validates a TOML configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CalcError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            CalcError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_MAX_STEPS..=MAX_MAX_STEPS).contains(&self.search.max_steps) {
            return Err(CalcError::Config(format!(
                "search.max_steps must be between {} and {}, got {}",
                MIN_MAX_STEPS, MAX_MAX_STEPS, self.search.max_steps
            )));
        }

        let query = self.query()?;
        if query == PatternQuery::Custom
            && self
                .search
                .custom_pattern
                .as_deref()
                .is_none_or(str::is_empty)
        {
            return Err(CalcError::Config(
                "search.custom_pattern is required when search.pattern is 'custom'".to_string(),
            ));
        }

        for (name, value) in [
            ("max_children", self.grid.max_children),
            ("max_beds", self.grid.max_beds),
        ] {
            if value > MAX_GRID_AXIS {
                return Err(CalcError::Config(format!(
                    "grid.{} must be at most {}, got {}",
                    name, MAX_GRID_AXIS, value
                )));
            }
        }

        match self.grid.max_stride() {
            None => {
                return Err(CalcError::Config(format!(
                    "grid.base_step {} overflows the stride",
                    self.grid.base_step
                )));
            }
            Some(0) => {
                return Err(CalcError::Config(
                    "grid must allow at least one non-zero stride".to_string(),
                ));
            }
            Some(_) => {}
        }

        Ok(())
    }

    /// The default query named by `search.pattern`.
    pub fn query(&self) -> Result<PatternQuery> {
        self.search.pattern.parse()
    }
}
