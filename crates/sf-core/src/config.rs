//! Configuration types and parsing for snipflow.yml

use crate::compose::QuoteStyle;
use crate::error::{CoreError, CoreResult};
use crate::suggest::{DEFAULT_CUTOFF, DEFAULT_MAX_SUGGESTIONS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Project configuration from snipflow.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// SQL dialect used for validation and AST reference matching
    #[serde(default)]
    pub dialect: Dialect,

    /// Quoting applied to CTE names. Defaults to the dialect's style.
    #[serde(default)]
    pub quote_style: Option<QuoteStyle>,

    /// Typo suggestion tuning
    #[serde(default)]
    pub suggestions: SuggestionConfig,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// SQL statements executed once after connecting, before any snippet runs
    #[serde(default)]
    pub on_run_start: Vec<String>,

    /// Snippets registered in file order
    #[serde(default)]
    pub snippets: Vec<SnippetDef>,
}

/// SQL dialect selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// DuckDB (default)
    #[default]
    DuckDb,
    /// SQLite
    Sqlite,
    /// PostgreSQL
    Postgres,
    /// MySQL
    MySql,
    /// Generic ANSI SQL
    Generic,
}

impl Dialect {
    /// Identifier quoting native to the dialect
    pub fn quote_style(self) -> QuoteStyle {
        match self {
            Dialect::MySql | Dialect::Sqlite => QuoteStyle::Backtick,
            Dialect::DuckDb | Dialect::Postgres | Dialect::Generic => QuoteStyle::DoubleQuote,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::DuckDb => write!(f, "duckdb"),
            Dialect::Sqlite => write!(f, "sqlite"),
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::MySql => write!(f, "mysql"),
            Dialect::Generic => write!(f, "generic"),
        }
    }
}

/// Typo suggestion settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestionConfig {
    /// Minimum similarity in `0.0..=1.0`
    #[serde(default = "default_cutoff")]
    pub cutoff: f32,

    /// Maximum number of names suggested
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

fn default_cutoff() -> f32 {
    DEFAULT_CUTOFF
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// DuckDB file path or `:memory:`
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

const DEFAULT_DB_PATH: &str = ":memory:";

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

/// A snippet declared in the project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnippetDef {
    /// Snippet name
    pub name: String,

    /// Raw SQL body, normalized on registration
    pub sql: String,

    /// Explicit dependencies, each declared earlier in the file
    #[serde(rename = "with", default)]
    pub with: Vec<String>,

    /// Register without executing the body first
    #[serde(default)]
    pub no_execute: bool,
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for snipflow.yml or snipflow.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("snipflow.yml");
        let yaml_path = dir.join("snipflow.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Quote style for CTE names, falling back to the dialect's
    pub fn effective_quote_style(&self) -> QuoteStyle {
        self.quote_style.unwrap_or_else(|| self.dialect.quote_style())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.suggestions.cutoff) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "suggestions.cutoff must be between 0.0 and 1.0, got {}",
                    self.suggestions.cutoff
                ),
            });
        }

        let mut seen = HashSet::new();
        for snippet in &self.snippets {
            if snippet.name.is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: "Snippet name cannot be empty".to_string(),
                });
            }
            if !seen.insert(snippet.name.as_str()) {
                return Err(CoreError::ConfigInvalid {
                    message: format!("Snippet '{}' is declared more than once", snippet.name),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
