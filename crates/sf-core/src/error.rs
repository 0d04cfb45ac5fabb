//! Error types for sf-core

use thiserror::Error;

/// Core error type for Snipflow
#[derive(Error, Debug)]
pub enum CoreError {
    /// SF001: Snippet not found in the store
    #[error("[SF001] Snippet not found: '{name}'")]
    SnippetNotFound { name: String },

    /// SF002: Declared dependency is not a stored snippet
    #[error(
        "[SF002] '{name}' is not a valid snippet identifier. Valid identifiers are: {}",
        known_list(.known)
    )]
    UnknownDependency { name: String, known: Vec<String> },

    /// SF003: Strict delete refused because other snippets depend on the target
    #[error(
        "[SF003] Cannot delete '{name}': {} depend on it. Use force to delete only '{name}', or force-all to delete '{name}' and its dependents",
        .dependents.join(", ")
    )]
    DependentSnippetsExist {
        name: String,
        dependents: Vec<String>,
    },

    /// SF004: Dependency cycle found during resolution
    #[error("[SF004] Circular dependency detected: {cycle}")]
    CyclicDependency { cycle: String },

    /// SF005: Snippet lists itself as a dependency
    #[error("[SF005] Snippet '{name}' cannot appear in its own dependency list")]
    SelfDependency { name: String },

    /// SF006: Empty name where a name is required
    #[error("[SF006] Empty {context}")]
    EmptyName { context: String },

    /// SF007: Configuration file not found
    #[error("[SF007] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// SF008: Invalid configuration value
    #[error("[SF008] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// SF009: IO error with file path context
    #[error("[SF009] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// SF010: YAML parse error
    #[error("[SF010] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

impl CoreError {
    /// Stable, machine-readable tag for this error kind.
    pub fn error_type(&self) -> &'static str {
        match self {
            CoreError::SnippetNotFound { .. } => "SnippetNotFoundError",
            CoreError::UnknownDependency { .. } => "UnknownDependencyError",
            CoreError::DependentSnippetsExist { .. } => "DependentSnippetsExistError",
            CoreError::CyclicDependency { .. } => "CyclicDependencyError",
            CoreError::SelfDependency { .. } => "SelfDependencyError",
            CoreError::EmptyName { .. } => "EmptyNameError",
            CoreError::ConfigNotFound { .. }
            | CoreError::ConfigInvalid { .. }
            | CoreError::IoWithPath { .. }
            | CoreError::YamlParse(_) => "ConfigError",
        }
    }
}

fn known_list(known: &[String]) -> String {
    if known.is_empty() {
        "(no snippets stored)".to_string()
    } else {
        known.join(", ")
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
