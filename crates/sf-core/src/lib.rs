//! sf-core - Core library for Snipflow
//!
//! This crate provides the snippet store, text normalization, dependency
//! resolution, CTE composition, driver error translation and project
//! configuration used by the other Snipflow crates.

pub mod classify;
pub mod compose;
pub mod config;
pub mod error;
pub mod graph;
pub(crate) mod lexer;
pub mod matcher;
mod newtype_string;
pub mod normalize;
pub mod resolve;
pub mod session;
pub mod snippet_name;
pub mod store;
pub mod suggest;
pub mod translate;

pub use classify::{
    ChainClassifier, Classification, DriverFailure, ErrorClassifier, ErrorKind,
    MessagePatternClassifier, SqlStateClassifier,
};
pub use compose::{ComposedQuery, CteComposer, QuoteStyle};
pub use config::{Config, DatabaseConfig, Dialect, SnippetDef, SuggestionConfig};
pub use error::{CoreError, CoreResult};
pub use graph::SnippetGraph;
pub use matcher::{IdentifierMatcher, ReferenceMatcher};
pub use normalize::normalize;
pub use resolve::Resolver;
pub use session::{SessionSettings, SnippetSession};
pub use snippet_name::SnippetName;
pub use store::{DeleteMode, DeleteReport, SaveOptions, Snippet, SnippetStore};
pub use translate::{ErrorTranslator, KnownNames, TranslatedError, CTE_MSG, ORIGINAL_ERROR};
