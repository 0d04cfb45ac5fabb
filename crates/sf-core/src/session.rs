//! Session facade
//!
//! One `SnippetSession` per interactive session. It owns the store and the
//! composition/translation settings; front ends call it instead of wiring the
//! pieces together themselves.

use crate::classify::DriverFailure;
use crate::compose::{ComposedQuery, CteComposer, QuoteStyle};
use crate::config::{Config, SnippetDef};
use crate::error::CoreResult;
use crate::matcher::ReferenceMatcher;
use crate::resolve::Resolver;
use crate::snippet_name::SnippetName;
use crate::store::{DeleteMode, DeleteReport, SaveOptions, Snippet, SnippetStore};
use crate::suggest::{DEFAULT_CUTOFF, DEFAULT_MAX_SUGGESTIONS};
use crate::translate::{ErrorTranslator, KnownNames, TranslatedError};

/// Composition and suggestion settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub quote_style: QuoteStyle,
    pub cutoff: f32,
    pub max_suggestions: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::default(),
            cutoff: DEFAULT_CUTOFF,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            quote_style: config.effective_quote_style(),
            cutoff: config.suggestions.cutoff,
            max_suggestions: config.suggestions.max_suggestions,
        }
    }
}

/// Snippet store plus the composition and error translation pipeline
#[derive(Debug)]
pub struct SnippetSession {
    store: SnippetStore,
    settings: SessionSettings,
}

impl SnippetSession {
    /// Empty session with default settings
    pub fn new() -> Self {
        Self::with_settings(SessionSettings::default())
    }

    /// Empty session with custom settings
    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            store: SnippetStore::new(),
            settings,
        }
    }

    /// Current settings
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Replace the matcher used for inferred dependencies
    pub fn set_matcher(&mut self, matcher: Box<dyn ReferenceMatcher>) {
        self.store.set_matcher(matcher);
    }

    /// Read-only access to the store
    pub fn store(&self) -> &SnippetStore {
        &self.store
    }

    /// Register snippets in order. Stops at the first failure; snippets
    /// registered before it stay stored.
    pub fn load_snippets(&mut self, defs: &[SnippetDef]) -> CoreResult<()> {
        for def in defs {
            self.save_with(
                &def.name,
                &def.sql,
                def.with.as_slice(),
                SaveOptions {
                    no_execute: def.no_execute,
                },
            )?;
        }
        Ok(())
    }

    /// Save (or replace) a snippet
    pub fn save<S: AsRef<str>>(&mut self, name: &str, raw_body: &str, with: &[S]) -> CoreResult<()> {
        self.store.save(name, raw_body, with)
    }

    /// Save (or replace) a snippet with front-end options
    pub fn save_with<S: AsRef<str>>(
        &mut self,
        name: &str,
        raw_body: &str,
        with: &[S],
        options: SaveOptions,
    ) -> CoreResult<()> {
        self.store.save_with(name, raw_body, with, options)
    }

    /// Delete a snippet, cascading to dependents with `force_all`
    pub fn delete(&mut self, name: &str, force_all: bool) -> CoreResult<Vec<SnippetName>> {
        self.store.delete(name, force_all)
    }

    /// Delete a snippet according to `mode`
    pub fn delete_with(&mut self, name: &str, mode: DeleteMode) -> CoreResult<DeleteReport> {
        self.store.delete_with(name, mode)
    }

    /// Stored names in insertion order
    pub fn list_names(&self) -> Vec<String> {
        self.store.list_names()
    }

    /// Expand an ad-hoc query with the snippets it needs.
    ///
    /// `final_query` is passed through untouched, terminator included.
    pub fn resolve_and_compose<S: AsRef<str>>(
        &self,
        final_query: &str,
        with: &[S],
    ) -> CoreResult<ComposedQuery> {
        let order = Resolver::new(&self.store).resolve(final_query, with)?;
        Ok(self.compose(order, final_query, None))
    }

    /// Compose a stored snippet with its dependencies
    pub fn compose_snippet(&self, name: &str) -> CoreResult<ComposedQuery> {
        let snippet = self.store.get(name)?;
        let order = Resolver::new(&self.store).resolve_snippet(name)?;
        Ok(self.compose(order, snippet.body(), Some(snippet)))
    }

    /// Full composed text for a stored snippet, byte-identical to what
    /// [`compose_snippet`](Self::compose_snippet) would execute
    pub fn render_snippet(&self, name: &str) -> CoreResult<String> {
        self.compose_snippet(name).map(|query| query.sql)
    }

    /// Snippet names as suggestion candidates; front ends add live tables
    /// and columns
    pub fn known_names(&self) -> KnownNames {
        KnownNames::default().with_snippets(self.store.list_names())
    }

    /// Translate a failure from a query that used no snippets
    pub fn translate_error(&self, failure: &DriverFailure, known: &KnownNames) -> TranslatedError {
        self.translator().translate(failure, known)
    }

    /// Translate a failure from executing `composed`
    pub fn translate_composed_error(
        &self,
        failure: &DriverFailure,
        known: &KnownNames,
        composed: &ComposedQuery,
    ) -> TranslatedError {
        self.translator()
            .translate_with_context(failure, known, Some(composed))
    }

    fn translator(&self) -> ErrorTranslator {
        ErrorTranslator::new().with_suggestions(self.settings.cutoff, self.settings.max_suggestions)
    }

    fn compose(
        &self,
        order: Vec<SnippetName>,
        final_query: &str,
        target: Option<&Snippet>,
    ) -> ComposedQuery {
        let snippets: Vec<&Snippet> = order
            .iter()
            .filter_map(|name| self.store.lookup(name.as_str()))
            .collect();

        let sql = CteComposer::new(self.settings.quote_style).compose_snippets(&snippets, final_query);

        let mut unverified: Vec<SnippetName> = snippets
            .iter()
            .filter(|s| s.is_unverified())
            .map(|s| s.name().clone())
            .collect();
        if let Some(target) = target.filter(|t| t.is_unverified()) {
            unverified.push(target.name().clone());
        }

        let query = ComposedQuery {
            sql,
            dependencies: snippets.iter().map(|s| s.name().clone()).collect(),
            target: target.map(|t| t.name().clone()),
            unverified,
        };
        if let Some(summary) = query.summary() {
            log::info!("{}", summary);
        }
        query
    }
}

impl Default for SnippetSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
