//! Snippet store
//!
//! Session-scoped mapping from snippet name to its normalized body and its
//! declared dependencies. Every mutation validates first and only then
//! touches the map, so a failed call leaves the store as it was.

use crate::error::{CoreError, CoreResult};
use crate::graph::SnippetGraph;
use crate::matcher::{IdentifierMatcher, ReferenceMatcher};
use crate::normalize::normalize;
use crate::snippet_name::SnippetName;
use std::collections::HashMap;
use std::fmt;

/// A named, stored query body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    name: SnippetName,
    body: String,
    explicit_deps: Vec<SnippetName>,
    unverified: bool,
}

impl Snippet {
    /// Snippet name
    pub fn name(&self) -> &SnippetName {
        &self.name
    }

    /// Normalized body (comments and trailing terminator removed)
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Dependencies declared at save time, in declaration order
    pub fn explicit_deps(&self) -> &[SnippetName] {
        &self.explicit_deps
    }

    /// True when the snippet was saved without being executed, so its SQL
    /// has never been checked by a database.
    pub fn is_unverified(&self) -> bool {
        self.unverified
    }
}

/// Options recorded alongside a saved snippet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// The front end did not execute the body before saving it
    pub no_execute: bool,
}

/// How `delete_with` treats snippets that depend on the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Refuse when any snippet depends on the target
    Strict,
    /// Remove only the target; dependents keep a dangling reference
    Force,
    /// Remove the target and every transitive dependent
    ForceAll,
}

/// Names removed by a delete, target first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub removed: Vec<SnippetName>,
}

impl fmt::Display for DeleteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.removed.iter().map(|n| n.as_str()).collect();
        write!(f, "{} has been deleted.", names.join(", "))
    }
}

/// Mapping from snippet name to snippet, in insertion order
pub struct SnippetStore {
    snippets: HashMap<SnippetName, Snippet>,
    order: Vec<SnippetName>,
    matcher: Box<dyn ReferenceMatcher>,
}

impl SnippetStore {
    /// Create an empty store using the identifier matcher for inferred
    /// dependencies
    pub fn new() -> Self {
        Self::with_matcher(Box::new(IdentifierMatcher))
    }

    /// Create an empty store with a custom reference matcher
    pub fn with_matcher(matcher: Box<dyn ReferenceMatcher>) -> Self {
        Self {
            snippets: HashMap::new(),
            order: Vec::new(),
            matcher,
        }
    }

    /// Replace the reference matcher used for inferred dependencies
    pub fn set_matcher(&mut self, matcher: Box<dyn ReferenceMatcher>) {
        self.matcher = matcher;
    }

    /// Save (or replace) a snippet after normalizing its body
    pub fn save<S: AsRef<str>>(
        &mut self,
        name: &str,
        raw_body: &str,
        explicit_deps: &[S],
    ) -> CoreResult<()> {
        self.save_with(name, raw_body, explicit_deps, SaveOptions::default())
    }

    /// Save (or replace) a snippet with front-end options
    pub fn save_with<S: AsRef<str>>(
        &mut self,
        name: &str,
        raw_body: &str,
        explicit_deps: &[S],
        options: SaveOptions,
    ) -> CoreResult<()> {
        let name = SnippetName::parse(name)?;

        let mut deps: Vec<SnippetName> = Vec::with_capacity(explicit_deps.len());
        for dep in explicit_deps {
            let dep = dep.as_ref();
            if dep == name.as_str() {
                return Err(CoreError::SelfDependency {
                    name: name.into_inner(),
                });
            }
            let Some(existing) = self.snippets.get(dep) else {
                return Err(CoreError::UnknownDependency {
                    name: dep.to_string(),
                    known: self.list_names(),
                });
            };
            if !deps.contains(&existing.name) {
                deps.push(existing.name.clone());
            }
        }

        let snippet = Snippet {
            name: name.clone(),
            body: normalize(raw_body),
            explicit_deps: deps,
            unverified: options.no_execute,
        };

        log::debug!(
            "Saving snippet '{}' with {} explicit dependencies",
            name,
            snippet.explicit_deps.len()
        );

        if self.snippets.insert(name.clone(), snippet).is_none() {
            self.order.push(name);
        }
        Ok(())
    }

    /// Get a snippet by name
    pub fn get(&self, name: &str) -> CoreResult<&Snippet> {
        self.snippets
            .get(name)
            .ok_or_else(|| CoreError::SnippetNotFound {
                name: name.to_string(),
            })
    }

    /// Get a snippet by name, if stored
    pub fn lookup(&self, name: &str) -> Option<&Snippet> {
        self.snippets.get(name)
    }

    /// Check whether a snippet is stored
    pub fn contains(&self, name: &str) -> bool {
        self.snippets.contains_key(name)
    }

    /// Stored snippets in insertion order
    pub fn snippets(&self) -> impl Iterator<Item = &Snippet> {
        self.order.iter().filter_map(|name| self.snippets.get(name))
    }

    /// All stored names in insertion order
    pub fn list_names(&self) -> Vec<String> {
        self.order.iter().map(|n| n.to_string()).collect()
    }

    /// Number of stored snippets
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Stored snippets referenced by `sql`, in first-occurrence order.
    ///
    /// `exclude` keeps a snippet from being reported as referencing itself.
    pub fn referenced_snippets(&self, sql: &str, exclude: Option<&str>) -> Vec<&Snippet> {
        let candidates: Vec<&str> = self
            .order
            .iter()
            .map(|n| n.as_str())
            .filter(|n| Some(*n) != exclude)
            .collect();
        self.matcher
            .find_references(sql, &candidates)
            .iter()
            .filter_map(|name| self.snippets.get(name.as_str()))
            .collect()
    }

    /// Direct dependencies of a snippet: declared ones first, then inferred
    /// ones in scan order, without duplicates. Declared names left dangling
    /// by a forced delete are still returned.
    pub fn direct_dependencies<'s>(&'s self, snippet: &'s Snippet) -> Vec<&'s str> {
        let mut deps: Vec<&str> = snippet.explicit_deps.iter().map(|d| d.as_str()).collect();
        for inferred in self.referenced_snippets(&snippet.body, Some(snippet.name.as_str())) {
            let name = inferred.name.as_str();
            if !deps.contains(&name) {
                deps.push(name);
            }
        }
        deps
    }

    /// Transitive dependents of `name`, nearest first, ties in insertion order
    pub fn dependents(&self, name: &str) -> CoreResult<Vec<SnippetName>> {
        self.get(name)?;
        Ok(SnippetGraph::from_store(self).descendants(name))
    }

    /// Delete a snippet. With `force_all`, every transitive dependent is
    /// removed too; otherwise existing dependents make the call fail.
    pub fn delete(&mut self, name: &str, force_all: bool) -> CoreResult<Vec<SnippetName>> {
        let mode = if force_all {
            DeleteMode::ForceAll
        } else {
            DeleteMode::Strict
        };
        self.delete_with(name, mode).map(|report| report.removed)
    }

    /// Delete a snippet according to `mode`
    pub fn delete_with(&mut self, name: &str, mode: DeleteMode) -> CoreResult<DeleteReport> {
        let target = self.get(name)?.name.clone();

        let mut removed = vec![target];
        match mode {
            DeleteMode::Strict => {
                let dependents = self.dependents(name)?;
                if !dependents.is_empty() {
                    return Err(CoreError::DependentSnippetsExist {
                        name: name.to_string(),
                        dependents: dependents.into_iter().map(|d| d.into_inner()).collect(),
                    });
                }
            }
            DeleteMode::Force => {}
            DeleteMode::ForceAll => removed.extend(self.dependents(name)?),
        }

        for name in &removed {
            self.snippets.remove(name);
        }
        self.order.retain(|n| !removed.contains(n));

        log::debug!("Deleted snippets: {:?}", removed);
        Ok(DeleteReport { removed })
    }
}

impl Default for SnippetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SnippetStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnippetStore")
            .field("snippets", &self.order)
            .field("matcher", &self.matcher.name())
            .finish()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
