//! Dependency resolution
//!
//! Computes the transitive closure of snippets a query needs and a linear
//! order with no forward references. The walk is a depth-first search that
//! emits a snippet after all of its dependencies; siblings are visited in
//! discovery order (declared list first, then scan order), which makes the
//! result stable for a given store state.

use crate::error::{CoreError, CoreResult};
use crate::snippet_name::SnippetName;
use crate::store::SnippetStore;
use std::collections::HashMap;

/// Resolves snippet dependencies against a store
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'s> {
    store: &'s SnippetStore,
}

impl<'s> Resolver<'s> {
    /// Create a resolver over `store`
    pub fn new(store: &'s SnippetStore) -> Self {
        Self { store }
    }

    /// Resolve the snippets needed by an ad-hoc query.
    ///
    /// `explicit` is the user's `--with` list; every entry must be stored.
    /// Names found by scanning `final_body` are appended after it.
    pub fn resolve<S: AsRef<str>>(
        &self,
        final_body: &str,
        explicit: &[S],
    ) -> CoreResult<Vec<SnippetName>> {
        let store = self.store;
        let mut start: Vec<&'s str> = Vec::new();

        for name in explicit {
            let name = name.as_ref();
            let snippet = store
                .lookup(name)
                .ok_or_else(|| CoreError::UnknownDependency {
                    name: name.to_string(),
                    known: store.list_names(),
                })?;
            push_unique(&mut start, snippet.name().as_str());
        }
        for snippet in store.referenced_snippets(final_body, None) {
            push_unique(&mut start, snippet.name().as_str());
        }

        let mut walk = Walk::new(store);
        for name in start {
            walk.visit(name)?;
        }
        Ok(walk.order)
    }

    /// Resolve the dependencies of a stored snippet, excluding the snippet
    /// itself. A dependency chain leading back to it is a cycle.
    pub fn resolve_snippet(&self, name: &str) -> CoreResult<Vec<SnippetName>> {
        let store = self.store;
        let snippet = store.get(name)?;

        let mut walk = Walk::new(store);
        walk.enter(snippet.name().as_str());
        for dep in store.direct_dependencies(snippet) {
            walk.visit(dep)?;
        }
        Ok(walk.order)
    }
}

fn push_unique<'a>(names: &mut Vec<&'a str>, name: &'a str) {
    if !names.contains(&name) {
        names.push(name);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnPath,
    Done,
}

/// State of one depth-first walk
struct Walk<'s> {
    store: &'s SnippetStore,
    marks: HashMap<&'s str, Mark>,
    path: Vec<&'s str>,
    order: Vec<SnippetName>,
}

impl<'s> Walk<'s> {
    fn new(store: &'s SnippetStore) -> Self {
        Self {
            store,
            marks: HashMap::new(),
            path: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Put a node on the path without emitting it
    fn enter(&mut self, name: &'s str) {
        self.marks.insert(name, Mark::OnPath);
        self.path.push(name);
    }

    fn visit(&mut self, name: &'s str) -> CoreResult<()> {
        match self.marks.get(name) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::OnPath) => return Err(self.cycle_error(name)),
            None => {}
        }

        let store = self.store;
        let Some(snippet) = store.lookup(name) else {
            log::warn!(
                "Snippet '{}' required by '{}' is no longer stored; leaving the reference to the database",
                name,
                self.path.last().copied().unwrap_or("query")
            );
            return Ok(());
        };

        self.enter(name);
        for dep in store.direct_dependencies(snippet) {
            log::debug!("'{}' requires '{}'", name, dep);
            self.visit(dep)?;
        }
        self.path.pop();
        self.marks.insert(name, Mark::Done);
        self.order.push(snippet.name().clone());
        Ok(())
    }

    fn cycle_error(&self, name: &str) -> CoreError {
        let start = self.path.iter().position(|p| *p == name).unwrap_or(0);
        let mut cycle: Vec<&str> = self.path[start..].to_vec();
        cycle.push(name);
        CoreError::CyclicDependency {
            cycle: cycle.join(" -> "),
        }
    }
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
