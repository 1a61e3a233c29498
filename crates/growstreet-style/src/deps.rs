//! Dependencies carried by reactive style values.
//!
//! A reactive reference renders to a JS expression that only works if the
//! generated module imports the right symbols and declares the right hooks.
//! [`DependencySet`] collects those requirements so they can travel next to
//! a resolved style instead of inside it.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// IMPORTS
// =============================================================================

/// A single symbol imported from a JS library.
///
/// Field order doubles as the sort order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportVar {
    /// Imported name, `None` for side-effect imports.
    pub tag: Option<String>,
    /// Default import rather than a named one.
    pub is_default: bool,
    /// Local alias.
    pub alias: Option<String>,
    /// Whether the package must be installed.
    pub install: bool,
    /// Whether an import statement is emitted at all.
    pub render: bool,
    /// Whether the package must be transpiled by the bundler.
    pub transpile: bool,
}

impl Default for ImportVar {
    fn default() -> Self {
        Self {
            tag: None,
            is_default: false,
            alias: None,
            install: true,
            render: true,
            transpile: false,
        }
    }
}

impl ImportVar {
    /// Named import of `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }

    /// Default import of `tag`.
    pub fn default_import(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            is_default: true,
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The name as it appears in an import statement.
    pub fn name(&self) -> String {
        let tag = self.tag.clone().unwrap_or_default();
        match &self.alias {
            Some(alias) if self.is_default => alias.clone(),
            Some(alias) => format!("{tag} as {alias}"),
            None => tag,
        }
    }
}

// =============================================================================
// DEPENDENCY SET
// =============================================================================

/// Imports, hook declarations and state names a computed style relies on.
///
/// Merging is a plain union. Hooks keep the order they were first seen in
/// because later hooks may read values declared by earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencySet {
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub states: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub imports: BTreeMap<String, BTreeSet<ImportVar>>,
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    pub hooks: IndexSet<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.imports.is_empty() && self.hooks.is_empty()
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.add_state(state);
        self
    }

    pub fn with_import(mut self, library: impl Into<String>, import: ImportVar) -> Self {
        self.add_import(library, import);
        self
    }

    pub fn with_hook(mut self, hook: impl Into<String>) -> Self {
        self.add_hook(hook);
        self
    }

    pub fn add_state(&mut self, state: impl Into<String>) {
        self.states.insert(state.into());
    }

    pub fn add_import(&mut self, library: impl Into<String>, import: ImportVar) {
        self.imports.entry(library.into()).or_default().insert(import);
    }

    pub fn add_hook(&mut self, hook: impl Into<String>) {
        self.hooks.insert(hook.into());
    }

    /// Union `other` into `self`.
    pub fn merge(&mut self, other: &DependencySet) {
        self.states.extend(other.states.iter().cloned());
        for (library, imports) in &other.imports {
            self.imports
                .entry(library.clone())
                .or_default()
                .extend(imports.iter().cloned());
        }
        self.hooks.extend(other.hooks.iter().cloned());
    }

    /// Union of every set in `sets`.
    pub fn merged<'a>(sets: impl IntoIterator<Item = &'a DependencySet>) -> Self {
        let mut out = Self::new();
        for set in sets {
            out.merge(set);
        }
        out
    }

    /// Render one ES import statement per library, skipping non-rendered imports.
    pub fn import_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (library, imports) in &self.imports {
            let rendered: Vec<&ImportVar> = imports.iter().filter(|i| i.render).collect();
            if rendered.is_empty() {
                continue;
            }

            let default = rendered
                .iter()
                .find(|i| i.is_default && i.tag.is_some())
                .map(|i| i.name());
            let named: Vec<String> = rendered
                .iter()
                .filter(|i| !i.is_default && i.tag.is_some())
                .map(|i| i.name())
                .collect();

            let line = match (default, named.is_empty()) {
                (Some(default), true) => format!("import {default} from \"{library}\""),
                (Some(default), false) => {
                    format!("import {default}, {{ {} }} from \"{library}\"", named.join(", "))
                }
                (None, false) => format!("import {{ {} }} from \"{library}\"", named.join(", ")),
                (None, true) => format!("import \"{library}\""),
            };
            lines.push(line);
        }
        lines
    }
}
