//! FILENAME: core/grid-engine/src/expansion.rs
//! PURPOSE: Tracks which group rows are expanded.
//! CONTEXT: Expansion is UI state, keyed by the `/`-joined path of group
//! keys from the outermost level down (e.g. "New York/30"). A `/` or `\`
//! inside a key is backslash-escaped, so distinct paths never share an
//! entry. It is never part of a saved layout. Groups start collapsed.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Group keys from the outermost level to the current one.
pub type GroupPath<'s> = SmallVec<[&'s str; 4]>;

pub fn group_path_key(segments: &[&str]) -> String {
    let mut key = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            key.push('/');
        }
        for c in segment.chars() {
            if c == '/' || c == '\\' {
                key.push('\\');
            }
            key.push(c);
        }
    }
    key
}

#[derive(Debug, Clone, Default)]
pub struct ExpansionSet {
    expanded: FxHashSet<String>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Flips the state of `path`. Returns true if it is now expanded.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_string());
            true
        }
    }

    pub fn expand(&mut self, path: impl Into<String>) {
        self.expanded.insert(path.into());
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
