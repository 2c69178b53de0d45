use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::geometry::Geometry;
use crate::path::{parse_with, ParseOptions};

/// Memoized parse results, keyed by path data and parse options.
///
/// Cached geometry is unscaled, so one cache serves any number of
/// re-layouts. The cache is a plain owned value; share it between threads
/// only behind a lock.
#[derive(Debug, Default)]
pub struct GeometryCache {
    entries: HashMap<(String, ParseOptions), Geometry>,
    hits: usize,
    misses: usize,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry for `data`, parsing it on first use.
    pub fn get(&mut self, data: &str, options: &ParseOptions) -> &Geometry {
        match self.entries.entry((data.to_string(), *options)) {
            Entry::Occupied(e) => {
                self.hits += 1;
                e.into_mut()
            }
            Entry::Vacant(e) => {
                self.misses += 1;
                e.insert(parse_with(data, options))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups which required a parse.
    pub fn misses(&self) -> usize {
        self.misses
    }
}
