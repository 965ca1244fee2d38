use crate::config::MatcherConfig;
use crate::pattern::{PatternSet, compile};
use std::sync::{Arc, RwLock};

/// The pattern set of the current query, shared between the input handler
/// (which recompiles on every keystroke) and ranking workers.
///
/// A new set is always compiled outside the lock and swapped in whole, so
/// readers see either the old or the new set, never a partial one.
#[derive(Debug)]
pub struct SharedPatterns {
    current: RwLock<Arc<PatternSet>>,
}

impl SharedPatterns {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(PatternSet::empty(config))),
        }
    }

    /// Set to rank with. Cheap, clones an `Arc`.
    pub fn snapshot(&self) -> Arc<PatternSet> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Compile `query` with `config` and publish it, returning the new set.
    pub fn update(&self, query: &str, config: &MatcherConfig) -> Arc<PatternSet> {
        let next = Arc::new(compile(query, config));

        match self.current.write() {
            Ok(mut guard) => *guard = Arc::clone(&next),
            Err(poisoned) => *poisoned.into_inner() = Arc::clone(&next),
        }

        next
    }
}
