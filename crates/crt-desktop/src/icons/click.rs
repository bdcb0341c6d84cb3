//! Double-click detection with injected time

use std::collections::BTreeMap;

/// Counts clicks per target and reports the second click that lands
/// within `window_ms` of the first.
///
/// Each key keeps its own pending click, so alternating between two
/// icons never produces a double-click on either.
#[derive(Clone, Debug)]
pub struct ClickTracker<K: Ord + Copy> {
    window_ms: f64,
    pending: BTreeMap<K, f64>,
}

impl<K: Ord + Copy> ClickTracker<K> {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            pending: BTreeMap::new(),
        }
    }

    /// Register a click on `key` at `now_ms`. Returns true when it
    /// completes a double-click; the pair is consumed.
    pub fn click(&mut self, key: K, now_ms: f64) -> bool {
        match self.pending.remove(&key) {
            Some(first) if now_ms - first < self.window_ms => true,
            _ => {
                self.pending.insert(key, now_ms);
                false
            }
        }
    }

    /// Drop a pending click, e.g. when its target goes away
    pub fn forget(&mut self, key: K) {
        self.pending.remove(&key);
    }
}
