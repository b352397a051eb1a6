//! Viewport Observer - enter/exit reports for tracked document regions
//!
//! Regions are document row ranges. Each [`ViewportObserver::update`] compares
//! them against the visible window and reports regions whose visibility
//! flipped. [`RevealLatch`] turns the first enter of each id into a one-shot
//! trigger.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::Rect;

/// A visibility change for one tracked region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportChange<K> {
    Entered(K),
    Exited(K),
}

#[derive(Debug, Clone)]
struct Tracked {
    rect: Rect,
    inside: bool,
}

/// Reports enter/exit of tracked regions relative to the visible rows.
#[derive(Debug, Clone)]
pub struct ViewportObserver<K> {
    regions: HashMap<K, Tracked>,
    order: Vec<K>,
}

impl<K: Copy + Eq + Hash> Default for ViewportObserver<K> {
    fn default() -> Self {
        Self {
            regions: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ViewportObserver<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `id` at `rect` (document coordinates). Re-observing an id
    /// moves it and keeps its current visibility.
    pub fn observe(&mut self, id: K, rect: Rect) {
        match self.regions.get_mut(&id) {
            Some(tracked) => tracked.rect = rect,
            None => {
                self.order.push(id);
                self.regions.insert(id, Tracked { rect, inside: false });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn is_inside(&self, id: K) -> bool {
        self.regions.get(&id).is_some_and(|t| t.inside)
    }

    /// Compare every region against rows `[top, bottom)`. Changes come back
    /// in observation order.
    pub fn update(&mut self, top: i32, bottom: i32) -> Vec<ViewportChange<K>> {
        let mut changes = Vec::new();
        for id in &self.order {
            let Some(tracked) = self.regions.get_mut(id) else {
                continue;
            };
            let inside = tracked.rect.intersects_rows(top, bottom);
            if inside != tracked.inside {
                tracked.inside = inside;
                changes.push(if inside {
                    ViewportChange::Entered(*id)
                } else {
                    ViewportChange::Exited(*id)
                });
            }
        }
        changes
    }
}

/// One-shot latch per id.
#[derive(Debug, Clone)]
pub struct RevealLatch<K> {
    fired: HashSet<K>,
}

impl<K: Copy + Eq + Hash> Default for RevealLatch<K> {
    fn default() -> Self {
        Self {
            fired: HashSet::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> RevealLatch<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time `id` fires, false ever after.
    pub fn fire(&mut self, id: K) -> bool {
        self.fired.insert(id)
    }

    pub fn has_fired(&self, id: K) -> bool {
        self.fired.contains(&id)
    }

    /// Latch every entered id; returns the ones that fired for the first time.
    pub fn fire_entered(&mut self, changes: &[ViewportChange<K>]) -> Vec<K> {
        changes
            .iter()
            .filter_map(|change| match change {
                ViewportChange::Entered(id) if self.fire(*id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
