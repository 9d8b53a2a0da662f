//! Reveal scheduling: one-way "visible" flags, the viewport watch and the
//! staggered pop-in sequence.
//!
//! Three triggers feed the same [`RevealBoard`]:
//!
//! - [`RevealZone::Viewport`] entries are watched (after a grace delay) and
//!   revealed the first time they intersect the trigger region.
//! - [`RevealZone::Immediate`] entries sit in the top page region and are
//!   revealed at load without a watch.
//! - [`RevealZone::Stagger`] entries pop in one by one, followed by a
//!   [`RevealZone::Heading`] and its trailing [`RevealZone::Body`].
//!
//! A revealed entry never reverts, so repeated callbacks are harmless.

use std::collections::BTreeMap;

use crate::config::Timing;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Which trigger reveals an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealZone {
    Viewport,
    Immediate,
    Stagger,
    Heading,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RevealEntry {
    zone: RevealZone,
    revealed: bool,
}

/// What the host should do with a viewport watch after a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    /// Reveal now and stop watching.
    Reveal,
    /// Not in the trigger region yet; keep watching.
    Keep,
    /// Already revealed (or not a watched entry); stop watching.
    Retire,
}

/// A reveal at a fixed time after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<K> {
    pub key: K,
    /// Timer delay from load, in milliseconds.
    pub fire_at_ms: u32,
    /// Value for the element's `--pop-delay` custom property.
    pub pop_delay_ms: Option<u32>,
}

/// The staggered entrance: items in order, then the heading, then its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggerPlan<K> {
    pub items: Vec<Scheduled<K>>,
    pub heading: Option<Scheduled<K>>,
    pub body: Option<Scheduled<K>>,
}

impl<K> StaggerPlan<K> {
    /// Lay out fire times: item `i` fires at `initial + i * step`; the heading
    /// follows the whole sequence after an extra gap; the body trails the
    /// heading. A body without a heading is not scheduled.
    #[must_use]
    pub fn build(items: Vec<K>, heading: Option<K>, body: Option<K>, timing: &Timing) -> Self {
        let step = timing.stagger_step_ms;
        let initial = timing.stagger_initial_ms;
        let count = u32::try_from(items.len()).unwrap_or(u32::MAX);

        let items = (0_u32..)
            .zip(items)
            .map(|(index, key)| {
                let offset = index.saturating_mul(step);
                Scheduled { key, fire_at_ms: initial.saturating_add(offset), pop_delay_ms: Some(offset) }
            })
            .collect();

        let heading_offset = count.saturating_mul(step).saturating_add(timing.heading_gap_ms);
        let heading_fire = initial.saturating_add(heading_offset);
        let body = match (&heading, body) {
            (Some(_), Some(key)) => Some(Scheduled {
                key,
                fire_at_ms: heading_fire.saturating_add(timing.body_trail_ms),
                pop_delay_ms: None,
            }),
            _ => None,
        };
        let heading =
            heading.map(|key| Scheduled { key, fire_at_ms: heading_fire, pop_delay_ms: Some(heading_offset) });

        Self { items, heading, body }
    }

    /// Every scheduled reveal in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &Scheduled<K>> {
        self.items.iter().chain(self.heading.iter()).chain(self.body.iter())
    }
}

/// Reveal state of every registered element.
#[derive(Debug, Clone)]
pub struct RevealBoard<K: Ord> {
    entries: BTreeMap<K, RevealEntry>,
    stagger_order: Vec<K>,
}

impl<K: Ord> Default for RevealBoard<K> {
    fn default() -> Self {
        Self { entries: BTreeMap::new(), stagger_order: Vec::new() }
    }
}

impl<K: Ord + Clone> RevealBoard<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `key` under `zone`. Registering a key twice keeps the first
    /// registration.
    pub fn register(&mut self, key: K, zone: RevealZone) {
        if self.entries.contains_key(&key) {
            return;
        }
        if zone == RevealZone::Stagger {
            self.stagger_order.push(key.clone());
        }
        self.entries.insert(key, RevealEntry { zone, revealed: false });
    }

    /// Mark `key` revealed. Returns `true` only on the first transition.
    pub fn reveal(&mut self, key: &K) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) if !entry.revealed => {
                entry.revealed = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.revealed)
    }

    #[must_use]
    pub fn zone(&self, key: &K) -> Option<RevealZone> {
        self.entries.get(key).map(|entry| entry.zone)
    }

    /// Unrevealed viewport entries, the ones a watch should be attached to.
    #[must_use]
    pub fn watch_list(&self) -> Vec<K> {
        self.keys_where(|entry| entry.zone == RevealZone::Viewport && !entry.revealed)
    }

    /// Reveal every immediate entry. Returns the keys that changed.
    pub fn reveal_immediate(&mut self) -> Vec<K> {
        let keys = self.keys_where(|entry| entry.zone == RevealZone::Immediate && !entry.revealed);
        for key in &keys {
            self.reveal(key);
        }
        keys
    }

    /// Feed one viewport sample for `key`.
    pub fn observe(&mut self, key: &K, is_intersecting: bool) -> Watch {
        match self.entries.get(key) {
            Some(entry) if entry.zone == RevealZone::Viewport && !entry.revealed => {
                if is_intersecting {
                    self.reveal(key);
                    log::trace!("viewport reveal fired");
                    Watch::Reveal
                } else {
                    Watch::Keep
                }
            }
            _ => Watch::Retire,
        }
    }

    /// Staggered pop-in plan for the registered stagger, heading and body
    /// entries.
    #[must_use]
    pub fn stagger_plan(&self, timing: &Timing) -> StaggerPlan<K> {
        let heading = self.keys_where(|entry| entry.zone == RevealZone::Heading).into_iter().next();
        let body = self.keys_where(|entry| entry.zone == RevealZone::Body).into_iter().next();
        StaggerPlan::build(self.stagger_order.clone(), heading, body, timing)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn keys_where(&self, pred: impl Fn(&RevealEntry) -> bool) -> Vec<K> {
        self.entries
            .iter()
            .filter(|(_, entry)| pred(entry))
            .map(|(key, _)| key.clone())
            .collect()
    }
}
