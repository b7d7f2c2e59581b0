//! Consumables carried between encounters

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores a share of max hp
    Patch,
    /// Temporary attack boost
    Overclock,
    /// Raises the odds of the next flee attempt
    Proxy,
}

impl ItemKind {
    /// All item kinds, in menu order
    pub fn all() -> &'static [ItemKind] {
        &[ItemKind::Patch, ItemKind::Overclock, ItemKind::Proxy]
    }

    pub fn description(&self) -> &'static str {
        match self {
            ItemKind::Patch => "restore 35% of max HP",
            ItemKind::Overclock => "+50% attack for 3 rounds",
            ItemKind::Proxy => "+25% chance on the next flee attempt",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Patch => "Patch",
            ItemKind::Overclock => "Overclock",
            ItemKind::Proxy => "Proxy",
        };
        f.write_str(name)
    }
}

/// Item counts by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub patch: u32,
    pub overclock: u32,
    pub proxy: u32,
}

impl Inventory {
    pub fn new(patch: u32, overclock: u32, proxy: u32) -> Self {
        Self {
            patch,
            overclock,
            proxy,
        }
    }

    /// What a fresh runner carries
    pub fn starter() -> Self {
        Self::new(2, 1, 1)
    }

    fn slot_mut(&mut self, kind: ItemKind) -> &mut u32 {
        match kind {
            ItemKind::Patch => &mut self.patch,
            ItemKind::Overclock => &mut self.overclock,
            ItemKind::Proxy => &mut self.proxy,
        }
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Patch => self.patch,
            ItemKind::Overclock => self.overclock,
            ItemKind::Proxy => self.proxy,
        }
    }

    pub fn add(&mut self, kind: ItemKind, amount: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Remove one unit; false (and no change) when none are left
    pub fn take(&mut self, kind: ItemKind) -> bool {
        let slot = self.slot_mut(kind);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn total(&self) -> u32 {
        self.patch + self.overclock + self.proxy
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `(kind, count)` pairs in menu order
    pub fn iter(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        ItemKind::all().iter().map(move |&kind| (kind, self.count(kind)))
    }
}
